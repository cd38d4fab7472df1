pub mod filter;
pub mod reconstruct;
pub mod series;
