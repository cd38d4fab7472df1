pub mod blur;
pub mod shrink;
