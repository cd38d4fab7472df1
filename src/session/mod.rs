pub mod decompose_session;
pub mod opts;
