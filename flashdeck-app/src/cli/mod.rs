pub mod opts;
pub mod session;
