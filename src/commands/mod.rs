pub mod request;
pub mod start;
