pub mod client;
pub mod error;
pub mod get;
pub mod status;
