pub mod batch;
pub mod config;
pub mod error;
pub mod gas;
pub mod transaction;
pub mod wallet;

#[cfg(test)]
pub(crate) mod mock;
