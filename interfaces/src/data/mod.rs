pub mod account;
pub mod error;
pub mod fee;
pub mod primitives;
pub mod receipt;
pub mod token;
pub mod tx;
