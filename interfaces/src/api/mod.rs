pub mod error;
pub mod gas_oracle;
pub mod provider;
pub mod signer;
