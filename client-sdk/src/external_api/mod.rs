pub mod eth_signer;
pub mod gas_oracle;
pub mod provider;
pub mod utils;
