use alloy_primitives::{Address, B256};
use zkwallet_client_sdk::{client::gas::fetch_gas_price, external_api::eth_signer::LocalEthSigner};
use zkwallet_interfaces::{
    api::{provider::interface::ProviderClientInterface, signer::interface::EthSignerInterface},
    data::fee::TxFeeType,
};

use super::{
    client::{get_config, get_gas_oracle, get_provider},
    error::CliError,
};

pub async fn account(address: Address) -> Result<(), CliError> {
    let config = get_config()?;
    let provider = get_provider(&config);
    let state = provider.get_state(address).await?;
    println!("Account {:#x}:", state.address);
    match state.id {
        Some(id) => println!("\t Id: {}", id),
        None => println!("\t Id: not registered"),
    }
    println!("\t Committed nonce: {}", state.committed.nonce);
    println!("\t Verified nonce: {}", state.verified.nonce);
    let mut balances: Vec<_> = state.committed.balances.iter().collect();
    balances.sort_by(|a, b| a.0.cmp(b.0));
    println!("\t Balances:");
    for (symbol, amount) in balances {
        println!("\t\t {}: {}", symbol, amount);
    }
    Ok(())
}

pub async fn gas_price() -> Result<(), CliError> {
    let config = get_config()?;
    let oracle = get_gas_oracle(&config)?;
    let gas_price = fetch_gas_price(&oracle).await?;
    println!("Gas price: {} wei", gas_price);
    Ok(())
}

pub async fn fee(address: Address, token: &str, fee_type: TxFeeType) -> Result<(), CliError> {
    let config = get_config()?;
    if config.is_restricted_token(token) {
        log::warn!("{} is restricted and cannot be used to pay fees", token);
    }
    let provider = get_provider(&config);
    let fee = provider
        .get_transaction_fee(fee_type, address, token)
        .await?;
    println!("{} fee in {}:", fee_type, token);
    println!("\t Gas fee: {}", fee.gas_fee);
    println!("\t Zkp fee: {}", fee.zkp_fee);
    println!("\t Total fee: {}", fee.total_fee);
    Ok(())
}

pub fn signer_address(private_key: B256) -> Result<(), CliError> {
    let signer = LocalEthSigner::from_private_key(private_key)?;
    println!("Address: {:#x}", signer.address());
    Ok(())
}
