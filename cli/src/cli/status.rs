use zkwallet_client_sdk::client::transaction::Transaction;
use zkwallet_interfaces::{
    api::provider::interface::ProviderClientInterface,
    data::{
        primitives::TxHash,
        receipt::{ActionType, TransactionReceipt},
    },
};

use super::{
    client::{get_config, get_provider},
    error::CliError,
};

fn print_receipt(hash: &TxHash, receipt: &TransactionReceipt) {
    println!("Transaction {}:", hash);
    println!("\t Executed: {}", receipt.executed);
    match receipt.success {
        Some(success) => println!("\t Success: {}", success),
        None => println!("\t Success: pending"),
    }
    if let Some(reason) = &receipt.fail_reason {
        println!("\t Fail reason: {}", reason);
    }
    if let Some(block) = &receipt.block {
        println!(
            "\t Block #{}: committed {}, verified {}",
            block.block_number, block.committed, block.verified
        );
    }
}

pub async fn tx_status(hash: &str, wait: Option<ActionType>) -> Result<(), CliError> {
    let hash: TxHash = hash.parse()?;
    let config = get_config()?;
    let provider = get_provider(&config);

    let receipt = match wait {
        None => provider.get_tx_receipt(hash).await?,
        Some(action) => {
            log::info!("Waiting for {} to reach {:?}", hash, action);
            let mut tx = Transaction::from_hash(provider, hash);
            let receipt = match action {
                ActionType::Commit => tx.await_receipt().await?,
                ActionType::Verify => tx.await_verify_receipt().await?,
            };
            log::info!("Transaction is {}", tx.state());
            receipt
        }
    };
    print_receipt(&hash, &receipt);
    Ok(())
}
