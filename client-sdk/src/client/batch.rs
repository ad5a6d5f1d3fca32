use alloy_primitives::{Address, U256};
use zkwallet_interfaces::data::{
    primitives::Nonce,
    token::Token,
    tx::{SignedZkSyncTx, TransferRequest, WithdrawRequest},
};

use super::{error::ClientError, transaction::Transaction, wallet::Wallet};

fn lower_address(address: &Address) -> String {
    format!("{:#x}", address)
}

fn message_part(kind: &str, to: &Address, token: &Token, amount: U256, fee: U256) -> String {
    let mut message = String::new();
    if !amount.is_zero() {
        message.push_str(&format!(
            "{} {} {} to: {}",
            kind,
            token.format_amount(amount),
            token.symbol,
            lower_address(to)
        ));
    }
    if !fee.is_zero() {
        if !message.is_empty() {
            message.push('\n');
        }
        message.push_str(&format!("Fee: {} {}", token.format_amount(fee), token.symbol));
    }
    message
}

pub fn withdraw_message_part(request: &WithdrawRequest) -> String {
    message_part(
        "Withdraw",
        &request.to,
        &request.token,
        request.amount,
        request.fee,
    )
}

pub fn transfer_message_part(request: &TransferRequest) -> String {
    message_part(
        "Transfer",
        &request.to,
        &request.token,
        request.amount,
        request.fee,
    )
}

/// Message signed by the L1 key to authorize the whole batch.
pub fn batch_message(parts: &[String], batch_nonce: Nonce) -> String {
    let nonce_line = format!("Nonce: {}", batch_nonce);
    parts
        .iter()
        .map(String::as_str)
        .chain(std::iter::once(nonce_line.as_str()))
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Sign withdrawals followed by transfers with consecutive nonces and submit
/// them as one batch.
///
/// Returns an empty list when `transfers` is empty, even if withdrawals were
/// given.
pub async fn sync_multi_transfer_withdrawal(
    wallet: &mut Wallet,
    withdrawals: &[WithdrawRequest],
    transfers: &[TransferRequest],
) -> Result<Vec<Transaction>, ClientError> {
    if !wallet.has_signer() {
        return Err(ClientError::SignerRequired);
    }
    if transfers.is_empty() {
        if !withdrawals.is_empty() {
            log::warn!(
                "no transfers given, {} withdrawals are not submitted",
                withdrawals.len()
            );
        }
        return Ok(vec![]);
    }

    wallet
        .set_required_account_id_from_server("Transfer funds")
        .await?;

    let batch_nonce = wallet.get_nonce(transfers[0].nonce).await?;
    log::info!(
        "building batch for {}: {} withdrawals, {} transfers, starting nonce {}",
        wallet.address,
        withdrawals.len(),
        transfers.len(),
        batch_nonce
    );
    let nonce_at = |index: usize| {
        u32::try_from(index)
            .ok()
            .and_then(|offset| batch_nonce.checked_add(offset))
            .ok_or_else(|| {
                ClientError::BatchError(format!(
                    "nonce overflow: batch starting at {} has {} transactions",
                    batch_nonce,
                    withdrawals.len() + transfers.len()
                ))
            })
    };

    let mut batch = Vec::with_capacity(withdrawals.len() + transfers.len());
    let mut messages = Vec::with_capacity(batch.capacity());
    for withdrawal in withdrawals {
        let tx = wallet.build_withdraw(withdrawal, nonce_at(batch.len())?).await?;
        messages.push(withdraw_message_part(withdrawal));
        batch.push(SignedZkSyncTx::from(tx));
    }
    for transfer in transfers {
        let tx = wallet.build_transfer(transfer, nonce_at(batch.len())?).await?;
        messages.push(transfer_message_part(transfer));
        batch.push(SignedZkSyncTx::from(tx));
    }

    let message = batch_message(&messages, batch_nonce);
    let eth_signature = wallet.sign_batch_message(&message).await?;

    let hashes = wallet
        .provider
        .submit_txs_batch(&batch, &[eth_signature])
        .await?;
    if hashes.len() != batch.len() {
        return Err(ClientError::BatchError(format!(
            "provider returned {} hashes for {} transactions",
            hashes.len(),
            batch.len()
        )));
    }
    log::info!("submitted batch of {} transactions", batch.len());

    let transactions = batch
        .into_iter()
        .zip(hashes)
        .map(|(tx, hash)| Transaction::new(tx, hash, wallet.provider.clone()))
        .collect();
    Ok(transactions)
}
