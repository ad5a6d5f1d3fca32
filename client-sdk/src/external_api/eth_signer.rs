use alloy::signers::{
    local::{coins_bip39::English, MnemonicBuilder, PrivateKeySigner},
    Signer as _,
};
use alloy_primitives::{hex, Address, B256};
use async_trait::async_trait;
use zkwallet_interfaces::{
    api::signer::interface::{EthSignerInterface, SignerError},
    data::tx::{EthSignatureType, TxEthSignature},
};

/// L1 signer backed by a private key held in memory.
#[derive(Debug, Clone)]
pub struct LocalEthSigner {
    signer: PrivateKeySigner,
}

impl LocalEthSigner {
    pub fn from_private_key(private_key: B256) -> Result<Self, SignerError> {
        let signer = PrivateKeySigner::from_bytes(&private_key)
            .map_err(|e| SignerError::Unavailable(format!("invalid private key: {}", e)))?;
        Ok(Self { signer })
    }

    pub fn from_mnemonic(phrase: &str, index: u32) -> Result<Self, SignerError> {
        let signer = MnemonicBuilder::<English>::default()
            .phrase(phrase)
            .index(index)
            .and_then(|builder| builder.build())
            .map_err(|e| SignerError::Unavailable(format!("invalid mnemonic: {}", e)))?;
        Ok(Self { signer })
    }

    pub fn random() -> Self {
        Self {
            signer: PrivateKeySigner::random(),
        }
    }
}

#[async_trait(?Send)]
impl EthSignerInterface for LocalEthSigner {
    fn address(&self) -> Address {
        self.signer.address()
    }

    async fn sign_message(&self, message: &[u8]) -> Result<TxEthSignature, SignerError> {
        let signature = self
            .signer
            .sign_message(message)
            .await
            .map_err(|e| SignerError::SigningFailed(e.to_string()))?;
        Ok(TxEthSignature {
            kind: EthSignatureType::EthereumSignature,
            signature: hex::encode_prefixed(signature.as_bytes()),
        })
    }
}
