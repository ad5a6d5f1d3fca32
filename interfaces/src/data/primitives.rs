//! Primitive identifiers used across the Layer-2 network.

use std::{
    fmt,
    ops::{Deref, DerefMut},
    str::FromStr,
};

use alloy_primitives::B256;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::error::DataError;

macro_rules! id_newtype {
    ($(#[$meta:meta])* $name:ident($inner:ty)) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash, PartialOrd, Ord, Default,
        )]
        #[serde(transparent)]
        pub struct $name(pub $inner);

        impl Deref for $name {
            type Target = $inner;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl DerefMut for $name {
            fn deref_mut(&mut self) -> &mut Self::Target {
                &mut self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_newtype!(
    /// Identifier of an account registered in the network.
    AccountId(u32)
);
id_newtype!(
    /// Identifier of a token registered in the network.
    TokenId(u32)
);
id_newtype!(
    /// Per-account transaction sequence number.
    Nonce(u32)
);
id_newtype!(BlockNumber(u32));

impl Nonce {
    /// Nonce `offset` positions after this one, or `None` past `u32::MAX`.
    pub fn checked_add(self, offset: u32) -> Option<Self> {
        self.0.checked_add(offset).map(Self)
    }
}

const TX_HASH_PREFIX: &str = "sync-tx:";

/// Hash of a Layer-2 transaction, rendered as `sync-tx:<hex>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TxHash(pub B256);

impl fmt::Display for TxHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", TX_HASH_PREFIX, hex_digits(&self.0))
    }
}

fn hex_digits(hash: &B256) -> String {
    let full = format!("{hash:x}");
    full.trim_start_matches("0x").to_string()
}

impl FromStr for TxHash {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix(TX_HASH_PREFIX)
            .or_else(|| s.strip_prefix("0x"))
            .unwrap_or(s);
        let hash = B256::from_str(digits)
            .map_err(|e| DataError::ParseError(format!("invalid tx hash {s}: {e}")))?;
        Ok(TxHash(hash))
    }
}

impl Serialize for TxHash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for TxHash {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        TxHash::from_str(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::{Nonce, TxHash};

    #[test]
    fn test_nonce_checked_add() {
        assert_eq!(Nonce(7).checked_add(3), Some(Nonce(10)));
        assert_eq!(Nonce(u32::MAX).checked_add(0), Some(Nonce(u32::MAX)));
        assert_eq!(Nonce(u32::MAX).checked_add(1), None);
        assert_eq!(*Nonce(4), 4);
    }

    #[test]
    fn test_tx_hash_prefixes() {
        let digits = "11".repeat(32);
        let prefixed = TxHash::from_str(&format!("sync-tx:{digits}")).unwrap();
        let hex = TxHash::from_str(&format!("0x{digits}")).unwrap();
        assert_eq!(prefixed, hex);
        assert_eq!(prefixed.to_string(), format!("sync-tx:{digits}"));
        assert!(TxHash::from_str("sync-tx:zz").is_err());
    }
}
