use serde::{Deserialize, Serialize};

use super::primitives::BlockNumber;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionType {
    Commit,
    Verify,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockInfo {
    pub block_number: BlockNumber,
    pub committed: bool,
    pub verified: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionReceipt {
    pub executed: bool,
    pub success: Option<bool>,
    pub fail_reason: Option<String>,
    pub block: Option<BlockInfo>,
}

impl TransactionReceipt {
    pub fn is_failed(&self) -> bool {
        self.success == Some(false)
    }

    pub fn is_committed(&self) -> bool {
        self.executed && self.block.as_ref().is_some_and(|b| b.committed)
    }

    pub fn is_verified(&self) -> bool {
        self.block.as_ref().is_some_and(|b| b.verified)
    }

    /// Whether the receipt settles a wait for `action`. Failed receipts are
    /// final for either action.
    pub fn satisfies(&self, action: ActionType) -> bool {
        if self.is_failed() {
            return true;
        }
        match action {
            ActionType::Commit => self.is_committed(),
            ActionType::Verify => self.is_verified(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ActionType, BlockInfo, TransactionReceipt};
    use crate::data::primitives::BlockNumber;

    #[test]
    fn test_receipt_satisfies() {
        let pending = TransactionReceipt::default();
        assert!(!pending.satisfies(ActionType::Commit));

        let committed = TransactionReceipt {
            executed: true,
            success: Some(true),
            fail_reason: None,
            block: Some(BlockInfo {
                block_number: BlockNumber(5),
                committed: true,
                verified: false,
            }),
        };
        assert!(committed.satisfies(ActionType::Commit));
        assert!(!committed.satisfies(ActionType::Verify));

        let failed = TransactionReceipt {
            executed: true,
            success: Some(false),
            fail_reason: Some("Not enough balance".to_string()),
            block: None,
        };
        assert!(failed.satisfies(ActionType::Verify));
    }

    #[test]
    fn test_action_type_wire_names() {
        assert_eq!(
            serde_json::to_string(&ActionType::Commit).unwrap(),
            "\"COMMIT\""
        );
        assert_eq!(
            serde_json::to_string(&ActionType::Verify).unwrap(),
            "\"VERIFY\""
        );
    }
}
