use crate::models::{Account, TransactionKind};
use crate::types::{AccountId, Amount};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AccountError {
    #[error("Amount [{amount}] must be positive for [{kind}] on account [{account_id}]")]
    InvalidAmount {
        account_id: AccountId,
        kind: TransactionKind,
        amount: Amount
    },
    #[error("Insufficient funds for [{kind}] of [{amount}] on account [{account_id}]: balance [{balance}], floor [{floor}]")]
    InsufficientFunds {
        account_id: AccountId,
        kind: TransactionKind,
        amount: Amount,
        balance: Amount,
        floor: Amount
    },
    #[error("Numeric overflow occurred for [{kind}] on account [{account_id}]")]
    Overflow {
        account_id: AccountId,
        kind: TransactionKind
    },
    #[error("Overdraft limit [{limit}] must not be negative for account [{account_id}]")]
    InvalidOverdrawLimit {
        account_id: AccountId,
        limit: Amount
    },
    #[error("Opening balance [{balance}] is below the floor [{floor}] for account [{account_id}]")]
    OpeningBalanceBelowFloor {
        account_id: AccountId,
        balance: Amount,
        floor: Amount
    }
}

impl AccountError {
    pub fn invalid_amount(account: &Account, kind: TransactionKind, amount: Amount) -> Self {
        Self::InvalidAmount {
            account_id: account.id.clone(),
            kind,
            amount
        }
    }

    pub fn insufficient_funds(account: &Account, kind: TransactionKind, amount: Amount, floor: Amount) -> Self {
        Self::InsufficientFunds {
            account_id: account.id.clone(),
            kind,
            amount,
            balance: account.balance(),
            floor
        }
    }

    pub fn overflow(account: &Account, kind: TransactionKind) -> Self {
        Self::Overflow {
            account_id: account.id.clone(),
            kind
        }
    }
}
