use crate::models::AccountError;
use crate::storage::StorageError;
use crate::types::AccountId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error(transparent)]
    Account(#[from] AccountError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("No account named [{name}] to transfer to")]
    CounterpartyNotFound {
        name: String
    },
    #[error("No account named [{name}]")]
    AccountNotFound {
        name: String
    },
    #[error("Account [{account_id}] already exists")]
    AccountExists {
        account_id: AccountId
    },
    #[error("Account [{account_id}] cannot transfer to itself")]
    SelfTransfer {
        account_id: AccountId
    },
    #[error("Ledger actor is no longer running")]
    ServiceUnavailable
}

impl LedgerError {
    /// True when the caller sent something the ledger refuses, as opposed to
    /// the ledger failing to do its job. An HTTP front end maps the former to
    /// 4xx and the latter to 5xx.
    pub fn is_client_error(&self) -> bool {
        match self {
            LedgerError::Account(_)
            | LedgerError::CounterpartyNotFound { .. }
            | LedgerError::AccountNotFound { .. }
            | LedgerError::AccountExists { .. }
            | LedgerError::SelfTransfer { .. } => true,
            LedgerError::Storage(_) | LedgerError::ServiceUnavailable => false
        }
    }
}
