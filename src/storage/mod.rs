mod errors;
mod json_store;
mod memory_store;

use crate::models::Account;

pub use errors::StorageError;
pub use json_store::{JsonFileStore, DEFAULT_STORE_FILE};
pub use memory_store::MemoryStore;

/// Whole-collection persistence for accounts, keyed by account id.
///
/// Implementations are handed to the ledger explicitly; nothing in the crate
/// reaches for a process-wide store.
pub trait AccountStore: Send + Sync + 'static {
    /// Returns every stored account. A store that has never been written
    /// returns an empty collection.
    fn load_all(&self) -> Result<Vec<Account>, StorageError>;

    /// Replaces the account with the same id, or appends it.
    fn upsert(&self, account: &Account) -> Result<(), StorageError>;

    /// Upserts several accounts as one write where the backend allows it.
    fn upsert_many(&self, accounts: &[Account]) -> Result<(), StorageError> {
        for account in accounts {
            self.upsert(account)?;
        }

        Ok(())
    }
}

/// Replaces entries by id in place and appends the rest, preserving order.
pub(crate) fn merge(collection: &mut Vec<Account>, accounts: &[Account]) {
    for account in accounts {
        match collection.iter_mut().find(|stored| stored.id == account.id) {
            Some(stored) => *stored = account.clone(),
            None => collection.push(account.clone())
        }
    }
}
