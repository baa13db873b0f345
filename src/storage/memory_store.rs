use crate::models::Account;
use crate::storage::{AccountStore, StorageError};
use crate::types::AccountId;
use dashmap::DashMap;
use std::sync::Arc;

/// Keeps accounts in process memory. Cloning shares the same map.
#[derive(Clone, Default)]
pub struct MemoryStore {
    cache: Arc<DashMap<AccountId, Account>>
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            cache: Arc::new(DashMap::new())
        }
    }

    pub fn with_accounts(accounts: impl IntoIterator<Item = Account>) -> Self {
        let store = Self::new();

        for account in accounts {
            store.cache.insert(account.id.clone(), account);
        }

        store
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

impl AccountStore for MemoryStore {
    /// Accounts come back ordered by id; the map keeps no insertion order.
    fn load_all(&self) -> Result<Vec<Account>, StorageError> {
        let mut accounts: Vec<Account> = self.cache.iter().map(|item| item.value().clone()).collect();
        accounts.sort_by(|left, right| left.id.cmp(&right.id));

        Ok(accounts)
    }

    fn upsert(&self, account: &Account) -> Result<(), StorageError> {
        self.cache.insert(account.id.clone(), account.clone());

        Ok(())
    }
}
