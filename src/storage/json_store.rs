use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::models::Account;
use crate::storage::{merge, AccountStore, StorageError};

pub const DEFAULT_STORE_FILE: &str = "acc_db.json";

/// Stores every account in one pretty-printed JSON array.
///
/// Each write replaces the whole document: the new content goes to a sibling
/// `.tmp` file that is then renamed over the original, so readers see either
/// the old or the new collection. There is no locking; two processes writing
/// the same file can still lose each other's updates.
pub struct JsonFileStore {
    path: PathBuf
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temporary_path(&self) -> PathBuf {
        let mut name = self.path.file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_else(|| DEFAULT_STORE_FILE.into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn io_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Io { path: self.path.clone(), source }
    }

    fn write_all(&self, accounts: &[Account]) -> Result<(), StorageError> {
        let content = serde_json::to_string_pretty(accounts)
            .map_err(|source| StorageError::Serialize { path: self.path.clone(), source })?;

        if let Some(parent) = self.path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|error| self.io_error(error))?;
        }

        let temporary = self.temporary_path();
        fs::write(&temporary, content).map_err(|error| self.io_error(error))?;
        fs::rename(&temporary, &self.path).map_err(|error| {
            let _ = fs::remove_file(&temporary);
            self.io_error(error)
        })?;

        debug!("Wrote [{}] accounts to [{}]", accounts.len(), self.path.display());

        Ok(())
    }
}

impl AccountStore for JsonFileStore {
    fn load_all(&self) -> Result<Vec<Account>, StorageError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(error) if error.kind() == ErrorKind::NotFound => {
                trace!("No account store at [{}], starting empty", self.path.display());
                return Ok(Vec::new())
            },
            Err(error) => return Err(self.io_error(error))
        };

        serde_json::from_str(&content)
            .map_err(|source| StorageError::CorruptStore { path: self.path.clone(), source })
    }

    fn upsert(&self, account: &Account) -> Result<(), StorageError> {
        self.upsert_many(std::slice::from_ref(account))
    }

    fn upsert_many(&self, accounts: &[Account]) -> Result<(), StorageError> {
        let mut collection = self.load_all()?;
        merge(&mut collection, accounts);
        self.write_all(&collection)
    }
}
