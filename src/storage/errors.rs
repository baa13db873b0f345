use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Account store at [{}] is corrupt: {source}", path.display())]
    CorruptStore {
        path: PathBuf,
        #[source]
        source: serde_json::Error
    },
    #[error("Account store at [{}] could not be serialized: {source}", path.display())]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error
    },
    #[error("I/O failure on account store at [{}]: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error
    }
}
