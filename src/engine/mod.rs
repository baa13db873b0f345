mod errors;
mod ledger;

pub use errors::LedgerError;
pub use ledger::{demo_accounts, Ledger};
