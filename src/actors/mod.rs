mod ledger_actor;
#[cfg(test)]
mod tests;

pub use ledger_actor::LedgerActor;
