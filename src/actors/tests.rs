use super::LedgerActor;
use crate::engine::{Ledger, LedgerError};
use crate::models::{Account, AccountError};
use crate::query::Filter;
use crate::storage::{AccountStore, JsonFileStore, MemoryStore};
use anyhow::{anyhow, Result};
use rust_decimal::Decimal;
use std::str::FromStr;
use std::sync::Arc;

#[tokio::test]
async fn test_actor_applies_commands_and_persists() -> Result<()> {
    let store = Arc::new(MemoryStore::new());
    let actor = LedgerActor::spawn(Ledger::new(store.clone()));

    assert_eq!(actor.seed().await?, 2);

    actor.deposit("alice", Decimal::from_str("100")?).await?;
    actor.withdraw("Bob", Decimal::from_str("50")?).await?;
    let (alice, bob) = actor.transfer("Alice", Decimal::from_str("25")?, "bob").await?;

    assert_eq!(alice.balance(), Decimal::from_str("1075")?);
    assert_eq!(bob.balance(), Decimal::from_str("475")?);

    let statement = actor.statement("Bob", Filter::parse("type", "withdraw")).await?;

    assert_eq!(statement.transactions.len(), 1);

    actor.despawn().await?;

    let stored = store.load_all()?;

    assert_eq!(stored.len(), 2);
    assert_eq!(stored[0].balance(), Decimal::from_str("1075")?);

    Ok(())
}

#[tokio::test]
async fn test_actor_maintains_resilience_to_business_logic_errors() -> Result<()> {
    let store = Arc::new(MemoryStore::with_accounts([Account::savings("1", "Alice", Decimal::from_str("10")?)]));
    let actor = LedgerActor::spawn(Ledger::new(store.clone()));

    // Valid -> Invalid (Insufficient Funds) -> Valid
    actor.deposit("Alice", Decimal::from_str("10")?).await?;
    let rejected = actor.withdraw("Alice", Decimal::from_str("999")?).await;
    actor.deposit("Alice", Decimal::from_str("20")?).await?;

    assert!(matches!(rejected, Err(LedgerError::Account(AccountError::InsufficientFunds { .. }))));
    assert!(matches!(actor.transfer("Alice", Decimal::ONE, "Nobody").await, Err(LedgerError::CounterpartyNotFound { .. })));

    let accounts = actor.accounts().await?;

    actor.despawn().await?;

    assert_eq!(accounts[0].balance(), Decimal::from_str("40")?);
    assert_eq!(accounts[0].transactions().len(), 2);

    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_deposits_through_one_actor_are_not_lost() -> Result<()> {
    let directory = tempfile::tempdir()?;
    let store = Arc::new(JsonFileStore::new(directory.path().join("accounts.json")));
    let actor = Arc::new(LedgerActor::spawn(Ledger::new(store.clone())));

    actor.open(Account::checking("1", "Alice", Decimal::ZERO, Decimal::ZERO)).await?;

    let tasks: Vec<_> = (0..50)
        .map(|_| {
            let actor = actor.clone();
            tokio::spawn(async move { actor.deposit("Alice", Decimal::ONE).await })
        })
        .collect();

    for task in tasks {
        task.await??;
    }

    Arc::try_unwrap(actor).map_err(|_| anyhow!("Ledger actor still shared"))?.despawn().await?;

    let accounts = store.load_all()?;

    assert_eq!(accounts[0].balance(), Decimal::from(50));
    assert_eq!(accounts[0].transactions().len(), 50);

    Ok(())
}
