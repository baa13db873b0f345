use std::sync::Arc;

use tracing::{debug, info};

use crate::engine::LedgerError;
use crate::models::{Account, AccountError, AccountKind};
use crate::query::{Filter, Statement};
use crate::storage::AccountStore;
use crate::types::Amount;

/// The accounts every fresh store can be seeded with.
pub fn demo_accounts() -> Vec<Account> {
    vec![
        Account::checking("002", "Alice", Amount::from(1000), Amount::from(100)),
        Account::new("003", "Bob", AccountKind::Savings, Amount::from(500), Amount::from(100))
    ]
}

/// Applies deposits, withdrawals and transfers and persists their results.
///
/// Every operation runs as load, mutate, write against the injected store.
/// When the write fails the caller's account is put back the way it was, so a
/// failed call never leaves a half-applied value behind in memory. Nothing
/// here isolates concurrent callers; route them through
/// [`crate::actors::LedgerActor`] for that.
pub struct Ledger<S: AccountStore> {
    store: Arc<S>
}

impl<S: AccountStore> Ledger<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub fn accounts(&self) -> Result<Vec<Account>, LedgerError> {
        Ok(self.store.load_all()?)
    }

    /// Linear, case-insensitive scan of the stored accounts.
    pub fn find_by_name(&self, name: &str) -> Result<Option<Account>, LedgerError> {
        Ok(self.store.load_all()?.into_iter().find(|account| account.matches_name(name)))
    }

    /// Provisions a new account. Its id must not be stored yet.
    pub fn open(&self, account: Account) -> Result<(), LedgerError> {
        account.validate_opening()?;

        if self.store.load_all()?.iter().any(|stored| stored.id == account.id) {
            return Err(LedgerError::AccountExists { account_id: account.id })
        }

        self.store.upsert(&account)?;
        info!("Opened [{}] account [{}] for [{}]", account.kind(), account.id, account.name);

        Ok(())
    }

    /// Stores the demo accounts whose ids are missing and returns how many were added.
    pub fn seed(&self) -> Result<usize, LedgerError> {
        let stored = self.store.load_all()?;
        let missing: Vec<Account> = demo_accounts().into_iter()
            .filter(|account| !stored.iter().any(|existing| existing.id == account.id))
            .collect();

        if !missing.is_empty() {
            self.store.upsert_many(&missing)?;
        }

        info!("Seeded [{}] accounts", missing.len());

        Ok(missing.len())
    }

    pub fn deposit(&self, account: &mut Account, amount: Amount) -> Result<(), LedgerError> {
        self.apply(account, |account| account.deposit(amount))?;
        debug!("Deposited [{amount}] into account [{}]", account.id);

        Ok(())
    }

    pub fn withdraw(&self, account: &mut Account, amount: Amount) -> Result<(), LedgerError> {
        self.apply(account, |account| account.withdraw(amount))?;
        debug!("Withdrew [{amount}] from account [{}]", account.id);

        Ok(())
    }

    /// Moves `amount` from `sender` to the stored account named `to`.
    ///
    /// Checks run in order: amount, sender funds against a zero floor, then
    /// counterparty lookup. Both parties are written in one store call.
    /// Returns the updated counterparty.
    pub fn transfer(&self, sender: &mut Account, amount: Amount, to: &str) -> Result<Account, LedgerError> {
        sender.ensure_can_send(amount)?;

        let mut counterparty = self.find_by_name(to)?
            .ok_or_else(|| LedgerError::CounterpartyNotFound { name: to.to_string() })?;

        if counterparty.id == sender.id {
            return Err(LedgerError::SelfTransfer { account_id: sender.id.clone() })
        }

        let snapshot = sender.clone();

        if let Err(error) = self.settle(sender, &mut counterparty, amount) {
            *sender = snapshot;
            return Err(error)
        }

        debug!("Transferred [{amount}] from account [{}] to account [{}]", sender.id, counterparty.id);

        Ok(counterparty)
    }

    pub fn statement(&self, account: &Account, filter: &Filter) -> Statement {
        Statement::render(account, filter)
    }

    pub fn statement_of(&self, name: &str, filter: &Filter) -> Result<Statement, LedgerError> {
        let account = self.resolve(name)?;

        Ok(Statement::render(&account, filter))
    }

    pub fn deposit_to(&self, name: &str, amount: Amount) -> Result<Account, LedgerError> {
        let mut account = self.resolve(name)?;
        self.deposit(&mut account, amount)?;

        Ok(account)
    }

    pub fn withdraw_from(&self, name: &str, amount: Amount) -> Result<Account, LedgerError> {
        let mut account = self.resolve(name)?;
        self.withdraw(&mut account, amount)?;

        Ok(account)
    }

    /// Returns the updated sender and counterparty.
    pub fn transfer_between(&self, from: &str, amount: Amount, to: &str) -> Result<(Account, Account), LedgerError> {
        let mut sender = self.resolve(from)?;
        let counterparty = self.transfer(&mut sender, amount, to)?;

        Ok((sender, counterparty))
    }

    fn resolve(&self, name: &str) -> Result<Account, LedgerError> {
        self.find_by_name(name)?
            .ok_or_else(|| LedgerError::AccountNotFound { name: name.to_string() })
    }

    fn settle(&self, sender: &mut Account, counterparty: &mut Account, amount: Amount) -> Result<(), LedgerError> {
        sender.send_transfer(amount)?;
        counterparty.receive_transfer(amount)?;
        self.store.upsert_many(&[sender.clone(), counterparty.clone()])?;

        Ok(())
    }

    fn apply<F>(&self, account: &mut Account, operation: F) -> Result<(), LedgerError>
    where
        F: FnOnce(&mut Account) -> Result<(), AccountError>
    {
        let snapshot = account.clone();
        operation(account)?;

        if let Err(error) = self.store.upsert(account) {
            *account = snapshot;
            return Err(error.into())
        }

        Ok(())
    }
}
