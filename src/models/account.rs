use crate::models::errors::AccountError;
use crate::models::{AccountKind, Transaction, TransactionKind};
use crate::types::{AccountId, Amount};
use serde::{Deserialize, Serialize};

/// The ledger of a single account.
///
/// Holds the mutable balance and overdraft state together with the
/// append-only history of every operation that changed it. The balance never
/// drops below [`Account::floor`]; every operation checks that before it
/// touches any state, so a rejected operation leaves the account exactly as
/// it was.
///
/// Field order here is the field order of the persisted JSON document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Stable identifier, the key used by the store.
    pub id: AccountId,
    /// Display name, matched case-insensitively when resolving transfers.
    pub name: String,
    balance: Amount,
    /// How far a checking account may go below zero on withdrawal.
    overdraw_limit: Amount,
    account_kind: AccountKind,
    #[serde(default)]
    transactions: Vec<Transaction>
}

impl Account {
    pub fn new(id: impl Into<AccountId>, name: impl Into<String>, account_kind: AccountKind, balance: Amount, overdraw_limit: Amount) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            balance,
            overdraw_limit,
            account_kind,
            transactions: Vec::new()
        }
    }

    pub fn checking(id: impl Into<AccountId>, name: impl Into<String>, balance: Amount, overdraw_limit: Amount) -> Self {
        Self::new(id, name, AccountKind::Checking, balance, overdraw_limit)
    }

    pub fn savings(id: impl Into<AccountId>, name: impl Into<String>, balance: Amount) -> Self {
        Self::new(id, name, AccountKind::Savings, balance, Amount::ZERO)
    }

    pub fn balance(&self) -> Amount {
        self.balance
    }

    pub fn overdraw_limit(&self) -> Amount {
        self.overdraw_limit
    }

    pub fn kind(&self) -> AccountKind {
        self.account_kind
    }

    /// History in chronological (insertion) order.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Lowest balance a withdrawal may leave behind.
    ///
    /// Savings accounts carry an overdraft limit in some stored documents; it
    /// is ignored for them.
    pub fn floor(&self) -> Amount {
        match self.account_kind {
            AccountKind::Checking => -self.overdraw_limit,
            AccountKind::Savings => Amount::ZERO
        }
    }

    pub fn matches_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }

    /// Checks that a freshly provisioned account satisfies the balance invariant.
    pub fn validate_opening(&self) -> Result<(), AccountError> {
        if self.overdraw_limit < Amount::ZERO {
            return Err(AccountError::InvalidOverdrawLimit {
                account_id: self.id.clone(),
                limit: self.overdraw_limit
            })
        }

        if self.balance < self.floor() {
            return Err(AccountError::OpeningBalanceBelowFloor {
                account_id: self.id.clone(),
                balance: self.balance,
                floor: self.floor()
            })
        }

        Ok(())
    }

    pub fn deposit(&mut self, amount: Amount) -> Result<(), AccountError> {
        let kind = TransactionKind::Deposit;
        self.check_positive(kind, amount)?;

        self.balance = self.balance.checked_add(amount)
            .ok_or_else(|| AccountError::overflow(self, kind))?;

        self.record(Transaction::now(kind, amount));

        Ok(())
    }

    pub fn withdraw(&mut self, amount: Amount) -> Result<(), AccountError> {
        let kind = TransactionKind::Withdraw;
        self.check_positive(kind, amount)?;
        self.balance = self.checked_debit(kind, amount, self.floor())?;

        self.record(Transaction::now(kind, amount));

        Ok(())
    }

    /// Validates the sending side of a transfer without changing anything.
    ///
    /// Transfers never use the overdraft: the sender must stay at or above zero
    /// whatever its kind.
    pub fn ensure_can_send(&self, amount: Amount) -> Result<(), AccountError> {
        let kind = TransactionKind::Transfer;
        self.check_positive(kind, amount)?;
        self.checked_debit(kind, amount, Amount::ZERO).map(|_| ())
    }

    pub fn send_transfer(&mut self, amount: Amount) -> Result<(), AccountError> {
        let kind = TransactionKind::Transfer;
        self.check_positive(kind, amount)?;
        self.balance = self.checked_debit(kind, amount, Amount::ZERO)?;

        self.record(Transaction::now(kind, amount));

        Ok(())
    }

    pub fn receive_transfer(&mut self, amount: Amount) -> Result<(), AccountError> {
        let kind = TransactionKind::Transfer;
        self.check_positive(kind, amount)?;

        self.balance = self.balance.checked_add(amount)
            .ok_or_else(|| AccountError::overflow(self, kind))?;

        self.record(Transaction::now(kind, amount));

        Ok(())
    }

    pub(crate) fn record(&mut self, transaction: Transaction) {
        self.transactions.push(transaction);
    }

    fn check_positive(&self, kind: TransactionKind, amount: Amount) -> Result<(), AccountError> {
        if amount <= Amount::ZERO {
            return Err(AccountError::invalid_amount(self, kind, amount))
        }

        Ok(())
    }

    fn checked_debit(&self, kind: TransactionKind, amount: Amount, floor: Amount) -> Result<Amount, AccountError> {
        let remaining = self.balance.checked_sub(amount)
            .ok_or_else(|| AccountError::overflow(self, kind))?;

        if remaining < floor {
            return Err(AccountError::insufficient_funds(self, kind, amount, floor))
        }

        Ok(remaining)
    }
}
