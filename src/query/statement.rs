use std::fmt;
use std::fmt::{Display, Formatter};

use chrono::SecondsFormat;

use crate::models::{Account, Transaction};
use crate::query::Filter;
use crate::types::{to_cents, Amount};

/// An account's balance and the slice of its history a filter selected.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub balance: Amount,
    pub transactions: Vec<Transaction>
}

impl Statement {
    pub fn render(account: &Account, filter: &Filter) -> Self {
        Self {
            balance: account.balance(),
            transactions: account.transactions().iter()
                .filter(|transaction| filter.matches(transaction))
                .cloned()
                .collect()
        }
    }
}

impl Display for Statement {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        writeln!(formatter, "Balance: {:.2}", to_cents(self.balance))?;

        for transaction in &self.transactions {
            writeln!(
                formatter,
                "Time: {}, Amount: {:.2}, Type: {}",
                transaction.timestamp.to_rfc3339_opts(SecondsFormat::Secs, true),
                to_cents(transaction.amount),
                transaction.kind
            )?;
        }

        Ok(())
    }
}
