use std::str::FromStr;

use chrono::Datelike;

use crate::models::Transaction;
use crate::types::Amount;

/// Selects which history entries a statement shows.
///
/// Built from a criterion name and a raw value. An empty criterion shows
/// everything; an unknown criterion, or a value that does not parse for its
/// criterion, shows nothing.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Filter {
    #[default]
    All,
    Kind(String),
    Amount(Amount),
    Day(u32),
    Month(u32),
    Year(i32),
    Nothing
}

impl Filter {
    pub fn parse(criterion: &str, value: &str) -> Self {
        let value = value.trim();

        match criterion.trim().to_lowercase().as_str() {
            "" => Filter::All,
            "type" => Filter::Kind(value.to_string()),
            "amount" => Amount::from_str(value).map(Filter::Amount).unwrap_or(Filter::Nothing),
            "day" => value.parse().map(Filter::Day).unwrap_or(Filter::Nothing),
            "month" => value.parse().map(Filter::Month).unwrap_or(Filter::Nothing),
            "year" => value.parse().map(Filter::Year).unwrap_or(Filter::Nothing),
            _ => Filter::Nothing
        }
    }

    /// Calendar criteria compare against the UTC date of the timestamp.
    pub fn matches(&self, transaction: &Transaction) -> bool {
        match self {
            Filter::All => true,
            Filter::Kind(kind) => transaction.kind.as_str() == kind.as_str(),
            Filter::Amount(amount) => transaction.amount == *amount,
            Filter::Day(day) => transaction.timestamp.day() == *day,
            Filter::Month(month) => transaction.timestamp.month() == *month,
            Filter::Year(year) => transaction.timestamp.year() == *year,
            Filter::Nothing => false
        }
    }
}
