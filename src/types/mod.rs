use rust_decimal::{Decimal, RoundingStrategy};

pub type AccountId = String;
pub type Amount = Decimal;

/// Rounds to cents, half away from zero, for display.
pub fn to_cents(amount: Amount) -> Amount {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
