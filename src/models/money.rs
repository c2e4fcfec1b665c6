use rust_decimal::{Decimal, RoundingStrategy};

/// Format an amount with exactly two decimals, e.g. `6.5` -> `"6.50"`.
/// Rounds the exact decimal half away from zero, so `1.005` -> `"1.01"`.
pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.2}")
}

/// Format an amount as a dollar price, e.g. `"$6.50"`.
pub fn format_price(amount: Decimal) -> String {
    format!("${}", format_amount(amount))
}
