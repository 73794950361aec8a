//! Tick-size price rounding

use rust_decimal::{Decimal, RoundingStrategy};

/// Round a price to the nearest multiple of `tick_size`, ties away from zero
///
/// Ties-away matches common price-rounding conventions on exchanges. A
/// non-positive tick size leaves the price untouched. Idempotent on prices
/// that are already tick-aligned.
pub fn round_to_tick(price: Decimal, tick_size: Decimal) -> Decimal {
    if tick_size <= Decimal::ZERO {
        return price;
    }
    let ticks = (price / tick_size)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    (ticks * tick_size).normalize()
}
