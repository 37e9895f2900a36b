//! Conversion between currency amounts and whole tenths.
//!
//! Balances and bets are stored as tenths of a currency unit so that bet steps
//! stay exact.

/// An amount in tenths of a currency unit.
pub type Tenths = u32;

#[cfg(feature = "std")]
fn round(value: f64) -> f64 {
    value.round()
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn round(value: f64) -> f64 {
    libm::round(value)
}

/// Converts a non-negative amount to tenths.
///
/// Returns `None` for NaN, infinite, negative, or oversized amounts.
#[must_use]
pub fn to_tenths(amount: f64) -> Option<Tenths> {
    if !amount.is_finite() {
        return None;
    }

    let scaled = round(amount * 10.0);
    if scaled < 0.0 || scaled > f64::from(Tenths::MAX) {
        return None;
    }

    Some(scaled as Tenths)
}

/// Snaps a non-negative amount to the nearest point of the grid
/// `min + k * step` (in tenths), rounding half steps away from `min`.
///
/// Amounts below `min` snap to `min`. Returns `None` where [`to_tenths`]
/// would.
#[must_use]
pub fn snap_to_step(amount: f64, min: Tenths, step: Tenths) -> Option<Tenths> {
    if !amount.is_finite() || amount < 0.0 || step == 0 {
        return None;
    }

    let offset = (amount * 10.0 - f64::from(min)) / f64::from(step);
    if offset <= 0.0 {
        return Some(min);
    }

    let steps = round(offset);
    if steps > f64::from(Tenths::MAX) {
        return None;
    }

    (steps as Tenths).checked_mul(step)?.checked_add(min)
}

/// Converts tenths back to a currency amount.
#[must_use]
pub fn from_tenths(tenths: Tenths) -> f64 {
    f64::from(tenths) / 10.0
}
