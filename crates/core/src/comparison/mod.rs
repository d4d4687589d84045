//! Period-over-period change percentages.
//!
//! A zero previous value never yields an infinite or undefined change:
//! growth from nothing reads as +100%, nothing to nothing reads as 0%.
//! Dashboards rely on these exact values. Ratios too large for `Decimal`
//! clamp to `Decimal::MAX` or `Decimal::MIN`.

use rust_decimal::Decimal;

/// Decimal places kept on change percentages.
pub const CHANGE_SCALE: u32 = 2;

/// Percentage change for metrics that cannot go negative (revenue, counts).
///
/// - previous > 0: `(current - previous) / previous * 100`
/// - previous = 0 and current > 0: `100`
/// - otherwise: `0`
#[must_use]
pub fn percent_change(current: Decimal, previous: Decimal) -> Decimal {
    if previous > Decimal::ZERO {
        scaled_percent(current.saturating_sub(previous), previous).round_dp(CHANGE_SCALE)
    } else if current > Decimal::ZERO {
        Decimal::ONE_HUNDRED
    } else {
        Decimal::ZERO
    }
}

/// Percentage change for metrics that can be negative (net income, margin).
///
/// Divides by the magnitude of the previous value so that moving from a loss
/// to a smaller loss reads as an improvement. With previous = 0 the result is
/// `+100`, `-100`, or `0` following the sign of `current`.
#[must_use]
pub fn signed_percent_change(current: Decimal, previous: Decimal) -> Decimal {
    if previous.is_zero() {
        return if current > Decimal::ZERO {
            Decimal::ONE_HUNDRED
        } else if current < Decimal::ZERO {
            -Decimal::ONE_HUNDRED
        } else {
            Decimal::ZERO
        };
    }

    scaled_percent(current.saturating_sub(previous), previous.abs()).round_dp(CHANGE_SCALE)
}

/// Share of `part` in `whole` as a percentage, 0 when `whole` is 0.
#[must_use]
pub fn ratio_percent(part: Decimal, whole: Decimal) -> Decimal {
    if whole.is_zero() {
        Decimal::ZERO
    } else {
        scaled_percent(part, whole).round_dp(CHANGE_SCALE)
    }
}

/// `numerator / denominator * 100`, unrounded and clamped to the `Decimal`
/// range. `denominator` must be non-zero.
pub(crate) fn scaled_percent(numerator: Decimal, denominator: Decimal) -> Decimal {
    numerator
        .checked_div(denominator)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .unwrap_or(if numerator.is_sign_negative() == denominator.is_sign_negative() {
            Decimal::MAX
        } else {
            Decimal::MIN
        })
}
