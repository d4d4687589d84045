//! Category breakdowns with percentage shares.

use std::collections::HashMap;

use rust_decimal::{Decimal, RoundingStrategy};

use super::service::saturating_sum;
use super::types::BreakdownEntry;
use crate::comparison::scaled_percent;

/// Accumulates amounts per label and turns them into sorted percentage slices.
#[derive(Debug, Default)]
pub struct BreakdownBuilder {
    groups: HashMap<String, (Decimal, u64)>,
}

impl BreakdownBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one record's amount to its category.
    pub fn add(&mut self, label: &str, amount: Decimal) {
        let entry = self
            .groups
            .entry(label.to_string())
            .or_insert((Decimal::ZERO, 0));
        entry.0 = entry.0.saturating_add(amount);
        entry.1 += 1;
    }

    /// Returns true if no record was added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Sum of every category.
    #[must_use]
    pub fn total(&self) -> Decimal {
        saturating_sum(self.groups.values().map(|(amount, _)| *amount))
    }

    /// Finishes the breakdown.
    ///
    /// Percentages are `amount / total * 100` rounded half away from zero to a
    /// whole number, and 0 for every entry when the total is 0. Entries are
    /// ordered by amount, largest first, ties broken by label.
    #[must_use]
    pub fn finish(self) -> Vec<BreakdownEntry> {
        let total = self.total();

        let mut entries: Vec<BreakdownEntry> = self
            .groups
            .into_iter()
            .map(|(label, (amount, count))| BreakdownEntry {
                label,
                amount,
                percentage: whole_percent(amount, total),
                count,
            })
            .collect();

        entries.sort_by(|a, b| b.amount.cmp(&a.amount).then_with(|| a.label.cmp(&b.label)));
        entries
    }

    /// Finishes the breakdown, or emits a single catch-all slice.
    ///
    /// When no record carried a grouping key but `total` is non-zero, the
    /// result is one `fallback_label` entry holding 100%.
    #[must_use]
    pub fn finish_or_fallback(
        self,
        fallback_label: &str,
        total: Decimal,
        count: u64,
    ) -> Vec<BreakdownEntry> {
        if self.is_empty() && !total.is_zero() {
            return vec![BreakdownEntry {
                label: fallback_label.to_string(),
                amount: total,
                percentage: Decimal::ONE_HUNDRED,
                count,
            }];
        }
        self.finish()
    }
}

fn whole_percent(amount: Decimal, total: Decimal) -> Decimal {
    if total.is_zero() {
        return Decimal::ZERO;
    }
    scaled_percent(amount, total).round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}
