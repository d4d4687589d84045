//! Bulk payment selection.

use std::collections::BTreeSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use salonledger_shared::types::CommissionId;

use crate::records::Commission;

/// Totals for the commissions a user has ticked for payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionTotal {
    /// Payable commissions selected.
    pub count: u64,
    /// Amount to pay.
    pub amount: Decimal,
    /// Selected commissions that were already paid and are left out.
    pub skipped_paid: u64,
    /// IDs to send to the payout call, in ID order.
    pub commission_ids: Vec<CommissionId>,
}

/// Set of commission IDs chosen for a bulk payout.
///
/// Selection is by ID only; the payable total is always recomputed against
/// the current commission list so stale picks of paid commissions drop out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommissionSelection {
    selected: BTreeSet<CommissionId>,
}

impl CommissionSelection {
    /// Creates an empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a selection from IDs.
    pub fn from_ids(ids: impl IntoIterator<Item = CommissionId>) -> Self {
        Self {
            selected: ids.into_iter().collect(),
        }
    }

    /// Adds the ID if absent, removes it if present. Returns whether it is now selected.
    pub fn toggle(&mut self, id: CommissionId) -> bool {
        if self.selected.remove(&id) {
            false
        } else {
            self.selected.insert(id);
            true
        }
    }

    /// Selects every unpaid commission in the list.
    pub fn select_all_unpaid(&mut self, commissions: &[Commission]) {
        self.selected
            .extend(commissions.iter().filter(|c| !c.paid).map(|c| c.id));
    }

    /// Drops every selection.
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Returns true if the ID is selected.
    #[must_use]
    pub fn is_selected(&self, id: CommissionId) -> bool {
        self.selected.contains(&id)
    }

    /// Number of selected IDs, payable or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Returns true if nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Payable total of the selection against the given list.
    ///
    /// Paid commissions are skipped; IDs absent from the list are ignored, and
    /// a commission listed twice counts once.
    #[must_use]
    pub fn total(&self, commissions: &[Commission]) -> SelectionTotal {
        let mut total = SelectionTotal {
            count: 0,
            amount: Decimal::ZERO,
            skipped_paid: 0,
            commission_ids: Vec::new(),
        };

        let mut seen = BTreeSet::new();
        for commission in commissions.iter().filter(|c| self.is_selected(c.id)) {
            if !seen.insert(commission.id) {
                continue;
            }
            if commission.paid {
                total.skipped_paid += 1;
                continue;
            }
            total.count += 1;
            total.amount = total.amount.saturating_add(commission.amount);
            total.commission_ids.push(commission.id);
        }

        total.commission_ids.sort();
        total
    }
}
