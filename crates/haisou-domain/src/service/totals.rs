//! Per-slot totals over a balanced batch

use serde::{Deserialize, Serialize};

use crate::model::BalancedRow;

/// The synthetic TOTAL row appended after balancing
///
/// Pure reduction over the balanced rows; identity columns are sentinel
/// values supplied by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotTotals {
    pub per_slot: Vec<u32>,
}

impl SlotTotals {
    pub fn from_rows(rows: &[BalancedRow], num_slots: usize) -> SlotTotals {
        let mut per_slot = vec![0u32; num_slots];
        for row in rows {
            for (slot, &qty) in row.balanced_quantities.iter().enumerate() {
                per_slot[slot] += qty;
            }
        }
        SlotTotals { per_slot }
    }

    pub fn grand_total(&self) -> u64 {
        self.per_slot.iter().map(|&q| u64::from(q)).sum()
    }
}
