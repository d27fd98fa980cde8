//! Unassigned overflow reporting

use serde::{Deserialize, Serialize};

/// Containers that could not be placed by the final slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnassignedOverflow {
    pub part_number: String,
    pub drive_unit: String,
    /// Slot the quantity was originally planned in
    pub origin_slot: usize,
    pub amount: u32,
}

/// Collected unassigned overflow for one balancing run
///
/// Overflow is a data condition, not an error: the run continues and the
/// caller decides whether the accumulated amount is acceptable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverflowReport {
    pub entries: Vec<UnassignedOverflow>,
}

impl OverflowReport {
    pub fn push(&mut self, entry: UnassignedOverflow) {
        self.entries.push(entry);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total_unassigned(&self) -> u64 {
        self.entries.iter().map(|e| u64::from(e.amount)).sum()
    }

    /// Unassigned total for one (part, drive unit) row
    pub fn amount_for_row(&self, part_number: &str, drive_unit: &str) -> u64 {
        self.entries
            .iter()
            .filter(|e| e.part_number == part_number && e.drive_unit == drive_unit)
            .map(|e| u64::from(e.amount))
            .sum()
    }

    /// Human-readable report, one line per entry
    pub fn summary(&self) -> String {
        if self.entries.is_empty() {
            return "All planned quantities were assigned.".to_string();
        }
        let mut lines = Vec::with_capacity(self.entries.len() + 1);
        lines.push(format!(
            "{} containers unassigned after the last slot:",
            self.total_unassigned()
        ));
        for e in &self.entries {
            lines.push(format!(
                "  Part {} ({}): {} containers from slot {}",
                e.part_number, e.drive_unit, e.amount, e.origin_slot
            ));
        }
        lines.join("\n")
    }
}
