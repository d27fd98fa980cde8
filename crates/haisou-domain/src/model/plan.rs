//! Combined delivery plan table

use serde::{Deserialize, Serialize};

use super::delivery_row::DeliveryRow;

/// The combined input table for one balancing run
///
/// Rows from all drive units share one slot grid; the label order is the
/// chronological slot order the balancer pushes overflow along.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryPlan {
    /// Slot column labels, identical across all rows
    pub slot_labels: Vec<String>,
    /// Rows in processing order (order affects balancing outcomes)
    pub rows: Vec<DeliveryRow>,
}

impl DeliveryPlan {
    pub fn num_slots(&self) -> usize {
        self.slot_labels.len()
    }

    /// Drive units present, in first-appearance order
    pub fn drive_units(&self) -> Vec<String> {
        let mut units: Vec<String> = Vec::new();
        for row in &self.rows {
            if !units.iter().any(|u| u == &row.drive_unit) {
                units.push(row.drive_unit.clone());
            }
        }
        units
    }

    /// Restrict the plan to the given drive units, keeping row order
    pub fn filter_units(&self, units: &[String]) -> DeliveryPlan {
        DeliveryPlan {
            slot_labels: self.slot_labels.clone(),
            rows: self
                .rows
                .iter()
                .filter(|r| units.iter().any(|u| u.eq_ignore_ascii_case(&r.drive_unit)))
                .cloned()
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PackageType;

    fn row(part: &str, unit: &str) -> DeliveryRow {
        DeliveryRow {
            part_number: part.to_string(),
            drive_unit: unit.to_string(),
            description: None,
            package_type: PackageType::Pallet,
            pack_size: 1.0,
            planned_quantities: vec![0.0, 0.0],
        }
    }

    #[test]
    fn test_drive_units_in_first_appearance_order() {
        let plan = DeliveryPlan {
            slot_labels: vec!["06:15".into(), "08:00".into()],
            rows: vec![row("A", "Hercules"), row("B", "Proteus"), row("C", "Hercules")],
        };
        assert_eq!(plan.drive_units(), vec!["Hercules", "Proteus"]);
    }

    #[test]
    fn test_filter_units_is_case_insensitive_and_keeps_order() {
        let plan = DeliveryPlan {
            slot_labels: vec!["06:15".into(), "08:00".into()],
            rows: vec![row("A", "Hercules"), row("B", "Proteus"), row("C", "Hercules")],
        };
        let filtered = plan.filter_units(&["hercules".to_string()]);
        assert_eq!(filtered.rows.len(), 2);
        assert_eq!(filtered.rows[0].part_number, "A");
        assert_eq!(filtered.rows[1].part_number, "C");
    }
}
