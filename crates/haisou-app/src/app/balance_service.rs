//! Balance Service - Core Use Case for Delivery Slot Balancing
//!
//! This service orchestrates the complete balancing workflow:
//! 1. Restrict the plan to the requested drive units
//! 2. Convert raw quantities into whole-container counts
//! 3. Create the shared capacity pool for the run
//! 4. Balance rows in table order against the pool
//! 5. Aggregate per-slot totals for the TOTAL row

use serde::{Deserialize, Serialize};
use thiserror::Error;

use haisou_domain::model::{BalancedRow, DeliveryPlan, OverflowReport, SlotCapacityPool};
use haisou_domain::service::{balance_rows, convert_rows, BalanceError, ConvertError, SlotTotals};

use crate::config::Config;

/// Errors specific to the balance service
#[derive(Debug, Error)]
pub enum BalanceServiceError {
    #[error("Unknown drive unit: {0}")]
    UnknownUnit(String),

    #[error(transparent)]
    Convert(#[from] ConvertError),

    #[error(transparent)]
    Balance(#[from] BalanceError),
}

impl From<BalanceServiceError> for haisou_types::Error {
    fn from(err: BalanceServiceError) -> Self {
        haisou_types::Error::InvalidInput(err.to_string())
    }
}

/// Options for a balancing run
#[derive(Debug, Clone, Default)]
pub struct BalanceOptions {
    /// Capacity override; falls back to the configured default
    pub capacity_per_slot: Option<u32>,

    /// Restrict to these drive units (empty = all units in the plan)
    pub units: Vec<String>,
}

impl BalanceOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.capacity_per_slot = Some(capacity);
        self
    }

    pub fn with_units(mut self, units: Vec<String>) -> Self {
        self.units = units;
        self
    }
}

/// Result of one balancing run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceRunResult {
    pub slot_labels: Vec<String>,
    pub capacity_per_slot: u32,
    pub rows: Vec<BalancedRow>,
    pub totals: SlotTotals,
    pub overflow: OverflowReport,
}

impl BalanceRunResult {
    /// Containers placed across all rows and slots
    pub fn total_balanced(&self) -> u64 {
        self.totals.grand_total()
    }
}

/// Run the complete balancing workflow over a delivery plan
///
/// A zero capacity is accepted (every slot is immediately full and all
/// quantity lands in the overflow report); callers should warn before
/// starting such a run.
pub fn run_balance(
    plan: &DeliveryPlan,
    options: &BalanceOptions,
    config: &Config,
) -> Result<BalanceRunResult, BalanceServiceError> {
    let plan = if options.units.is_empty() {
        plan.clone()
    } else {
        for unit in &options.units {
            if !plan.rows.iter().any(|r| r.drive_unit.eq_ignore_ascii_case(unit)) {
                return Err(BalanceServiceError::UnknownUnit(unit.clone()));
            }
        }
        plan.filter_units(&options.units)
    };

    let capacity = options.capacity_per_slot.unwrap_or(config.default_capacity);

    let converted = convert_rows(&plan.rows)?;

    let mut pool = SlotCapacityPool::new(capacity, plan.num_slots());
    let outcome = balance_rows(&converted, &mut pool)?;

    let totals = SlotTotals::from_rows(&outcome.rows, plan.num_slots());

    Ok(BalanceRunResult {
        slot_labels: plan.slot_labels,
        capacity_per_slot: capacity,
        rows: outcome.rows,
        totals,
        overflow: outcome.overflow,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use haisou_domain::model::{DeliveryRow, PackageType};

    fn plan() -> DeliveryPlan {
        DeliveryPlan {
            slot_labels: vec!["06:15".into(), "08:00".into()],
            rows: vec![
                DeliveryRow {
                    part_number: "P-100".to_string(),
                    drive_unit: "Proteus".to_string(),
                    description: Some("Stator housing".to_string()),
                    package_type: PackageType::Box,
                    pack_size: 4.0,
                    // ceil(30/4)=8 boxes, ceil(8/8)=1 container per slot
                    planned_quantities: vec![30.0, 30.0],
                },
                DeliveryRow {
                    part_number: "P-200".to_string(),
                    drive_unit: "Hercules".to_string(),
                    description: None,
                    package_type: PackageType::Pallet,
                    pack_size: 2.0,
                    planned_quantities: vec![30.0, 0.0],
                },
            ],
        }
    }

    #[test]
    fn test_run_converts_then_balances_in_table_order() {
        let options = BalanceOptions::new().with_capacity(10);
        let result = run_balance(&plan(), &options, &Config::default()).unwrap();

        // P-100 converts to [1, 1]; P-200 to [15, 0] and cascades.
        assert_eq!(result.rows[0].balanced_quantities, vec![1, 1]);
        assert_eq!(result.rows[1].balanced_quantities, vec![9, 6]);
        assert_eq!(result.totals.per_slot, vec![10, 7]);
        assert!(result.overflow.is_empty());
        assert_eq!(result.capacity_per_slot, 10);
    }

    #[test]
    fn test_capacity_falls_back_to_config_default() {
        let result = run_balance(&plan(), &BalanceOptions::new(), &Config::default()).unwrap();
        assert_eq!(result.capacity_per_slot, 96);
    }

    #[test]
    fn test_unit_filter_limits_rows() {
        let options = BalanceOptions::new()
            .with_capacity(10)
            .with_units(vec!["Hercules".to_string()]);
        let result = run_balance(&plan(), &options, &Config::default()).unwrap();
        assert_eq!(result.rows.len(), 1);
        assert_eq!(result.rows[0].part_number, "P-200");
    }

    #[test]
    fn test_unknown_unit_is_rejected() {
        let options = BalanceOptions::new().with_units(vec!["Pegasus".to_string()]);
        let err = run_balance(&plan(), &options, &Config::default()).unwrap_err();
        assert!(matches!(err, BalanceServiceError::UnknownUnit(u) if u == "Pegasus"));
    }

    #[test]
    fn test_zero_capacity_reports_all_quantity_unassigned() {
        let options = BalanceOptions::new().with_capacity(0);
        let result = run_balance(&plan(), &options, &Config::default()).unwrap();
        assert_eq!(result.total_balanced(), 0);
        // P-100: 1 + 1 containers, P-200: 15 containers
        assert_eq!(result.overflow.total_unassigned(), 17);
    }

    #[test]
    fn test_invalid_pack_size_aborts_run() {
        let mut bad = plan();
        bad.rows[1].pack_size = 0.0;
        let err = run_balance(&bad, &BalanceOptions::new(), &Config::default()).unwrap_err();
        assert!(matches!(
            err,
            BalanceServiceError::Convert(ConvertError::NonPositivePackSize { .. })
        ));
    }
}
