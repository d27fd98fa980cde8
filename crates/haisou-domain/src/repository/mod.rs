//! Repository trait definitions for delivery plan sources

use crate::model::{DeliveryPlan, DeliveryRow};
use haisou_types::Error;

/// Source of combined delivery plan tables (納入計画)
pub trait DeliveryPlanRepository {
    /// Load the full combined plan, all drive units, in table order
    fn load_plan(&self) -> Result<DeliveryPlan, Error>;

    /// Rows for a single drive unit
    fn find_by_unit(&self, drive_unit: &str) -> Result<Vec<DeliveryRow>, Error>;
}
