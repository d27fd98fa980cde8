//! Domain model types

pub mod balanced_row;
pub mod capacity_pool;
pub mod delivery_row;
pub mod overflow;
pub mod plan;

pub use balanced_row::{BalancedRow, ConvertedRow};
pub use capacity_pool::SlotCapacityPool;
pub use delivery_row::{DeliveryRow, PackageType};
pub use overflow::{OverflowReport, UnassignedOverflow};
pub use plan::DeliveryPlan;
