//! Persistence implementations
//!
//! File-based implementations of the domain repository traits.

mod file_delivery_plan_repo;

pub use file_delivery_plan_repo::FileDeliveryPlanRepository;
