//! Converted and balanced row types

use serde::{Deserialize, Serialize};

use super::delivery_row::PackageType;

/// A delivery row after unit conversion: quantities are whole containers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertedRow {
    pub part_number: String,
    pub drive_unit: String,
    pub description: Option<String>,
    pub package_type: PackageType,
    pub pack_size: f64,
    /// Whole-container counts per slot, comparable against trailer capacity
    pub container_quantities: Vec<u32>,
}

impl ConvertedRow {
    pub fn total_containers(&self) -> u64 {
        self.container_quantities.iter().map(|&q| u64::from(q)).sum()
    }
}

/// A delivery row after slot balancing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalancedRow {
    pub part_number: String,
    pub drive_unit: String,
    pub description: Option<String>,
    pub package_type: PackageType,
    pub pack_size: f64,
    /// Containers assigned per slot after the forward-overflow pass
    pub balanced_quantities: Vec<u32>,
}

impl BalancedRow {
    pub fn total_containers(&self) -> u64 {
        self.balanced_quantities.iter().map(|&q| u64::from(q)).sum()
    }
}
