//! Delivery row type definitions

use serde::{Deserialize, Serialize};

/// Package classification, decides the consolidation divisor
///
/// Boxes are palletized eight to a unit before trailer loading, so box
/// rows get a second ceil-division after the pack-size conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PackageType {
    Box,
    Pallet,
    Other(String),
}

impl PackageType {
    /// Parse a raw spreadsheet value ("Box", "BOX", "Pallet", ...)
    pub fn parse(raw: &str) -> PackageType {
        let trimmed = raw.trim();
        if trimmed.eq_ignore_ascii_case("box") {
            PackageType::Box
        } else if trimmed.eq_ignore_ascii_case("pallet") {
            PackageType::Pallet
        } else {
            PackageType::Other(trimmed.to_string())
        }
    }

    pub fn is_box(&self) -> bool {
        matches!(self, PackageType::Box)
    }
}

impl std::fmt::Display for PackageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PackageType::Box => write!(f, "Box"),
            PackageType::Pallet => write!(f, "Pallet"),
            PackageType::Other(s) => write!(f, "{}", s),
        }
    }
}

/// One planned delivery row for a (part, drive unit) pair
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryRow {
    /// Part number, unique per drive unit (not across units)
    pub part_number: String,
    /// Manufacturing line the row is scoped to (e.g. "Proteus")
    pub drive_unit: String,
    /// Free-text part description
    pub description: Option<String>,
    pub package_type: PackageType,
    /// Raw units per shippable container
    pub pack_size: f64,
    /// Raw units planned per delivery slot, chronological order
    pub planned_quantities: Vec<f64>,
}

impl DeliveryRow {
    pub fn num_slots(&self) -> usize {
        self.planned_quantities.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_box_case_insensitive() {
        assert_eq!(PackageType::parse("box"), PackageType::Box);
        assert_eq!(PackageType::parse("Box"), PackageType::Box);
        assert_eq!(PackageType::parse(" BOX "), PackageType::Box);
    }

    #[test]
    fn test_parse_pallet_and_other() {
        assert_eq!(PackageType::parse("Pallet"), PackageType::Pallet);
        assert_eq!(
            PackageType::parse("Tote"),
            PackageType::Other("Tote".to_string())
        );
        assert!(!PackageType::parse("Pallet").is_box());
    }
}
