//! Unit conversion: raw delivery quantities to whole-container counts

use thiserror::Error;

use crate::model::{ConvertedRow, DeliveryRow};

/// Boxes are palletized eight to a unit before trailer loading
pub const BOXES_PER_PALLET: f64 = 8.0;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConvertError {
    #[error("Part {part_number} ({drive_unit}): pack size must be positive, got {pack_size}")]
    NonPositivePackSize {
        part_number: String,
        drive_unit: String,
        pack_size: f64,
    },

    #[error("Part {part_number} ({drive_unit}): negative quantity {value} in slot {slot}")]
    NegativeQuantity {
        part_number: String,
        drive_unit: String,
        slot: usize,
        value: f64,
    },

    #[error("Part {part_number} ({drive_unit}): non-finite quantity in slot {slot}")]
    NonFiniteQuantity {
        part_number: String,
        drive_unit: String,
        slot: usize,
    },
}

/// Convert one quantity to containers
///
/// `ceil(raw / pack_size)`, then for box parts a second `ceil(x / 8)`.
/// Callers must have validated `pack_size > 0` and `raw >= 0`.
fn to_containers(raw: f64, pack_size: f64, is_box: bool) -> u32 {
    let mut containers = (raw / pack_size).ceil();
    if is_box {
        containers = (containers / BOXES_PER_PALLET).ceil();
    }
    containers as u32
}

/// Convert a delivery row's raw quantities into whole-container counts
///
/// Pure function of its input. Rejects non-positive or non-finite pack
/// sizes and negative or non-finite quantities before dividing, so the
/// output never contains NaN-derived garbage.
pub fn convert_row(row: &DeliveryRow) -> Result<ConvertedRow, ConvertError> {
    if !row.pack_size.is_finite() || row.pack_size <= 0.0 {
        return Err(ConvertError::NonPositivePackSize {
            part_number: row.part_number.clone(),
            drive_unit: row.drive_unit.clone(),
            pack_size: row.pack_size,
        });
    }

    let mut containers = Vec::with_capacity(row.planned_quantities.len());
    for (slot, &raw) in row.planned_quantities.iter().enumerate() {
        if !raw.is_finite() {
            return Err(ConvertError::NonFiniteQuantity {
                part_number: row.part_number.clone(),
                drive_unit: row.drive_unit.clone(),
                slot,
            });
        }
        if raw < 0.0 {
            return Err(ConvertError::NegativeQuantity {
                part_number: row.part_number.clone(),
                drive_unit: row.drive_unit.clone(),
                slot,
                value: raw,
            });
        }
        containers.push(to_containers(raw, row.pack_size, row.package_type.is_box()));
    }

    Ok(ConvertedRow {
        part_number: row.part_number.clone(),
        drive_unit: row.drive_unit.clone(),
        description: row.description.clone(),
        package_type: row.package_type.clone(),
        pack_size: row.pack_size,
        container_quantities: containers,
    })
}

/// Convert a batch of rows, failing fast on the first invalid row
pub fn convert_rows(rows: &[DeliveryRow]) -> Result<Vec<ConvertedRow>, ConvertError> {
    rows.iter().map(convert_row).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PackageType;

    fn row(pack_size: f64, package_type: PackageType, quantities: Vec<f64>) -> DeliveryRow {
        DeliveryRow {
            part_number: "P-100".to_string(),
            drive_unit: "Proteus".to_string(),
            description: Some("Stator housing".to_string()),
            package_type,
            pack_size,
            planned_quantities: quantities,
        }
    }

    #[test]
    fn test_pallet_rows_round_up_per_pack() {
        let converted = convert_row(&row(4.0, PackageType::Pallet, vec![30.0, 8.0, 0.0])).unwrap();
        assert_eq!(converted.container_quantities, vec![8, 2, 0]);
    }

    #[test]
    fn test_box_rows_get_second_division() {
        // ceil(30/4) = 8 boxes, ceil(8/8) = 1 pallet-equivalent
        let converted = convert_row(&row(4.0, PackageType::Box, vec![30.0])).unwrap();
        assert_eq!(converted.container_quantities, vec![1]);
    }

    #[test]
    fn test_box_rows_round_up_partial_pallets() {
        // ceil(33/4) = 9 boxes, ceil(9/8) = 2
        let converted = convert_row(&row(4.0, PackageType::Box, vec![33.0])).unwrap();
        assert_eq!(converted.container_quantities, vec![2]);
    }

    #[test]
    fn test_zero_quantity_converts_to_zero() {
        let converted = convert_row(&row(4.0, PackageType::Box, vec![0.0])).unwrap();
        assert_eq!(converted.container_quantities, vec![0]);
    }

    #[test]
    fn test_zero_pack_size_is_rejected() {
        let err = convert_row(&row(0.0, PackageType::Pallet, vec![10.0])).unwrap_err();
        assert!(matches!(err, ConvertError::NonPositivePackSize { .. }));
    }

    #[test]
    fn test_negative_pack_size_is_rejected() {
        let err = convert_row(&row(-2.0, PackageType::Pallet, vec![10.0])).unwrap_err();
        assert!(matches!(err, ConvertError::NonPositivePackSize { .. }));
    }

    #[test]
    fn test_negative_quantity_is_rejected() {
        let err = convert_row(&row(4.0, PackageType::Pallet, vec![5.0, -1.0])).unwrap_err();
        assert!(matches!(err, ConvertError::NegativeQuantity { slot: 1, .. }));
    }

    #[test]
    fn test_nan_quantity_is_rejected() {
        let err = convert_row(&row(4.0, PackageType::Pallet, vec![f64::NAN])).unwrap_err();
        assert!(matches!(err, ConvertError::NonFiniteQuantity { slot: 0, .. }));
    }

    #[test]
    fn test_convert_rows_fails_fast() {
        let rows = vec![
            row(4.0, PackageType::Pallet, vec![8.0]),
            row(0.0, PackageType::Pallet, vec![8.0]),
        ];
        assert!(convert_rows(&rows).is_err());
    }
}
