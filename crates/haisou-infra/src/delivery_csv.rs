//! CSV loader for combined delivery plan tables
//!
//! Expected header: `Part Number`, `Description`, `Pack Size`,
//! `Package Type`, optional `Drive Unit`, plus one column per delivery slot
//! whose header contains "Delivery" (e.g. `Delivery 06:15`). Quantities
//! must be numeric; missing or non-numeric cells abort the load with row
//! and column context rather than turning into NaN downstream.

use std::path::Path;

use haisou_domain::model::DeliveryPlan;

use crate::columns::ColumnLayout;
use crate::PlanLoaderError;

/// Load a delivery plan from a CSV file
pub fn load_delivery_plan(path: &Path) -> Result<DeliveryPlan, PlanLoaderError> {
    if !path.exists() {
        return Err(PlanLoaderError::FileNotFound(path.display().to_string()));
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();
    let layout = ColumnLayout::from_headers(&headers)?;

    let mut rows = Vec::new();
    for (row_idx, result) in reader.records().enumerate() {
        let record = result?;
        let row_num = row_idx + 2; // header is row 1
        let fields: Vec<String> = record.iter().map(|f| f.to_string()).collect();
        if let Some(row) = layout.parse_row(&fields, row_num, None)? {
            rows.push(row);
        }
    }

    Ok(DeliveryPlan {
        slot_labels: layout.slot_labels(),
        rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use haisou_domain::model::PackageType;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_plan_with_two_slots() {
        let csv = write_csv(
            "Drive Unit,Part Number,Description,Pack Size,Package Type,Delivery 06:15,Delivery 08:00\n\
             Proteus,P-100,Stator housing,4,Box,30,0\n\
             Hercules,P-200,Rotor shaft,2,Pallet,10,6\n",
        );
        let plan = load_delivery_plan(csv.path()).unwrap();

        assert_eq!(plan.slot_labels, vec!["06:15", "08:00"]);
        assert_eq!(plan.rows.len(), 2);

        let first = &plan.rows[0];
        assert_eq!(first.part_number, "P-100");
        assert_eq!(first.drive_unit, "Proteus");
        assert_eq!(first.package_type, PackageType::Box);
        assert!((first.pack_size - 4.0).abs() < f64::EPSILON);
        assert_eq!(first.planned_quantities, vec![30.0, 0.0]);

        assert_eq!(plan.rows[1].description.as_deref(), Some("Rotor shaft"));
    }

    #[test]
    fn test_blank_part_number_rows_are_skipped() {
        let csv = write_csv(
            "Part Number,Pack Size,Package Type,Delivery 06:15\n\
             P-100,4,Box,30\n\
             ,,,\n\
             P-200,2,Pallet,8\n",
        );
        let plan = load_delivery_plan(csv.path()).unwrap();
        assert_eq!(plan.rows.len(), 2);
    }

    #[test]
    fn test_non_numeric_quantity_reports_row_and_column() {
        let csv = write_csv(
            "Part Number,Pack Size,Package Type,Delivery 06:15\n\
             P-100,4,Box,lots\n",
        );
        let err = load_delivery_plan(csv.path()).unwrap_err();
        match err {
            PlanLoaderError::InvalidNumber { row, column, value } => {
                assert_eq!(row, 2);
                assert_eq!(column, "06:15");
                assert_eq!(value, "lots");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_column_is_rejected() {
        let csv = write_csv("Part Number,Package Type,Delivery 06:15\nP-100,Box,3\n");
        let err = load_delivery_plan(csv.path()).unwrap_err();
        assert!(matches!(err, PlanLoaderError::MissingColumn(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = load_delivery_plan(Path::new("no-such-plan.csv")).unwrap_err();
        assert!(matches!(err, PlanLoaderError::FileNotFound(_)));
    }
}
