//! Excel loader for per-unit delivery sheets
//!
//! Reads every sheet named `<Unit>-Delivery` out of a planning workbook and
//! concatenates the rows, tagging each with the drive unit from the sheet
//! name. All sheets must share one slot grid; the combined row order is
//! sheet order then sheet row order, which is the balancing order.

use std::path::Path;

use calamine::{open_workbook, Reader, Xlsx};

use haisou_domain::model::{DeliveryPlan, DeliveryRow};

use crate::columns::ColumnLayout;
use crate::PlanLoaderError;

const SHEET_SUFFIX: &str = "-Delivery";

/// Load a delivery plan from a planning workbook (.xlsx / .xlsm)
pub fn load_delivery_workbook(path: &Path) -> Result<DeliveryPlan, PlanLoaderError> {
    if !path.exists() {
        return Err(PlanLoaderError::FileNotFound(path.display().to_string()));
    }

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();
    if ext != "xlsx" && ext != "xlsm" {
        return Err(PlanLoaderError::UnsupportedFormat(ext));
    }

    let mut workbook: Xlsx<_> = open_workbook(path)
        .map_err(|e: calamine::XlsxError| PlanLoaderError::ExcelError(e.to_string()))?;

    let delivery_sheets: Vec<String> = workbook
        .sheet_names()
        .iter()
        .filter(|name| name.ends_with(SHEET_SUFFIX))
        .cloned()
        .collect();
    if delivery_sheets.is_empty() {
        return Err(PlanLoaderError::NoDeliverySheets);
    }

    let mut slot_labels: Option<Vec<String>> = None;
    let mut rows: Vec<DeliveryRow> = Vec::new();

    for sheet in &delivery_sheets {
        let unit = sheet.trim_end_matches(SHEET_SUFFIX);
        let range = workbook
            .worksheet_range(sheet)
            .map_err(|e| PlanLoaderError::ExcelError(e.to_string()))?;

        let mut sheet_rows = range.rows();
        let header_row = sheet_rows.next().ok_or_else(|| {
            PlanLoaderError::ExcelError(format!("Sheet {sheet} has no header row"))
        })?;
        let headers: Vec<String> = header_row
            .iter()
            .map(|cell| cell.to_string().trim().to_string())
            .collect();
        let layout = ColumnLayout::from_headers(&headers)?;

        match &slot_labels {
            None => slot_labels = Some(layout.slot_labels()),
            Some(expected) if *expected != layout.slot_labels() => {
                return Err(PlanLoaderError::SlotGridMismatch {
                    sheet: sheet.clone(),
                    expected: expected.clone(),
                    found: layout.slot_labels(),
                });
            }
            Some(_) => {}
        }

        for (row_idx, data_row) in sheet_rows.enumerate() {
            let fields: Vec<String> = data_row
                .iter()
                .map(|cell| cell.to_string().trim().to_string())
                .collect();
            if fields.iter().all(|f| f.is_empty()) {
                continue;
            }
            let row_num = row_idx + 2;
            if let Some(row) = layout.parse_row(&fields, row_num, Some(unit))? {
                rows.push(row);
            }
        }
    }

    Ok(DeliveryPlan {
        slot_labels: slot_labels.unwrap_or_default(),
        rows,
    })
}
