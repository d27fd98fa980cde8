//! Excel export for balanced delivery plans

use rust_xlsxwriter::{Format, Workbook, Worksheet};
use std::path::Path;

use haisou_types::{Error, Result};

use crate::app::BalanceRunResult;

/// Export a balancing run to an Excel file
///
/// Writes the balanced table (with the appended TOTAL row) and an
/// `Unassigned` sheet listing overflow that could not be placed.
pub fn export_to_excel(result: &BalanceRunResult, output_path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();

    let balanced_sheet = workbook.add_worksheet();
    write_balanced_sheet(balanced_sheet, result)?;

    let unassigned_sheet = workbook.add_worksheet();
    write_unassigned_sheet(unassigned_sheet, result)?;

    workbook
        .save(output_path)
        .map_err(|e| Error::Excel(e.to_string()))?;

    Ok(())
}

fn write_balanced_sheet(sheet: &mut Worksheet, result: &BalanceRunResult) -> Result<()> {
    sheet
        .set_name("Balanced_Part_Deliveries")
        .map_err(|e| Error::Excel(e.to_string()))?;

    let header_format = Format::new().set_bold();

    let fixed_headers = [
        "Drive Unit",
        "Part Number",
        "Description",
        "Pack Size",
        "Package Type",
    ];
    for (col, header) in fixed_headers.iter().enumerate() {
        sheet
            .write_string_with_format(0, col as u16, *header, &header_format)
            .map_err(|e| Error::Excel(e.to_string()))?;
    }
    for (i, label) in result.slot_labels.iter().enumerate() {
        let col = (fixed_headers.len() + i) as u16;
        sheet
            .write_string_with_format(0, col, format!("Delivery {label}"), &header_format)
            .map_err(|e| Error::Excel(e.to_string()))?;
    }

    let mut row_num: u32 = 1;
    for row in &result.rows {
        sheet
            .write_string(row_num, 0, &row.drive_unit)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_string(row_num, 1, &row.part_number)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_string(row_num, 2, row.description.as_deref().unwrap_or(""))
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_number(row_num, 3, row.pack_size)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_string(row_num, 4, row.package_type.to_string())
            .map_err(|e| Error::Excel(e.to_string()))?;
        for (i, &qty) in row.balanced_quantities.iter().enumerate() {
            let col = (fixed_headers.len() + i) as u16;
            sheet
                .write_number(row_num, col, f64::from(qty))
                .map_err(|e| Error::Excel(e.to_string()))?;
        }
        row_num += 1;
    }

    // Synthetic TOTAL row: sentinel identity, per-slot sums
    let total_format = Format::new().set_bold();
    sheet
        .write_string_with_format(row_num, 0, "TOTAL", &total_format)
        .map_err(|e| Error::Excel(e.to_string()))?;
    for (i, &total) in result.totals.per_slot.iter().enumerate() {
        let col = (fixed_headers.len() + i) as u16;
        sheet
            .write_number_with_format(row_num, col, f64::from(total), &total_format)
            .map_err(|e| Error::Excel(e.to_string()))?;
    }

    Ok(())
}

fn write_unassigned_sheet(sheet: &mut Worksheet, result: &BalanceRunResult) -> Result<()> {
    sheet
        .set_name("Unassigned")
        .map_err(|e| Error::Excel(e.to_string()))?;

    let header_format = Format::new().set_bold();

    sheet
        .write_string(0, 0, "Capacity per slot:")
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .write_number(0, 1, f64::from(result.capacity_per_slot))
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .write_string(1, 0, "Total unassigned:")
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .write_number(1, 1, result.overflow.total_unassigned() as f64)
        .map_err(|e| Error::Excel(e.to_string()))?;

    let headers = ["Part Number", "Drive Unit", "Origin Slot", "Containers"];
    for (col, header) in headers.iter().enumerate() {
        sheet
            .write_string_with_format(3, col as u16, *header, &header_format)
            .map_err(|e| Error::Excel(e.to_string()))?;
    }

    for (i, entry) in result.overflow.entries.iter().enumerate() {
        let row = 4 + i as u32;
        sheet
            .write_string(row, 0, &entry.part_number)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_string(row, 1, &entry.drive_unit)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_number(row, 2, entry.origin_slot as f64)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_number(row, 3, f64::from(entry.amount))
            .map_err(|e| Error::Excel(e.to_string()))?;
    }

    Ok(())
}
