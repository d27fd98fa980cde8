//! Column layout shared by the CSV and Excel delivery table loaders
//!
//! Fixed identity columns plus any number of slot columns whose header
//! contains "Delivery". Slot column order is the chronological slot order.

use haisou_domain::model::{DeliveryRow, PackageType};

use crate::PlanLoaderError;

pub(crate) const PART_NUMBER: &str = "Part Number";
pub(crate) const DESCRIPTION: &str = "Description";
pub(crate) const PACK_SIZE: &str = "Pack Size";
pub(crate) const PACKAGE_TYPE: &str = "Package Type";
pub(crate) const DRIVE_UNIT: &str = "Drive Unit";
pub(crate) const SLOT_MARKER: &str = "Delivery";

#[derive(Debug, Clone)]
pub(crate) struct ColumnLayout {
    part_number: usize,
    description: Option<usize>,
    pack_size: usize,
    package_type: usize,
    drive_unit: Option<usize>,
    /// (column index, slot label) in header order
    slots: Vec<(usize, String)>,
}

impl ColumnLayout {
    pub(crate) fn from_headers(headers: &[String]) -> Result<ColumnLayout, PlanLoaderError> {
        let find = |name: &str| headers.iter().position(|h| h.eq_ignore_ascii_case(name));

        let part_number = find(PART_NUMBER)
            .ok_or_else(|| PlanLoaderError::MissingColumn(PART_NUMBER.to_string()))?;
        let pack_size = find(PACK_SIZE)
            .ok_or_else(|| PlanLoaderError::MissingColumn(PACK_SIZE.to_string()))?;
        let package_type = find(PACKAGE_TYPE)
            .ok_or_else(|| PlanLoaderError::MissingColumn(PACKAGE_TYPE.to_string()))?;

        let slots: Vec<(usize, String)> = headers
            .iter()
            .enumerate()
            .filter(|(_, h)| h.contains(SLOT_MARKER))
            .map(|(i, h)| (i, slot_label(h)))
            .collect();
        if slots.is_empty() {
            return Err(PlanLoaderError::NoSlotColumns);
        }

        Ok(ColumnLayout {
            part_number,
            description: find(DESCRIPTION),
            pack_size,
            package_type,
            drive_unit: find(DRIVE_UNIT),
            slots,
        })
    }

    pub(crate) fn slot_labels(&self) -> Vec<String> {
        self.slots.iter().map(|(_, label)| label.clone()).collect()
    }

    /// Parse one data row. Returns `None` for rows with a blank part number
    /// (separator/filler lines in exported sheets).
    pub(crate) fn parse_row(
        &self,
        fields: &[String],
        row_num: usize,
        unit_override: Option<&str>,
    ) -> Result<Option<DeliveryRow>, PlanLoaderError> {
        let field = |idx: usize| fields.get(idx).map(String::as_str).unwrap_or("");

        let part_number = field(self.part_number).to_string();
        if part_number.is_empty() {
            return Ok(None);
        }

        let pack_size_raw = field(self.pack_size);
        let pack_size: f64 = pack_size_raw.parse().map_err(|_| PlanLoaderError::InvalidNumber {
            row: row_num,
            column: PACK_SIZE.to_string(),
            value: pack_size_raw.to_string(),
        })?;

        let mut planned_quantities = Vec::with_capacity(self.slots.len());
        for (idx, label) in &self.slots {
            let raw = field(*idx);
            let qty: f64 = raw.parse().map_err(|_| PlanLoaderError::InvalidNumber {
                row: row_num,
                column: label.clone(),
                value: raw.to_string(),
            })?;
            planned_quantities.push(qty);
        }

        let drive_unit = match (self.drive_unit, unit_override) {
            (Some(idx), _) if !field(idx).is_empty() => field(idx).to_string(),
            (_, Some(unit)) => unit.to_string(),
            _ => String::new(),
        };

        Ok(Some(DeliveryRow {
            part_number,
            drive_unit,
            description: self
                .description
                .map(|idx| field(idx).to_string())
                .filter(|d| !d.is_empty()),
            package_type: PackageType::parse(field(self.package_type)),
            pack_size,
            planned_quantities,
        }))
    }
}

/// Derive a slot label from a header like "Delivery 06:15"
fn slot_label(header: &str) -> String {
    let stripped = header.trim_start_matches(SLOT_MARKER).trim();
    if stripped.is_empty() {
        header.trim().to_string()
    } else {
        stripped.to_string()
    }
}
