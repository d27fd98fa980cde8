//! File-based implementation of DeliveryPlanRepository
//!
//! Dispatches on the file extension: `.csv` for combined tables,
//! `.xlsx`/`.xlsm` for planning workbooks with per-unit delivery sheets.

use std::path::{Path, PathBuf};

use haisou_domain::model::{DeliveryPlan, DeliveryRow};
use haisou_domain::repository::DeliveryPlanRepository;
use haisou_types::Error;

use crate::delivery_csv::load_delivery_plan;
use crate::delivery_excel::load_delivery_workbook;

/// File-based delivery plan repository (CSV or Excel)
#[derive(Debug)]
pub struct FileDeliveryPlanRepository {
    path: PathBuf,
    plan: DeliveryPlan,
}

impl FileDeliveryPlanRepository {
    /// Create a new repository from a plan file path
    pub fn open(path: PathBuf) -> Result<Self, Error> {
        let plan = load_by_extension(&path)?;
        Ok(Self { path, plan })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reload data from the underlying file
    pub fn reload(&mut self) -> Result<(), Error> {
        self.plan = load_by_extension(&self.path)?;
        Ok(())
    }
}

fn load_by_extension(path: &Path) -> Result<DeliveryPlan, Error> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();
    match ext.as_str() {
        "csv" => load_delivery_plan(path).map_err(Into::into),
        "xlsx" | "xlsm" => load_delivery_workbook(path).map_err(Into::into),
        other => Err(Error::UnsupportedFormat(other.to_string())),
    }
}

impl DeliveryPlanRepository for FileDeliveryPlanRepository {
    fn load_plan(&self) -> Result<DeliveryPlan, Error> {
        Ok(self.plan.clone())
    }

    fn find_by_unit(&self, drive_unit: &str) -> Result<Vec<DeliveryRow>, Error> {
        Ok(self
            .plan
            .rows
            .iter()
            .filter(|r| r.drive_unit.eq_ignore_ascii_case(drive_unit))
            .cloned()
            .collect())
    }
}
