//! Loader error definitions shared by the CSV and Excel readers

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlanLoaderError {
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse CSV: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Failed to parse workbook: {0}")]
    ExcelError(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error("No delivery slot columns found (headers containing \"Delivery\")")]
    NoSlotColumns,

    #[error("No delivery sheets found (sheet names ending in \"-Delivery\")")]
    NoDeliverySheets,

    #[error("Sheet {sheet}: slot grid {found:?} does not match {expected:?}")]
    SlotGridMismatch {
        sheet: String,
        expected: Vec<String>,
        found: Vec<String>,
    },

    #[error("Invalid number in row {row}, column {column}: {value:?}")]
    InvalidNumber {
        row: usize,
        column: String,
        value: String,
    },
}

impl From<PlanLoaderError> for haisou_types::Error {
    fn from(err: PlanLoaderError) -> Self {
        match err {
            PlanLoaderError::IoError(e) => haisou_types::Error::Io(e),
            PlanLoaderError::FileNotFound(path) => haisou_types::Error::FileNotFound(path),
            PlanLoaderError::UnsupportedFormat(ext) => {
                haisou_types::Error::UnsupportedFormat(ext)
            }
            other => haisou_types::Error::PlanLoader(other.to_string()),
        }
    }
}
