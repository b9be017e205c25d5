//! # Panelnest Export
//!
//! Manufacturing output for nested panels:
//!
//! - [`format_report`]: plain-text panel list
//! - [`to_csv`]: cut list rows with header `Sheet,Width (mm),Height (mm),Thickness (mm)`
//! - [`to_drawing`]: DXF document with one closed rectangle per panel
//!
//! Builders return `None` for empty input so callers write no artifact.
//! All lengths are printed in millimeters with two decimals.

pub mod csv;
pub mod dxf;
pub mod error;
pub mod report;

pub use csv::{parse_csv, to_csv, CsvRecord, CsvTable, CSV_HEADER};
pub use dxf::{to_drawing, DxfDocument, Polyline};
pub use error::{ExportError, Result};
pub use report::{format_report, format_summary, NO_PANELS_MESSAGE};

/// Formats a length for display: millimeters, fixed two decimals.
pub fn format_mm(value: f64) -> String {
    format!("{:.2}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_mm() {
        assert_eq!(format_mm(1500.0), "1500.00");
        assert_eq!(format_mm(18.456), "18.46");
        assert_eq!(format_mm(0.0), "0.00");
        assert_eq!(format_mm(-60.0), "-60.00");
    }
}
