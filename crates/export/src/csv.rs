//! Cut list export as comma-separated rows.
//!
//! [`parse_csv`] also accepts the spaced header form
//! `Sheet, Width (mm), Height (mm), Thickness (mm)`.

use crate::error::{ExportError, Result};
use crate::format_mm;
use panelnest_core::NestedPanel;

use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Header row of the cut list.
pub const CSV_HEADER: [&str; 4] = ["Sheet", "Width (mm)", "Height (mm)", "Thickness (mm)"];

/// Cut list rows ready to be written out.
#[derive(Debug, Clone, PartialEq)]
pub struct CsvTable {
    /// Column names.
    pub header: Vec<String>,
    /// One row per panel, same order as the nested panel list.
    pub rows: Vec<Vec<String>>,
}

/// Builds the cut list, or `None` for an empty panel list.
pub fn to_csv(panels: &[NestedPanel]) -> Option<CsvTable> {
    if panels.is_empty() {
        return None;
    }

    let rows = panels
        .iter()
        .map(|p| {
            vec![
                p.sheet().to_string(),
                format_mm(p.width()),
                format_mm(p.height()),
                format_mm(p.thickness()),
            ]
        })
        .collect();

    Some(CsvTable {
        header: CSV_HEADER.iter().map(|s| s.to_string()).collect(),
        rows,
    })
}

impl fmt::Display for CsvTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.header.join(","))?;
        for row in &self.rows {
            writeln!(f, "{}", row.join(","))?;
        }
        Ok(())
    }
}

impl CsvTable {
    /// Writes header and rows, one line each.
    pub fn write_to(&self, writer: &mut impl Write) -> std::io::Result<()> {
        write!(writer, "{}", self)
    }

    /// Renders the table as a string.
    pub fn to_csv_string(&self) -> String {
        self.to_string()
    }

    /// Saves the table to a file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let mut writer = BufWriter::new(File::create(path)?);
        self.write_to(&mut writer)?;
        writer.flush()?;
        log::debug!("Wrote {} CSV rows to {}", self.rows.len(), path.display());
        Ok(())
    }
}

/// One parsed cut list row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CsvRecord {
    /// 1-based sheet index.
    pub sheet: usize,
    /// Panel width in mm, as rounded on export.
    pub width: f64,
    /// Panel height in mm, as rounded on export.
    pub height: f64,
    /// Panel thickness in mm, as rounded on export.
    pub thickness: f64,
}

/// Parses cut list text written by [`CsvTable::write_to`].
///
/// The header line is required; blank lines are skipped.
pub fn parse_csv(text: &str) -> Result<Vec<CsvRecord>> {
    let mut lines = text.lines().enumerate().filter(|(_, l)| !l.trim().is_empty());

    match lines.next() {
        Some((_, header)) => {
            let columns: Vec<&str> = header.split(',').map(str::trim).collect();
            if columns != CSV_HEADER {
                return Err(ExportError::Parse {
                    line: 1,
                    message: format!("unexpected header '{}'", header),
                });
            }
        }
        None => {
            return Err(ExportError::Parse {
                line: 1,
                message: "missing header".to_string(),
            })
        }
    }

    lines
        .map(|(i, line)| parse_record(i + 1, line))
        .collect()
}

fn parse_record(line: usize, text: &str) -> Result<CsvRecord> {
    let fields: Vec<&str> = text.split(',').map(str::trim).collect();
    if fields.len() != CSV_HEADER.len() {
        return Err(ExportError::Parse {
            line,
            message: format!("expected {} fields, found {}", CSV_HEADER.len(), fields.len()),
        });
    }

    let sheet = fields[0].parse::<usize>().map_err(|e| ExportError::Parse {
        line,
        message: format!("sheet '{}': {}", fields[0], e),
    })?;
    let length = |idx: usize| -> Result<f64> {
        fields[idx].parse::<f64>().map_err(|e| ExportError::Parse {
            line,
            message: format!("{} '{}': {}", CSV_HEADER[idx], fields[idx], e),
        })
    };

    Ok(CsvRecord {
        sheet,
        width: length(1)?,
        height: length(2)?,
        thickness: length(3)?,
    })
}
