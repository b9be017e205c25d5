//! Nesting result representation.

use crate::panel::{ObjectRef, Panel};
use crate::sheet::Sheet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A panel tagged with the sheet it was assigned to.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NestedPanel {
    panel: Panel,
    sheet: usize,
}

impl NestedPanel {
    pub(crate) fn new(panel: Panel, sheet: usize) -> Self {
        Self { panel, sheet }
    }

    /// Returns the 1-based sheet index.
    pub fn sheet(&self) -> usize {
        self.sheet
    }

    /// Returns the underlying panel.
    pub fn panel(&self) -> &Panel {
        &self.panel
    }

    /// Returns the panel width (middle extent).
    pub fn width(&self) -> f64 {
        self.panel.width
    }

    /// Returns the panel height (largest extent).
    pub fn height(&self) -> f64 {
        self.panel.height
    }

    /// Returns the panel thickness (smallest extent).
    pub fn thickness(&self) -> f64 {
        self.panel.thickness
    }

    /// Returns the host object handle, if any.
    pub fn source(&self) -> Option<&ObjectRef> {
        self.panel.source.as_ref()
    }
}

/// Final accounting for one sheet.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SheetUsage {
    /// 1-based sheet index.
    pub index: usize,
    /// Nominal sheet width.
    pub width: f64,
    /// Nominal sheet height.
    pub height: f64,
    /// Width left after all placements (may be negative).
    pub remaining_width: f64,
    /// Number of panels assigned to this sheet.
    pub panel_count: usize,
    /// Sum of `width * height` over assigned panels.
    pub used_area: f64,
}

impl SheetUsage {
    pub(crate) fn from_sheet(sheet: &Sheet, placements: &[NestedPanel]) -> Self {
        let assigned = placements.iter().filter(|p| p.sheet == sheet.index);
        let (panel_count, used_area) =
            assigned.fold((0, 0.0), |(n, area), p| (n + 1, area + p.panel.area()));
        Self {
            index: sheet.index,
            width: sheet.width,
            height: sheet.height,
            remaining_width: sheet.remaining_width,
            panel_count,
            used_area,
        }
    }

    /// Returns the sheet area.
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Returns true if placements exceeded the nominal width.
    pub fn is_overfilled(&self) -> bool {
        self.remaining_width < 0.0
    }

    /// Returns used area / sheet area (0.0 for a degenerate sheet).
    ///
    /// Can exceed 1.0 since placements are only accounted along the width.
    pub fn utilization(&self) -> f64 {
        let area = self.area();
        if area > 0.0 {
            self.used_area / area
        } else {
            0.0
        }
    }
}

/// Result of a nesting run.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NestResult {
    /// Nested panels in processing (sorted) order.
    pub placements: Vec<NestedPanel>,

    /// Sheets in creation order.
    pub sheets: Vec<SheetUsage>,

    /// Computation time in milliseconds.
    pub computation_time_ms: u64,
}

impl NestResult {
    /// Creates a new empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if nothing was nested.
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Returns the number of nested panels.
    pub fn panel_count(&self) -> usize {
        self.placements.len()
    }

    /// Returns the number of sheets opened.
    pub fn sheets_used(&self) -> usize {
        self.sheets.len()
    }

    /// Returns the panels assigned to `sheet` in processing order.
    pub fn panels_on_sheet(&self, sheet: usize) -> impl Iterator<Item = &NestedPanel> {
        self.placements.iter().filter(move |p| p.sheet == sheet)
    }

    /// Returns total panel area / total sheet area.
    pub fn utilization(&self) -> f64 {
        let sheet_area: f64 = self.sheets.iter().map(SheetUsage::area).sum();
        if sheet_area > 0.0 {
            let used: f64 = self.sheets.iter().map(|s| s.used_area).sum();
            used / sheet_area
        } else {
            0.0
        }
    }

    /// Returns utilization as a percentage string.
    pub fn utilization_percent(&self) -> String {
        format!("{:.1}%", self.utilization() * 100.0)
    }
}

/// Summary statistics for a nesting result.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NestSummary {
    /// Panels nested.
    pub panels: usize,
    /// Sheets opened.
    pub sheets: usize,
    /// Sheets whose placements exceed the nominal width.
    pub overfilled_sheets: usize,
    /// Utilization percentage.
    pub utilization_percent: f64,
    /// Computation time in milliseconds.
    pub time_ms: u64,
}

impl From<&NestResult> for NestSummary {
    fn from(result: &NestResult) -> Self {
        Self {
            panels: result.panel_count(),
            sheets: result.sheets_used(),
            overfilled_sheets: result
                .sheets
                .iter()
                .filter(|s| s.is_overfilled())
                .count(),
            utilization_percent: result.utilization() * 100.0,
            time_ms: result.computation_time_ms,
        }
    }
}
