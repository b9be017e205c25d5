//! First-fit decreasing sheet nesting.

use crate::classify::Classifier;
use crate::config::NestConfig;
use crate::panel::{Extents, ObjectRef, Panel};
use crate::result::{NestResult, NestedPanel, SheetUsage};
use crate::sheet::Sheet;
use crate::Result;

use std::time::Instant;

/// Nests panels onto fixed-size sheets.
///
/// Panels are sorted descending by `max(width, height)` (stable, so ties
/// keep input order) and each goes onto the first existing sheet that
/// [accepts](Sheet::accepts) it. When none does, a new sheet is opened and
/// the panel is placed there unconditionally, even if it is larger than
/// the sheet.
///
/// Returns the panels in sorted order. Empty input opens no sheets.
pub fn nest(panels: &[Panel], sheet_width: f64, sheet_height: f64) -> Vec<NestedPanel> {
    run_first_fit(panels, sheet_width, sheet_height).0
}

fn run_first_fit(
    panels: &[Panel],
    sheet_width: f64,
    sheet_height: f64,
) -> (Vec<NestedPanel>, Vec<Sheet>) {
    let mut order: Vec<&Panel> = panels.iter().collect();
    // `+ 0.0` folds -0.0 into 0.0 so signed-zero keys tie like any other.
    order.sort_by(|a, b| (b.max_dimension() + 0.0).total_cmp(&(a.max_dimension() + 0.0)));

    let mut sheets: Vec<Sheet> = Vec::new();
    let mut nested = Vec::with_capacity(order.len());

    for panel in order {
        let index = match sheets.iter_mut().find(|sheet| sheet.accepts(panel)) {
            Some(sheet) => {
                sheet.place(panel);
                sheet.index
            }
            None => {
                let mut sheet = Sheet::open(sheets.len() + 1, sheet_width, sheet_height);
                if panel.width > sheet_width || panel.height > sheet_height {
                    log::warn!(
                        "Panel {} x {} exceeds sheet {} x {}; placing it on its own sheet {}",
                        panel.width,
                        panel.height,
                        sheet_width,
                        sheet_height,
                        sheet.index
                    );
                } else {
                    log::debug!("Opened sheet {}", sheet.index);
                }
                sheet.place(panel);
                let index = sheet.index;
                sheets.push(sheet);
                index
            }
        };
        nested.push(NestedPanel::new(panel.clone(), index));
    }

    (nested, sheets)
}

/// Configured nesting engine.
#[derive(Debug, Clone, Default)]
pub struct SheetNester {
    config: NestConfig,
}

impl SheetNester {
    /// Creates a nester with the given configuration.
    pub fn new(config: NestConfig) -> Self {
        Self { config }
    }

    /// Creates a nester with default configuration.
    pub fn default_config() -> Self {
        Self::new(NestConfig::default())
    }

    /// Returns the configuration.
    pub fn config(&self) -> &NestConfig {
        &self.config
    }

    /// Nests panels mechanically without validation.
    pub fn nest(&self, panels: &[Panel]) -> Vec<NestedPanel> {
        nest(panels, self.config.sheet_width, self.config.sheet_height)
    }

    /// Nests panels and reports per-sheet usage.
    ///
    /// Fails if the sheet configuration is unusable, or if input validation
    /// is enabled and a panel has a negative or non-finite length.
    pub fn solve(&self, panels: &[Panel]) -> Result<NestResult> {
        let start = Instant::now();
        self.config.validate()?;

        if self.config.validate_input {
            for panel in panels {
                panel.validate()?;
            }
        }

        let (placements, sheets) =
            run_first_fit(panels, self.config.sheet_width, self.config.sheet_height);
        let sheets = sheets
            .iter()
            .map(|sheet| SheetUsage::from_sheet(sheet, &placements))
            .collect();

        let result = NestResult {
            placements,
            sheets,
            computation_time_ms: start.elapsed().as_millis() as u64,
        };

        log::info!(
            "Nested {} panels onto {} sheets ({} utilization)",
            result.panel_count(),
            result.sheets_used(),
            result.utilization_percent()
        );

        Ok(result)
    }

    /// Classifies host objects and nests the resulting panels.
    pub fn run<I>(&self, objects: I) -> Result<NestResult>
    where
        I: IntoIterator<Item = (ObjectRef, Extents)>,
    {
        let panels = Classifier::from_config(&self.config).classify_all(objects)?;
        self.solve(&panels)
    }
}
