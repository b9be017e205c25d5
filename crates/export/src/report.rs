//! Plain-text reports.

use crate::format_mm;
use panelnest_core::{NestResult, NestedPanel};

use std::fmt;

/// Report text for an empty panel list.
pub const NO_PANELS_MESSAGE: &str = "No panels detected.";

/// Formats one line per panel with a 1-based display index.
///
/// ```text
/// Panel 1: Sheet 1, W: 1500.00 mm, H: 600.00 mm, T: 18.00 mm
/// ```
pub fn format_report(panels: &[NestedPanel]) -> String {
    if panels.is_empty() {
        return NO_PANELS_MESSAGE.to_string();
    }

    panels
        .iter()
        .enumerate()
        .map(|(i, p)| {
            format!(
                "Panel {}: Sheet {}, W: {} mm, H: {} mm, T: {} mm",
                i + 1,
                p.sheet(),
                format_mm(p.width()),
                format_mm(p.height()),
                format_mm(p.thickness())
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Formats a per-sheet usage table.
///
/// Sheets whose panels overrun the nominal width are marked with `*`.
pub fn format_summary(result: &NestResult) -> String {
    if result.is_empty() {
        return NO_PANELS_MESSAGE.to_string();
    }
    SummaryTable(result).to_string()
}

struct SummaryTable<'a>(&'a NestResult);

impl fmt::Display for SummaryTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = self.0;
        writeln!(
            f,
            "{:<6} {:>7} {:>14} {:>8}",
            "Sheet", "Panels", "Remaining W", "Util%"
        )?;
        writeln!(f, "{:-<38}", "")?;

        let mut overfilled = 0;
        for sheet in &result.sheets {
            write!(
                f,
                "{:<6} {:>7} {:>14} {:>8.1}",
                sheet.index,
                sheet.panel_count,
                format_mm(sheet.remaining_width),
                sheet.utilization() * 100.0
            )?;
            if sheet.is_overfilled() {
                overfilled += 1;
                write!(f, " *")?;
            }
            writeln!(f)?;
        }

        if overfilled > 0 {
            writeln!(f, "* {} sheet(s) hold a panel wider than the sheet", overfilled)?;
        }
        write!(
            f,
            "{} panels on {} sheets, {} utilization",
            result.panel_count(),
            result.sheets_used(),
            result.utilization_percent()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use panelnest_core::{nest, Panel, SheetNester};

    #[test]
    fn test_empty_report() {
        assert_eq!(format_report(&[]), "No panels detected.");
        assert_eq!(format_summary(&NestResult::new()), "No panels detected.");
    }

    #[test]
    fn test_report_lines() {
        let panels = vec![
            Panel::new(1000.0, 500.0, 18.0),
            Panel::new(1500.0, 600.0, 18.0),
            Panel::new(800.0, 400.0, 18.0),
        ];
        let report = format_report(&nest(&panels, 2440.0, 1220.0));
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "Panel 1: Sheet 1, W: 1500.00 mm, H: 600.00 mm, T: 18.00 mm"
        );
        assert_eq!(
            lines[1],
            "Panel 2: Sheet 2, W: 1000.00 mm, H: 500.00 mm, T: 18.00 mm"
        );
        assert_eq!(
            lines[2],
            "Panel 3: Sheet 1, W: 800.00 mm, H: 400.00 mm, T: 18.00 mm"
        );
    }

    #[test]
    fn test_summary_table() {
        let panels = vec![Panel::new(1220.0, 1220.0, 18.0), Panel::new(1220.0, 1220.0, 18.0)];
        let result = SheetNester::default_config().solve(&panels).unwrap();
        let summary = format_summary(&result);

        assert!(summary.starts_with("Sheet"));
        assert!(summary.contains("0.00"));
        assert!(summary.contains("100.0"));
        assert!(summary.ends_with("2 panels on 1 sheets, 100.0% utilization"));
        assert!(!summary.contains('*'));
    }

    #[test]
    fn test_summary_marks_overfilled_sheets() {
        let panels = vec![Panel::new(3000.0, 500.0, 18.0), Panel::new(600.0, 500.0, 18.0)];
        let result = SheetNester::default_config().solve(&panels).unwrap();
        let summary = format_summary(&result);
        let lines: Vec<&str> = summary.lines().collect();

        // 3000 opens sheet 1 at -560; 600 opens sheet 2.
        assert_eq!(lines.len(), 6);
        assert!(lines[2].starts_with("1 "));
        assert!(lines[2].contains("-560.00"));
        assert!(lines[2].ends_with(" *"));
        assert!(!lines[3].ends_with('*'));
        assert_eq!(lines[4], "* 1 sheet(s) hold a panel wider than the sheet");
        assert_eq!(lines[5], "2 panels on 2 sheets, 30.2% utilization");
    }
}
