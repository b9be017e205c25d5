//! Stock sheet accounting used during nesting.

use crate::panel::Panel;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A stock sheet opened by the nesting engine.
///
/// Only `remaining_width` is consumed by placements. `remaining_height`
/// starts at the full sheet height and stays there, so every height check
/// compares against the whole sheet rather than the space left above
/// earlier panels.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Sheet {
    /// 1-based creation index.
    pub index: usize,

    /// Nominal sheet width.
    pub width: f64,

    /// Nominal sheet height.
    pub height: f64,

    /// Width still available. Goes negative when an oversized panel opens
    /// the sheet.
    pub remaining_width: f64,

    /// Height checked against on placement. Never decremented.
    pub remaining_height: f64,
}

impl Sheet {
    /// Opens an empty sheet.
    pub fn open(index: usize, width: f64, height: f64) -> Self {
        Self {
            index,
            width,
            height,
            remaining_width: width,
            remaining_height: height,
        }
    }

    /// Returns true if `panel` fits into the remaining space.
    pub fn accepts(&self, panel: &Panel) -> bool {
        panel.width <= self.remaining_width && panel.height <= self.remaining_height
    }

    /// Consumes `panel.width` of remaining width without any fit check.
    pub fn place(&mut self, panel: &Panel) {
        self.remaining_width -= panel.width;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_sheet() {
        let sheet = Sheet::open(1, 2440.0, 1220.0);
        assert_eq!(sheet.index, 1);
        assert_eq!(sheet.remaining_width, 2440.0);
        assert_eq!(sheet.remaining_height, 1220.0);
    }

    #[test]
    fn test_place_consumes_width_only() {
        let mut sheet = Sheet::open(1, 2440.0, 1220.0);
        let panel = Panel::new(1000.0, 1200.0, 18.0);

        assert!(sheet.accepts(&panel));
        sheet.place(&panel);
        assert_eq!(sheet.remaining_width, 1440.0);
        assert_eq!(sheet.remaining_height, 1220.0);

        // Height is still checked against the full sheet.
        assert!(sheet.accepts(&panel));
    }

    #[test]
    fn test_accepts_boundaries() {
        let sheet = Sheet::open(1, 100.0, 50.0);
        assert!(sheet.accepts(&Panel::new(100.0, 50.0, 1.0)));
        assert!(!sheet.accepts(&Panel::new(100.1, 50.0, 1.0)));
        assert!(!sheet.accepts(&Panel::new(100.0, 50.1, 1.0)));
        assert!(sheet.accepts(&Panel::new(0.0, 0.0, 0.0)));
    }

    #[test]
    fn test_place_oversized_goes_negative() {
        let mut sheet = Sheet::open(1, 100.0, 50.0);
        sheet.place(&Panel::new(150.0, 10.0, 1.0));
        assert_eq!(sheet.remaining_width, -50.0);
        assert!(!sheet.accepts(&Panel::new(0.0, 0.0, 0.0)));
    }
}
