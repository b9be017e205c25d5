//! Panel classification from bounding-box extents.

use crate::config::NestConfig;
use crate::panel::{Extents, ObjectRef, Panel};
use crate::Result;

/// Classifies three extents as a panel or not.
///
/// The extents are sorted ascending; if the smallest is strictly below
/// `threshold` the result is a panel with `thickness = sorted[0]`,
/// `width = sorted[1]` and `height = sorted[2]`. Zero, negative and
/// non-finite input is classified mechanically.
pub fn classify(a: f64, b: f64, c: f64, threshold: f64) -> Option<Panel> {
    let [thickness, width, height] = Extents::new(a, b, c).sorted();
    if thickness < threshold {
        Some(Panel::new(width, height, thickness))
    } else {
        None
    }
}

/// Configured classifier with optional input validation.
#[derive(Debug, Clone)]
pub struct Classifier {
    threshold: f64,
    validate_input: bool,
}

impl Classifier {
    /// Creates a classifier with the given thickness threshold.
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            validate_input: false,
        }
    }

    /// Creates a classifier from a nesting configuration.
    pub fn from_config(config: &NestConfig) -> Self {
        Self {
            threshold: config.thickness_threshold,
            validate_input: config.validate_input,
        }
    }

    /// Enables or disables extent validation.
    pub fn with_validation(mut self, enabled: bool) -> Self {
        self.validate_input = enabled;
        self
    }

    /// Returns the thickness threshold.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Classifies one extent triple.
    pub fn classify(&self, extents: &Extents) -> Result<Option<Panel>> {
        if self.validate_input {
            extents.validate()?;
        }
        let [a, b, c] = extents.0;
        Ok(classify(a, b, c, self.threshold))
    }

    /// Classifies one host object, attaching its handle to the panel.
    pub fn classify_object(&self, source: ObjectRef, extents: &Extents) -> Result<Option<Panel>> {
        Ok(self
            .classify(extents)?
            .map(|panel| panel.with_source(source)))
    }

    /// Classifies a batch of host objects, keeping panels in input order.
    pub fn classify_all<I>(&self, objects: I) -> Result<Vec<Panel>>
    where
        I: IntoIterator<Item = (ObjectRef, Extents)>,
    {
        let mut panels = Vec::new();
        let mut skipped = 0usize;

        for (source, extents) in objects {
            match self.classify_object(source, &extents)? {
                Some(panel) => panels.push(panel),
                None => skipped += 1,
            }
        }

        log::debug!(
            "Classified {} panels, skipped {} objects at threshold {}",
            panels.len(),
            skipped,
            self.threshold
        );

        Ok(panels)
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::from_config(&NestConfig::default())
    }
}
