//! Panel data model.

use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Opaque handle to the host object a panel was extracted from.
///
/// The nesting core stores it and hands it back unchanged; it never
/// interprets the contents.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ObjectRef(String);

impl ObjectRef {
    /// Wraps a host-provided identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the wrapped identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ObjectRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for ObjectRef {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ObjectRef {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Three bounding-box extents of a host object, in no particular order.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Extents(pub [f64; 3]);

impl Extents {
    /// Creates extents from three lengths.
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        Self([a, b, c])
    }

    /// Returns the extents sorted ascending: `[thickness, mid, max]`.
    pub fn sorted(&self) -> [f64; 3] {
        let mut sorted = self.0;
        // `+ 0.0` folds -0.0 into 0.0 so signed zeros tie and keep input order.
        sorted.sort_by(|a, b| (a + 0.0).total_cmp(&(b + 0.0)));
        sorted
    }

    /// Rejects negative or non-finite extents.
    pub fn validate(&self) -> Result<()> {
        for (axis, value) in self.0.iter().enumerate() {
            if !value.is_finite() {
                return Err(Error::InvalidPanel(format!(
                    "extent {} is not finite ({})",
                    axis, value
                )));
            }
            if *value < 0.0 {
                return Err(Error::InvalidPanel(format!(
                    "extent {} is negative ({})",
                    axis, value
                )));
            }
        }
        Ok(())
    }
}

impl From<[f64; 3]> for Extents {
    fn from(values: [f64; 3]) -> Self {
        Self(values)
    }
}

/// A flat rectangular piece to be cut from stock.
///
/// `width` and `height` are the two larger bounding-box extents assigned by
/// sorted position, so `width <= height` for classified panels. Nothing here
/// enforces either ordering.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Panel {
    /// Middle extent.
    pub width: f64,

    /// Largest extent.
    pub height: f64,

    /// Smallest extent.
    pub thickness: f64,

    /// Host object this panel came from.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub source: Option<ObjectRef>,
}

impl Panel {
    /// Creates a panel without a host reference.
    pub fn new(width: f64, height: f64, thickness: f64) -> Self {
        Self {
            width,
            height,
            thickness,
            source: None,
        }
    }

    /// Attaches the originating host object.
    pub fn with_source(mut self, source: impl Into<ObjectRef>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Returns `max(width, height)`, the nesting sort key.
    pub fn max_dimension(&self) -> f64 {
        self.width.max(self.height)
    }

    /// Returns the face area `width * height`.
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Rejects negative or non-finite lengths.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("width", self.width),
            ("height", self.height),
            ("thickness", self.thickness),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidPanel(format!(
                    "{} must be finite and non-negative, got {}{}",
                    name,
                    value,
                    self.source
                        .as_ref()
                        .map(|s| format!(" (object '{}')", s))
                        .unwrap_or_default()
                )));
            }
        }
        Ok(())
    }
}
