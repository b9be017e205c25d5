//! # Panelnest Core
//!
//! Panel classification and sheet nesting for flat-pack manufacturing.
//!
//! Objects are described by three bounding-box extents. Those thinner than a
//! threshold become [`Panel`]s, which the nesting engine assigns to standard
//! stock sheets using a first-fit decreasing heuristic.
//!
//! ## Core Components
//!
//! - **Classifier**: [`classify()`], [`Classifier`] - extents to panels
//! - **Nesting engine**: [`nest()`], [`SheetNester`] - panels to sheets
//! - **Results**: [`NestedPanel`], [`NestResult`], [`SheetUsage`], [`NestSummary`]
//! - **Configuration**: [`NestConfig`]
//!
//! ## Quick Start
//!
//! ```rust
//! use panelnest_core::{classify, nest};
//!
//! let panels: Vec<_> = [
//!     [1000.0, 500.0, 18.0],
//!     [1500.0, 600.0, 18.0],
//!     [300.0, 300.0, 300.0],
//! ]
//! .iter()
//! .filter_map(|&[a, b, c]| classify(a, b, c, 50.0))
//! .collect();
//!
//! let nested = nest(&panels, 2440.0, 1220.0);
//! assert_eq!(nested.len(), 2);
//! assert_eq!(nested[0].sheet(), 1);
//! ```
//!
//! ## Accounting
//!
//! Sheets only track consumed width. Each height check compares against the
//! full sheet height, and a panel that fits no sheet opens a new one even if
//! it is larger than the sheet.
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod classify;
pub mod config;
pub mod error;
pub mod nester;
pub mod panel;
pub mod result;
pub mod sheet;

// Re-exports
pub use classify::{classify, Classifier};
pub use config::{
    NestConfig, DEFAULT_SHEET_HEIGHT, DEFAULT_SHEET_WIDTH, DEFAULT_THICKNESS_THRESHOLD,
};
pub use error::{Error, Result};
pub use nester::{nest, SheetNester};
pub use panel::{Extents, ObjectRef, Panel};
pub use result::{NestResult, NestSummary, NestedPanel, SheetUsage};
pub use sheet::Sheet;
