//! Command-line front end for panelnest.
//!
//! Reads host objects (id + three bounding-box extents) from JSON, runs the
//! classify → nest pipeline and persists the requested artifacts.

pub mod input;
pub mod pipeline;
pub mod settings;

pub use input::{load_scene, parse_scene, SceneObject};
pub use pipeline::{run, Outputs, RunReport};
pub use settings::{config_to_toml, load_config, Overrides};
