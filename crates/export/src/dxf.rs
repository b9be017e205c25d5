//! DXF drawing export.
//!
//! Every panel becomes a closed 4-vertex `LWPOLYLINE` anchored at the
//! drawing origin. Sheet assignment is not reflected in the layout: all
//! rectangles share the corner `(0, 0)` and overlap.

use crate::error::Result;
use panelnest_core::NestedPanel;

use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Layer used for panel outlines.
pub const DEFAULT_LAYER: &str = "0";

/// A polyline entity.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    /// DXF layer name.
    pub layer: String,
    /// Ordered vertices.
    pub points: Vec<(f64, f64)>,
    /// Whether the last vertex connects back to the first.
    pub closed: bool,
}

impl Polyline {
    /// Closed axis-aligned rectangle, counter-clockwise from the origin:
    /// `(0,0) (w,0) (w,h) (0,h)`.
    pub fn rectangle(width: f64, height: f64) -> Self {
        Self {
            layer: DEFAULT_LAYER.to_string(),
            points: vec![(0.0, 0.0), (width, 0.0), (width, height), (0.0, height)],
            closed: true,
        }
    }
}

/// Builds the drawing, or `None` for an empty panel list.
pub fn to_drawing(panels: &[NestedPanel]) -> Option<DxfDocument> {
    if panels.is_empty() {
        return None;
    }

    let mut doc = DxfDocument::new();
    for panel in panels {
        doc.add_polyline(Polyline::rectangle(panel.width(), panel.height()));
    }
    Some(doc)
}

/// DXF document builder.
#[derive(Debug, Clone, Default)]
pub struct DxfDocument {
    entities: Vec<Polyline>,
}

impl DxfDocument {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a polyline entity.
    pub fn add_polyline(&mut self, polyline: Polyline) {
        self.entities.push(polyline);
    }

    /// Returns the entities in insertion order.
    pub fn entities(&self) -> &[Polyline] {
        &self.entities
    }

    /// Writes the document as DXF group-code/value pairs.
    pub fn write_to(&self, writer: &mut impl Write) -> std::io::Result<()> {
        write!(writer, "{}", self)
    }

    /// Renders the document as a string.
    pub fn to_dxf_string(&self) -> String {
        self.to_string()
    }

    /// Saves the document to a file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let mut writer = BufWriter::new(File::create(path)?);
        self.write_to(&mut writer)?;
        writer.flush()?;
        log::debug!(
            "Wrote {} DXF entities to {}",
            self.entities.len(),
            path.display()
        );
        Ok(())
    }
}

impl fmt::Display for DxfDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Header, tables and blocks are present but empty
        for section in ["HEADER", "TABLES", "BLOCKS"] {
            writeln!(f, "0")?;
            writeln!(f, "SECTION")?;
            writeln!(f, "2")?;
            writeln!(f, "{}", section)?;
            writeln!(f, "0")?;
            writeln!(f, "ENDSEC")?;
        }

        writeln!(f, "0")?;
        writeln!(f, "SECTION")?;
        writeln!(f, "2")?;
        writeln!(f, "ENTITIES")?;

        for polyline in &self.entities {
            write_polyline(f, polyline)?;
        }

        writeln!(f, "0")?;
        writeln!(f, "ENDSEC")?;

        writeln!(f, "0")?;
        writeln!(f, "EOF")
    }
}

fn write_polyline(f: &mut fmt::Formatter<'_>, polyline: &Polyline) -> fmt::Result {
    writeln!(f, "0")?;
    writeln!(f, "LWPOLYLINE")?;
    writeln!(f, "8")?;
    writeln!(f, "{}", polyline.layer)?;
    writeln!(f, "90")?;
    writeln!(f, "{}", polyline.points.len())?;
    writeln!(f, "70")?;
    writeln!(f, "{}", if polyline.closed { 1 } else { 0 })?;

    for (x, y) in &polyline.points {
        writeln!(f, "10")?;
        writeln!(f, "{:.6}", x)?;
        writeln!(f, "20")?;
        writeln!(f, "{:.6}", y)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use panelnest_core::{nest, Panel};

    #[test]
    fn test_empty_is_noop() {
        assert!(to_drawing(&[]).is_none());
    }

    #[test]
    fn test_rectangle_vertices() {
        let rect = Polyline::rectangle(600.0, 1500.0);
        assert_eq!(
            rect.points,
            vec![(0.0, 0.0), (600.0, 0.0), (600.0, 1500.0), (0.0, 1500.0)]
        );
        assert!(rect.closed);
        assert_eq!(rect.layer, DEFAULT_LAYER);
    }

    #[test]
    fn test_all_rectangles_share_origin() {
        let panels = vec![
            Panel::new(3000.0, 500.0, 18.0),
            Panel::new(600.0, 1200.0, 18.0),
        ];
        let doc = to_drawing(&nest(&panels, 2440.0, 1220.0)).unwrap();

        assert_eq!(doc.entities().len(), 2);
        for entity in doc.entities() {
            assert_eq!(entity.points[0], (0.0, 0.0));
        }
    }

    #[test]
    fn test_document_framing() {
        let doc = to_drawing(&nest(&[Panel::new(10.0, 20.0, 1.0)], 2440.0, 1220.0)).unwrap();
        let text = doc.to_dxf_string();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(&lines[..6], ["0", "SECTION", "2", "HEADER", "0", "ENDSEC"]);
        assert_eq!(&lines[lines.len() - 4..], ["0", "ENDSEC", "0", "EOF"]);
        assert!(text.contains("BLOCKS"));
        assert_eq!(text.matches("LWPOLYLINE").count(), 1);

        let entity = lines.iter().position(|l| *l == "LWPOLYLINE").unwrap();
        assert_eq!(
            &lines[entity + 1..entity + 7],
            ["8", "0", "90", "4", "70", "1"]
        );
        assert_eq!(
            &lines[entity + 7..entity + 11],
            ["10", "0.000000", "20", "0.000000"]
        );
        assert_eq!(
            &lines[entity + 11..entity + 15],
            ["10", "10.000000", "20", "0.000000"]
        );

        let mut buf = Vec::new();
        doc.write_to(&mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), text);
    }
}
