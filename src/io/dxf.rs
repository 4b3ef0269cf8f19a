use crate::float_types::Real;
use crate::io::IoError;
use crate::sketch::{Layer, Sketch};
use crate::traits::DrawingSink;
use geo::{Coord, LineString, coord};
use std::io::Cursor;
use std::path::Path;

use dxf::{Drawing, LwPolylineVertex};
use dxf::entities::*;
use dxf::enums::AcadVersion;
use dxf::tables::Layer as DxfLayer;

/// Export sink writing straight into a `dxf::Drawing`.
///
/// The drawing targets AutoCAD R2000, the oldest version with lightweight polylines,
/// and every [`Layer`] gets a matching layer table entry.
pub struct DxfSink {
    drawing: Drawing,
}

impl Default for DxfSink {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(clippy::unnecessary_cast)]
#[inline]
fn dxf_point(c: Coord<Real>) -> dxf::Point {
    dxf::Point::new(c.x as f64, c.y as f64, 0.0)
}

impl DxfSink {
    pub fn new() -> Self {
        let mut drawing = Drawing::new();
        drawing.header.version = AcadVersion::R2000;
        for layer in Layer::ALL {
            drawing.add_layer(DxfLayer {
                name: layer.name().to_string(),
                ..Default::default()
            });
        }
        Self { drawing }
    }

    fn push(&mut self, layer: Layer, specific: EntityType) {
        let mut entity = Entity::new(specific);
        entity.common.layer = layer.name().to_string();
        self.drawing.add_entity(entity);
    }

    /// Serialize the drawing to DXF text.
    pub fn to_bytes(&self) -> Result<Vec<u8>, IoError> {
        let mut buffer = Vec::new();
        self.drawing.save(&mut buffer)?;
        Ok(buffer)
    }

    /// Write the drawing to `path`, replacing any existing file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), IoError> {
        std::fs::write(path, self.to_bytes()?)?;
        Ok(())
    }
}

impl DrawingSink for DxfSink {
    fn add_point(&mut self, layer: Layer, at: Coord<Real>) {
        self.push(layer, EntityType::ModelPoint(ModelPoint::new(dxf_point(at))));
    }

    #[allow(clippy::unnecessary_cast)]
    fn add_polyline(&mut self, layer: Layer, points: &LineString<Real>) {
        let polyline = LwPolyline {
            vertices: points
                .coords()
                .map(|c| LwPolylineVertex {
                    x: c.x as f64,
                    y: c.y as f64,
                    ..Default::default()
                })
                .collect(),
            ..Default::default()
        };
        self.push(layer, EntityType::LwPolyline(polyline));
    }

    #[allow(clippy::unnecessary_cast)]
    fn add_circle(&mut self, layer: Layer, center: Coord<Real>, radius: Real) {
        self.push(
            layer,
            EntityType::Circle(Circle::new(dxf_point(center), radius as f64)),
        );
    }
}

impl Sketch {
    /// Export the sketch to DXF, one entity per sketch entity, in the same order.
    ///
    /// # Returns
    /// A `Result` containing the DXF file as a byte vector or an error if exporting fails.
    pub fn to_dxf(&self) -> Result<Vec<u8>, IoError> {
        let mut sink = DxfSink::new();
        self.replay(&mut sink);
        sink.to_bytes()
    }

    /// Import a Sketch from DXF data.
    ///
    /// Points, lightweight polylines and circles are read back in file order.
    /// Entities on layers this crate does not write are rejected, other entity types are skipped.
    ///
    /// ## Parameters
    /// - `dxf_data`: A byte slice containing the DXF file data.
    pub fn from_dxf(dxf_data: &[u8]) -> Result<Sketch, IoError> {
        let drawing = Drawing::load(&mut Cursor::new(dxf_data))?;
        let mut sketch = Sketch::new();

        for entity in drawing.entities() {
            let layer = || {
                Layer::from_name(&entity.common.layer).ok_or_else(|| {
                    IoError::MalformedInput(format!(
                        "unknown layer '{}'",
                        entity.common.layer
                    ))
                })
            };
            match &entity.specific {
                EntityType::ModelPoint(point) => sketch.add_point(
                    layer()?,
                    coord! { x: point.location.x as Real, y: point.location.y as Real },
                ),
                EntityType::LwPolyline(polyline) => {
                    let points = polyline
                        .vertices
                        .iter()
                        .map(|v| coord! { x: v.x as Real, y: v.y as Real })
                        .collect::<Vec<_>>();
                    sketch.add_polyline(layer()?, &LineString::new(points));
                },
                EntityType::Circle(circle) => sketch.add_circle(
                    layer()?,
                    coord! { x: circle.center.x as Real, y: circle.center.y as Real },
                    circle.radius as Real,
                ),
                _ => {},
            }
        }

        Ok(sketch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sketch_survives_dxf() {
        let mut sketch = Sketch::new();
        sketch.add_point(Layer::Wheel, coord! { x: 0.0, y: 0.0 });
        sketch.add_polyline(
            Layer::Wheel,
            &LineString::new(vec![
                coord! { x: 0.0, y: 38.0 },
                coord! { x: 1.5, y: 37.25 },
                coord! { x: 0.0, y: 38.0 },
            ]),
        );
        sketch.add_circle(Layer::Balls, coord! { x: 0.5, y: 33.8 }, 3.0);

        let bytes = sketch.to_dxf().unwrap();
        let back = Sketch::from_dxf(&bytes).unwrap();
        assert_eq!(back, sketch);
    }

    #[test]
    fn unknown_layer_is_rejected() {
        let mut drawing = Drawing::new();
        drawing.header.version = AcadVersion::R2000;
        drawing.add_entity(Entity::new(EntityType::Circle(Circle::new(
            dxf::Point::new(0.0, 0.0, 0.0),
            1.0,
        ))));
        let mut bytes = Vec::new();
        drawing.save(&mut bytes).unwrap();
        assert!(matches!(
            Sketch::from_dxf(&bytes),
            Err(IoError::MalformedInput(_))
        ));
    }
}
