use crate::float_types::Real;
use crate::sketch::Layer;
use geo::{Coord, LineString, coord};

/// Anything drawing entities can be sent to: an in-memory [`Sketch`](crate::sketch::Sketch),
/// a DXF drawing, ...
///
/// Entities arrive in emission order and sinks must keep that order.
pub trait DrawingSink {
    fn add_point(&mut self, layer: Layer, at: Coord<Real>);
    fn add_polyline(&mut self, layer: Layer, points: &LineString<Real>);
    fn add_circle(&mut self, layer: Layer, center: Coord<Real>, radius: Real);

    /// Adds a two-point polyline from `start` to `end`.
    fn add_segment(&mut self, layer: Layer, start: Coord<Real>, end: Coord<Real>) {
        self.add_polyline(layer, &LineString::new(vec![start, end]));
    }

    /// Adds a circle centred on the wheel axis.
    fn add_centered_circle(&mut self, layer: Layer, radius: Real) {
        self.add_circle(layer, coord! { x: 0.0, y: 0.0 }, radius);
    }
}
