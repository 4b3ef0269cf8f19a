use super::Layer;
use crate::float_types::Real;
use crate::gearbox::Gearbox;
use crate::traits::DrawingSink;
use geo::coord;
use serde::{Deserialize, Serialize};

/// Half length of the horizontal reference line through the wheel axis [mm].
pub const ORIGIN_AXIS_HALF_LENGTH: Real = 6.0;
/// Half length of the horizontal reference line through the eccentric centre [mm].
pub const ECCENTRIC_AXIS_HALF_LENGTH: Real = 3.0;

/// Which parts of the reducer are sent to a sink.
///
/// The default is the set meant for a manufacturing drawing: everything except
/// the balls, which are not equally spaced and only clutter a cut file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawingSpec {
    pub wheel: bool,
    pub separator: bool,
    pub eccentric: bool,
    pub balls: bool,
    pub outer_diameter: bool,
}

impl Default for DrawingSpec {
    fn default() -> Self {
        Self {
            balls: false,
            ..Self::all()
        }
    }
}

impl DrawingSpec {
    pub const fn all() -> Self {
        Self {
            wheel: true,
            separator: true,
            eccentric: true,
            balls: true,
            outer_diameter: true,
        }
    }

    pub const fn none() -> Self {
        Self {
            wheel: false,
            separator: false,
            eccentric: false,
            balls: false,
            outer_diameter: false,
        }
    }

    pub const fn enabled(&self, layer: Layer) -> bool {
        match layer {
            Layer::Wheel => self.wheel,
            Layer::Separator => self.separator,
            Layer::Eccentric => self.eccentric,
            Layer::Balls => self.balls,
            Layer::OuterDiameter => self.outer_diameter,
        }
    }
}

/// Sends the enabled parts of `gearbox` to `sink`, in a fixed order:
/// wheel, separator, eccentric, balls, outer diameter.
pub fn emit<K: DrawingSink + ?Sized>(gearbox: &Gearbox, spec: &DrawingSpec, sink: &mut K) {
    let p = &gearbox.params;
    let e = p.eccentricity;
    let origin = coord! { x: 0.0, y: 0.0 };
    let eccentric_centre = coord! { x: 0.0, y: e };

    if spec.wheel {
        sink.add_point(Layer::Wheel, origin);
        sink.add_polyline(Layer::Wheel, gearbox.profile.line_string());
    }

    if spec.separator {
        sink.add_centered_circle(Layer::Separator, p.separator_outer_radius);
        sink.add_centered_circle(Layer::Separator, p.separator_inner_radius);
    }

    if spec.eccentric {
        sink.add_point(Layer::Eccentric, eccentric_centre);
        sink.add_segment(Layer::Eccentric, origin, eccentric_centre);
        sink.add_segment(
            Layer::Eccentric,
            coord! { x: -ORIGIN_AXIS_HALF_LENGTH, y: 0.0 },
            coord! { x: ORIGIN_AXIS_HALF_LENGTH, y: 0.0 },
        );
        sink.add_segment(
            Layer::Eccentric,
            coord! { x: -ECCENTRIC_AXIS_HALF_LENGTH, y: e },
            coord! { x: ECCENTRIC_AXIS_HALF_LENGTH, y: e },
        );
        sink.add_circle(Layer::Eccentric, eccentric_centre, p.eccentric_radius);
    }

    if spec.balls {
        for centre in gearbox.balls.rendered() {
            sink.add_circle(Layer::Balls, centre, p.ball_radius);
        }
    }

    if spec.outer_diameter {
        sink.add_centered_circle(Layer::OuterDiameter, p.outer_diameter / 2.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::design::DesignInputs;
    use crate::sketch::{Entity, Sketch};

    fn sketch_for(spec: DrawingSpec) -> Sketch {
        let gearbox = Gearbox::build(&DesignInputs::default()).unwrap();
        let mut sketch = Sketch::new();
        emit(&gearbox, &spec, &mut sketch);
        sketch
    }

    #[test]
    fn default_spec_leaves_out_balls() {
        let sketch = sketch_for(DrawingSpec::default());
        assert_eq!(sketch.count_on_layer(Layer::Balls), 0);
        assert_eq!(sketch.len(), 2 + 2 + 5 + 1);
    }

    #[test]
    fn empty_spec_emits_nothing() {
        assert!(sketch_for(DrawingSpec::none()).is_empty());
    }

    #[test]
    fn eccentric_marker_layout() {
        let sketch = sketch_for(DrawingSpec {
            eccentric: true,
            ..DrawingSpec::none()
        });
        let entities: Vec<_> = sketch.on_layer(Layer::Eccentric).collect();
        assert_eq!(entities.len(), 5);
        match entities[0] {
            Entity::Point { at, .. } => assert!((at.y - 1.2).abs() < 1e-12),
            other => panic!("expected eccentric centre point, got {other:?}"),
        }
        match entities[4] {
            Entity::Circle { center, radius, .. } => {
                assert!((center.y - 1.2).abs() < 1e-12);
                assert!((radius - 30.8).abs() < 1e-9);
            },
            other => panic!("expected eccentric circle, got {other:?}"),
        }
    }

    #[test]
    fn separator_outer_circle_comes_first() {
        let sketch = sketch_for(DrawingSpec {
            separator: true,
            ..DrawingSpec::none()
        });
        let radii: Vec<Real> = sketch
            .entities
            .iter()
            .filter_map(|e| match e {
                Entity::Circle { radius, .. } => Some(*radius),
                _ => None,
            })
            .collect();
        assert_eq!(radii.len(), 2);
        assert!(radii[0] > radii[1]);
    }
}
