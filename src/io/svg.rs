use crate::float_types::Real;
use crate::io::IoError;
use crate::sketch::{Entity, Layer, Sketch};
use std::path::Path;

use svg::Document;
use svg::node::element::{Circle, Group, Polyline};

/// Space left around the drawing, as a fraction of its larger side.
const MARGIN: Real = 0.05;
/// Stroke width, as a fraction of the drawing's larger side.
const STROKE: Real = 0.002;

const fn colour(layer: Layer) -> &'static str {
    match layer {
        Layer::Wheel => "#1f77b4",
        Layer::Separator => "black",
        Layer::Eccentric => "blue",
        Layer::Balls => "red",
        Layer::OuterDiameter => "blue",
    }
}

impl Sketch {
    /// Render the sketch as an SVG plot for quick visual inspection.
    ///
    /// Drawing coordinates are y-up, so everything sits in a group flipped about the
    /// x axis. Reference segments on the eccentric layer are dashed, points are dots.
    pub fn to_svg(&self) -> Document {
        let Some(rect) = self.bounding_rect() else {
            return Document::new().set("viewBox", "0 0 1 1");
        };
        let size = rect.width().max(rect.height()).max(Real::EPSILON);
        let margin = size * MARGIN;
        let stroke = size * STROKE;

        let mut group = Group::new().set("transform", "scale(1,-1)");
        for entity in &self.entities {
            let layer = entity.layer();
            group = match entity {
                Entity::Point { at, .. } => group.add(
                    Circle::new()
                        .set("cx", at.x)
                        .set("cy", at.y)
                        .set("r", stroke * 2.0)
                        .set("fill", colour(layer)),
                ),
                Entity::Polyline { points, .. } => {
                    let mut line = Polyline::new()
                        .set("points", polyline_points(points))
                        .set("fill", "none")
                        .set("stroke", colour(layer))
                        .set("stroke-width", stroke);
                    if layer == Layer::Eccentric {
                        line = line
                            .set("stroke", "black")
                            .set("stroke-dasharray", format!("{} {}", stroke * 4.0, stroke * 2.0));
                    }
                    group.add(line)
                },
                Entity::Circle { center, radius, .. } => group.add(
                    Circle::new()
                        .set("cx", center.x)
                        .set("cy", center.y)
                        .set("r", *radius)
                        .set("fill", "none")
                        .set("stroke", colour(layer))
                        .set("stroke-width", stroke),
                ),
            };
        }

        Document::new()
            .set(
                "viewBox",
                format!(
                    "{} {} {} {}",
                    rect.min().x - margin,
                    -rect.max().y - margin,
                    rect.width() + 2.0 * margin,
                    rect.height() + 2.0 * margin
                ),
            )
            .add(group)
    }

    /// Write the SVG plot to `path`.
    pub fn save_svg(&self, path: impl AsRef<Path>) -> Result<(), IoError> {
        svg::save(path, &self.to_svg())?;
        Ok(())
    }
}

fn polyline_points(points: &geo::LineString<Real>) -> String {
    points
        .coords()
        .map(|c| format!("{},{}", c.x, c.y))
        .collect::<Vec<_>>()
        .join(" ")
}
