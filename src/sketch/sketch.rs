use crate::float_types::Real;
use crate::traits::DrawingSink;
use geo::{BoundingRect, Coord, LineString, Rect, coord};

/// Category of a drawing entity. Each one is switched by a [`DrawingSpec`](super::DrawingSpec)
/// flag and ends up on its own DXF layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Layer {
    Wheel,
    Separator,
    Eccentric,
    Balls,
    OuterDiameter,
}

impl Layer {
    pub const ALL: [Layer; 5] = [
        Layer::Wheel,
        Layer::Separator,
        Layer::Eccentric,
        Layer::Balls,
        Layer::OuterDiameter,
    ];

    /// Layer name used in exported drawings.
    pub const fn name(self) -> &'static str {
        match self {
            Layer::Wheel => "WHEEL",
            Layer::Separator => "SEPARATOR",
            Layer::Eccentric => "ECCENTRIC",
            Layer::Balls => "BALLS",
            Layer::OuterDiameter => "OUTER",
        }
    }

    pub fn from_name(name: &str) -> Option<Layer> {
        Layer::ALL.into_iter().find(|layer| layer.name() == name)
    }
}

/// One drawing primitive.
#[derive(Clone, Debug, PartialEq)]
pub enum Entity {
    Point {
        layer: Layer,
        at: Coord<Real>,
    },
    Polyline {
        layer: Layer,
        points: LineString<Real>,
    },
    Circle {
        layer: Layer,
        center: Coord<Real>,
        radius: Real,
    },
}

impl Entity {
    pub const fn layer(&self) -> Layer {
        match self {
            Entity::Point { layer, .. }
            | Entity::Polyline { layer, .. }
            | Entity::Circle { layer, .. } => *layer,
        }
    }

    /// Axis-aligned extent of the entity; `None` for an empty polyline.
    pub fn bounding_rect(&self) -> Option<Rect<Real>> {
        match self {
            Entity::Point { at, .. } => Some(Rect::new(*at, *at)),
            Entity::Polyline { points, .. } => points.bounding_rect(),
            Entity::Circle { center, radius, .. } => Some(Rect::new(
                coord! { x: center.x - radius, y: center.y - radius },
                coord! { x: center.x + radius, y: center.y + radius },
            )),
        }
    }
}

/// Ordered list of entities. Records whatever is sent to it and can replay it into another sink.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Sketch {
    pub entities: Vec<Entity>,
}

impl Sketch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Entities on `layer`, in insertion order.
    pub fn on_layer(&self, layer: Layer) -> impl Iterator<Item = &Entity> + '_ {
        self.entities.iter().filter(move |e| e.layer() == layer)
    }

    pub fn count_on_layer(&self, layer: Layer) -> usize {
        self.on_layer(layer).count()
    }

    /// Sends every entity, in order, to `sink`.
    pub fn replay<K: DrawingSink + ?Sized>(&self, sink: &mut K) {
        for entity in &self.entities {
            match entity {
                Entity::Point { layer, at } => sink.add_point(*layer, *at),
                Entity::Polyline { layer, points } => sink.add_polyline(*layer, points),
                Entity::Circle { layer, center, radius } => {
                    sink.add_circle(*layer, *center, *radius)
                },
            }
        }
    }

    /// Union of all entity extents.
    pub fn bounding_rect(&self) -> Option<Rect<Real>> {
        self.entities
            .iter()
            .filter_map(Entity::bounding_rect)
            .reduce(|a, b| {
                Rect::new(
                    coord! { x: a.min().x.min(b.min().x), y: a.min().y.min(b.min().y) },
                    coord! { x: a.max().x.max(b.max().x), y: a.max().y.max(b.max().y) },
                )
            })
    }
}

impl DrawingSink for Sketch {
    fn add_point(&mut self, layer: Layer, at: Coord<Real>) {
        self.entities.push(Entity::Point { layer, at });
    }

    fn add_polyline(&mut self, layer: Layer, points: &LineString<Real>) {
        self.entities.push(Entity::Polyline {
            layer,
            points: points.clone(),
        });
    }

    fn add_circle(&mut self, layer: Layer, center: Coord<Real>, radius: Real) {
        self.entities.push(Entity::Circle { layer, center, radius });
    }
}
