//! 2D drawing entities and the mapping from a [`Gearbox`](crate::Gearbox) onto them.

#[allow(clippy::module_inception)]
mod sketch;
mod emit;

pub use emit::{DrawingSpec, ECCENTRIC_AXIS_HALF_LENGTH, ORIGIN_AXIS_HALF_LENGTH, emit};
pub use sketch::{Entity, Layer, Sketch};
