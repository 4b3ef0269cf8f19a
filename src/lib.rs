//! Profile generator for **wave reducers with intermediate rolling balls**.
//!
//! A wave generator (an eccentric disc) pushes a ring of balls, held by a separator,
//! into the scalloped inner profile of a fixed rigid wheel. From four numbers (gear
//! ratio, ball diameter, trough outer radius, housing diameter) this crate derives
//! every other dimension, checks that neighbouring balls clear each other, samples
//! the rigid wheel profile and places the balls, then sends the result to drawing
//! sinks as points, polylines and circles.
//!
//! ```
//! use ballwave::{DesignInputs, Gearbox};
//! use ballwave::sketch::{DrawingSpec, Sketch, emit};
//!
//! let gearbox = Gearbox::build(&DesignInputs::default()).unwrap();
//! let mut sketch = Sketch::new();
//! emit(&gearbox, &DrawingSpec::all(), &mut sketch);
//! assert_eq!(sketch.len(), 2 + 2 + 5 + 17 + 1);
//! ```
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//! - [**dxf-io**](https://en.wikipedia.org/wiki/AutoCAD_DXF): `.dxf` export (and import, for checking exports)
//! - **svg-io**: `.svg` plot of a sketch
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod config;
pub mod design;
pub mod errors;
pub mod float_types;
pub mod gearbox;
pub mod io;
pub mod profile;
pub mod sketch;
pub mod traits;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use design::{DerivedParameters, DesignInputs};
pub use errors::GeometryError;
pub use gearbox::Gearbox;
