// Our Real scalar type:
#[cfg(feature = "f32")]
pub type Real = f32;
#[cfg(feature = "f64")]
pub type Real = f64;

/// Distance under which two samples count as the same point,
/// e.g. the two ends of a closed profile sweep.
#[cfg(feature = "f32")]
pub const TOLERANCE: Real = 1e-4;
/// Distance under which two samples count as the same point,
/// e.g. the two ends of a closed profile sweep.
#[cfg(feature = "f64")]
pub const TOLERANCE: Real = 1e-6;

// Pi
/// Archimedes' constant (π)
#[cfg(feature = "f32")]
pub const PI: Real = core::f32::consts::PI;
/// Archimedes' constant (π)
#[cfg(feature = "f64")]
pub const PI: Real = core::f64::consts::PI;

// Tau
/// The full circle constant (τ)
#[cfg(feature = "f32")]
pub const TAU: Real = core::f32::consts::TAU;
/// The full circle constant (τ)
#[cfg(feature = "f64")]
pub const TAU: Real = core::f64::consts::TAU;
