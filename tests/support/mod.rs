//! Test support library
//! Provides various helper functions & utilities for tests.
#![allow(dead_code)]

use ballwave::{
    DesignInputs,
    design::minimum_inner_radius,
    float_types::Real,
};
use geo::Coord;

/// The reference reducer: i = 17, dsh = 6 mm, Rout = 38 mm, D = 90 mm.
pub fn reference_inputs() -> DesignInputs {
    DesignInputs::default()
}

/// Inputs whose trough radius sits `margin` times above the clearance bound.
pub fn feasible_inputs(gear_ratio: u32, ball_diameter: Real, margin: Real) -> DesignInputs {
    let e = 0.2 * ball_diameter;
    let r_in = minimum_inner_radius(ball_diameter, gear_ratio + 1) * margin;
    DesignInputs {
        gear_ratio,
        ball_diameter,
        ring_outer_radius: r_in + 2.0 * e,
        outer_diameter: 2.0 * (r_in + 2.0 * e + ball_diameter),
        ..DesignInputs::default()
    }
}

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Distance of a point from the wheel axis.
pub fn radius_of(c: Coord<Real>) -> Real {
    c.x.hypot(c.y)
}
