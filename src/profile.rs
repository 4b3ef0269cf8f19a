//! Rigid wheel tooth profile and ball placement.
//!
//! A ball of radius `rsh` rides on an eccentric disc of radius `rd` offset by `e`.
//! Its centre sits at polar distance
//! ```text
//! S(θ) = sqrt((rsh + rd)² − (e·sin(zg·θ))²)
//! l(θ) = e·cos(zg·θ) + S(θ)
//! ```
//! and the rigid wheel profile is the envelope of the ball, offset by `rsh`
//! along the contact normal at pressure angle
//! ```text
//! Ξ(θ) = atan2(e·zg·sin(zg·θ), S(θ))
//! x(θ) = l·sin θ + rsh·sin(θ + Ξ)
//! y(θ) = l·cos θ + rsh·cos(θ + Ξ)
//! ```
//! Angles are measured clockwise from +Y, so θ = 0 is the top of the drawing.

use crate::design::DerivedParameters;
use crate::float_types::{Real, TAU, TOLERANCE};
use geo::{Coord, LineString, coord};

/// `n` evenly spaced samples over `[start, end]`, both ends included.
/// The last sample is pinned to `end` so closed sweeps close exactly in angle.
pub fn linspace(start: Real, end: Real, n: usize) -> Vec<Real> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as Real;
            let mut samples: Vec<Real> = (0..n).map(|i| start + step * i as Real).collect();
            samples[n - 1] = end;
            samples
        },
    }
}

/// `(S(θ), l(θ))` for one sweep angle.
#[inline]
fn ball_centre_distance(params: &DerivedParameters, theta: Real) -> (Real, Real) {
    let e = params.eccentricity;
    let zg = params.tooth_count as Real;
    let reach = params.ball_radius + params.eccentric_radius;
    let wobble = e * (zg * theta).sin();
    let radicand = reach * reach - wobble * wobble;
    // Feasible designs keep this positive; a negative value means the clearance check is wrong.
    debug_assert!(
        radicand >= 0.0,
        "negative radicand {radicand} at θ = {theta}"
    );
    let s = radicand.sqrt();
    (s, e * (zg * theta).cos() + s)
}

/// Ordered points of the rigid wheel profile, one per sampled θ.
#[derive(Clone, Debug, PartialEq)]
pub struct ProfileCurve {
    line: LineString<Real>,
}

impl ProfileCurve {
    pub fn points(&self) -> &[Coord<Real>] {
        &self.line.0
    }

    pub const fn line_string(&self) -> &LineString<Real> {
        &self.line
    }

    pub fn len(&self) -> usize {
        self.line.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.line.0.is_empty()
    }

    pub fn first(&self) -> Option<Coord<Real>> {
        self.line.0.first().copied()
    }

    pub fn last(&self) -> Option<Coord<Real>> {
        self.line.0.last().copied()
    }

    /// True when the two ends of the sweep meet within [`TOLERANCE`].
    pub fn is_closed(&self) -> bool {
        self.is_closed_within(TOLERANCE)
    }

    /// True when the first and last samples coincide within `tol`.
    pub fn is_closed_within(&self, tol: Real) -> bool {
        match (self.first(), self.last()) {
            (Some(a), Some(b)) => (a.x - b.x).hypot(a.y - b.y) <= tol,
            _ => false,
        }
    }
}

/// Samples the rigid wheel profile at `resolution` angles over `[0, 2π]`.
pub fn generate_profile(params: &DerivedParameters, resolution: usize) -> ProfileCurve {
    let e = params.eccentricity;
    let zg = params.tooth_count as Real;
    let rsh = params.ball_radius;

    let coords = linspace(0.0, TAU, resolution)
        .into_iter()
        .map(|theta| {
            let (s, l) = ball_centre_distance(params, theta);
            let xi = (e * zg * (zg * theta).sin()).atan2(s);
            coord! {
                x: l * theta.sin() + rsh * (theta + xi).sin(),
                y: l * theta.cos() + rsh * (theta + xi).cos()
            }
        })
        .collect::<Vec<_>>();

    ProfileCurve { line: LineString::new(coords) }
}

/// One sampled ball position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BallSample {
    pub angle: Real,
    /// `l(angle)`, distance of the ball centre from the wheel axis
    pub radial_offset: Real,
    pub center: Coord<Real>,
}

/// `ball_count + 1` ball samples over `[0, 2π]`. The extra sample repeats the
/// first position at 2π and is never drawn.
#[derive(Clone, Debug, PartialEq)]
pub struct BallPlacement {
    samples: Vec<BallSample>,
    ball_count: usize,
}

impl BallPlacement {
    pub fn samples(&self) -> &[BallSample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub const fn ball_count(&self) -> usize {
        self.ball_count
    }

    /// Centres of the balls that are actually drawn: the first `ball_count` samples.
    pub fn rendered(&self) -> impl Iterator<Item = Coord<Real>> + '_ {
        self.samples.iter().take(self.ball_count).map(|s| s.center)
    }
}

/// Ball centres at `ball_count + 1` evenly spaced angles. No tangential term:
/// `x = l·sin(angle)`, `y = l·cos(angle)`.
pub fn sample_ball_angles(params: &DerivedParameters, ball_count: usize) -> BallPlacement {
    let samples = linspace(0.0, TAU, ball_count + 1)
        .into_iter()
        .map(|angle| {
            let (_, l) = ball_centre_distance(params, angle);
            BallSample {
                angle,
                radial_offset: l,
                center: coord! { x: l * angle.sin(), y: l * angle.cos() },
            }
        })
        .collect();

    BallPlacement { samples, ball_count }
}
