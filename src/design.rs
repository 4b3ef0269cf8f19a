//! Design inputs and the closed-form dimensions derived from them.

use crate::errors::GeometryError;
use crate::float_types::{PI, Real};
use serde::{Deserialize, Serialize};

/// The handful of numbers a reducer is specified by. Everything else is derived.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignInputs {
    /// Gear ratio `i`
    pub gear_ratio: u32,
    /// Ball diameter `dsh` [mm]
    pub ball_diameter: Real,
    /// Outer radius of the rigid wheel troughs `Rout` [mm]
    pub ring_outer_radius: Real,
    /// Outer diameter of the gearbox housing `D` [mm]
    pub outer_diameter: Real,
    /// Number of waves of the wave generator `u`. Only 1 is verified.
    pub wave_count: u32,
    /// Number of samples along the rigid wheel profile
    pub resolution: usize,
}

impl Default for DesignInputs {
    fn default() -> Self {
        Self {
            gear_ratio: 17,
            ball_diameter: 6.0,
            ring_outer_radius: 38.0,
            outer_diameter: 90.0,
            wave_count: 1,
            resolution: 600,
        }
    }
}

impl DesignInputs {
    /// Range checks on the raw inputs. The minimum-clearance bound is checked
    /// separately on the derived parameters, see [`DerivedParameters::ensure_feasible`].
    pub fn validate(&self) -> Result<(), GeometryError> {
        if self.gear_ratio < 1 {
            return Err(GeometryError::InvalidInput(
                "gear ratio must be at least 1".to_string(),
            ));
        }
        if self.wave_count < 1 {
            return Err(GeometryError::InvalidInput(
                "wave count must be at least 1".to_string(),
            ));
        }
        if self
            .gear_ratio
            .checked_add(1)
            .and_then(|n| n.checked_mul(self.wave_count))
            .is_none()
        {
            return Err(GeometryError::InvalidInput(format!(
                "gear ratio {} with {} waves gives more troughs than fit in a u32",
                self.gear_ratio, self.wave_count
            )));
        }
        if self.resolution < 2 {
            return Err(GeometryError::InvalidInput(format!(
                "profile resolution must be at least 2 points, got {}",
                self.resolution
            )));
        }
        for (name, value) in [
            ("ball diameter", self.ball_diameter),
            ("ring outer radius", self.ring_outer_radius),
            ("outer diameter", self.outer_diameter),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(GeometryError::InvalidInput(format!(
                    "{name} must be a positive length, got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// Dimensions derived from [`DesignInputs`]. Computed once, read-only afterwards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DerivedParameters {
    pub gear_ratio: u32,
    /// `e`
    pub eccentricity: Real,
    /// `zg`, troughs on the rigid wheel
    pub tooth_count: u32,
    /// `zsh`
    pub ball_count: u32,
    /// `Rout`
    pub ring_outer_radius: Real,
    /// `Rin`
    pub ring_inner_radius: Real,
    pub ball_diameter: Real,
    /// `rsh`
    pub ball_radius: Real,
    /// `rd`, radius of the eccentric disc
    pub eccentric_radius: Real,
    /// `hc`
    pub separator_thickness: Real,
    /// Pitch radius of the separator
    pub separator_mean_radius: Real,
    pub separator_outer_radius: Real,
    pub separator_inner_radius: Real,
    pub outer_diameter: Real,
}

/// Derives every dependent dimension. Total: no validation happens here.
/// A trough count beyond `u32::MAX` saturates; [`DesignInputs::validate`] rejects it.
pub fn derive(inputs: &DesignInputs) -> DerivedParameters {
    let dsh = inputs.ball_diameter;
    let e = 0.2 * dsh;
    let zg = inputs
        .gear_ratio
        .saturating_add(1)
        .saturating_mul(inputs.wave_count);
    let zsh = inputs.gear_ratio;
    let r_in = inputs.ring_outer_radius - 2.0 * e;
    let rsh = dsh / 2.0;
    let rd = r_in + e - dsh;
    let hc = 2.2 * e;
    let r_sep_m = rd + rsh;

    DerivedParameters {
        gear_ratio: inputs.gear_ratio,
        eccentricity: e,
        tooth_count: zg,
        ball_count: zsh,
        ring_outer_radius: inputs.ring_outer_radius,
        ring_inner_radius: r_in,
        ball_diameter: dsh,
        ball_radius: rsh,
        eccentric_radius: rd,
        separator_thickness: hc,
        separator_mean_radius: r_sep_m,
        separator_outer_radius: r_sep_m + hc / 2.0,
        separator_inner_radius: r_sep_m - hc / 2.0,
        outer_diameter: inputs.outer_diameter,
    }
}

/// Smallest trough radius at which neighbouring balls still clear each other:
/// `1.03 · dsh / sin(π / zg)`.
pub fn minimum_inner_radius(ball_diameter: Real, tooth_count: u32) -> Real {
    (1.03 * ball_diameter) / (PI / tooth_count as Real).sin()
}

/// Minimum-clearance check. Equality counts as infeasible.
pub fn check_feasible(ring_inner_radius: Real, ball_diameter: Real, tooth_count: u32) -> bool {
    ring_inner_radius > minimum_inner_radius(ball_diameter, tooth_count)
}

impl DerivedParameters {
    /// Returns [`GeometryError::Infeasible`] when the profile would self-intersect.
    pub fn ensure_feasible(&self) -> Result<(), GeometryError> {
        if check_feasible(self.ring_inner_radius, self.ball_diameter, self.tooth_count) {
            Ok(())
        } else {
            Err(GeometryError::Infeasible {
                inner_radius: self.ring_inner_radius,
                required: minimum_inner_radius(self.ball_diameter, self.tooth_count),
                tooth_count: self.tooth_count,
            })
        }
    }

    /// Logs the main reducer parameters at `info`.
    pub fn log_summary(&self) {
        log::info!("Main parameters of the reducer:");
        log::info!("- Gear ratio: {}", self.gear_ratio);
        log::info!("- Eccentricity: {}", self.eccentricity);
        log::info!("- Eccentric radius: {}", self.eccentric_radius);
        log::info!("- Outer radius of the rigid wheel profile: {}", self.ring_outer_radius);
        log::info!("- Inner radius of the rigid wheel profile: {}", self.ring_inner_radius);
        log::info!("- Number of troughs of the rigid wheel profile: {}", self.tooth_count);
        log::info!("- Number of balls: {}", self.ball_count);
        log::info!("- Ball diameter: {}", self.ball_diameter);
        log::info!("- Separator pitch radius: {}", self.separator_mean_radius);
        log::info!("- Separator thickness: {}", self.separator_thickness);
    }
}
