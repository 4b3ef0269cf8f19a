//! The whole profile pipeline: derive → check → profile → balls.

use crate::design::{DerivedParameters, DesignInputs, derive};
use crate::errors::GeometryError;
use crate::profile::{BallPlacement, ProfileCurve, generate_profile, sample_ball_angles};

/// A fully computed reducer profile. Built once by [`Gearbox::build`], then only read.
#[derive(Clone, Debug, PartialEq)]
pub struct Gearbox {
    pub inputs: DesignInputs,
    pub params: DerivedParameters,
    pub profile: ProfileCurve,
    pub balls: BallPlacement,
}

impl Gearbox {
    /// Runs the pipeline. Fails before any curve is evaluated if the inputs are
    /// out of range or the minimum-clearance bound is violated.
    ///
    /// # Example
    /// ```
    /// use ballwave::{DesignInputs, Gearbox};
    /// let gearbox = Gearbox::build(&DesignInputs::default()).unwrap();
    /// assert_eq!(gearbox.profile.len(), 600);
    /// assert_eq!(gearbox.balls.len(), 18);
    /// ```
    pub fn build(inputs: &DesignInputs) -> Result<Gearbox, GeometryError> {
        inputs.validate()?;
        if inputs.wave_count > 1 {
            log::warn!(
                "wave count {} is unverified; the profile was only derived for a single wave",
                inputs.wave_count
            );
        }

        let params = derive(inputs);
        log::debug!("derived parameters: {params:?}");

        params.ensure_feasible()?;
        log::debug!(
            "clearance ok: Rin {} > {}",
            params.ring_inner_radius,
            crate::design::minimum_inner_radius(params.ball_diameter, params.tooth_count)
        );

        let profile = generate_profile(&params, inputs.resolution);
        log::debug!("sampled {} profile points", profile.len());
        if !profile.is_closed() {
            log::warn!("rigid wheel profile does not close on itself");
        }

        let balls = sample_ball_angles(&params, params.ball_count as usize);
        log::debug!("sampled {} ball positions", balls.len());

        Ok(Gearbox {
            inputs: inputs.clone(),
            params,
            profile,
            balls,
        })
    }
}
