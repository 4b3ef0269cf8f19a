//! Geometry errors

use crate::float_types::Real;

/// Everything that can stop a profile from being built.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeometryError {
    /// (Infeasible) The troughs are too close together for the balls to pass
    #[error(
        "(Infeasible) The inner radius of the rigid wheel troughs Rin ({inner_radius:.3}mm) must be greater than {required:.3}mm for {tooth_count} troughs. Increase the ring outer radius or decrease the gear ratio"
    )]
    Infeasible {
        inner_radius: Real,
        required: Real,
        tooth_count: u32,
    },
    /// (InvalidInput) A design input is out of range
    #[error("(InvalidInput) {0}")]
    InvalidInput(String),
}

impl GeometryError {
    /// True for the minimum-clearance violation, which the binary reports with its own exit code.
    pub const fn is_infeasible(&self) -> bool {
        matches!(self, GeometryError::Infeasible { .. })
    }
}
