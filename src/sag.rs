#![warn(missing_docs)]
//! Sag evaluation of rotationally symmetric surfaces
//!
//! The sag `Z(Y)` is the axial displacement of a surface at the radial distance `Y` from the optical axis. For an
//! [`OpticalPrescription`] it follows the even-asphere equation
//!
//! ```text
//! Z(Y) = c * Y^2 / (1 + sqrt(1 - (1 + K) * C^2 * Y^2)) + sum_i a_i * Y^p_i
//! ```
//!
//! with the base curvature `c`, the conic curvature `C`, the conic constant `K` and the polynomial terms `(p_i, a_i)`.
use crate::{
    error::{LensError, LensResult},
    millimeter,
    prescription::OpticalPrescription,
};
use uom::si::{f64::Length, length::millimeter};

/// Trait for surfaces of rotation described by their sag.
pub trait SagSurface {
    /// Calculate the sag of the surface at the given radial distance from the optical axis.
    ///
    /// # Errors
    ///
    /// This function will return an error if the surface is not defined at this radius.
    fn sag(&self, radius: Length) -> LensResult<Length>;
}

impl OpticalPrescription {
    /// Calculate the sag (in mm) at the radial distance `y` (in mm).
    ///
    /// The polynomial terms are summed in the order given by [`OpticalPrescription::terms`].
    ///
    /// # Errors
    ///
    /// This function will return an error if
    ///   - `y` is not finite.
    ///   - the square-root argument of the conic term is negative or not a number at `y` ([`LensError::Domain`]).
    pub fn sag_mm(&self, y: f64) -> LensResult<f64> {
        if !y.is_finite() {
            return Err(LensError::Configuration(
                "radial distance must be finite".into(),
            ));
        }
        let y_squared = y * y;
        let discriminant = 1.0
            - (1.0 + self.conic_constant())
                * self.conic_curvature()
                * self.conic_curvature()
                * y_squared;
        if discriminant.is_nan() || discriminant < 0.0 {
            return Err(LensError::Domain {
                radius: millimeter!(y),
                discriminant,
            });
        }
        let conic = self.base_curvature() * y_squared / (1.0 + discriminant.sqrt());
        Ok(self
            .terms()
            .iter()
            .fold(conic, |z, term| z + term.coefficient() * y.powi(term.power())))
    }
    /// Returns the largest radial distance at which the conic term is still defined.
    ///
    /// Returns `None` if `(1 + K) * C^2 <= 0`. In this case the conic term is defined for all radii.
    #[must_use]
    pub fn conic_domain_limit(&self) -> Option<Length> {
        let factor =
            (1.0 + self.conic_constant()) * self.conic_curvature() * self.conic_curvature();
        if factor > 0.0 {
            Some(millimeter!(1.0 / factor.sqrt()))
        } else {
            None
        }
    }
}

impl SagSurface for OpticalPrescription {
    fn sag(&self, radius: Length) -> LensResult<Length> {
        Ok(millimeter!(self.sag_mm(radius.get::<millimeter>())?))
    }
}
