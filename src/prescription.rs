#![warn(missing_docs)]
//! Optical prescription of an even-aspheric surface
//!
//! An [`OpticalPrescription`] holds the base curvature, the conic curvature and conic constant as well as the
//! polynomial deformation terms of an even asphere. All values refer to lengths given in millimeters, i.e. curvatures
//! are in 1/mm and a coefficient of power `p` is in 1/mm^(p-1).
use crate::error::{LensError, LensResult};

/// A single polynomial deformation term `coefficient * Y^power` of an even asphere.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AsphericTerm {
    power: i32,
    coefficient: f64,
}
impl AsphericTerm {
    /// Creates a new [`AsphericTerm`].
    ///
    /// # Errors
    ///
    /// This function will return an error if
    ///   - the power is odd or < 4.
    ///   - the coefficient is not finite.
    pub fn new(power: i32, coefficient: f64) -> LensResult<Self> {
        if power < 4 || power % 2 != 0 {
            return Err(LensError::Configuration(format!(
                "power must be an even integer >= 4, got {power}"
            )));
        }
        if !coefficient.is_finite() {
            return Err(LensError::Configuration(format!(
                "coefficient of power {power} must be finite"
            )));
        }
        Ok(Self { power, coefficient })
    }
    /// Returns the power of this [`AsphericTerm`].
    #[must_use]
    pub const fn power(&self) -> i32 {
        self.power
    }
    /// Returns the coefficient of this [`AsphericTerm`].
    #[must_use]
    pub const fn coefficient(&self) -> f64 {
        self.coefficient
    }
}

/// Immutable prescription of an even-aspheric surface.
#[derive(Clone, Debug, PartialEq)]
pub struct OpticalPrescription {
    base_curvature: f64,
    conic_curvature: f64,
    conic_constant: f64,
    terms: Vec<AsphericTerm>,
}
impl OpticalPrescription {
    /// Creates a new [`OpticalPrescription`].
    ///
    /// `powers` and `coefficients` are parallel lists: the i-th coefficient belongs to the i-th power. The order of the
    /// lists is kept and determines the summation order during sag evaluation.
    ///
    /// # Errors
    ///
    /// This function will return an error if
    ///   - `powers` and `coefficients` differ in length.
    ///   - one of the curvatures or the conic constant is not finite.
    ///   - the conic factor `(1 + K) * C^2` is not finite.
    ///   - a power is odd or < 4 or a coefficient is not finite.
    pub fn new(
        base_curvature: f64,
        conic_curvature: f64,
        conic_constant: f64,
        powers: &[i32],
        coefficients: &[f64],
    ) -> LensResult<Self> {
        if powers.len() != coefficients.len() {
            return Err(LensError::Configuration(format!(
                "the number of coefficients ({}) does not match the number of powers ({})",
                coefficients.len(),
                powers.len()
            )));
        }
        if !base_curvature.is_finite() {
            return Err(LensError::Configuration(
                "base curvature must be finite".into(),
            ));
        }
        if !conic_curvature.is_finite() {
            return Err(LensError::Configuration(
                "conic curvature must be finite".into(),
            ));
        }
        if !conic_constant.is_finite() {
            return Err(LensError::Configuration(
                "conic constant must be finite".into(),
            ));
        }
        if !((1.0 + conic_constant) * conic_curvature * conic_curvature).is_finite() {
            return Err(LensError::Configuration(
                "conic factor (1+K) * C^2 exceeds the floating point range".into(),
            ));
        }
        let terms = powers
            .iter()
            .zip(coefficients)
            .map(|(power, coefficient)| AsphericTerm::new(*power, *coefficient))
            .collect::<LensResult<Vec<_>>>()?;
        Ok(Self {
            base_curvature,
            conic_curvature,
            conic_constant,
            terms,
        })
    }
    /// Returns the base curvature (1/R) of this [`OpticalPrescription`] in 1/mm.
    #[must_use]
    pub const fn base_curvature(&self) -> f64 {
        self.base_curvature
    }
    /// Returns the conic curvature of this [`OpticalPrescription`] in 1/mm.
    ///
    /// This curvature only enters the square-root term of the sag equation.
    #[must_use]
    pub const fn conic_curvature(&self) -> f64 {
        self.conic_curvature
    }
    /// Returns the conic constant K of this [`OpticalPrescription`].
    #[must_use]
    pub const fn conic_constant(&self) -> f64 {
        self.conic_constant
    }
    /// Returns the polynomial deformation terms of this [`OpticalPrescription`] in their original order.
    #[must_use]
    pub fn terms(&self) -> &[AsphericTerm] {
        &self.terms
    }
}
