#![warn(missing_docs)]
//! Clear aperture of a lens surface
use crate::error::{LensError, LensResult};
use uom::si::f64::Length;

/// Circular aperture of a lens surface given by its physical diameter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ApertureSpec {
    physical_diameter: Length,
}
impl ApertureSpec {
    /// Creates a new [`ApertureSpec`].
    ///
    /// # Errors
    ///
    /// This function will return an error if the diameter is not positive or not finite.
    pub fn new(physical_diameter: Length) -> LensResult<Self> {
        if !physical_diameter.is_finite() || physical_diameter.value <= 0.0 {
            return Err(LensError::Configuration(
                "aperture diameter must be > zero and finite".into(),
            ));
        }
        Ok(Self { physical_diameter })
    }
    /// Returns the physical diameter of this [`ApertureSpec`].
    #[must_use]
    pub const fn physical_diameter(&self) -> Length {
        self.physical_diameter
    }
    /// Returns the radius of the aperture edge, i.e. half the physical diameter.
    #[must_use]
    pub fn max_radius(&self) -> Length {
        self.physical_diameter / 2.0
    }
}
