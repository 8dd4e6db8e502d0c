#![warn(missing_docs)]
//! Sampling of a surface profile along the radial direction
//!
//! The sampler evaluates a [`SagSurface`] at evenly spaced radii from the optical axis up to the aperture edge and
//! creates a [`ProfilePolyline`] from the results.
use crate::{
    aperture::ApertureSpec,
    error::{LensError, LensResult},
    prescription::OpticalPrescription,
    profile::ProfilePolyline,
    sag::SagSurface,
    utils::usize_to_f64,
};
use log::debug;
use nalgebra::Point3;
use num::Zero;
use uom::si::{f64::Length, length::millimeter};

/// Number of radial samples of a profile including both end points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SampleGrid {
    point_count: usize,
}
impl SampleGrid {
    /// Creates a new [`SampleGrid`].
    ///
    /// # Errors
    ///
    /// This function will return an error if `point_count` is < 2.
    pub fn new(point_count: usize) -> LensResult<Self> {
        if point_count < 2 {
            return Err(LensError::Configuration(format!(
                "at least two sample points are necessary for a profile, got {point_count}"
            )));
        }
        Ok(Self { point_count })
    }
    /// Returns the number of sample points of this [`SampleGrid`].
    #[must_use]
    pub const fn point_count(&self) -> usize {
        self.point_count
    }
    /// Returns the evenly spaced sample radii from zero to `max_radius` (both included).
    ///
    /// The first radius is exactly zero and the last one is exactly `max_radius`.
    #[must_use]
    pub fn radii(&self, max_radius: Length) -> Vec<Length> {
        let last_index = usize_to_f64(self.point_count - 1);
        (0..self.point_count)
            .map(|i| max_radius * (usize_to_f64(i) / last_index))
            .collect()
    }
}
impl Default for SampleGrid {
    fn default() -> Self {
        Self { point_count: 128 }
    }
}

/// Sample the given [`SagSurface`] and return its half profile.
///
/// Each point of the returned [`ProfilePolyline`] is `(radius, -sag, 0)`. The sag is inverted such that a surface
/// with positive curvature bulges towards negative z.
///
/// # Errors
///
/// This function will return an error if the surface cannot be evaluated at one of the sample radii. The first
/// failing radius aborts the sampling. No partial profile is returned.
pub fn sample_profile(
    surface: &dyn SagSurface,
    max_radius: Length,
    grid: &SampleGrid,
) -> LensResult<ProfilePolyline> {
    debug!(
        "sampling {} points up to a radius of {} mm",
        grid.point_count(),
        max_radius.get::<millimeter>()
    );
    let points = grid
        .radii(max_radius)
        .into_iter()
        .map(|radius| Ok(Point3::new(radius, -surface.sag(radius)?, Length::zero())))
        .collect::<LensResult<Vec<_>>>()?;
    ProfilePolyline::new(points)
}

/// Generate the half profile of an even-aspheric lens surface.
///
/// This is the main entry point of this crate. The surface given by `prescription` is sampled at
/// [`SampleGrid::point_count`] evenly spaced radii from the optical axis to the edge of `aperture`.
///
/// # Errors
///
/// This function will return
///   - [`LensError::Domain`] if the conic term of the prescription is undefined at one of the sample radii (i.e. the
///     aperture extends beyond [`OpticalPrescription::conic_domain_limit`]).
///   - [`LensError::Configuration`] if the sampled radii do not form a valid [`ProfilePolyline`].
pub fn generate_profile(
    prescription: &OpticalPrescription,
    aperture: &ApertureSpec,
    grid: &SampleGrid,
) -> LensResult<ProfilePolyline> {
    sample_profile(prescription, aperture.max_radius(), grid)
}
