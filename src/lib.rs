//! Profile generator for even-aspheric lens surfaces.
//!
//! This crate calculates the half profile of a rotationally symmetric aspheric lens surface from its optical
//! prescription (base curvature, conic curvature, conic constant and even polynomial terms). The profile is returned as
//! an open polyline of `(radius, -sag, 0)` points which can be revolved around the radius axis by an external mesh
//! tool.
//!
//! ## Example
//!
//! ```rust
//! use asphere::{
//!     generate_profile, millimeter, ApertureSpec, OpticalPrescription, SampleGrid,
//! };
//!
//! let prescription = OpticalPrescription::new(
//!     1.0 / 57.336,
//!     -0.016_716_93,
//!     0.0,
//!     &[4, 6, 8, 10],
//!     &[8.75413e-7, -1.46573e-9, 2.5569e-12, -4.86557e-15],
//! )
//! .unwrap();
//! let aperture = ApertureSpec::new(millimeter!(30.6349)).unwrap();
//! let profile = generate_profile(&prescription, &aperture, &SampleGrid::default()).unwrap();
//! assert_eq!(profile.len(), 128);
//! assert_eq!(profile.edges().len(), 127);
//! ```
#![allow(clippy::module_name_repetitions)]

pub mod aperture;
pub mod config;
pub mod console;
pub mod error;
pub mod export;
pub mod prescription;
pub mod profile;
pub mod sag;
pub mod sampler;
pub mod utils;

pub use aperture::ApertureSpec;
pub use prescription::OpticalPrescription;
pub use profile::ProfilePolyline;
pub use sampler::{generate_profile, SampleGrid};

/// Return the version information of the currently built executable.
#[must_use]
pub fn get_version() -> String {
    format!("{} ({})", env!("CARGO_PKG_VERSION"), env!("CARGO_PKG_NAME"))
}
#[cfg(test)]
mod test {
    use super::*;
    #[test]
    fn get_ver() {
        let version_string = get_version();
        assert!(version_string.starts_with(env!("CARGO_PKG_VERSION")));
        assert!(version_string.ends_with("(asphere)"));
    }
}
