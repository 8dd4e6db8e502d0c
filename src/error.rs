#![warn(missing_docs)]
//! Asphere specific error structures
use std::{error::Error, fmt::Display};

use uom::si::{f64::Length, length::millimeter};

/// Application specific Result type
pub type LensResult<T> = std::result::Result<T, LensError>;

/// Errors that can be returned by the profile generation and its surrounding file handling.
#[derive(Debug, PartialEq)]
pub enum LensError {
    /// invalid input parameters (prescription, aperture, sample grid or revolution settings).
    ///
    /// This error is always raised before any sag value is evaluated.
    Configuration(String),
    /// the conic term of the sag equation is undefined at the given radius.
    ///
    /// The square-root argument `1 - (1+K) * C^2 * Y^2` became negative, i.e. the aperture extends beyond the
    /// valid zone of the prescribed conic.
    Domain {
        /// radial distance from the optical axis at which the evaluation failed
        radius: Length,
        /// the (negative) square-root argument at this radius
        discriminant: f64,
    },
    /// errors while reading or writing files
    Io(String),
    /// errors while serializing or plotting a generated profile
    Export(String),
}

impl Display for LensError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Configuration(m) => {
                write!(f, "Configuration:{m}")
            }
            Self::Domain {
                radius,
                discriminant,
            } => {
                write!(
                    f,
                    "Domain:conic term undefined at radius {} mm (square-root argument {discriminant})",
                    radius.get::<millimeter>()
                )
            }
            Self::Io(m) => {
                write!(f, "Io:{m}")
            }
            Self::Export(m) => write!(f, "Export:{m}"),
        }
    }
}
impl Error for LensError {}

impl std::convert::From<String> for LensError {
    fn from(msg: String) -> Self {
        Self::Configuration(msg)
    }
}
