#![warn(missing_docs)]
//! Configuration of a profile generation run.
//!
//! A [`LensConfig`] holds the raw parameters of the lens surface (prescription, aperture, sampling) as well as the
//! [`RevolutionSettings`] handed over to the external tool revolving the profile into a lens mesh. It is read from
//! and written to YAML files. [`LensConfig::build`] validates the raw values and converts them into the immutable
//! parameter objects used by [`generate_profile`](crate::generate_profile).
use crate::{
    aperture::ApertureSpec,
    error::{LensError, LensResult},
    millimeter,
    prescription::OpticalPrescription,
    profile::ProfilePolyline,
    sampler::SampleGrid,
};
use log::warn;
use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::Write,
    path::Path,
};
use uom::si::{f64::Length, length::millimeter};

/// Version of the configuration file format written by this program.
pub const CONFIG_FILE_VERSION: &str = "1";

/// Raw prescription values as given in a configuration file.
///
/// `powers` and `coefficients` are parallel lists. Their lengths are checked by [`LensConfig::build`].
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PrescriptionConfig {
    /// base curvature (1/R) in 1/mm
    pub base_curvature: f64,
    /// curvature inside the square-root term in 1/mm
    pub conic_curvature: f64,
    /// conic constant K
    pub conic_constant: f64,
    /// polynomial coefficients
    pub coefficients: Vec<f64>,
    /// even powers belonging to the coefficients
    pub powers: Vec<i32>,
}
impl Default for PrescriptionConfig {
    fn default() -> Self {
        Self {
            base_curvature: 1.0 / 57.336,
            conic_curvature: -0.016_716_93,
            conic_constant: 0.0,
            coefficients: vec![8.75413e-7, -1.46573e-9, 2.5569e-12, -4.86557e-15],
            powers: vec![4, 6, 8, 10],
        }
    }
}

/// Settings for revolving the half profile around its radius axis.
///
/// These values are not used by the profile generation itself but are passed on to the mesh tool together with the
/// profile.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct RevolutionSettings {
    /// generate the full revolved lens (`true`) or only the half profile curve (`false`)
    pub generate_lens: bool,
    /// number of angular steps of the revolution
    pub steps: usize,
    /// distance (in mm) below which vertices are merged after revolution
    pub merge_threshold: f64,
}
impl Default for RevolutionSettings {
    fn default() -> Self {
        Self {
            generate_lens: true,
            steps: 128,
            merge_threshold: 0.0001,
        }
    }
}
impl RevolutionSettings {
    /// Check the [`RevolutionSettings`] for consistency.
    ///
    /// # Errors
    ///
    /// This function will return an error if
    ///   - `generate_lens` is set and less than 3 steps are given.
    ///   - `merge_threshold` is negative or not finite.
    pub fn validate(&self) -> LensResult<()> {
        if self.generate_lens && self.steps < 3 {
            return Err(LensError::Configuration(format!(
                "at least three revolution steps are necessary, got {}",
                self.steps
            )));
        }
        if !self.merge_threshold.is_finite() || self.merge_threshold < 0.0 {
            return Err(LensError::Configuration(
                "merge threshold must be >= zero and finite".into(),
            ));
        }
        Ok(())
    }
    /// Returns the merge threshold as [`Length`].
    #[must_use]
    pub fn merge_distance(&self) -> Length {
        millimeter!(self.merge_threshold)
    }
    /// Check these settings against a generated profile.
    ///
    /// A warning is emitted if the merge threshold is not smaller than the radial spacing of the profile points. In this
    /// case neighbouring profile vertices would be fused during revolution.
    pub fn check_against(&self, profile: &ProfilePolyline) {
        if self.generate_lens && self.merge_distance() >= profile.radial_spacing() {
            warn!(
                "merge threshold of {} mm is not smaller than the radial point spacing of {} mm",
                self.merge_threshold,
                profile.radial_spacing().get::<millimeter>()
            );
        }
    }
}

/// Complete configuration of a profile generation run.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct LensConfig {
    config_version: String,
    /// prescription of the aspheric surface
    #[serde(default)]
    pub prescription: PrescriptionConfig,
    /// physical diameter of the lens in mm
    #[serde(default = "default_aperture_diameter")]
    pub aperture_diameter: f64,
    /// number of radial sample points including both end points
    #[serde(default = "default_point_count")]
    pub point_count: usize,
    /// settings for the revolution into a lens mesh
    #[serde(default)]
    pub revolution: RevolutionSettings,
}
const fn default_aperture_diameter() -> f64 {
    30.6349
}
const fn default_point_count() -> usize {
    128
}
impl Default for LensConfig {
    fn default() -> Self {
        Self {
            config_version: CONFIG_FILE_VERSION.to_string(),
            prescription: PrescriptionConfig::default(),
            aperture_diameter: default_aperture_diameter(),
            point_count: default_point_count(),
            revolution: RevolutionSettings::default(),
        }
    }
}
impl LensConfig {
    /// Create a new [`LensConfig`] from a YAML file at the given path.
    ///
    /// # Errors
    ///
    /// This function will return an error if
    ///   - the given path is not found or readable.
    ///   - the parsing / deserialization of the file failed.
    pub fn from_file(path: &Path) -> LensResult<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| LensError::Io(format!("cannot read file {} : {}", path.display(), e)))?;
        Self::from_string(&contents)
    }
    /// Create a new [`LensConfig`] from the given YAML string.
    ///
    /// # Errors
    ///
    /// This function will return an error if the parsing of the string failed.
    pub fn from_string(file_string: &str) -> LensResult<Self> {
        let config: Self = serde_yaml::from_str(file_string).map_err(|e| {
            LensError::Configuration(format!("parsing of configuration failed: {e}"))
        })?;
        if config.config_version != CONFIG_FILE_VERSION {
            warn!("Configuration file version does not match the used program version.");
            warn!(
                "read version '{}' <-> program file version '{}'",
                config.config_version, CONFIG_FILE_VERSION
            );
            warn!("This file might have been written by an older or newer version. The import might not be correct.");
        }
        Ok(config)
    }
    /// Save this [`LensConfig`] to a YAML file with the given path
    ///
    /// # Errors
    ///
    /// This function will return an error if
    ///   - the serialization of the configuration failed.
    ///   - the file path cannot be created.
    ///   - it cannot write into the file (e.g. no space).
    pub fn save_to_file(&self, path: &Path) -> LensResult<()> {
        let serialized = self.to_yaml_string()?;
        let mut output = File::create(path).map_err(|e| {
            LensError::Io(format!(
                "could not create file path: {}: {}",
                path.display(),
                e
            ))
        })?;
        write!(output, "{serialized}").map_err(|e| {
            LensError::Io(format!(
                "writing to file path {} failed: {}",
                path.display(),
                e
            ))
        })?;
        Ok(())
    }
    /// Return the YAML representation of this [`LensConfig`]
    ///
    /// # Errors
    ///
    /// This function will return an error if the serialization fails.
    pub fn to_yaml_string(&self) -> LensResult<String> {
        serde_yaml::to_string(self).map_err(|e| {
            LensError::Configuration(format!("serialization of configuration failed: {e}"))
        })
    }
    /// Returns the file format version of this [`LensConfig`].
    #[must_use]
    pub fn config_version(&self) -> &str {
        &self.config_version
    }
    /// Validate the raw values and convert them into the parameter objects of a profile generation.
    ///
    /// # Errors
    ///
    /// This function will return an error if one of the parameter objects cannot be created (e.g. the number of
    /// coefficients and powers differ, the diameter is not positive, less than two points are requested or the
    /// [`RevolutionSettings`] are invalid).
    pub fn build(
        &self,
    ) -> LensResult<(OpticalPrescription, ApertureSpec, SampleGrid, RevolutionSettings)> {
        let prescription = OpticalPrescription::new(
            self.prescription.base_curvature,
            self.prescription.conic_curvature,
            self.prescription.conic_constant,
            &self.prescription.powers,
            &self.prescription.coefficients,
        )?;
        let aperture = ApertureSpec::new(Length::new::<millimeter>(self.aperture_diameter))?;
        let grid = SampleGrid::new(self.point_count)?;
        self.revolution.validate()?;
        Ok((prescription, aperture, grid, self.revolution))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{generate_profile, utils::test_helper::test_helper::check_warnings};
    use assert_matches::assert_matches;
    use tempfile::NamedTempFile;

    #[test]
    fn default() {
        let config = LensConfig::default();
        assert_eq!(config.config_version(), CONFIG_FILE_VERSION);
        assert_eq!(config.point_count, 128);
        assert_eq!(config.aperture_diameter, 30.6349);
        assert_eq!(config.prescription.powers, vec![4, 6, 8, 10]);
        assert_eq!(config.revolution.steps, 128);
        assert!(config.revolution.generate_lens);
    }
    #[test]
    fn build_default() {
        let (prescription, aperture, grid, revolution) = LensConfig::default().build().unwrap();
        assert_eq!(prescription.terms().len(), 4);
        assert_eq!(aperture.physical_diameter(), millimeter!(30.6349));
        assert_eq!(grid.point_count(), 128);
        assert_eq!(revolution, RevolutionSettings::default());
    }
    #[test]
    fn build_mismatched_lists() {
        let mut config = LensConfig::default();
        config.prescription.coefficients.pop();
        assert_matches!(config.build(), Err(LensError::Configuration(_)));
    }
    #[test]
    fn build_wrong() {
        let mut config = LensConfig::default();
        config.point_count = 1;
        assert_matches!(config.build(), Err(LensError::Configuration(_)));
        let mut config = LensConfig::default();
        config.aperture_diameter = 0.0;
        assert!(config.build().is_err());
        let mut config = LensConfig::default();
        config.revolution.steps = 2;
        assert!(config.build().is_err());
        config.revolution.generate_lens = false;
        assert!(config.build().is_ok());
        config.revolution.merge_threshold = -1.0;
        assert!(config.build().is_err());
    }
    #[test]
    fn from_string() {
        let yaml = "config_version: '1'
prescription:
  base_curvature: 0.1
  conic_curvature: 0.1
  conic_constant: -1.0
  coefficients: [1.0e-6]
  powers: [4]
aperture_diameter: 10.0
point_count: 16
";
        testing_logger::setup();
        let config = LensConfig::from_string(yaml).unwrap();
        check_warnings(vec![]);
        assert_eq!(config.prescription.conic_constant, -1.0);
        assert_eq!(config.prescription.powers, vec![4]);
        assert_eq!(config.aperture_diameter, 10.0);
        assert_eq!(config.point_count, 16);
        assert_eq!(config.revolution, RevolutionSettings::default());
    }
    #[test]
    fn from_string_minimal() {
        let config = LensConfig::from_string("config_version: '1'\n").unwrap();
        assert_eq!(config, LensConfig::default());
    }
    #[test]
    fn from_string_wrong() {
        assert_matches!(
            LensConfig::from_string("point_count: [1, 2]"),
            Err(LensError::Configuration(_))
        );
    }
    #[test]
    fn from_string_version_mismatch() {
        testing_logger::setup();
        let config = LensConfig::from_string("config_version: '0'\n").unwrap();
        assert_eq!(config.config_version(), "0");
        check_warnings(vec![
            "Configuration file version does not match the used program version.",
            "read version '0' <-> program file version '1'",
            "This file might have been written by an older or newer version. The import might not be correct.",
        ]);
    }
    #[test]
    fn from_file_not_found() {
        assert_matches!(
            LensConfig::from_file(Path::new("./invalid_file_path/config.yaml")),
            Err(LensError::Io(_))
        );
    }
    #[test]
    fn save_and_load() {
        let mut config = LensConfig::default();
        config.point_count = 33;
        config.revolution.generate_lens = false;
        let temp_file = NamedTempFile::new().unwrap();
        config.save_to_file(temp_file.path()).unwrap();
        let loaded = LensConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(loaded, config);
    }
    #[test]
    fn merge_threshold_check() {
        let (prescription, aperture, grid, mut revolution) =
            LensConfig::default().build().unwrap();
        let profile = generate_profile(&prescription, &aperture, &grid).unwrap();
        testing_logger::setup();
        revolution.check_against(&profile);
        check_warnings(vec![]);
        revolution.merge_threshold = 1.0;
        testing_logger::setup();
        revolution.check_against(&profile);
        testing_logger::validate(|captured_logs| {
            assert_eq!(captured_logs.len(), 1);
            assert!(captured_logs[0]
                .body
                .starts_with("merge threshold of 1 mm is not smaller"));
        });
        revolution.generate_lens = false;
        testing_logger::setup();
        revolution.check_against(&profile);
        check_warnings(vec![]);
    }
}
