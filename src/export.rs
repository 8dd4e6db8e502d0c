#![warn(missing_docs)]
//! Export of generated profiles
//!
//! A [`ProfilePolyline`] is handed over to the external mesh tool either as a complete [`ProfileDocument`] (points,
//! edges and [`RevolutionSettings`]) in YAML or JSON format or as a plain list of points in CSV format. In addition,
//! a profile can be plotted into an SVG file for visual inspection.
use crate::{
    config::RevolutionSettings,
    error::{LensError, LensResult},
    profile::ProfilePolyline,
};
use plotters::prelude::{
    ChartBuilder, IntoDrawingArea, IntoFont, LineSeries, SVGBackend, BLUE, WHITE,
};
use serde::{Deserialize, Serialize};
use std::{io::Write, path::Path};
use strum::{Display, EnumIter, EnumString};
use uom::si::length::millimeter;

/// Output formats of a generated profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum ExportFormat {
    /// [`ProfileDocument`] as YAML
    #[default]
    Yaml,
    /// [`ProfileDocument`] as JSON
    Json,
    /// points only, one `radius_mm,sag_mm,z_mm` row per point
    Csv,
}

/// Axis the profile is revolved around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevolutionAxis {
    /// the radius axis (first point coordinate)
    Radius,
}

/// Revolution instructions for the mesh tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevolutionInstructions {
    /// axis of revolution
    pub axis: RevolutionAxis,
    /// generate the full revolved lens (`true`) or only the half profile curve (`false`)
    pub generate_lens: bool,
    /// number of angular steps of the revolution
    pub steps: usize,
    /// vertex-merge tolerance in mm
    pub merge_threshold: f64,
}

/// Hand-over document of a generated profile.
///
/// All coordinates are in millimeters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileDocument {
    /// profile points as `[radius, sag, 0]`
    pub points: Vec<[f64; 3]>,
    /// edges as pairs of point indices
    pub edges: Vec<[usize; 2]>,
    /// revolution instructions
    pub revolution: RevolutionInstructions,
}
impl ProfileDocument {
    /// Creates a new [`ProfileDocument`] from a generated profile and the revolution settings.
    #[must_use]
    pub fn new(profile: &ProfilePolyline, revolution: &RevolutionSettings) -> Self {
        Self {
            points: profile
                .points()
                .iter()
                .map(|p| {
                    [
                        p.x.get::<millimeter>(),
                        p.y.get::<millimeter>(),
                        p.z.get::<millimeter>(),
                    ]
                })
                .collect(),
            edges: profile.edges().iter().map(|(a, b)| [*a, *b]).collect(),
            revolution: RevolutionInstructions {
                axis: RevolutionAxis::Radius,
                generate_lens: revolution.generate_lens,
                steps: revolution.steps,
                merge_threshold: revolution.merge_threshold,
            },
        }
    }
}

#[derive(Serialize)]
struct CsvRow {
    radius_mm: f64,
    sag_mm: f64,
    z_mm: f64,
}

/// Write a generated profile in the given [`ExportFormat`].
///
/// # Errors
///
/// This function will return an error if the serialization or the writing fails.
pub fn write_profile<W: Write>(
    profile: &ProfilePolyline,
    revolution: &RevolutionSettings,
    format: ExportFormat,
    mut writer: W,
) -> LensResult<()> {
    match format {
        ExportFormat::Yaml => {
            serde_yaml::to_writer(&mut writer, &ProfileDocument::new(profile, revolution))
                .map_err(|e| LensError::Export(format!("serialization of profile failed: {e}")))?;
            writer
                .flush()
                .map_err(|e| LensError::Io(format!("writing profile failed: {e}")))?;
        }
        ExportFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, &ProfileDocument::new(profile, revolution))
                .map_err(|e| LensError::Export(format!("serialization of profile failed: {e}")))?;
            writeln!(writer).map_err(|e| LensError::Io(format!("writing profile failed: {e}")))?;
            writer
                .flush()
                .map_err(|e| LensError::Io(format!("writing profile failed: {e}")))?;
        }
        ExportFormat::Csv => {
            let mut csv_writer = csv::Writer::from_writer(writer);
            for p in profile.points() {
                csv_writer
                    .serialize(CsvRow {
                        radius_mm: p.x.get::<millimeter>(),
                        sag_mm: p.y.get::<millimeter>(),
                        z_mm: p.z.get::<millimeter>(),
                    })
                    .map_err(|e| LensError::Export(format!("writing csv row failed: {e}")))?;
            }
            csv_writer
                .flush()
                .map_err(|e| LensError::Io(format!("writing profile failed: {e}")))?;
        }
    }
    Ok(())
}

/// Plot the sag of a generated profile versus its radius into an SVG file.
///
/// # Errors
///
/// This function will return an error if the plot cannot be created or the file cannot be written.
pub fn plot_profile_svg(profile: &ProfilePolyline, path: &Path) -> LensResult<()> {
    let (min_sag, max_sag) = profile.sag_range();
    let (mut y_min, mut y_max) = (min_sag.get::<millimeter>(), max_sag.get::<millimeter>());
    let margin = if (y_max - y_min).abs() < f64::EPSILON {
        1.0
    } else {
        0.05 * (y_max - y_min)
    };
    y_min -= margin;
    y_max += margin;
    let x_max = profile.max_radius().get::<millimeter>();

    let root = SVGBackend::new(path, (800, 600)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| LensError::Export(format!("plotting failed: {e}")))?;
    let mut chart = ChartBuilder::on(&root)
        .caption("aspheric surface profile", ("sans-serif", 24).into_font())
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(70)
        .build_cartesian_2d(0.0..x_max, y_min..y_max)
        .map_err(|e| LensError::Export(format!("plotting failed: {e}")))?;
    chart
        .configure_mesh()
        .x_desc("radius [mm]")
        .y_desc("sag [mm]")
        .draw()
        .map_err(|e| LensError::Export(format!("plotting failed: {e}")))?;
    chart
        .draw_series(LineSeries::new(
            profile
                .points()
                .iter()
                .map(|p| (p.x.get::<millimeter>(), p.y.get::<millimeter>())),
            &BLUE,
        ))
        .map_err(|e| LensError::Export(format!("plotting failed: {e}")))?;
    root.present()
        .map_err(|e| LensError::Io(format!("writing plot to {} failed: {e}", path.display())))?;
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::millimeter;
    use std::str::FromStr;
    use strum::IntoEnumIterator;
    use tempfile::NamedTempFile;

    fn simple_profile() -> ProfilePolyline {
        ProfilePolyline::new(vec![
            millimeter!(0.0, 0.0, 0.0),
            millimeter!(1.0, -0.5, 0.0),
            millimeter!(2.0, -2.0, 0.0),
        ])
        .unwrap()
    }
    #[test]
    fn format_from_str() {
        assert_eq!(ExportFormat::from_str("yaml").unwrap(), ExportFormat::Yaml);
        assert_eq!(ExportFormat::from_str("json").unwrap(), ExportFormat::Json);
        assert_eq!(ExportFormat::from_str("csv").unwrap(), ExportFormat::Csv);
        assert!(ExportFormat::from_str("obj").is_err());
        assert_eq!(ExportFormat::default(), ExportFormat::Yaml);
        assert_eq!(ExportFormat::Csv.to_string(), "csv");
        assert_eq!(ExportFormat::iter().count(), 3);
    }
    #[test]
    fn document() {
        let revolution = RevolutionSettings::default();
        let document = ProfileDocument::new(&simple_profile(), &revolution);
        assert_eq!(document.points.len(), 3);
        assert_eq!(document.points[0], [0.0, 0.0, 0.0]);
        assert_eq!(document.edges, vec![[0, 1], [1, 2]]);
        assert_eq!(document.revolution.axis, RevolutionAxis::Radius);
        assert_eq!(document.revolution.steps, 128);
        assert!(document.revolution.generate_lens);
    }
    #[test]
    fn write_csv() {
        let mut buffer = Vec::new();
        write_profile(
            &simple_profile(),
            &RevolutionSettings::default(),
            ExportFormat::Csv,
            &mut buffer,
        )
        .unwrap();
        let output = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "radius_mm,sag_mm,z_mm");
        assert_eq!(lines[1], "0.0,0.0,0.0");
    }
    #[test]
    fn write_yaml() {
        let mut buffer = Vec::new();
        let profile = simple_profile();
        let revolution = RevolutionSettings::default();
        write_profile(&profile, &revolution, ExportFormat::Yaml, &mut buffer).unwrap();
        let document: ProfileDocument = serde_yaml::from_slice(&buffer).unwrap();
        assert_eq!(document, ProfileDocument::new(&profile, &revolution));
    }
    #[test]
    fn write_json() {
        let mut buffer = Vec::new();
        let profile = simple_profile();
        let revolution = RevolutionSettings {
            generate_lens: false,
            ..Default::default()
        };
        write_profile(&profile, &revolution, ExportFormat::Json, &mut buffer).unwrap();
        let document: ProfileDocument = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(document.edges.len(), 2);
        assert!(!document.revolution.generate_lens);
    }
    #[test]
    fn plot_svg() {
        let temp_file = NamedTempFile::new().unwrap();
        plot_profile_svg(&simple_profile(), temp_file.path()).unwrap();
        let content = std::fs::read_to_string(temp_file.path()).unwrap();
        assert!(content.contains("<svg"));
    }
    #[test]
    fn plot_flat_profile() {
        let profile = ProfilePolyline::new(vec![
            millimeter!(0.0, 0.0, 0.0),
            millimeter!(1.0, 0.0, 0.0),
        ])
        .unwrap();
        let temp_file = NamedTempFile::new().unwrap();
        assert!(plot_profile_svg(&profile, temp_file.path()).is_ok());
    }
}
