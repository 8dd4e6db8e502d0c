use asphere::{
    config::LensConfig,
    console::Args,
    error::{LensError, LensResult},
    export::{plot_profile_svg, write_profile},
    generate_profile,
};
use clap::Parser;
use log::info;
use std::{
    fs::File,
    io::{self, BufWriter},
};
use uom::si::length::millimeter;

fn main() -> LensResult<()> {
    env_logger::init();
    let args = Args::parse();

    if let Some(path) = &args.write_default_config {
        LensConfig::default().save_to_file(path)?;
        info!("default configuration written to {}", path.display());
        return Ok(());
    }

    let config = if let Some(path) = &args.config {
        info!("reading configuration {}", path.display());
        LensConfig::from_file(path)?
    } else {
        info!("no configuration given, using the reference lens");
        LensConfig::default()
    };
    let (prescription, aperture, grid, revolution) = config.build()?;
    if let Some(limit) = prescription.conic_domain_limit() {
        info!("conic term defined up to a radius of {} mm", limit.get::<millimeter>());
    }

    let profile = generate_profile(&prescription, &aperture, &grid)?;
    let (min_sag, max_sag) = profile.sag_range();
    info!(
        "generated {} points, sag range {} mm .. {} mm",
        profile.len(),
        min_sag.get::<millimeter>(),
        max_sag.get::<millimeter>()
    );
    revolution.check_against(&profile);

    if let Some(path) = &args.output {
        let file = File::create(path).map_err(|e| {
            LensError::Io(format!("could not create file path: {}: {}", path.display(), e))
        })?;
        write_profile(&profile, &revolution, args.format, BufWriter::new(file))?;
        info!("profile written to {}", path.display());
    } else {
        write_profile(&profile, &revolution, args.format, io::stdout().lock())?;
    }
    if let Some(path) = &args.plot {
        plot_profile_svg(&profile, path)?;
        info!("profile plot written to {}", path.display());
    }
    Ok(())
}
