//! Hatched overlay command
//!
//! Runs an overlay job described by a TOML configuration file.

use clap::ArgMatches;
use log::info;
use std::path::PathBuf;

use super::input_arg;
use crate::api::RegionKit;
use crate::commands::command_traits::Command;
use crate::errors::KitResult;

/// Command for compositing configured regions onto a map
pub struct OverlayCommand<'a> {
    /// Path to the job configuration
    config_file: PathBuf,
    /// Output path overriding the configuration
    output_file: Option<PathBuf>,
    kit: &'a RegionKit,
}

impl<'a> OverlayCommand<'a> {
    /// Create a new overlay command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `kit` - Library handle
    pub fn new(args: &ArgMatches, kit: &'a RegionKit) -> KitResult<Self> {
        let config_file = PathBuf::from(input_arg(args)?);
        let output_file = args.get_one::<String>("output").map(PathBuf::from);
        info!("Overlay configuration: {}", config_file.display());

        Ok(OverlayCommand {
            config_file,
            output_file,
            kit,
        })
    }
}

impl<'a> Command for OverlayCommand<'a> {
    fn execute(&self) -> KitResult<()> {
        let outcome = self.kit.overlay(&self.config_file, self.output_file.as_deref())?;

        println!("Saved overlay to {}", outcome.output.display());
        for region in &outcome.regions {
            println!(
                "  {:<16} {:>8} px (+{} holes filled), boundary {} px",
                region.name, region.pixels, region.holes_added, region.boundary_pixels
            );
        }
        Ok(())
    }
}
