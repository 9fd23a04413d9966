//! District discovery command
//!
//! Lists every district found in a source raster, with a seed usable in
//! an overlay configuration.

use clap::ArgMatches;
use log::info;
use std::path::PathBuf;

use super::{input_arg, parse_arg};
use crate::api::RegionKit;
use crate::commands::command_traits::Command;
use crate::coordinate::BoundingBox;
use crate::errors::{KitError, KitResult};
use crate::region::{ColorBand, ScanGrid};

/// Command for listing the districts of a raster
pub struct DiscoverCommand<'a> {
    input_file: PathBuf,
    grid: ScanGrid,
    band: ColorBand,
    kit: &'a RegionKit,
}

impl<'a> DiscoverCommand<'a> {
    /// Create a new discover command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `kit` - Library handle
    pub fn new(args: &ArgMatches, kit: &'a RegionKit) -> KitResult<Self> {
        let input_file = PathBuf::from(input_arg(args)?);

        let mut grid = ScanGrid::default();
        if let Some(window) = args.get_one::<String>("scan") {
            grid.window = Some(BoundingBox::from_string(window).map_err(KitError::GenericError)?);
        }
        if let Some(step) = parse_arg::<u32>(args, "step")? {
            grid.step = step;
        }
        if let Some(min_size) = parse_arg::<usize>(args, "min-size")? {
            grid.min_size = min_size;
        }
        info!("Scan grid: {:?}", grid);

        Ok(DiscoverCommand {
            input_file,
            grid,
            band: band_from_args(args)?,
            kit,
        })
    }
}

/// Outline/background thresholds from the CLI, defaulting to 100/240
pub(crate) fn band_from_args(args: &ArgMatches) -> KitResult<ColorBand> {
    let mut band = ColorBand::default();
    if let Some(v) = parse_arg::<u8>(args, "boundary-below")? {
        band.boundary_below = v;
    }
    if let Some(v) = parse_arg::<u8>(args, "background-above")? {
        band.background_above = v;
    }
    Ok(band)
}

impl<'a> Command for DiscoverCommand<'a> {
    fn execute(&self) -> KitResult<()> {
        let regions = self.kit.discover(&self.input_file, &self.grid, self.band)?;

        println!("Found {} distinct regions:\n", regions.len());
        println!("{:>3} {:>8} {:>14} {:>30} {:>14}", "#", "Pixels", "Center", "BBox", "Seed");
        println!("{}", "-".repeat(80));
        for (i, region) in regions.iter().enumerate() {
            let bbox = format!(
                "({},{})-({},{})",
                region.bbox.min_x, region.bbox.min_y, region.bbox.max_x, region.bbox.max_y
            );
            println!(
                "{:>3} {:>8} {:>14} {:>30} {:>14}",
                i + 1,
                region.size(),
                region.center.to_string(),
                bbox,
                region.seed.to_string()
            );
        }
        Ok(())
    }
}
