//! Color census command
//!
//! Lists the map colors of an image with their pixel counts, in the
//! `r,g,b` format used by the region color mappings.

use clap::ArgMatches;
use std::path::PathBuf;

use super::{input_arg, parse_arg};
use crate::api::RegionKit;
use crate::commands::command_traits::Command;
use crate::errors::KitResult;

/// Command for counting the colors of a map
pub struct CensusCommand<'a> {
    input_file: PathBuf,
    /// Show at most this many colors
    limit: Option<usize>,
    kit: &'a RegionKit,
}

impl<'a> CensusCommand<'a> {
    pub fn new(args: &ArgMatches, kit: &'a RegionKit) -> KitResult<Self> {
        Ok(CensusCommand {
            input_file: PathBuf::from(input_arg(args)?),
            limit: parse_arg::<usize>(args, "limit")?,
            kit,
        })
    }
}

impl<'a> Command for CensusCommand<'a> {
    fn execute(&self) -> KitResult<()> {
        let census = self.kit.census(&self.input_file)?;
        let sorted = census.sorted();

        println!("Found {} unique colors (excluding white/black):\n", sorted.len());
        println!("{:<22}| {:>9} | Database Format", "Color (RGB)", "Pixels");
        println!("{}", "-".repeat(60));
        for (color, count) in sorted.iter().take(self.limit.unwrap_or(usize::MAX)) {
            let rgb = format!("RGB({}, {}, {})", color.r, color.g, color.b);
            println!("{:<22}| {:>9} | {}", rgb, count, color);
        }
        println!("\nTotal colors: {}", sorted.len());
        Ok(())
    }
}
