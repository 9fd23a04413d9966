//! Map comparison command
//!
//! Reports which region colors of an old map survive in a new version,
//! i.e. which color mappings stay valid.

use clap::ArgMatches;
use std::path::PathBuf;

use super::input_arg;
use crate::api::RegionKit;
use crate::commands::command_traits::Command;
use crate::errors::{KitError, KitResult};
use crate::raster::Color;

const SHOW_COMMON: usize = 50;
const SHOW_LOST: usize = 20;

/// Command for comparing the palettes of two maps
pub struct CompareCommand<'a> {
    old_file: PathBuf,
    new_file: PathBuf,
    kit: &'a RegionKit,
}

impl<'a> CompareCommand<'a> {
    pub fn new(args: &ArgMatches, kit: &'a RegionKit) -> KitResult<Self> {
        let new_file = args.get_one::<String>("compare")
            .ok_or_else(|| KitError::GenericError("Missing map to compare against".to_string()))?;
        Ok(CompareCommand {
            old_file: PathBuf::from(input_arg(args)?),
            new_file: PathBuf::from(new_file),
            kit,
        })
    }

    fn print_colors(colors: &[Color], limit: usize) {
        for color in colors.iter().take(limit) {
            println!("  {}", color);
        }
        if colors.len() > limit {
            println!("\n  ... and {} more", colors.len() - limit);
        }
    }
}

impl<'a> Command for CompareCommand<'a> {
    fn execute(&self) -> KitResult<()> {
        let cmp = self.kit.compare(&self.old_file, &self.new_file)?;

        println!("Old map colors: {}", cmp.old_total);
        println!("New map colors: {}\n", cmp.new_total);

        println!("Colors that exist in BOTH maps: {}", cmp.common.len());
        Self::print_colors(&cmp.common, SHOW_COMMON);

        println!("\nColors ONLY in old map (mappings will be LOST): {}", cmp.only_old.len());
        Self::print_colors(&cmp.only_old, SHOW_LOST);

        println!("\nNEW colors in new map: {}", cmp.only_new.len());

        println!("\nPreservation rate: {:.1}%", cmp.preservation_rate());
        if cmp.looks_antialiased() {
            println!("WARNING: New map has anti-aliasing/gradients; color-based mappings will be unreliable.");
        }
        Ok(())
    }
}
