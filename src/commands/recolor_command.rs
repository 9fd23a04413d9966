//! Gray recoloring command

use clap::ArgMatches;
use std::path::PathBuf;

use super::input_arg;
use crate::api::RegionKit;
use crate::commands::command_traits::Command;
use crate::errors::{KitError, KitResult};
use crate::raster::Color;

/// Command for replacing the dominant gray of a map
pub struct RecolorCommand<'a> {
    input_file: PathBuf,
    output_file: PathBuf,
    new_color: Color,
    kit: &'a RegionKit,
}

impl<'a> RecolorCommand<'a> {
    pub fn new(args: &ArgMatches, kit: &'a RegionKit) -> KitResult<Self> {
        let color = args.get_one::<String>("recolor")
            .ok_or_else(|| KitError::GenericError("Missing replacement color".to_string()))?;
        let output_file = args.get_one::<String>("output")
            .ok_or_else(|| KitError::GenericError("Missing output file path for recoloring".to_string()))?;

        Ok(RecolorCommand {
            input_file: PathBuf::from(input_arg(args)?),
            output_file: PathBuf::from(output_file),
            new_color: Color::parse(color)?,
            kit,
        })
    }
}

impl<'a> Command for RecolorCommand<'a> {
    fn execute(&self) -> KitResult<()> {
        let (gray, replaced) = self.kit.recolor_dominant_gray(&self.input_file, &self.output_file, self.new_color)?;
        println!("Replaced {} pixels of {} with {}", replaced, gray, self.new_color);
        println!("Saved modified map to: {}", self.output_file.display());
        Ok(())
    }
}
