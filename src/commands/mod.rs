//! CLI command implementations
//!
//! This module contains implementations of the commands
//! supported by the CLI application using the Command pattern.

pub mod command_traits;
pub mod census_command;
pub mod compare_command;
pub mod discover_command;
pub mod overlay_command;
pub mod recolor_command;

pub use command_traits::{Command, CommandFactory};
pub use census_command::CensusCommand;
pub use compare_command::CompareCommand;
pub use discover_command::DiscoverCommand;
pub use overlay_command::OverlayCommand;
pub use recolor_command::RecolorCommand;

use clap::ArgMatches;
use crate::api::RegionKit;
use crate::errors::{KitError, KitResult};

/// Factory for creating command instances based on CLI arguments
///
/// This factory examines the command-line arguments and creates
/// the appropriate command instance for execution.
#[derive(Default)]
pub struct RegionkitCommandFactory;

impl RegionkitCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        RegionkitCommandFactory
    }
}

impl<'a> CommandFactory<'a> for RegionkitCommandFactory {
    fn create_command(&self, args: &ArgMatches, kit: &'a RegionKit) -> KitResult<Box<dyn Command + 'a>> {
        if args.get_flag("overlay") {
            Ok(Box::new(OverlayCommand::new(args, kit)?))
        } else if args.get_flag("discover") {
            Ok(Box::new(DiscoverCommand::new(args, kit)?))
        } else if args.contains_id("compare") {
            Ok(Box::new(CompareCommand::new(args, kit)?))
        } else if args.contains_id("recolor") {
            Ok(Box::new(RecolorCommand::new(args, kit)?))
        } else {
            // Default to a color census of the input
            Ok(Box::new(CensusCommand::new(args, kit)?))
        }
    }
}

/// The required positional input
pub(crate) fn input_arg(args: &ArgMatches) -> KitResult<String> {
    args.get_one::<String>("input")
        .cloned()
        .ok_or_else(|| KitError::GenericError("Missing input file".to_string()))
}

/// Parse an optional numeric argument
pub(crate) fn parse_arg<T: std::str::FromStr>(args: &ArgMatches, name: &str) -> KitResult<Option<T>> {
    match args.get_one::<String>(name) {
        Some(text) => text
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| KitError::GenericError(format!("Invalid value for --{}: {}", name, text))),
        None => Ok(None),
    }
}
