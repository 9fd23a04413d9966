use clap::{Arg, Command as ClapCommand, ArgAction};
use log::{error, LevelFilter};
use std::path::Path;
use std::process;

use regionkit::RegionKit;
use regionkit::commands::{CommandFactory, RegionkitCommandFactory};
use regionkit::utils::logger::Logger;

fn main() {
    let matches = ClapCommand::new("regionkit")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Extract districts from a boundary-drawn map and overlay them onto another map")
        .arg(
            Arg::new("input")
                .help("Input image, or overlay configuration with --overlay")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Write diagnostic logs to this file instead of the console")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("record")
                .long("record")
                .help("Operation record file")
                .value_name("FILE")
                .default_value("regionkit.log"),
        )
        .arg(
            Arg::new("overlay")
                .long("overlay")
                .help("Run the overlay job described by the input TOML file")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Output image file")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("discover")
                .long("discover")
                .help("List the districts of the input image")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("scan")
                .long("scan")
                .help("Scan window for discovery (minx,miny,maxx,maxy)")
                .value_name("BBOX")
                .required(false),
        )
        .arg(
            Arg::new("step")
                .long("step")
                .help("Grid step for discovery, in pixels")
                .value_name("PIXELS")
                .required(false),
        )
        .arg(
            Arg::new("min-size")
                .long("min-size")
                .help("Smallest district reported by discovery, in pixels")
                .value_name("PIXELS")
                .required(false),
        )
        .arg(
            Arg::new("boundary-below")
                .long("boundary-below")
                .help("Pixels with every channel below this are outline ink")
                .value_name("LEVEL")
                .required(false),
        )
        .arg(
            Arg::new("background-above")
                .long("background-above")
                .help("Pixels with every channel above this are background")
                .value_name("LEVEL")
                .required(false),
        )
        .arg(
            Arg::new("compare")
                .long("compare")
                .help("Compare the input map's colors with this newer map")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("recolor")
                .long("recolor")
                .help("Replace the dominant gray with this color (r,g,b or #rrggbb)")
                .value_name("COLOR")
                .required(false),
        )
        .arg(
            Arg::new("limit")
                .long("limit")
                .help("Show at most this many colors in the census")
                .value_name("N")
                .required(false),
        )
        .get_matches();

    let level = if matches.get_flag("verbose") { LevelFilter::Debug } else { LevelFilter::Info };
    match matches.get_one::<String>("log-file") {
        Some(log_file) => {
            if let Err(e) = Logger::init_global_logger(log_file, level) {
                eprintln!("Error setting up global logger: {}", e);
                process::exit(1);
            }
        }
        None => {
            env_logger::Builder::new()
                .filter_level(level)
                .parse_default_env()
                .init();
        }
    }

    let record = matches.get_one::<String>("record").map(Path::new);
    let kit = match RegionKit::new(record) {
        Ok(kit) => kit,
        Err(e) => {
            eprintln!("Error initializing operation record: {}", e);
            process::exit(1);
        }
    };

    let factory = RegionkitCommandFactory::new();

    let command_result = factory.create_command(&matches, &kit);
    match command_result {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
