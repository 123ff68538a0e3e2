use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// GeoJSON feature collection with country boundaries
    #[arg(short, long, value_name = "FILE")]
    pub input_file: PathBuf,
    /// Destination of the generated GDScript constants
    #[arg(short, long, value_name = "FILE")]
    pub output_file: PathBuf,
    /// Map target configuration, uses the built-in targets if omitted
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
}
