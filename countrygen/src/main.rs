use anyhow::{Result, ensure};
use clap::Parser;
use countrygen::config::RunConfig;
use countrygen::io;
use countrygen::io::cli::Cli;
use countrygen::io::output;
use karta_rs::io::import::import_feature_collection;
use karta_rs::pipeline::process_all;
use log::{info, warn};

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match args.config_file {
        None => {
            warn!("[MAIN] no config file provided, using the built-in map targets");
            RunConfig::default()
        }
        Some(path) => io::read_run_config(&path)?,
    };

    let ext_collection = io::read_feature_collection(&args.input_file)?;
    info!("loaded {} features", ext_collection.features.len());
    let index = import_feature_collection(&ext_collection);

    let results = process_all(&index, &config.targets);
    ensure!(!results.is_empty(), "no map target produced any output");
    if results.len() < config.targets.len() {
        warn!(
            "{} of {} targets failed and were omitted",
            config.targets.len() - results.len(),
            config.targets.len()
        );
    }

    let gdscript = output::results_to_gdscript(&results);
    io::write_text(&gdscript, &args.output_file)?;

    info!(
        "processed {}/{} targets",
        results.len(),
        config.targets.len()
    );
    Ok(())
}
