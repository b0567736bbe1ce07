use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use log::{info, warn};
use stowplan::config::PlanConfig;
use stowplan::io::cli::Cli;
use stowplan::io::ext_repr::ExtLoadRequest;
use stowplan::io::output::PlanOutput;
use stowplan::planner::LoadPlanner;
use stowplan::{EPOCH, io};

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config: PlanConfig = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            PlanConfig::default()
        }
        Some(config_file) => io::read_json(&config_file).context("incorrect config file format")?,
    };

    info!("[MAIN] Successfully parsed PlanConfig: {config:?}");

    let input_file_stem = args
        .input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .context("input file has no valid name")?;

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).with_context(|| {
            format!("could not create solution folder: {:?}", args.solution_folder)
        })?;
    }

    let request: ExtLoadRequest = io::read_json(args.input_file.as_path())?;
    let plan = LoadPlanner::new(config).plan(&request)?;

    let output = PlanOutput::new(&request, &plan, config, *EPOCH);
    let solution_path = args
        .solution_folder
        .join(format!("sol_{input_file_stem}.json"));

    io::write_json(&output, Path::new(&solution_path))?;

    Ok(())
}
