mod cli;

use azureservicetags::{ConfigBuilder, Result, Updater};
use clap::Parser;
use log::error;
use std::process::ExitCode;

/*-------------------------------------------------------------------------------------------------
  Main CLI Function
-------------------------------------------------------------------------------------------------*/

fn main() -> ExitCode {
    let args = cli::Args::parse();

    // Initialize logging
    if let Err(error) = stderrlog::new()
        .module(module_path!())
        .verbosity(args.verbose.log_level_filter())
        .init()
    {
        eprintln!("Failed to initialize logging: {error}");
    }

    match update(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            error!("{}", error);
            ExitCode::FAILURE
        }
    }
}

/*--------------------------------------------------------------------------------------
  Update
--------------------------------------------------------------------------------------*/

fn update(args: &cli::Args) -> Result<()> {
    let config = ConfigBuilder::default()
        .download_page_url(&args.download_page_url)
        .download_base_url(&args.download_base_url)
        .project_root(&args.root)
        .build();
    let updater = Updater::new(config);

    let source = updater.locate()?;
    cli::output::downloading(&source);

    let service_tags = updater.fetch(&source)?;
    updater.process_with(&service_tags, cli::output::written)?;

    Ok(())
}
