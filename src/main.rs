use clap::Parser;
use route_compare::cli::Cli;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    log4rs::init_file(&cli.log_config, Default::default())
        .map_err(|e| format!("Error initializing log4rs from {}: {e}", cli.log_config))?;
    log::info!("#Start main()");

    route_compare::run(&cli)?;

    Ok(())
}
