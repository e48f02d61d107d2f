use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use dtutil::cli::{self, Cli};
use dtutil::config::Config;
use dtutil::logger;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match try_main(&cli) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn try_main(cli: &Cli) -> Result<String> {
    let config = match &cli.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load()?,
    };
    logger::init(&config.logging)?;

    cli::run(cli, &config)
}
