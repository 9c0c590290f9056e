mod command_line;
mod dynamodb;
mod error;
mod fixture;
mod logging;
mod provision;
mod utils;


use clap::Parser;
use std::process::ExitCode;
use tracing::error;

use command_line::{Args, Config};

#[tokio::main]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();
    let config = Config::from(Args::parse());

    if let Err(e) = logging::init_logging(config.log_level) {
        eprintln!("Failed to initialise logging: {e:#}");
        return ExitCode::FAILURE;
    }

    match command_line::run(&config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::from(e.exit_code())
        }
    }
}
