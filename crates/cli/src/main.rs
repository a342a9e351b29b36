mod args;
mod config;
mod logging;
mod ops;
mod state;
mod version;

use std::io::Write;

use anyhow::Context;

use args::{Args, Op, Parser};
use config::{Config, ConfigError};
use logging::Logger;
use ops::ConvertOpError;
use state::AppState;

#[derive(Debug, thiserror::Error)]
enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Op(#[from] ConvertOpError),
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

fn main() {
    let args = Args::parse();
    // run() owns the logger, so it is dropped before the process exits
    let code = run(&args);
    std::process::exit(code);
}

fn run(args: &Args) -> i32 {
    let config = Config::from_env();

    let _logger = Logger::new(&config);
    logging::register_panic_logger();
    logging::report_version();

    match execute(args, &config) {
        Ok(()) => 0,
        Err(e) => {
            report(&e);
            1
        }
    }
}

fn execute(args: &Args, config: &Config) -> Result<(), RunError> {
    let mut state = AppState::from_args(args, config)?;
    let output = args.convert.execute(&mut state)?;
    tracing::debug!(method = %output.conversion().method(), "writing result");

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", output).context("failed to write result to stdout")?;
    stdout.flush().context("failed to flush stdout")?;
    Ok(())
}

fn report(err: &RunError) {
    match err {
        RunError::Op(e) => {
            tracing::error!("{}: {}", e.label(), e);
            eprintln!("Error: {}", e);
        }
        RunError::Config(e) => {
            tracing::error!("config error: {}", e);
            eprintln!("Error: {}", e);
        }
        RunError::Unexpected(e) => {
            tracing::error!("an unexpected error occurred: {:?}", e);
            eprintln!("An unexpected error occurred: {:#}", e);
        }
    }
}
