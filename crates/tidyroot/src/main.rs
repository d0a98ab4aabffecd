mod cleanup;
mod error;
mod output;

use std::process::ExitCode;

use clap::Parser;
use tidyroot_core::CleanupPlan;
use tracing_subscriber::EnvFilter;

use crate::error::CliError;

#[derive(Parser)]
#[command(name = "tidyroot")]
#[command(bin_name = "tidyroot")]
#[command(version = env!("TIDYROOT_VERSION"))]
#[command(about = "Remove stale leftovers from the project root", long_about = None)]
struct Cli {}

fn main() -> ExitCode {
    let _cli = Cli::parse();
    init_tracing();

    let plan = CleanupPlan::default();

    if let Err(e) = cleanup::run(&plan) {
        print_error(&e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_error(error: &CliError) {
    eprintln!("error: {error}");

    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        eprintln!("caused by: {cause}");
        source = std::error::Error::source(cause);
    }
}
