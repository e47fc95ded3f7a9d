//! cxx-examples - clean, build, run or rebuild every example project
//!
//! Walks the `examples` directory and runs the external `cxx` build tool on
//! each project, one stage at a time. The first failing invocation stops
//! everything with exit status 1.
//!
//! ## Architecture
//!
//! ```text
//! cli → commands::all → exec::cxx → cxx (external)
//! ```

mod cli;
mod commands;
mod error;
mod exec;
mod utils;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::Cli;
use error::ExamplesError;

/// Initialize tracing; diagnostics always go to stderr so stdout stays the
/// tool's own progress output
fn init_tracing(verbose: bool) {
    let default = if verbose { "cxx_examples=debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| default.into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = cli.execute() {
        match err.downcast_ref::<ExamplesError>() {
            Some(err) => err.report(),
            None => eprintln!("{}: {:#}", console::style("error").red().bold(), err),
        }
        std::process::exit(1);
    }
}
