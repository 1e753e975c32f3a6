//! optref - regenerates the options reference document.
//!
//! Takes no required arguments: paths, commands and the section layout are
//! compiled in and can be overridden through `optref.toml`.

use std::process::ExitCode;

use clap::Parser;
use optref::{
    cli::{self, Cli},
    tracing_config,
};

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = tracing_config::init() {
        eprintln!("failed to initialize logging: {e}");
    }

    cli::run(&cli)
}
