//! sysroot-relink CLI
//!
//! Usage: `sysroot-relink <directory>`

use clap::Parser;
use std::io;
use std::process;
use sysroot_relink::cli::{usage_line, Cli};
use sysroot_relink::logging::init_logging;
use sysroot_relink::relink_sysroot;
use tracing::error;

fn main() {
    let Ok(cli) = Cli::try_parse() else {
        println!("{}", usage_line(&program_name()));
        process::exit(1);
    };

    if let Err(e) = init_logging() {
        eprintln!("{e}");
        process::exit(1);
    }

    let mut stdout = io::stdout().lock();
    if let Err(e) = relink_sysroot(&cli.directory, &mut stdout) {
        error!("Relinking {} failed: {e:#}", cli.directory.display());
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn program_name() -> String {
    std::env::args_os()
        .next()
        .map(|arg| arg.to_string_lossy().into_owned())
        .unwrap_or_else(|| "sysroot-relink".to_string())
}
