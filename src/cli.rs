//! Command-line arguments.

use clap::Parser;
use std::path::PathBuf;

/// Rewrite absolute symlinks in a sysroot into relative ones.
///
/// The only accepted argument is the sysroot directory. There are no flags,
/// so a directory named `-v` or `--help` is taken literally.
#[derive(Debug, Parser)]
#[command(
    name = "sysroot-relink",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    /// Sysroot directory to rewrite in place
    #[arg(allow_hyphen_values = true)]
    pub directory: PathBuf,
}

/// Usage line printed when the arguments are wrong.
#[must_use]
pub fn usage_line(program: &str) -> String {
    format!("Usage is {program}<directory>")
}
