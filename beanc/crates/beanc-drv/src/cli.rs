//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

use crate::config::OutputFormat;

/// beanc - lexer front end for the beancode teaching language
///
/// Reads each source file, lexes it, and prints the token listing.
#[derive(Parser, Debug)]
#[command(name = "beanc")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "The beancode transpiler front end", long_about = None)]
pub struct Cli {
    /// Source files to lex
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, env = "BEANC_VERBOSE")]
    pub verbose: bool,

    /// Path to configuration file
    #[arg(short, long, env = "BEANC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, env = "BEANC_NO_COLOR")]
    pub no_color: bool,

    /// Output format (default: from config)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Don't print the banner line
    #[arg(long)]
    pub no_banner: bool,
}
