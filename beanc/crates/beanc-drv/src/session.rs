//! One invocation of the driver: resolved options, lexed files, and the
//! rendered listing.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use beanc_lex::render::render_tokens;
use beanc_lex::{tokenize, TokenStream};
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info};

use crate::cli::Cli;
use crate::config::{Config, OutputFormat};
use crate::error::{DriverError, Result};

/// First line of every text listing.
pub const BANNER: &str = "The beancode transpiler.";

/// Settings after merging command-line flags over the configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Debug-level logging.
    pub verbose: bool,
    /// ANSI colors in log output.
    pub color: bool,
    /// Listing format.
    pub format: OutputFormat,
    /// Print [`BANNER`] before text listings.
    pub banner: bool,
}

impl Options {
    /// Flags only ever switch things on (`-v`) or off (`--no-color`,
    /// `--no-banner`); an explicit `--format` replaces the configured one.
    pub fn resolve(cli: &Cli, config: &Config) -> Self {
        Self {
            verbose: cli.verbose || config.verbose,
            color: !cli.no_color && config.color,
            format: cli.format.unwrap_or(config.output.format),
            banner: !cli.no_banner && config.output.banner,
        }
    }
}

/// The tokens of one source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LexedFile {
    /// Path as given on the command line.
    pub path: PathBuf,
    /// Every token, ending in end-of-input.
    pub tokens: TokenStream,
}

/// Reads and lexes a single file.
pub fn lex_file(path: &Path) -> Result<LexedFile> {
    let source = std::fs::read_to_string(path).map_err(|source| DriverError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let tokens = tokenize(&source);
    debug!(path = %path.display(), bytes = source.len(), tokens = tokens.len(), "lexed file");

    Ok(LexedFile {
        path: path.to_path_buf(),
        tokens,
    })
}

/// Lexes files in parallel. The result keeps the order of `paths`; if any
/// file is unreadable, the error reported is the one for the earliest path.
pub fn lex_files(paths: &[PathBuf]) -> Result<Vec<LexedFile>> {
    info!(files = paths.len(), "lexing");
    let results: Vec<Result<LexedFile>> = paths.par_iter().map(|path| lex_file(path)).collect();
    results.into_iter().collect()
}

/// Renders lexed files in the requested format.
pub fn render(files: &[LexedFile], options: &Options) -> Result<String> {
    match options.format {
        OutputFormat::Text => Ok(render_text(files, options.banner)),
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(files)?;
            out.push('\n');
            Ok(out)
        }
    }
}

fn render_text(files: &[LexedFile], banner: bool) -> String {
    let mut out = String::new();
    if banner {
        out.push_str(BANNER);
        out.push('\n');
    }

    let headers = files.len() > 1;
    for file in files {
        if headers {
            let _ = writeln!(out, "==> {}", file.path.display());
        }
        out.push_str(&render_tokens(file.tokens.as_slice()));
    }
    out
}
