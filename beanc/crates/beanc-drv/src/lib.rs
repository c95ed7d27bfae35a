//! beanc-drv - command-line driver for the beancode lexer
//!
//! Wraps [`beanc_lex`] with the I/O it deliberately leaves out: argument
//! parsing, `beanc.toml` configuration, file reading, logging and the token
//! listing printed to stdout.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod session;

pub use cli::Cli;
pub use config::{Config, OutputConfig, OutputFormat};
pub use error::{DriverError, Result};
pub use session::{lex_file, lex_files, render, LexedFile, Options};
