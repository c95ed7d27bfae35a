//! beanc - lexes beancode sources and prints their tokens.

use std::io::Write;

use anyhow::Context;
use beanc_drv::{lex_files, logging, render, Cli, Config, Options};
use clap::Parser;
use tracing::debug;

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (config, config_path) =
        Config::load(cli.config.as_deref()).context("could not load configuration")?;
    let options = Options::resolve(&cli, &config);

    logging::init(options.verbose, !options.color)?;
    match &config_path {
        Some(path) => debug!(path = %path.display(), "loaded configuration"),
        None => debug!("no configuration file found, using defaults"),
    }
    debug!(?options, "resolved options");

    let files = lex_files(&cli.files)?;
    let listing = render(&files, &options).context("could not render tokens")?;

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(listing.as_bytes())
        .and_then(|()| stdout.flush())
        .context("could not write to stdout")?;

    Ok(())
}
