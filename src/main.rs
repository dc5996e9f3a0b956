//! Sitemapper - sitemap generator for docs-and-blog sites.

#![allow(dead_code)]

mod cli;
mod config;
mod core;
mod logger;
mod page;
mod sitemap;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SiteConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let mut config = SiteConfig::load(&cli)?;

    match &cli.command {
        Commands::Build { minify } => {
            if let Some(minify) = minify {
                config.build.minify = *minify;
            }
            cli::build_sitemap(&config)
        }
        Commands::List => cli::list_entries(&config),
    }
}
