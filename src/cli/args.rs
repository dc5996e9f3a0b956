//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Sitemapper CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Show debug output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output directory path (relative to project root)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Content directory path (relative to project root)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub content: Option<PathBuf>,

    /// Config file path (default: sitemapper.toml)
    #[arg(short = 'C', long, default_value = "sitemapper.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Build the sitemap file under the output directory
    #[command(visible_alias = "b")]
    Build {
        /// Strip whitespace from the generated XML
        #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
        minify: Option<bool>,
    },

    /// List sitemap entries as JSON
    #[command(visible_alias = "l")]
    List,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_parses_with_defaults() {
        let cli = Cli::parse_from(["sitemapper", "build"]);
        assert_eq!(cli.config, PathBuf::from("sitemapper.toml"));
        assert!(matches!(cli.command, Commands::Build { minify: None }));
    }

    #[test]
    fn test_build_minify_flag_without_value() {
        let cli = Cli::parse_from(["sitemapper", "build", "--minify"]);
        assert!(matches!(cli.command, Commands::Build { minify: Some(true) }));
    }

    #[test]
    fn test_list_alias() {
        let cli = Cli::parse_from(["sitemapper", "l"]);
        assert!(matches!(cli.command, Commands::List));
    }
}
