//! CLI argument definitions and command implementations.

mod args;
mod build;
mod list;

pub use args::{Cli, Commands};
pub use build::build_sitemap;
pub use list::list_entries;
