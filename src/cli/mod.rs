//! Command-line interface for `freight-quote`
//!
//! - `args`: clap argument definitions
//! - `commands`: subcommand execution
//! - `output`: JSON, YAML and text rendering

mod args;
mod commands;
mod output;

pub use args::{Cli, Commands, OutputFormat};
pub use commands::{execute, load_config};
pub use output::{render_quotation, render_rates, render_volume_weight};
