//! Command-line interface for the `zmember` CLI application.

mod build;
pub mod constants;
mod verify;

use clap::Parser;
use eyre::{Result, ensure, eyre};
use zmember_core::base::{FieldElement, parse_decimal};
use zmember_tree::MAX_TREE_DEPTH;

pub use self::build::BuildArgs;
pub use self::verify::VerifyArgs;

/// Command-line interface definition.
#[derive(Debug, Parser)]
#[command(name = "zmember")]
#[command(about = "Fixed-depth membership sets with per-context nullifiers")]
pub struct Cli {
    /// CLI top-level command.
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands.
#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Build a membership set and export its root and per-participant witnesses.
    Build {
        /// Build arguments.
        #[command(flatten)]
        args: BuildArgs,
    },
    /// Check a witness record against a root record.
    Verify {
        /// Verify arguments.
        #[command(flatten)]
        args: VerifyArgs,
    },
    /// Print the JSON schemas of the exported records.
    Schema,
}

pub fn parse_depth(s: &str) -> Result<u8> {
    let depth: u8 = s
        .parse()
        .map_err(|_| eyre!("Invalid depth: {s}. Expected an integer."))?;
    ensure!(
        (1..=MAX_TREE_DEPTH).contains(&depth),
        "Invalid depth: {depth}. Expected 1..={MAX_TREE_DEPTH}."
    );
    Ok(depth)
}

pub fn parse_field_element(s: &str) -> Result<FieldElement> {
    parse_decimal(s).map_err(|e| eyre!("Invalid field element: {e}"))
}
