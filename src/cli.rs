//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI parser for `confgen`.
#[derive(Debug, Parser)]
#[command(name = "confgen", version, about = "Generate config schemas and diff configurations")]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate the nested config tree and class metadata from a model.
    Generate {
        /// Path to the class model document (YAML).
        #[arg(long, value_name = "FILE")]
        model: PathBuf,
        /// Directory to write generated artifacts into.
        #[arg(long, value_name = "DIR", default_value = "out")]
        out: PathBuf,
    },
    /// Compute the delta between a base and a patched configuration.
    Delta {
        /// Path to the base configuration (JSON object).
        #[arg(long, value_name = "FILE")]
        base: PathBuf,
        /// Path to the patched configuration (JSON object).
        #[arg(long, value_name = "FILE")]
        patched: PathBuf,
        /// Directory to write generated artifacts into.
        #[arg(long, value_name = "DIR", default_value = "out")]
        out: PathBuf,
    },
    /// Apply a previously computed delta to a base configuration.
    Patch {
        /// Path to the base configuration (JSON object).
        #[arg(long, value_name = "FILE")]
        base: PathBuf,
        /// Path to the delta document (JSON).
        #[arg(long, value_name = "FILE")]
        delta: PathBuf,
        /// Directory to write generated artifacts into.
        #[arg(long, value_name = "DIR", default_value = "out")]
        out: PathBuf,
    },
    /// Run the full pipeline: schema generation, delta, and patch.
    All {
        /// Path to the class model document (YAML).
        #[arg(long, value_name = "FILE")]
        model: PathBuf,
        /// Path to the base configuration (JSON object).
        #[arg(long, value_name = "FILE")]
        base: PathBuf,
        /// Path to the patched configuration (JSON object).
        #[arg(long, value_name = "FILE")]
        patched: PathBuf,
        /// Directory to write generated artifacts into.
        #[arg(long, value_name = "DIR", default_value = "out")]
        out: PathBuf,
    },
}
