//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::Parser;
use clap_complete::Shell;
use std::path::PathBuf;

use crate::checks::CheckName;

/// gauntlet - Run a project's verification checks in sequence and fail fast.
#[derive(Debug, Parser)]
#[command(name = "gauntlet")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Checks to run (default: all, in canonical order)
    #[arg(long, value_enum, num_args = 1.., value_name = "CHECK")]
    pub checks: Vec<CheckName>,

    /// Path to config file (overrides default .gauntlet/config.yml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides discovery from the current directory)
    #[arg(short, long)]
    pub project: Option<PathBuf>,

    /// Source package substituted for ${package} in check commands
    #[arg(long, env = "GAUNTLET_PACKAGE")]
    pub package: Option<String>,

    /// Write a JSON run report to this file
    #[arg(long, value_name = "FILE")]
    pub report: Option<PathBuf>,

    /// List checks and their commands without running anything
    #[arg(long)]
    pub list: bool,

    /// Print shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,

    /// Show verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}
