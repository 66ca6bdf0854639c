//! CLI argument parsing using clap derive macros

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands::init::InitCommand;

/// Onboard - repository scaffolding for new team members
///
/// Copies opinionated boilerplate into the current directory and wraps the
/// external commands used to bootstrap Maven, Spring Boot and Quarkus
/// projects.
#[derive(Parser, Debug)]
#[command(name = "onboard")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scaffold repository boilerplate in the current directory
    Init(InitCommand),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        // Set up terminal colors
        if self.no_color {
            console::set_colors_enabled(false);
            console::set_colors_enabled_stderr(false);
        }

        // Execute the subcommand
        match self.command {
            Commands::Init(cmd) => cmd.execute(self.verbose),
        }
    }
}
