//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use slipway::{Compiler, CrtLinkage, Os};

/// Slipway - configure, build, and package netCDF-C
#[derive(Parser)]
#[command(name = "slipway")]
#[command(author, version, about, long_about = None)]
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

#[derive(Subcommand)]
pub enum Commands {
    /// Check an option selection against the platform and the supported
    /// upstream catalog
    Validate(SelectionArgs),

    /// Show the external requirements implied by an option selection
    Deps(DepsArgs),

    /// Show the CMake cache flags for an option selection
    Flags(FlagsArgs),

    /// Show the package metadata exposed to consumers
    Describe(DescribeArgs),

    /// Run the CMake configure step for the upstream source tree
    Configure(ConfigureArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Platform and option selection shared by all commands.
#[derive(Args)]
pub struct SelectionArgs {
    /// Profile file with [platform] and [options] tables
    #[arg(long, value_name = "PATH")]
    pub profile: Option<PathBuf>,

    /// Target operating system (defaults to the host)
    #[arg(long, value_enum)]
    pub os: Option<Os>,

    /// Target compiler family (defaults to the host's convention)
    #[arg(long, value_enum)]
    pub compiler: Option<Compiler>,

    /// MSVC runtime linkage
    #[arg(long, value_enum)]
    pub runtime: Option<CrtLinkage>,

    /// Option override, NAME=VALUE (repeatable)
    #[arg(short = 'o', long = "option", value_name = "NAME=VALUE")]
    pub options: Vec<String>,
}

#[derive(Args)]
pub struct DepsArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Emit JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct FlagsArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Emit JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct DescribeArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Installed package tree to collect produced libraries from
    #[arg(long, value_name = "DIR")]
    pub prefix: Option<PathBuf>,

    /// Emit JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct ConfigureArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Unpacked upstream source tree
    #[arg(long, value_name = "DIR")]
    pub source_dir: PathBuf,

    /// Build directory
    #[arg(long, value_name = "DIR", default_value = "build")]
    pub build_dir: PathBuf,

    /// Install prefix
    #[arg(long, value_name = "DIR", default_value = "package")]
    pub prefix: PathBuf,

    /// Configure a release build
    #[arg(short, long)]
    pub release: bool,

    /// CMake generator
    #[arg(short = 'G', long, value_name = "GENERATOR")]
    pub generator: Option<String>,

    /// Print the cmake invocation instead of running it
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
