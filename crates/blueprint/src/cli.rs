//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(name = "blueprint")]
#[command(about = "Map blueprint style records to utility classes", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Token document to use instead of the bundled tokens
    #[arg(long, global = true, env = "BLUEPRINT_TOKENS", value_name = "PATH")]
    pub tokens: Option<PathBuf>,

    /// Preset catalog to use instead of the bundled presets
    #[arg(long, global = true, env = "BLUEPRINT_PRESETS", value_name = "PATH")]
    pub presets: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the class string for a style record
    Classes {
        /// Style record file (JSON or YAML), `-` for stdin
        #[arg(default_value = "-")]
        input: PathBuf,

        /// Fill gaps in the record from a named preset first
        #[arg(long)]
        preset: Option<String>,
    },

    /// Merge a record into another without overwriting existing values
    Merge {
        /// Record whose values are kept
        existing: PathBuf,

        /// Record that only fills gaps
        incoming: PathBuf,
    },

    /// List design tokens
    Tokens {
        /// Only list one category (color, spacing, radius, shadow, font-size, breakpoint)
        #[arg(long)]
        category: Option<String>,
    },

    /// List presets
    Presets {
        /// Report preset values that would not map to a class
        #[arg(long)]
        check: bool,
    },

    /// Validate a page tree and resolve its classes
    Tree {
        /// Blueprint file (JSON or YAML), `-` for stdin
        input: PathBuf,

        /// Apply a preset to one node before resolving (requires --node)
        #[arg(long, requires = "node")]
        preset: Option<String>,

        /// Node that receives the preset
        #[arg(long, requires = "preset")]
        node: Option<String>,

        /// Output format
        #[arg(long, value_enum, default_value_t = TreeFormat::Classes)]
        format: TreeFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TreeFormat {
    /// One `id<TAB>classes` line per node
    Classes,
    /// The resolved tree as JSON
    Json,
}
