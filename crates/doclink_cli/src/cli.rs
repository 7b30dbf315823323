//! CLI argument definitions

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// doclink - Find documentation links in source comments
#[derive(Parser)]
#[command(name = "doclink")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Comma-separated tags, overriding the configuration (e.g. "@doc,@see")
    #[arg(long, global = true, value_name = "LIST")]
    pub tags: Option<String>,

    /// Comma-separated separators, overriding the configuration (e.g. ":,#")
    #[arg(long, global = true, value_name = "LIST")]
    pub separators: Option<String>,

    /// Comma-separated line prefixes, overriding the configuration (e.g. "L")
    #[arg(long, global = true, value_name = "LIST")]
    pub line_prefixes: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan files for documentation links
    Scan {
        /// Files or glob patterns to scan
        #[arg(required = true)]
        patterns: Vec<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Print a link to a file, or insert it into another file
    Link {
        /// Path the link points to
        path: String,

        /// Target line (1-indexed)
        #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
        line: i64,

        /// Comment marker written before the link
        #[arg(long, default_value = "//")]
        comment: String,

        /// File to insert the link into
        #[arg(long, value_name = "FILE", requires = "at")]
        into: Option<PathBuf>,

        /// Byte offset in FILE where the link is inserted
        #[arg(long, value_name = "OFFSET", requires = "into")]
        at: Option<usize>,
    },

    /// Initialize configuration
    Init {
        /// Force overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
