//! CLI parse: clap types for the demonstration binary, plus the mapping into
//! library configuration.

use std::num::NonZeroUsize;

use clap::Parser;

use crate::demo::Variant;
use crate::logging::LoggingConfig;
use crate::strategy::{fork_depth, SortOptions, Strategy};

/// Sorts a fixed set of integer arrays with merge sort and prints them
#[derive(Debug, Parser)]
#[command(name = "merge-sort-demo")]
#[command(about = "Sort literal integer arrays with merge sort")]
pub struct Cli {
    /// Which sorting implementation to run
    #[arg(long, value_enum, default_value_t = Strategy::Recursive)]
    pub strategy: Strategy,

    /// Which arrays to print
    #[arg(long, value_enum, default_value_t = Variant::Cases)]
    pub variant: Variant,

    /// Worker threads for the thread-pool strategy (default: available cores)
    #[arg(long)]
    pub threads: Option<NonZeroUsize>,

    /// Fork depth for the parallel strategy (default: derived from threads)
    #[arg(long)]
    pub depth: Option<usize>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable logging
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Cli {
    pub fn sort_options(&self) -> SortOptions {
        let defaults = SortOptions::default();
        let threads = self
            .threads
            .map(NonZeroUsize::get)
            .unwrap_or(defaults.threads);
        SortOptions {
            threads,
            depth: self.depth.unwrap_or_else(|| fork_depth(threads)),
        }
    }

    /// Precedence: explicit level over verbose over defaults.
    pub fn logging_config(&self) -> LoggingConfig {
        let mut config = LoggingConfig::default();
        if self.quiet {
            config.enabled = false;
        }
        if self.verbose {
            config.level = "debug".to_string();
        }
        if let Some(ref level) = self.log_level {
            config.level = level.clone();
        }
        config
    }
}
