//! Selection between the available merge sort implementations.

use std::num::NonZeroUsize;
use std::thread;

use clap::ValueEnum;

use crate::error::SortError;
use crate::multicore_sort::{merge_sort_parallel, merge_sort_threadpool};
use crate::single_core_sort::{merge_sort, merge_sort_bottom_up, SortTraits};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Strategy {
    /// Top-down recursive split and merge
    #[default]
    Recursive,
    /// Iterative passes over doubling run widths
    BottomUp,
    /// Recursive, forking halves onto scoped threads
    Parallel,
    /// Bottom-up passes executed on a worker pool
    ThreadPool,
}

/// Knobs for the multicore strategies; ignored by the single core ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOptions {
    pub threads: usize,
    pub depth: usize,
}

impl Default for SortOptions {
    fn default() -> Self {
        let threads = thread::available_parallelism()
            .map(NonZeroUsize::get)
            .unwrap_or(1);
        Self {
            threads,
            depth: fork_depth(threads),
        }
    }
}

/// Number of fork levels needed to keep `threads` cores busy.
pub fn fork_depth(threads: usize) -> usize {
    threads.next_power_of_two().trailing_zeros() as usize
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::Recursive,
        Strategy::BottomUp,
        Strategy::Parallel,
        Strategy::ThreadPool,
    ];

    pub fn sort<T>(&self, input: &[T], options: &SortOptions) -> Result<Vec<T>, SortError>
    where
        T: SortTraits + Send + Sync + 'static,
    {
        Ok(match self {
            Strategy::Recursive => merge_sort(input),
            Strategy::BottomUp => merge_sort_bottom_up(input),
            Strategy::Parallel => merge_sort_parallel(input, options.depth),
            Strategy::ThreadPool => merge_sort_threadpool(input, options.threads)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fork_depth_covers_threads() {
        assert_eq!(fork_depth(1), 0);
        assert_eq!(fork_depth(2), 1);
        assert_eq!(fork_depth(3), 2);
        assert_eq!(fork_depth(8), 3);
    }

    #[test]
    fn default_options_have_a_worker() {
        assert!(SortOptions::default().threads >= 1);
    }

    #[test]
    fn every_strategy_sorts() {
        let options = SortOptions { threads: 2, depth: 1 };
        for strategy in Strategy::ALL {
            assert_eq!(
                strategy.sort(&[3i64, 1, 2], &options).unwrap(),
                vec![1, 2, 3],
                "{strategy:?}"
            );
        }
    }
}
