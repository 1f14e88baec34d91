//! Merge sort over integer sequences.
//!
//! [`single_core_sort::merge_sort`] is the reference top-down algorithm. The
//! other implementations produce the same output: an iterative bottom-up
//! version and two multicore versions.

pub mod cli;
pub mod demo;
pub mod error;
pub mod logging;
pub mod multicore_sort;
pub mod single_core_sort;
pub mod strategy;

pub use error::SortError;
pub use single_core_sort::{merge, merge_sort};
pub use strategy::{SortOptions, Strategy};
