//! Demonstration harness: sorts a fixed set of literal arrays and prints them.

use std::io::Write;

use clap::ValueEnum;
use tracing::debug;

use crate::error::SortError;
use crate::strategy::{SortOptions, Strategy};

/// The single array sorted by the `single` variant.
pub const SINGLE_CASE: [i64; 8] = [5, 2, 4, 7, 1, 3, 2, 6];

/// Literal inputs printed by the `cases` variant, in output order.
pub fn demo_cases() -> Vec<Vec<i64>> {
    vec![
        SINGLE_CASE.to_vec(),
        vec![],
        vec![1],
        vec![5, 4, 3, 2, 1],
        vec![1, 1, 1, 1],
        vec![-5, -2, -4, 0, 3, 2, 1],
        vec![10, 20, 30, 40, 50],
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Variant {
    /// Every literal case as `Test case <n>: [...]`
    #[default]
    Cases,
    /// One array as `Sorted array: [...]`
    Single,
}

/// Renders a sequence as a bracketed, comma separated list.
pub fn format_sequence(values: &[i64]) -> String {
    let items: Vec<String> = values.iter().map(i64::to_string).collect();
    format!("[{}]", items.join(", "))
}

/// Runs the chosen variant, writing one line per sorted array to `out`.
pub fn run<W: Write>(
    out: &mut W,
    variant: Variant,
    strategy: Strategy,
    options: &SortOptions,
) -> Result<(), SortError> {
    match variant {
        Variant::Cases => {
            for (index, case) in demo_cases().iter().enumerate() {
                debug!(case = index + 1, len = case.len(), ?strategy, "sorting");
                let sorted = strategy.sort(case, options)?;
                writeln!(out, "Test case {}: {}", index + 1, format_sequence(&sorted))?;
            }
        }
        Variant::Single => {
            let sorted = strategy.sort(&SINGLE_CASE, options)?;
            writeln!(out, "Sorted array: {}", format_sequence(&sorted))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_like_a_list_literal() {
        assert_eq!(format_sequence(&[1, 2, 2, 3]), "[1, 2, 2, 3]");
        assert_eq!(format_sequence(&[-5, 0]), "[-5, 0]");
        assert_eq!(format_sequence(&[]), "[]");
    }

    #[test]
    fn single_variant_output() {
        let mut out = Vec::new();
        run(&mut out, Variant::Single, Strategy::Recursive, &SortOptions::default()).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Sorted array: [1, 2, 2, 3, 4, 5, 6, 7]\n"
        );
    }

    #[test]
    fn cases_variant_numbers_from_one() {
        let mut out = Vec::new();
        run(&mut out, Variant::Cases, Strategy::BottomUp, &SortOptions::default()).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), demo_cases().len());
        assert_eq!(lines[0], "Test case 1: [1, 2, 2, 3, 4, 5, 6, 7]");
        assert_eq!(lines[1], "Test case 2: []");
    }
}
