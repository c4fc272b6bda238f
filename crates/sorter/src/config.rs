//! Algorithm selection and sorter configuration

use std::fmt;
use std::str::FromStr;

use crate::error::{SortError, SortResult};

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum SortAlgorithm {
    #[default]
    Bubble,
    Insertion,
    Selection,
    Quick,
    Merge,
}

pub const ALL_ALGORITHMS: [SortAlgorithm; 5] = [
    SortAlgorithm::Bubble,
    SortAlgorithm::Insertion,
    SortAlgorithm::Selection,
    SortAlgorithm::Quick,
    SortAlgorithm::Merge,
];

pub fn all_algorithms() -> &'static [SortAlgorithm] {
    &ALL_ALGORITHMS
}

pub fn algorithm_name(algo: SortAlgorithm) -> &'static str {
    match algo {
        SortAlgorithm::Bubble => "bubble",
        SortAlgorithm::Insertion => "insertion",
        SortAlgorithm::Selection => "selection",
        SortAlgorithm::Quick => "quick",
        SortAlgorithm::Merge => "merge",
    }
}

impl SortAlgorithm {
    pub fn is_in_place(self) -> bool {
        !matches!(self, SortAlgorithm::Merge)
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(algorithm_name(*self))
    }
}

impl FromStr for SortAlgorithm {
    type Err = SortError;

    fn from_str(s: &str) -> SortResult<Self> {
        let normalized = s.trim().to_ascii_lowercase();
        let stem = normalized
            .strip_suffix("_sort")
            .or_else(|| normalized.strip_suffix("sort"))
            .unwrap_or(normalized.as_str());

        all_algorithms()
            .iter()
            .copied()
            .find(|&algo| algorithm_name(algo) == stem)
            .ok_or_else(|| SortError::unsupported_algorithm(s))
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SorterConfig {
    pub algorithm: SortAlgorithm,
    /// Skip the algorithm when the input is already non-decreasing
    pub presorted_check: bool,
}

impl SorterConfig {
    pub fn new(algorithm: SortAlgorithm) -> Self {
        Self {
            algorithm,
            ..Self::default()
        }
    }

    pub fn with_algorithm(mut self, algorithm: SortAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_presorted_check(mut self, enabled: bool) -> Self {
        self.presorted_check = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn algorithm_names_are_unique() {
        let mut seen = HashSet::new();
        for &algo in all_algorithms() {
            assert!(seen.insert(algorithm_name(algo)));
        }
    }

    #[test]
    fn names_round_trip_through_from_str() {
        for &algo in all_algorithms() {
            assert_eq!(algo.to_string().parse::<SortAlgorithm>(), Ok(algo));
        }
    }

    #[test]
    fn accepts_common_spellings() {
        let cases = [
            ("bubble", SortAlgorithm::Bubble),
            ("  Insertion ", SortAlgorithm::Insertion),
            ("SELECTION", SortAlgorithm::Selection),
            ("quick_sort", SortAlgorithm::Quick),
            ("quicksort", SortAlgorithm::Quick),
            ("MergeSort", SortAlgorithm::Merge),
        ];

        for (input, expected) in cases {
            assert_eq!(input.parse::<SortAlgorithm>(), Ok(expected), "input={input}");
        }
    }

    #[test]
    fn unknown_selector_is_rejected() {
        for input in ["heap", "radix", "", "sort", "bubble sort"] {
            assert_eq!(
                input.parse::<SortAlgorithm>(),
                Err(SortError::unsupported_algorithm(input)),
            );
        }
    }

    #[test]
    fn defaults_to_bubble_without_presorted_check() {
        let config = SorterConfig::default();
        assert_eq!(config.algorithm, SortAlgorithm::Bubble);
        assert!(!config.presorted_check);

        let config = SorterConfig::new(SortAlgorithm::Merge).with_presorted_check(true);
        assert_eq!(config.algorithm, SortAlgorithm::Merge);
        assert!(config.presorted_check);
        assert_eq!(
            config.with_algorithm(SortAlgorithm::Quick).algorithm,
            SortAlgorithm::Quick
        );
    }

    #[test]
    fn only_merge_allocates() {
        for &algo in all_algorithms() {
            assert_eq!(algo.is_in_place(), algo != SortAlgorithm::Merge);
        }
    }
}
