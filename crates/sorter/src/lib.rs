mod algorithms;
mod config;
mod display;
mod error;

use log::{debug, trace};

pub use algorithms::bubble_sort::bubble_sort;
pub use algorithms::common::{is_sorted_non_decreasing, swap};
pub use algorithms::insertion_sort::insertion_sort;
pub use algorithms::merge_sort::{merge, merge_ranges, merge_sort};
pub use algorithms::quick_sort::{partition, quick_sort, quick_sort_range};
pub use algorithms::selection_sort::selection_sort;
pub use config::{ALL_ALGORITHMS, SortAlgorithm, SorterConfig, algorithm_name, all_algorithms};
pub use display::{SequenceDisplay, display_sequence};
pub use error::{SortError, SortResult};

/// `Allocated` means the caller's slice was left unchanged.
#[derive(Clone, Debug, Eq, PartialEq)]
#[must_use]
pub enum Sorted<T> {
    InPlace,
    Allocated(Vec<T>),
}

impl<T> Sorted<T> {
    pub fn is_in_place(&self) -> bool {
        matches!(self, Sorted::InPlace)
    }

    pub fn into_vec(self, original: Vec<T>) -> Vec<T> {
        match self {
            Sorted::InPlace => original,
            Sorted::Allocated(sorted) => sorted,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Sorter {
    config: SorterConfig,
}

impl Sorter {
    pub fn new(algorithm: SortAlgorithm) -> Self {
        Self::with_config(SorterConfig::new(algorithm))
    }

    pub fn with_config(config: SorterConfig) -> Self {
        Self { config }
    }

    pub fn from_name(name: &str) -> SortResult<Self> {
        Ok(Self::new(name.parse()?))
    }

    pub fn algorithm(&self) -> SortAlgorithm {
        self.config.algorithm
    }

    pub fn config(&self) -> SorterConfig {
        self.config
    }

    pub fn set_algorithm(&mut self, algorithm: SortAlgorithm) {
        self.config.algorithm = algorithm;
    }

    pub fn sort<T: Ord + Clone>(&self, data: &mut [T]) -> Sorted<T> {
        let algo = self.config.algorithm;
        debug!("sorting {} elements with {algo} sort", data.len());

        if self.config.presorted_check && is_sorted_non_decreasing(data) {
            trace!("input already non-decreasing, skipping {algo} sort");
            return if algo.is_in_place() {
                Sorted::InPlace
            } else {
                Sorted::Allocated(data.to_vec())
            };
        }

        sort_with(algo, data)
    }

    pub fn sort_vec<T: Ord + Clone>(&self, mut data: Vec<T>) -> Vec<T> {
        let sorted = self.sort(&mut data);
        sorted.into_vec(data)
    }
}

pub fn sort_with<T: Ord + Clone>(algo: SortAlgorithm, data: &mut [T]) -> Sorted<T> {
    match algo {
        SortAlgorithm::Bubble => {
            bubble_sort(data);
            Sorted::InPlace
        }
        SortAlgorithm::Insertion => {
            insertion_sort(data);
            Sorted::InPlace
        }
        SortAlgorithm::Selection => {
            selection_sort(data);
            Sorted::InPlace
        }
        SortAlgorithm::Quick => {
            quick_sort(data);
            Sorted::InPlace
        }
        SortAlgorithm::Merge => Sorted::Allocated(merge_sort(data)),
    }
}

// Selector is resolved before `data` is touched.
pub fn sort_by_name<T: Ord + Clone>(name: &str, data: &mut Vec<T>) -> SortResult<()> {
    let sorter = Sorter::from_name(name)?;
    if let Sorted::Allocated(sorted) = sorter.sort(data) {
        *data = sorted;
    }
    Ok(())
}
