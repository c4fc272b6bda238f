use std::cmp::Ordering;
use std::ops::RangeInclusive;

use crate::error::SortResult;

use super::common;

/// Equal heads are emitted together, left first; nothing is dropped.
pub fn merge<T: Ord + Clone>(left: &[T], right: &[T]) -> Vec<T> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut i = 0;
    let mut j = 0;

    while i < left.len() && j < right.len() {
        match left[i].cmp(&right[j]) {
            Ordering::Less => {
                merged.push(left[i].clone());
                i += 1;
            }
            Ordering::Greater => {
                merged.push(right[j].clone());
                j += 1;
            }
            Ordering::Equal => {
                merged.push(left[i].clone());
                merged.push(right[j].clone());
                i += 1;
                j += 1;
            }
        }
    }

    merged.extend_from_slice(&left[i..]);
    merged.extend_from_slice(&right[j..]);
    merged
}

/// Merges two sorted runs of `data`, each given as inclusive bounds, into a
/// new vector. `data` is only read.
pub fn merge_ranges<T: Ord + Clone>(
    data: &[T],
    left: RangeInclusive<usize>,
    right: RangeInclusive<usize>,
) -> SortResult<Vec<T>> {
    let (left_start, left_end) = left.into_inner();
    let (right_start, right_end) = right.into_inner();
    common::check_inclusive_bounds(data.len(), left_start, left_end)?;
    common::check_inclusive_bounds(data.len(), right_start, right_end)?;

    Ok(merge(
        &data[left_start..=left_end],
        &data[right_start..=right_end],
    ))
}

pub fn merge_sort<T: Ord + Clone>(data: &[T]) -> Vec<T> {
    if data.len() <= 1 {
        return data.to_vec();
    }

    let (left, right) = data.split_at(data.len() / 2);
    merge(&merge_sort(left), &merge_sort(right))
}
