use std::ops::Range;

use crate::error::{SortError, SortResult};

use super::common;

/// Partitions `data[start..=end]` around the pivot `data[end]` and returns the
/// pivot's final index. An empty range (`start == end + 1`) returns `end`.
pub fn partition<T: Ord>(data: &mut [T], start: usize, end: usize) -> SortResult<usize> {
    if data.is_empty() {
        return Err(SortError::EmptyPartition);
    }
    common::check_inclusive_bounds(data.len(), start, end)?;
    if start > end {
        return Ok(end);
    }
    Ok(partition_unchecked(data, start, end))
}

fn partition_unchecked<T: Ord>(data: &mut [T], start: usize, end: usize) -> usize {
    debug_assert!(start <= end && end < data.len());

    let mut pivot = end;
    let mut cmp = start;

    while cmp < pivot {
        if data[cmp] < data[pivot] {
            cmp += 1;
            continue;
        }

        if pivot - cmp == 1 {
            data.swap(cmp, pivot);
        } else {
            // pivot -> pivot - 1, data[pivot - 1] -> cmp, data[cmp] -> pivot
            data.swap(cmp, pivot);
            data.swap(cmp, pivot - 1);
        }
        pivot -= 1;
    }

    pivot
}

pub fn quick_sort<T: Ord>(data: &mut [T]) {
    quick_sort_recursive(data);
}

pub fn quick_sort_range<T: Ord>(data: &mut [T], range: Range<usize>) -> SortResult<()> {
    let len = data.len();
    if range.start > range.end {
        return Err(SortError::index_out_of_range(range.start, len));
    }
    if range.end > len {
        return Err(SortError::index_out_of_range(range.end - 1, len));
    }
    quick_sort_recursive(&mut data[range]);
    Ok(())
}

// Smaller side recursed, larger side looped: O(log n) frames.
fn quick_sort_recursive<T: Ord>(mut data: &mut [T]) {
    while data.len() > 1 {
        let pivot = partition_unchecked(data, 0, data.len() - 1);
        let (left, rest) = data.split_at_mut(pivot);
        let right = &mut rest[1..];

        if left.len() < right.len() {
            quick_sort_recursive(left);
            data = right;
        } else {
            quick_sort_recursive(right);
            data = left;
        }
    }
}
