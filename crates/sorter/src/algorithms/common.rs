use crate::error::{SortError, SortResult};

/// Checked exchange for callers outside the crate; the algorithms use
/// `slice::swap` on indices they already know are in bounds.
pub fn swap<T>(data: &mut [T], i: usize, j: usize) -> SortResult<()> {
    let len = data.len();
    if i >= len {
        return Err(SortError::index_out_of_range(i, len));
    }
    if j >= len {
        return Err(SortError::index_out_of_range(j, len));
    }
    data.swap(i, j);
    Ok(())
}

// Inclusive bounds `start..=end`; `start == end + 1` is the empty range.
pub(crate) fn check_inclusive_bounds(len: usize, start: usize, end: usize) -> SortResult<()> {
    if end >= len {
        return Err(SortError::index_out_of_range(end, len));
    }
    if start > end + 1 {
        return Err(SortError::index_out_of_range(start, len));
    }
    Ok(())
}

#[inline]
pub fn is_sorted_non_decreasing<T: Ord>(data: &[T]) -> bool {
    data.windows(2).all(|pair| pair[0] <= pair[1])
}
