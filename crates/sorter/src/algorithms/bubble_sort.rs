pub fn bubble_sort<T: Ord>(data: &mut [T]) {
    let len = data.len();
    let mut unsorted_end = len.saturating_sub(1);

    for _ in 0..len {
        for j in 0..unsorted_end {
            if data[j] > data[j + 1] {
                data.swap(j, j + 1);
            }
        }
        unsorted_end = unsorted_end.saturating_sub(1);
    }
}
