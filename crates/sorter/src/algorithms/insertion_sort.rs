// Sorted run grows from the right; each element moves by adjacent swaps.
pub fn insertion_sort<T: Ord>(data: &mut [T]) {
    let len = data.len();
    if len < 2 {
        return;
    }

    for i in (0..len - 1).rev() {
        for j in i..len - 1 {
            if data[j] > data[j + 1] {
                data.swap(j, j + 1);
            } else {
                break;
            }
        }
    }
}
