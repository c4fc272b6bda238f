pub fn selection_sort<T: Ord>(data: &mut [T]) {
    let len = data.len();

    for first_unsorted in 0..len {
        let mut smallest = first_unsorted;
        for j in first_unsorted..len {
            if data[j] < data[smallest] {
                smallest = j;
            }
        }
        data.swap(smallest, first_unsorted);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_elements() {
        let mut data = [5, 3, 8, 1];
        selection_sort(&mut data);
        assert_eq!(data, [1, 3, 5, 8]);
    }

    #[test]
    fn known_cases() {
        let cases: [(&[i64], &[i64]); 5] = [
            (&[], &[]),
            (&[99], &[99]),
            (&[5, 5, 5, 5], &[5, 5, 5, 5]),
            (&[6, 5, 4, 3, 2, 1], &[1, 2, 3, 4, 5, 6]),
            (&[1_000, -1_000, 0, 500], &[-1_000, 0, 500, 1_000]),
        ];

        for (input, expected) in cases {
            let mut data = input.to_vec();
            selection_sort(&mut data);
            assert_eq!(data, expected, "input={input:?}");
        }
    }

    #[test]
    fn chars() {
        let mut data = ['z', 'a', 'm', 'b', 'y'];
        selection_sort(&mut data);
        assert_eq!(data, ['a', 'b', 'm', 'y', 'z']);
    }
}
