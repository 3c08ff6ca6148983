//! Property-based tests for the forward and reverse cursors.

use proptest::prelude::*;

use dyn_array::DynArray;

//
// -----------------------------------------------------------------------------
// Traversal Properties
// -----------------------------------------------------------------------------

proptest! {
    // Forward traversal yields exactly len elements in insertion order.
    #[test]
    fn prop_forward_traversal_matches_contents(values: Vec<u32>) {
        let arr = DynArray::from_slice(&values);

        let collected: Vec<u32> = arr.cursor().copied().collect();
        prop_assert_eq!(collected, values);
    }
}

proptest! {
    // Reverse traversal yields the same elements in exactly reverse order.
    #[test]
    fn prop_reverse_traversal_is_mirror(values: Vec<u32>) {
        let arr = DynArray::from_slice(&values);

        let backward: Vec<u32> = arr.rev_cursor().copied().collect();
        let mut expected = values.clone();
        expected.reverse();
        prop_assert_eq!(backward, expected);
    }
}

proptest! {
    #[test]
    fn prop_distance_between_bounds_is_len(values: Vec<u32>) {
        let arr = DynArray::from_slice(&values);

        prop_assert_eq!(arr.cursor_end() - arr.cursor(), arr.len() as isize);
        prop_assert_eq!(arr.rev_cursor_end() - arr.rev_cursor(), arr.len() as isize);
    }
}

//
// -----------------------------------------------------------------------------
// Random Access Properties
// -----------------------------------------------------------------------------

proptest! {
    // Offsetting the begin cursor by i refers to the same element as get(i);
    // the reverse cursor mirrors the index.
    #[test]
    fn prop_offsets_match_indexed_access(values: Vec<u32>, offset in 0usize..100) {
        let arr = DynArray::from_slice(&values);
        if values.is_empty() {
            return Ok(());
        }
        let i = offset % values.len();

        prop_assert_eq!((arr.cursor() + i).peek(), arr.get(i));
        prop_assert_eq!(
            (arr.rev_cursor() + i).peek(),
            arr.get(values.len() - 1 - i)
        );
    }
}

proptest! {
    #[test]
    fn prop_cursor_ordering_is_consistent(values: Vec<u32>, a in 0usize..100, b in 0usize..100) {
        let arr = DynArray::from_slice(&values);
        let a = a % (values.len() + 1);
        let b = b % (values.len() + 1);

        let ca = arr.cursor() + a;
        let cb = arr.cursor() + b;
        prop_assert_eq!(ca == cb, a == b);
        prop_assert_eq!(ca < cb, a < b);
        prop_assert_eq!(ca <= cb, a <= b);
        prop_assert_eq!(ca - cb, a as isize - b as isize);

        let ra = arr.rev_cursor() + a;
        let rb = arr.rev_cursor() + b;
        prop_assert_eq!(ra == rb, a == b);
        prop_assert_eq!(ra < rb, a < b);
        prop_assert_eq!(ra - rb, a as isize - b as isize);
    }
}

proptest! {
    // Walking forward with next and back with step_back visits the same
    // elements in opposite order.
    #[test]
    fn prop_step_back_retraces_next(values: Vec<u32>) {
        let arr = DynArray::from_slice(&values);

        let mut cursor = arr.cursor();
        let mut seen = Vec::new();
        while let Some(v) = cursor.next() {
            seen.push(*v);
        }

        let mut retraced = Vec::new();
        while let Some(v) = cursor.step_back() {
            retraced.push(*v);
        }
        retraced.reverse();

        prop_assert_eq!(seen, retraced);
    }
}
