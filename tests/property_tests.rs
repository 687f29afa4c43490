use pullstream::{from_slice, from_vec};
use quickcheck::{quickcheck, TestResult};

quickcheck! {
    fn prop_collect_is_identity(input: Vec<i32>) -> bool {
        from_vec(input.clone()).collect() == input
    }

    fn prop_slice_matches_vec(input: Vec<String>) -> bool {
        from_slice(&input).collect() == from_vec(input.clone()).collect()
    }

    fn prop_take_keeps_prefix(input: Vec<u8>, n: usize) -> bool {
        let n = n % 64;
        let taken = from_vec(input.clone()).take(n).collect();
        taken.len() == n.min(input.len()) && taken[..] == input[..taken.len()]
    }

    fn prop_skip_keeps_suffix(input: Vec<u8>, n: usize) -> bool {
        let n = n % 64;
        let skipped = from_vec(input.clone()).skip(n).collect();
        skipped[..] == input[n.min(input.len())..]
    }

    fn prop_filter_matches_iterator(input: Vec<i64>) -> bool {
        let expected: Vec<i64> = input.iter().copied().filter(|x| x % 3 != 0).collect();
        from_vec(input).filter(|x| x % 3 != 0).collect() == expected
    }

    fn prop_count_matches_len(input: Vec<char>) -> bool {
        from_vec(input.clone()).map(|c| c.len_utf8()).count() == input.len()
    }

    fn prop_distinct_has_no_adjacent_duplicates(input: Vec<u8>) -> bool {
        let out = from_vec(input).map(|x| x % 4).distinct().collect();
        out.windows(2).all(|w| w[0] != w[1])
    }

    fn prop_distinct_is_idempotent(input: Vec<u8>) -> bool {
        let once = from_vec(input.clone()).distinct().collect();
        let twice = from_vec(input).distinct().distinct().collect();
        once == twice
    }

    fn prop_distinct_matches_dedup(input: Vec<u8>) -> bool {
        let mut expected = input.clone();
        expected.dedup();
        from_vec(input).distinct().collect() == expected
    }

    fn prop_zip_length_is_min(left: Vec<u16>, right: Vec<u16>) -> bool {
        let expected = left.len().min(right.len());
        from_vec(left).zip(from_vec(right)).count() == expected
    }

    fn prop_reduce_agrees_with_fold(input: Vec<i32>) -> TestResult {
        if input.is_empty() {
            return TestResult::discard();
        }
        let reduced = from_vec(input.clone()).reduce(|a, b| a.wrapping_add(b));
        let folded = from_vec(input[1..].to_vec()).fold(input[0], |a, b| a.wrapping_add(b));
        TestResult::from_bool(reduced == Some(folded))
    }

    fn prop_scan_last_equals_fold(input: Vec<i32>) -> bool {
        let last = from_vec(input.clone())
            .scan(0i32, |acc, x| acc.wrapping_add(x))
            .find_last(|_| true);
        let folded = from_vec(input.clone()).fold(0i32, |acc, x| acc.wrapping_add(x));
        match last {
            Some(value) => value == folded,
            None => input.is_empty(),
        }
    }

    fn prop_find_index_matches_position(input: Vec<u8>, needle: u8) -> bool {
        let needle = needle % 8;
        let expected = input
            .iter()
            .position(|x| x % 8 == needle)
            .map_or(-1, |i| i as isize);
        from_vec(input).find_index(|x| x % 8 == needle) == expected
    }

    fn prop_find_last_index_matches_rposition(input: Vec<u8>, needle: u8) -> bool {
        let needle = needle % 8;
        let expected = input
            .iter()
            .rposition(|x| x % 8 == needle)
            .map_or(-1, |i| i as isize);
        from_vec(input).find_last_index(|x| x % 8 == needle) == expected
    }

    fn prop_flat_map_concat_matches_flat_map(input: Vec<Vec<u8>>) -> bool {
        let expected: Vec<u8> = input.iter().flatten().copied().collect();
        from_vec(input).flat_map_concat(from_vec).collect() == expected
    }
}
