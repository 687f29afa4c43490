use pullstream::{absent, empty, stream, Source, Stream, StreamConfig, NOT_FOUND};
use pullstream::stream::{Empty, IterSource};
use std::cell::Cell;

#[test]
fn test_absent_is_absent() {
    assert!(absent::<i32>().is_absent());
    assert!(Stream::<Empty<i32>>::absent().is_absent());
    assert!(!empty::<i32>().is_absent());
    assert!(!stream![1].is_absent());
}

#[test]
fn test_absent_terminal_defaults() {
    assert!(absent::<i32>().collect().is_empty());
    assert_eq!(absent::<i32>().collect_to(vec![7]), vec![7]);
    assert_eq!(absent::<i32>().count(), 0);
    assert_eq!(absent::<i32>().reduce(|a, b| a + b), None);
    assert_eq!(absent::<i32>().fold(42, |a, b| a + b), 42);
    assert_eq!(absent::<i32>().find(|_| true), None);
    assert_eq!(absent::<i32>().find_or(|_| true, 5), 5);
    assert_eq!(absent::<i32>().find_last(|_| true), None);
    assert_eq!(absent::<i32>().find_last_or(|_| true, 6), 6);
    assert_eq!(absent::<i32>().find_index(|_| true), NOT_FOUND);
    assert_eq!(absent::<i32>().find_last_index(|_| true), NOT_FOUND);
    assert!(!absent::<i32>().all(|_| true));
    assert!(!absent::<i32>().any(|_| true));
}

#[test]
fn test_absent_for_each_never_calls() {
    let calls = Cell::new(0);
    absent::<i32>().for_each(|_| calls.set(calls.get() + 1));
    absent::<i32>().for_each_indexed(|_, _| calls.set(calls.get() + 1));
    assert_eq!(calls.get(), 0);
}

#[test]
fn test_operators_on_absent_stay_absent() {
    let calls = Cell::new(0);
    let bump = || calls.set(calls.get() + 1);

    let chained = absent::<i32>()
        .filter(|_| {
            bump();
            true
        })
        .map(|x| {
            bump();
            x + 1
        })
        .map_indexed(|i, x| {
            bump();
            x + i as i32
        })
        .on_each(|_| bump())
        .skip(1)
        .take(10);
    assert!(chained.is_absent());
    assert!(chained.collect().is_empty());

    let stateful = absent::<i32>()
        .distinct()
        .distinct_by(|_, _| {
            bump();
            false
        })
        .scan(0, |acc, x| {
            bump();
            acc + x
        })
        .zip_with_prev(|prev, cur| {
            bump();
            prev.copied().unwrap_or(0) + cur
        })
        .flat_map_concat(|x| {
            bump();
            stream![x]
        })
        .with_index();
    assert!(stateful.is_absent());
    assert_eq!(stateful.count(), 0);
    assert_eq!(calls.get(), 0);
}

#[test]
fn test_zip_with_absent_side() {
    let left = absent::<i32>().zip(stream![1, 2, 3]);
    assert!(left.is_absent());
    assert!(left.collect().is_empty());

    // a present stream zipped with an absent one is exhausted immediately
    let right = stream![1, 2, 3].zip_with(absent::<i32>(), |a, b| a + b);
    assert!(right.collect().is_empty());
}

#[test]
fn test_absent_inner_streams_are_empty() {
    let result = stream![1, 2, 3]
        .flat_map_concat(|x| {
            if x == 2 {
                stream![x, x]
            } else {
                Stream::<IterSource<std::vec::IntoIter<i32>>>::absent()
            }
        })
        .collect();
    assert_eq!(result, vec![2, 2]);
}

#[test]
fn test_absent_as_source() {
    let mut s = absent::<&str>();
    assert!(!s.next());
    assert_eq!(s.get(), None);
    assert_eq!(s.take_current(), None);
    assert!(s.into_source().is_none());
}

#[test]
fn test_absent_keeps_configuration() {
    let s = absent::<i32>()
        .with_config(StreamConfig::new().name("missing"))
        .map(|x| x * 2);
    assert!(s.is_absent());
    assert_eq!(s.config().name, "missing");
    assert!(s.into_iter().next().is_none());
}

#[test]
fn test_absent_boxed_and_iterated() {
    let boxed = absent::<u8>().boxed();
    assert!(boxed.is_absent());
    assert_eq!(boxed.into_iter().count(), 0);
}
