//! Terminal operations
//!
//! Every terminal method on [`Stream`] is a [`Collector`] driven over the
//! pipeline by [`Stream::collect_with`]. The collector is offered the source
//! positioned on each element and decides whether to read it, so counting
//! never materializes values and searches can stop early.

use super::core::{Source, Stream};
use std::ops::ControlFlow;

/// Position returned by index searches when nothing matches
pub const NOT_FOUND: isize = -1;

/// Consumer half of a pipeline.
///
/// `accept` is called once per element with the source positioned on it.
/// Returning `ControlFlow::Break(())` stops the traversal. `finish` turns
/// the collector into its result; on an absent or empty stream it is called
/// without any `accept`, so it must yield the empty default.
pub trait Collector<T> {
    type Output;

    fn accept<S>(&mut self, source: &mut S) -> ControlFlow<()>
    where
        S: Source<Item = T> + ?Sized;

    fn finish(self) -> Self::Output;
}

impl<S: Source> Stream<S> {
    /// Drain the stream into `collector`
    pub fn collect_with<C>(self, collector: C) -> C::Output
    where
        C: Collector<S::Item>,
    {
        self.drain(collector, |mut collector, source| {
            match collector.accept(source) {
                ControlFlow::Continue(()) => ControlFlow::Continue(collector),
                ControlFlow::Break(()) => ControlFlow::Break(collector),
            }
        })
        .finish()
    }

    // Drives the pipeline, threading an owned state through `step`
    fn drain<A, F>(self, init: A, mut step: F) -> A
    where
        F: FnMut(A, &mut S) -> ControlFlow<A, A>,
    {
        let Stream { source, config } = self;
        let Some(mut source) = source else {
            log::debug!("Stream '{}' is absent, nothing to drain", config.name);
            return init;
        };

        let mut state = init;
        let mut pulled = 0usize;
        let mut short_circuited = false;
        while source.next() {
            if config.trace_pulls {
                log::trace!("Stream '{}' pulled element #{}", config.name, pulled);
            }
            pulled += 1;
            match step(state, &mut source) {
                ControlFlow::Continue(next) => state = next,
                ControlFlow::Break(last) => {
                    state = last;
                    short_circuited = true;
                    break;
                }
            }
        }

        if short_circuited {
            log::debug!("Stream '{}' short-circuited after {} elements", config.name, pulled);
        } else {
            log::debug!("Stream '{}' drained after {} elements", config.name, pulled);
        }
        state
    }

    pub fn collect(self) -> Vec<S::Item> {
        self.collect_to(Vec::new())
    }

    /// Append every element to `target`
    pub fn collect_to(self, target: Vec<S::Item>) -> Vec<S::Item> {
        self.collect_with(Collect { target })
    }

    pub fn for_each<F>(self, visit: F)
    where
        F: FnMut(S::Item),
    {
        self.collect_with(ForEach { visit })
    }

    pub fn for_each_indexed<F>(self, visit: F)
    where
        F: FnMut(usize, S::Item),
    {
        self.collect_with(ForEachIndexed { visit, index: 0 })
    }

    /// Left fold seeded with the first element. `None` on an empty stream;
    /// a single element is returned without calling `f`.
    pub fn reduce<F>(self, f: F) -> Option<S::Item>
    where
        F: FnMut(S::Item, S::Item) -> S::Item,
    {
        self.collect_with(Reduce { acc: None, f })
    }

    /// Left fold seeded with `init`, returned unchanged on an empty stream
    pub fn fold<B, F>(self, init: B, mut f: F) -> B
    where
        F: FnMut(B, S::Item) -> B,
    {
        self.drain(init, |acc, source| {
            ControlFlow::Continue(match source.take_current() {
                Some(item) => f(acc, item),
                None => acc,
            })
        })
    }

    /// First element matching `predicate`, stopping there
    pub fn find<P>(self, predicate: P) -> Option<S::Item>
    where
        P: FnMut(&S::Item) -> bool,
    {
        self.collect_with(Find {
            predicate,
            found: None,
        })
    }

    pub fn find_or<P>(self, predicate: P, default: S::Item) -> S::Item
    where
        P: FnMut(&S::Item) -> bool,
    {
        self.find(predicate).unwrap_or(default)
    }

    /// Last element matching `predicate`; always scans the whole stream
    pub fn find_last<P>(self, predicate: P) -> Option<S::Item>
    where
        P: FnMut(&S::Item) -> bool,
    {
        self.collect_with(FindLast {
            predicate,
            found: None,
        })
    }

    pub fn find_last_or<P>(self, predicate: P, default: S::Item) -> S::Item
    where
        P: FnMut(&S::Item) -> bool,
    {
        self.find_last(predicate).unwrap_or(default)
    }

    /// 0-based position of the first match in this stream's output, or
    /// [`NOT_FOUND`]
    pub fn find_index<P>(self, predicate: P) -> isize
    where
        P: FnMut(&S::Item) -> bool,
    {
        self.collect_with(FindIndex {
            predicate,
            position: 0,
            found: NOT_FOUND,
        })
    }

    /// 0-based position of the last match in this stream's output, or
    /// [`NOT_FOUND`]
    pub fn find_last_index<P>(self, predicate: P) -> isize
    where
        P: FnMut(&S::Item) -> bool,
    {
        self.collect_with(FindLastIndex {
            predicate,
            position: 0,
            found: NOT_FOUND,
        })
    }

    /// Number of elements. Only advances the pipeline, elements are never read.
    pub fn count(self) -> usize {
        self.collect_with(Count { count: 0 })
    }

    /// `true` when every element matches. An empty stream gives `false`.
    pub fn all<P>(self, predicate: P) -> bool
    where
        P: FnMut(&S::Item) -> bool,
    {
        self.collect_with(All {
            predicate,
            seen: false,
            holds: true,
        })
    }

    /// `true` when some element matches
    pub fn any<P>(self, predicate: P) -> bool
    where
        P: FnMut(&S::Item) -> bool,
    {
        self.collect_with(Any {
            predicate,
            found: false,
        })
    }
}

// Collect
pub struct Collect<T> {
    target: Vec<T>,
}

impl<T> Collector<T> for Collect<T> {
    type Output = Vec<T>;

    fn accept<S>(&mut self, source: &mut S) -> ControlFlow<()>
    where
        S: Source<Item = T> + ?Sized,
    {
        if let Some(item) = source.take_current() {
            self.target.push(item);
        }
        ControlFlow::Continue(())
    }

    fn finish(self) -> Vec<T> {
        self.target
    }
}

// ForEach
pub struct ForEach<F> {
    visit: F,
}

impl<T, F: FnMut(T)> Collector<T> for ForEach<F> {
    type Output = ();

    fn accept<S>(&mut self, source: &mut S) -> ControlFlow<()>
    where
        S: Source<Item = T> + ?Sized,
    {
        if let Some(item) = source.take_current() {
            (self.visit)(item);
        }
        ControlFlow::Continue(())
    }

    fn finish(self) {}
}

// ForEachIndexed
pub struct ForEachIndexed<F> {
    visit: F,
    index: usize,
}

impl<T, F: FnMut(usize, T)> Collector<T> for ForEachIndexed<F> {
    type Output = ();

    fn accept<S>(&mut self, source: &mut S) -> ControlFlow<()>
    where
        S: Source<Item = T> + ?Sized,
    {
        if let Some(item) = source.take_current() {
            (self.visit)(self.index, item);
        }
        self.index += 1;
        ControlFlow::Continue(())
    }

    fn finish(self) {}
}

// Reduce
pub struct Reduce<T, F> {
    acc: Option<T>,
    f: F,
}

impl<T, F: FnMut(T, T) -> T> Collector<T> for Reduce<T, F> {
    type Output = Option<T>;

    fn accept<S>(&mut self, source: &mut S) -> ControlFlow<()>
    where
        S: Source<Item = T> + ?Sized,
    {
        if let Some(item) = source.take_current() {
            self.acc = Some(match self.acc.take() {
                Some(acc) => (self.f)(acc, item),
                None => item,
            });
        }
        ControlFlow::Continue(())
    }

    fn finish(self) -> Option<T> {
        self.acc
    }
}

// Find
pub struct Find<T, P> {
    predicate: P,
    found: Option<T>,
}

impl<T, P: FnMut(&T) -> bool> Collector<T> for Find<T, P> {
    type Output = Option<T>;

    fn accept<S>(&mut self, source: &mut S) -> ControlFlow<()>
    where
        S: Source<Item = T> + ?Sized,
    {
        let matched = source.get().map_or(false, |item| (self.predicate)(item));
        if matched {
            self.found = source.take_current();
            return ControlFlow::Break(());
        }
        ControlFlow::Continue(())
    }

    fn finish(self) -> Option<T> {
        self.found
    }
}

// FindLast
pub struct FindLast<T, P> {
    predicate: P,
    found: Option<T>,
}

impl<T, P: FnMut(&T) -> bool> Collector<T> for FindLast<T, P> {
    type Output = Option<T>;

    fn accept<S>(&mut self, source: &mut S) -> ControlFlow<()>
    where
        S: Source<Item = T> + ?Sized,
    {
        let matched = source.get().map_or(false, |item| (self.predicate)(item));
        if matched {
            self.found = source.take_current();
        }
        ControlFlow::Continue(())
    }

    fn finish(self) -> Option<T> {
        self.found
    }
}

// FindIndex
pub struct FindIndex<P> {
    predicate: P,
    position: isize,
    found: isize,
}

impl<T, P: FnMut(&T) -> bool> Collector<T> for FindIndex<P> {
    type Output = isize;

    fn accept<S>(&mut self, source: &mut S) -> ControlFlow<()>
    where
        S: Source<Item = T> + ?Sized,
    {
        let position = self.position;
        self.position += 1;
        if source.get().map_or(false, |item| (self.predicate)(item)) {
            self.found = position;
            return ControlFlow::Break(());
        }
        ControlFlow::Continue(())
    }

    fn finish(self) -> isize {
        self.found
    }
}

// FindLastIndex
pub struct FindLastIndex<P> {
    predicate: P,
    position: isize,
    found: isize,
}

impl<T, P: FnMut(&T) -> bool> Collector<T> for FindLastIndex<P> {
    type Output = isize;

    fn accept<S>(&mut self, source: &mut S) -> ControlFlow<()>
    where
        S: Source<Item = T> + ?Sized,
    {
        let position = self.position;
        self.position += 1;
        if source.get().map_or(false, |item| (self.predicate)(item)) {
            self.found = position;
        }
        ControlFlow::Continue(())
    }

    fn finish(self) -> isize {
        self.found
    }
}

// Count
pub struct Count {
    count: usize,
}

impl<T> Collector<T> for Count {
    type Output = usize;

    fn accept<S>(&mut self, _source: &mut S) -> ControlFlow<()>
    where
        S: Source<Item = T> + ?Sized,
    {
        self.count = self.count.saturating_add(1);
        ControlFlow::Continue(())
    }

    fn finish(self) -> usize {
        self.count
    }
}

// All
pub struct All<P> {
    predicate: P,
    seen: bool,
    holds: bool,
}

impl<T, P: FnMut(&T) -> bool> Collector<T> for All<P> {
    type Output = bool;

    fn accept<S>(&mut self, source: &mut S) -> ControlFlow<()>
    where
        S: Source<Item = T> + ?Sized,
    {
        self.seen = true;
        if !source.get().map_or(false, |item| (self.predicate)(item)) {
            self.holds = false;
            return ControlFlow::Break(());
        }
        ControlFlow::Continue(())
    }

    // no vacuous truth: an empty stream is `false`
    fn finish(self) -> bool {
        self.seen && self.holds
    }
}

// Any
pub struct Any<P> {
    predicate: P,
    found: bool,
}

impl<T, P: FnMut(&T) -> bool> Collector<T> for Any<P> {
    type Output = bool;

    fn accept<S>(&mut self, source: &mut S) -> ControlFlow<()>
    where
        S: Source<Item = T> + ?Sized,
    {
        if source.get().map_or(false, |item| (self.predicate)(item)) {
            self.found = true;
            return ControlFlow::Break(());
        }
        ControlFlow::Continue(())
    }

    fn finish(self) -> bool {
        self.found
    }
}
