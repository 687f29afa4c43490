//! Stream constructors: absent, empty, slice, vec, iter, from_source

use super::core::{Source, Stream};
use std::marker::PhantomData;

// ================================
// Basic Sources
// ================================

/// Source that is exhausted from the start
pub struct Empty<T> {
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> Source for Empty<T> {
    type Item = T;

    fn next(&mut self) -> bool {
        false
    }

    fn get(&mut self) -> Option<&T> {
        None
    }

    fn take_current(&mut self) -> Option<T> {
        None
    }
}

/// Source over any owned iterator; backs `from_vec`, `from_iter` and the
/// `stream!` macro
pub struct IterSource<I: Iterator> {
    pub(crate) iter: I,
    pub(crate) current: Option<I::Item>,
    pub(crate) exhausted: bool,
}

impl<I: Iterator> IterSource<I> {
    pub fn new(iter: I) -> Self {
        Self {
            iter,
            current: None,
            exhausted: false,
        }
    }
}

impl<I: Iterator> Source for IterSource<I> {
    type Item = I::Item;

    fn next(&mut self) -> bool {
        if self.exhausted {
            return false;
        }
        self.current = self.iter.next();
        self.exhausted = self.current.is_none();
        !self.exhausted
    }

    fn get(&mut self) -> Option<&Self::Item> {
        self.current.as_ref()
    }

    fn take_current(&mut self) -> Option<Self::Item> {
        self.current.take()
    }
}

/// Source over a borrowed slice. Elements are cloned only when a stage
/// takes ownership of them.
pub struct SliceSource<'a, T> {
    pub(crate) items: &'a [T],
    // position of the current element, `None` before the first `next`
    pub(crate) index: Option<usize>,
    pub(crate) taken: bool,
}

impl<'a, T> SliceSource<'a, T> {
    pub fn new(items: &'a [T]) -> Self {
        Self {
            items,
            index: None,
            taken: false,
        }
    }

    fn current(&self) -> Option<&'a T> {
        if self.taken {
            return None;
        }
        self.index.and_then(|index| self.items.get(index))
    }
}

impl<'a, T: Clone> Source for SliceSource<'a, T> {
    type Item = T;

    fn next(&mut self) -> bool {
        let next = self.index.map_or(0, |index| index + 1);
        // stays parked one past the end once exhausted
        if next > self.items.len() {
            return false;
        }
        self.index = Some(next);
        self.taken = false;
        next < self.items.len()
    }

    fn get(&mut self) -> Option<&T> {
        self.current()
    }

    fn take_current(&mut self) -> Option<T> {
        let item = self.current().cloned();
        self.taken = true;
        item
    }
}

// ================================
// Constructor functions
// ================================

/// A stream without a source; every operation on it is a no-op
pub fn absent<T>() -> Stream<Empty<T>> {
    Stream::absent()
}

/// A present stream with no elements
pub fn empty<T>() -> Stream<Empty<T>> {
    Stream::new(Empty {
        _phantom: PhantomData,
    })
}

pub fn from_slice<T: Clone>(items: &[T]) -> Stream<SliceSource<'_, T>> {
    Stream::new(SliceSource::new(items))
}

pub fn from_vec<T>(items: Vec<T>) -> Stream<IterSource<std::vec::IntoIter<T>>> {
    Stream::new(IterSource::new(items.into_iter()))
}

pub fn from_iter<I>(iter: I) -> Stream<IterSource<I::IntoIter>>
where
    I: IntoIterator,
{
    Stream::new(IterSource::new(iter.into_iter()))
}

/// Wrap a user-defined source
pub fn from_source<S: Source>(source: S) -> Stream<S> {
    Stream::new(source)
}

/// Build a stream from a list of values.
///
/// ```
/// use pullstream::stream;
///
/// let names: Vec<&str> = stream!["a", "b", "c"].collect();
/// assert_eq!(names, vec!["a", "b", "c"]);
/// ```
#[macro_export]
macro_rules! stream {
    () => {
        $crate::from_vec(::std::vec::Vec::new())
    };
    ($($item:expr),+ $(,)?) => {
        $crate::from_vec(::std::vec![$($item),+])
    };
}
