//! Utility stages and adapters: with_index, boxed, iterator interop
use super::core::{Source, Stream};

/// An element paired with its position in the stream that produced it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Indexed<T> {
    pub index: usize,
    pub value: T,
}

/// Type-erased stage chain
pub type BoxSource<'a, T> = Box<dyn Source<Item = T> + 'a>;

impl<S: Source> Stream<S> {
    /// Pair every element with its 0-based position in this stream
    pub fn with_index(self) -> Stream<WithIndex<S>> {
        self.stage(|upstream| WithIndex {
            upstream,
            current: None,
            index: 0,
            next_index: 0,
        })
    }

    /// Hide the concrete stage types, e.g. to return different pipelines
    /// from the branches of a `flat_map_concat` closure
    pub fn boxed<'a>(self) -> Stream<BoxSource<'a, S::Item>>
    where
        S: 'a,
    {
        self.stage(|source| Box::new(source) as BoxSource<'a, S::Item>)
    }
}

pub struct WithIndex<S: Source> {
    upstream: S,
    current: Option<Indexed<S::Item>>,
    index: usize,
    next_index: usize,
}

impl<S: Source> WithIndex<S> {
    fn pull(&mut self) -> Option<Indexed<S::Item>> {
        let index = self.index;
        self.upstream
            .take_current()
            .map(|value| Indexed { index, value })
    }
}

impl<S: Source> Source for WithIndex<S> {
    type Item = Indexed<S::Item>;

    fn next(&mut self) -> bool {
        self.current = None;
        if !self.upstream.next() {
            return false;
        }
        self.index = self.next_index;
        self.next_index += 1;
        true
    }

    fn get(&mut self) -> Option<&Self::Item> {
        if self.current.is_none() {
            self.current = self.pull();
        }
        self.current.as_ref()
    }

    fn take_current(&mut self) -> Option<Self::Item> {
        match self.current.take() {
            Some(indexed) => Some(indexed),
            None => self.pull(),
        }
    }
}

/// Iterator over the elements of a [`Stream`]
pub struct IntoIter<S> {
    source: Option<S>,
}

impl<S: Source> Iterator for IntoIter<S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let source = self.source.as_mut()?;
        if source.next() {
            return source.take_current();
        }
        self.source = None;
        None
    }
}

impl<S: Source> IntoIterator for Stream<S> {
    type Item = S::Item;
    type IntoIter = IntoIter<S>;

    fn into_iter(self) -> IntoIter<S> {
        IntoIter {
            source: self.source,
        }
    }
}
