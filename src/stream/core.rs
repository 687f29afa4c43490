//! Core pull contract, the `Stream` handle and the stateless stages
//!
//! A pipeline is a chain of stages, each one a [`Source`] that owns its
//! upstream. Nothing is read until a terminal operation starts calling
//! [`Source::next`].

use crate::stream_configuration::StreamConfig;
use std::sync::Arc;

/// Pull cursor over a sequence of elements.
///
/// `next` advances and reports whether an element is available; `get`
/// returns that element and keeps returning it until the next `next`.
/// Exhaustion is signalled by `next` returning `false`, forever after.
/// Asking for the current element when there is none yields `None`
/// instead of panicking, so over-driving a pipeline is harmless.
pub trait Source {
    type Item;

    /// Advance the cursor. Returns `false` once the sequence is exhausted.
    fn next(&mut self) -> bool;

    /// Borrow the current element.
    fn get(&mut self) -> Option<&Self::Item>;

    /// Move the current element out. `get` returns `None` afterwards
    /// until the cursor is advanced again.
    fn take_current(&mut self) -> Option<Self::Item>;
}

impl<S: Source + ?Sized> Source for &mut S {
    type Item = S::Item;

    fn next(&mut self) -> bool {
        (**self).next()
    }

    fn get(&mut self) -> Option<&Self::Item> {
        (**self).get()
    }

    fn take_current(&mut self) -> Option<Self::Item> {
        (**self).take_current()
    }
}

// Lets `Box<dyn Source<Item = T>>` stand in for a concrete stage chain
impl<S: Source + ?Sized> Source for Box<S> {
    type Item = S::Item;

    fn next(&mut self) -> bool {
        (**self).next()
    }

    fn get(&mut self) -> Option<&Self::Item> {
        (**self).get()
    }

    fn take_current(&mut self) -> Option<Self::Item> {
        (**self).take_current()
    }
}

/// Lazy pipeline handle.
///
/// A `Stream` either wraps a source or is *absent*. Every operator on an
/// absent stream returns another absent stream and every terminal
/// operation returns its natural default, so a missing upstream never
/// faults further down a chain.
///
/// Operators are inherent methods spread over the `stream` submodules:
/// stateless stages in `core`, stateful ones (`flat_map_concat`, `distinct`,
/// `zip_with`, `zip_with_prev`, `scan`) in `advanced`, `with_index` and
/// `boxed` in `utility`, and the terminal operations in `collector`.
///
/// ```
/// use pullstream::stream;
///
/// let total = stream![3, 3, 1, 4]
///     .filter(|x| *x > 1)
///     .distinct()
///     .with_index()
///     .fold(0, |acc, item| acc + item.index * item.value);
/// assert_eq!(total, 4);
/// ```
#[must_use = "streams do nothing unless a terminal operation drains them"]
pub struct Stream<S> {
    pub(crate) source: Option<S>,
    pub(crate) config: Arc<StreamConfig>,
}

impl<S> Stream<S> {
    /// Wrap a source
    pub fn new(source: S) -> Self {
        Self {
            source: Some(source),
            config: Arc::default(),
        }
    }

    /// A stream with no source at all
    pub fn absent() -> Self {
        Self {
            source: None,
            config: Arc::default(),
        }
    }

    pub fn is_absent(&self) -> bool {
        self.source.is_none()
    }

    pub fn config(&self) -> &StreamConfig {
        &self.config
    }

    /// Attach a configuration; operators built on this stream inherit it.
    pub fn with_config(mut self, config: StreamConfig) -> Self {
        self.config = Arc::new(config);
        self
    }

    /// Unwrap the underlying source, `None` for an absent stream
    pub fn into_source(self) -> Option<S> {
        self.source
    }

    pub(crate) fn stage<T>(self, build: impl FnOnce(S) -> T) -> Stream<T> {
        Stream {
            source: self.source.map(build),
            config: self.config,
        }
    }
}

impl<S: Source> Source for Stream<S> {
    type Item = S::Item;

    fn next(&mut self) -> bool {
        self.source.as_mut().map_or(false, |source| source.next())
    }

    fn get(&mut self) -> Option<&Self::Item> {
        self.source.as_mut()?.get()
    }

    fn take_current(&mut self) -> Option<Self::Item> {
        self.source.as_mut()?.take_current()
    }
}

impl<S: Source> Stream<S> {
    /// Keep only the elements matching `predicate`
    pub fn filter<P>(self, predicate: P) -> Stream<Filter<S, P>>
    where
        P: FnMut(&S::Item) -> bool,
    {
        self.stage(|upstream| Filter { upstream, predicate })
    }

    /// Transform every element. `f` runs the first time an element is
    /// read, so stages that only advance (such as `count`) never call it.
    pub fn map<U, F>(self, f: F) -> Stream<Map<S, F, U>>
    where
        F: FnMut(S::Item) -> U,
    {
        self.stage(|upstream| Map {
            upstream,
            f,
            current: None,
        })
    }

    /// Transform every element together with its 0-based position in this
    /// stage's output
    pub fn map_indexed<U, F>(self, f: F) -> Stream<MapIndexed<S, F, U>>
    where
        F: FnMut(usize, S::Item) -> U,
    {
        self.stage(|upstream| MapIndexed {
            upstream,
            f,
            current: None,
            index: 0,
            next_index: 0,
        })
    }

    /// Emit at most `n` elements
    pub fn take(self, n: usize) -> Stream<Take<S>> {
        self.stage(|upstream| Take {
            upstream,
            remaining: n,
            active: false,
        })
    }

    /// Drop the first `n` elements
    pub fn skip(self, n: usize) -> Stream<Skip<S>> {
        self.stage(|upstream| Skip {
            upstream,
            remaining: n,
        })
    }

    /// Call `visit` on each element as it passes through
    pub fn on_each<F>(self, visit: F) -> Stream<OnEach<S, F>>
    where
        F: FnMut(&S::Item),
    {
        self.stage(|upstream| OnEach { upstream, visit })
    }
}

pub struct Filter<S, P> {
    upstream: S,
    predicate: P,
}

impl<S, P> Source for Filter<S, P>
where
    S: Source,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn next(&mut self) -> bool {
        while self.upstream.next() {
            if let Some(item) = self.upstream.get() {
                if (self.predicate)(item) {
                    return true;
                }
            }
        }
        false
    }

    fn get(&mut self) -> Option<&Self::Item> {
        self.upstream.get()
    }

    fn take_current(&mut self) -> Option<Self::Item> {
        self.upstream.take_current()
    }
}

pub struct Map<S, F, U> {
    upstream: S,
    f: F,
    current: Option<U>,
}

impl<S, F, U> Source for Map<S, F, U>
where
    S: Source,
    F: FnMut(S::Item) -> U,
{
    type Item = U;

    fn next(&mut self) -> bool {
        self.current = None;
        self.upstream.next()
    }

    fn get(&mut self) -> Option<&Self::Item> {
        if self.current.is_none() {
            self.current = self.upstream.take_current().map(&mut self.f);
        }
        self.current.as_ref()
    }

    fn take_current(&mut self) -> Option<Self::Item> {
        self.current
            .take()
            .or_else(|| self.upstream.take_current().map(&mut self.f))
    }
}

pub struct MapIndexed<S, F, U> {
    upstream: S,
    f: F,
    current: Option<U>,
    index: usize,
    next_index: usize,
}

impl<S, F, U> Source for MapIndexed<S, F, U>
where
    S: Source,
    F: FnMut(usize, S::Item) -> U,
{
    type Item = U;

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
            let index = self.index;
            let f = &mut self.f;
            self.current = self.upstream.take_current().map(|item| f(index, item));
        }
        self.current.as_ref()
    }

    fn take_current(&mut self) -> Option<Self::Item> {
        if let Some(value) = self.current.take() {
            return Some(value);
        }
        let index = self.index;
        let f = &mut self.f;
        self.upstream.take_current().map(|item| f(index, item))
    }
}

pub struct Take<S> {
    upstream: S,
    remaining: usize,
    // false once this stage has reported exhaustion, even if upstream has more
    active: bool,
}

impl<S: Source> Source for Take<S> {
    type Item = S::Item;

    fn next(&mut self) -> bool {
        if self.remaining == 0 {
            self.active = false;
            return false;
        }
        self.active = self.upstream.next();
        if self.active {
            self.remaining -= 1;
        } else {
            self.remaining = 0;
        }
        self.active
    }

    fn get(&mut self) -> Option<&Self::Item> {
        if self.active {
            self.upstream.get()
        } else {
            None
        }
    }

    fn take_current(&mut self) -> Option<Self::Item> {
        if self.active {
            self.upstream.take_current()
        } else {
            None
        }
    }
}

pub struct Skip<S> {
    upstream: S,
    remaining: usize,
}

impl<S: Source> Source for Skip<S> {
    type Item = S::Item;

    fn next(&mut self) -> bool {
        while self.remaining > 0 {
            if !self.upstream.next() {
                self.remaining = 0;
                return false;
            }
            self.remaining -= 1;
        }
        self.upstream.next()
    }

    fn get(&mut self) -> Option<&Self::Item> {
        self.upstream.get()
    }

    fn take_current(&mut self) -> Option<Self::Item> {
        self.upstream.take_current()
    }
}

pub struct OnEach<S, F> {
    upstream: S,
    visit: F,
}

impl<S, F> Source for OnEach<S, F>
where
    S: Source,
    F: FnMut(&S::Item),
{
    type Item = S::Item;

    fn next(&mut self) -> bool {
        if !self.upstream.next() {
            return false;
        }
        if let Some(item) = self.upstream.get() {
            (self.visit)(item);
        }
        true
    }

    fn get(&mut self) -> Option<&Self::Item> {
        self.upstream.get()
    }

    fn take_current(&mut self) -> Option<Self::Item> {
        self.upstream.take_current()
    }
}
