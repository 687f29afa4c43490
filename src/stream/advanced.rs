//! Stateful stages: flat_map_concat, distinct, zip, zip_with_prev, scan
use super::core::{Source, Stream};

impl<S: Source> Stream<S> {
    /// Replace every element with the contents of the source `f` builds
    /// from it. Each inner source is drained before the next outer element
    /// is pulled; empty inner sources are skipped.
    pub fn flat_map_concat<St, F>(self, f: F) -> Stream<FlatMapConcat<S, F, St>>
    where
        St: Source,
        F: FnMut(S::Item) -> St,
    {
        self.stage(|upstream| FlatMapConcat {
            upstream,
            f,
            state: FlatMapState::NoInnerSource,
        })
    }

    /// Drop elements equal to the element emitted just before them
    pub fn distinct(self) -> Stream<DistinctBy<S, fn(&S::Item, &S::Item) -> bool>>
    where
        S::Item: PartialEq + Clone,
    {
        self.distinct_by(equal as fn(&S::Item, &S::Item) -> bool)
    }

    /// Drop elements for which `cmp(previous, element)` is true, where
    /// `previous` is the element this stage emitted last.
    ///
    /// Deduplication is by adjacency only: `[a, a, b, a]` becomes
    /// `[a, b, a]`. The first element is always emitted; `cmp` is only
    /// called once there is a real previous element.
    pub fn distinct_by<F>(self, cmp: F) -> Stream<DistinctBy<S, F>>
    where
        S::Item: Clone,
        F: FnMut(&S::Item, &S::Item) -> bool,
    {
        self.stage(|upstream| DistinctBy {
            upstream,
            cmp,
            previous: None,
        })
    }

    /// Combine elements pairwise with `other`. Ends as soon as either side
    /// is exhausted.
    pub fn zip_with<O, U, F>(self, other: O, f: F) -> Stream<ZipWith<S, O, F, U>>
    where
        O: Source,
        F: FnMut(S::Item, O::Item) -> U,
    {
        self.stage(|left| ZipWith {
            left,
            right: other,
            f,
            current: None,
            active: false,
            done: false,
        })
    }

    /// Pair elements with `other` into tuples
    pub fn zip<O: Source>(self, other: O) -> Stream<Zip<S, O>> {
        self.zip_with(other, pair as fn(S::Item, O::Item) -> (S::Item, O::Item))
    }

    /// Call `f(previous, element)` for every element. The first call gets
    /// `None` as its previous element.
    pub fn zip_with_prev<U, F>(self, f: F) -> Stream<ZipWithPrev<S, F, U>>
    where
        F: FnMut(Option<&S::Item>, &S::Item) -> U,
    {
        self.stage(|upstream| ZipWithPrev {
            upstream,
            f,
            previous: None,
            latest: None,
            current: None,
            taken: false,
        })
    }

    /// Emit the running accumulation `accumf(acc, element)` for every
    /// element. The seed itself is never emitted.
    pub fn scan<B, F>(self, init: B, accumf: F) -> Stream<Scan<S, B, F>>
    where
        B: Clone,
        F: FnMut(&B, S::Item) -> B,
    {
        self.stage(|upstream| Scan {
            upstream,
            f: accumf,
            acc: init,
            active: false,
        })
    }
}

fn equal<T: PartialEq>(a: &T, b: &T) -> bool {
    a == b
}

fn pair<A, B>(a: A, b: B) -> (A, B) {
    (a, b)
}

// ================================
// FlatMapConcat
// ================================

enum FlatMapState<St> {
    NoInnerSource,
    DrainingInner(St),
}

pub struct FlatMapConcat<S, F, St> {
    upstream: S,
    f: F,
    state: FlatMapState<St>,
}

impl<S, F, St> Source for FlatMapConcat<S, F, St>
where
    S: Source,
    St: Source,
    F: FnMut(S::Item) -> St,
{
    type Item = St::Item;

    fn next(&mut self) -> bool {
        loop {
            if let FlatMapState::DrainingInner(inner) = &mut self.state {
                if inner.next() {
                    return true;
                }
                self.state = FlatMapState::NoInnerSource;
            }

            if !self.upstream.next() {
                return false;
            }
            if let Some(item) = self.upstream.take_current() {
                self.state = FlatMapState::DrainingInner((self.f)(item));
            }
        }
    }

    fn get(&mut self) -> Option<&Self::Item> {
        match &mut self.state {
            FlatMapState::DrainingInner(inner) => inner.get(),
            FlatMapState::NoInnerSource => None,
        }
    }

    fn take_current(&mut self) -> Option<Self::Item> {
        match &mut self.state {
            FlatMapState::DrainingInner(inner) => inner.take_current(),
            FlatMapState::NoInnerSource => None,
        }
    }
}

// ================================
// DistinctBy
// ================================

pub struct DistinctBy<S: Source, F> {
    upstream: S,
    cmp: F,
    // last emitted element; `None` until the first emission
    previous: Option<S::Item>,
}

impl<S, F> Source for DistinctBy<S, F>
where
    S: Source,
    S::Item: Clone,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    type Item = S::Item;

    fn next(&mut self) -> bool {
        while self.upstream.next() {
            let Some(item) = self.upstream.get() else {
                continue;
            };
            let duplicate = match &self.previous {
                Some(previous) => (self.cmp)(previous, item),
                None => false,
            };
            if !duplicate {
                self.previous = Some(item.clone());
                return true;
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

// ================================
// ZipWith
// ================================

pub type Zip<A, B> = ZipWith<
    A,
    B,
    fn(<A as Source>::Item, <B as Source>::Item) -> (<A as Source>::Item, <B as Source>::Item),
    (<A as Source>::Item, <B as Source>::Item),
>;

pub struct ZipWith<A, B, F, U> {
    left: A,
    right: B,
    f: F,
    current: Option<U>,
    active: bool,
    // latched once either side runs out; neither side is pulled again
    done: bool,
}

impl<A, B, F, U> ZipWith<A, B, F, U>
where
    A: Source,
    B: Source,
    F: FnMut(A::Item, B::Item) -> U,
{
    fn combine(&mut self) -> Option<U> {
        if !self.active {
            return None;
        }
        let left = self.left.take_current()?;
        let right = self.right.take_current()?;
        Some((self.f)(left, right))
    }
}

impl<A, B, F, U> Source for ZipWith<A, B, F, U>
where
    A: Source,
    B: Source,
    F: FnMut(A::Item, B::Item) -> U,
{
    type Item = U;

    fn next(&mut self) -> bool {
        self.current = None;
        if self.done {
            self.active = false;
            return false;
        }
        self.active = self.left.next() && self.right.next();
        self.done = !self.active;
        self.active
    }

    fn get(&mut self) -> Option<&Self::Item> {
        if self.current.is_none() {
            self.current = self.combine();
        }
        self.current.as_ref()
    }

    fn take_current(&mut self) -> Option<Self::Item> {
        match self.current.take() {
            Some(value) => Some(value),
            None => self.combine(),
        }
    }
}

// ================================
// ZipWithPrev
// ================================

pub struct ZipWithPrev<S: Source, F, U> {
    upstream: S,
    f: F,
    previous: Option<S::Item>,
    latest: Option<S::Item>,
    current: Option<U>,
    taken: bool,
}

impl<S, F, U> Source for ZipWithPrev<S, F, U>
where
    S: Source,
    F: FnMut(Option<&S::Item>, &S::Item) -> U,
{
    type Item = U;

    fn next(&mut self) -> bool {
        self.current = None;
        self.taken = false;
        if !self.upstream.next() {
            self.latest = None;
            return false;
        }
        // the latest element has to be captured even if nobody reads this one
        self.previous = self.latest.take();
        self.latest = self.upstream.take_current();
        true
    }

    fn get(&mut self) -> Option<&Self::Item> {
        if self.current.is_none() && !self.taken {
            if let Some(latest) = &self.latest {
                self.current = Some((self.f)(self.previous.as_ref(), latest));
            }
        }
        self.current.as_ref()
    }

    fn take_current(&mut self) -> Option<Self::Item> {
        if self.taken {
            return None;
        }
        self.taken = true;
        match self.current.take() {
            Some(value) => Some(value),
            None => {
                let latest = self.latest.as_ref()?;
                Some((self.f)(self.previous.as_ref(), latest))
            }
        }
    }
}

// ================================
// Scan
// ================================

pub struct Scan<S, B, F> {
    upstream: S,
    f: F,
    acc: B,
    active: bool,
}

impl<S, B, F> Source for Scan<S, B, F>
where
    S: Source,
    B: Clone,
    F: FnMut(&B, S::Item) -> B,
{
    type Item = B;

    fn next(&mut self) -> bool {
        self.active = false;
        if !self.upstream.next() {
            return false;
        }
        let Some(item) = self.upstream.take_current() else {
            return false;
        };
        self.acc = (self.f)(&self.acc, item);
        self.active = true;
        true
    }

    fn get(&mut self) -> Option<&Self::Item> {
        if self.active {
            Some(&self.acc)
        } else {
            None
        }
    }

    fn take_current(&mut self) -> Option<Self::Item> {
        if !self.active {
            return None;
        }
        self.active = false;
        Some(self.acc.clone())
    }
}
