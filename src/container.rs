//! Read and write sides of the containers every generator works over.
//!
//! [`Sequence`] is anything that can be read as an ordered run of elements, [`Container`] is
//! anything that can be built by appending elements one by one. Most functions in the crate read
//! a [`Sequence`] and build one or more [`Container`]s, which is how a `&str` can go in and
//! `String`s come back out.
use std::collections::{LinkedList, VecDeque};

///An ordered run of elements that can be read by value.
pub trait Sequence {
    type Item;

    ///Every element, in order.
    fn elements(&self) -> impl Iterator<Item = Self::Item> + '_;

    fn size(&self) -> usize {
        self.elements().count()
    }

    fn element_at(&self, index: usize) -> Option<Self::Item> {
        self.elements().nth(index)
    }

    ///The half-open range `[start, end)`, built into any container.
    fn range<C: Container<Self::Item>>(&self, start: usize, end: usize) -> C {
        C::from_elements(
            self.elements()
                .skip(start)
                .take(end.saturating_sub(start)),
        )
    }

    ///Element-wise conversion into another kind of container.
    fn convert<C: Container<Self::Item>>(&self) -> C {
        C::from_elements(self.elements())
    }
}

impl<T: Clone> Sequence for [T] {
    type Item = T;

    fn elements(&self) -> impl Iterator<Item = T> + '_ {
        self.iter().cloned()
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn element_at(&self, index: usize) -> Option<T> {
        self.get(index).cloned()
    }

    fn range<C: Container<T>>(&self, start: usize, end: usize) -> C {
        C::from_elements(self[start..end].iter().cloned())
    }
}

impl<T: Clone, const N: usize> Sequence for [T; N] {
    type Item = T;

    fn elements(&self) -> impl Iterator<Item = T> + '_ {
        self.as_slice().elements()
    }

    fn size(&self) -> usize {
        N
    }

    fn element_at(&self, index: usize) -> Option<T> {
        self.as_slice().element_at(index)
    }

    fn range<C: Container<T>>(&self, start: usize, end: usize) -> C {
        self.as_slice().range(start, end)
    }
}

impl<T: Clone> Sequence for Vec<T> {
    type Item = T;

    fn elements(&self) -> impl Iterator<Item = T> + '_ {
        self.as_slice().elements()
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn element_at(&self, index: usize) -> Option<T> {
        self.as_slice().element_at(index)
    }

    fn range<C: Container<T>>(&self, start: usize, end: usize) -> C {
        self.as_slice().range(start, end)
    }
}

impl<T: Clone> Sequence for VecDeque<T> {
    type Item = T;

    fn elements(&self) -> impl Iterator<Item = T> + '_ {
        self.iter().cloned()
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn element_at(&self, index: usize) -> Option<T> {
        self.get(index).cloned()
    }
}

impl Sequence for str {
    type Item = char;

    fn elements(&self) -> impl Iterator<Item = char> + '_ {
        self.chars()
    }
}

impl Sequence for String {
    type Item = char;

    fn elements(&self) -> impl Iterator<Item = char> + '_ {
        self.chars()
    }
}

///A container that can be built by appending elements in order.
pub trait Container<T>: Default {
    ///Create a container, attempting to pre-allocate room for `n` items.
    ///
    ///The size is only a hint.
    fn with_capacity(n: usize) -> Self {
        let _ = n;
        Self::default()
    }

    ///Add a value to the end of this container.
    fn push(&mut self, item: T);

    fn from_elements<I: IntoIterator<Item = T>>(items: I) -> Self {
        let items = items.into_iter();
        let mut out = Self::with_capacity(items.size_hint().0);
        for item in items {
            out.push(item);
        }
        out
    }
}

impl<T> Container<T> for Vec<T> {
    fn with_capacity(n: usize) -> Self {
        Vec::with_capacity(n)
    }

    fn push(&mut self, item: T) {
        Vec::push(self, item);
    }
}

impl<T> Container<T> for VecDeque<T> {
    fn with_capacity(n: usize) -> Self {
        VecDeque::with_capacity(n)
    }

    fn push(&mut self, item: T) {
        self.push_back(item);
    }
}

impl<T> Container<T> for LinkedList<T> {
    fn push(&mut self, item: T) {
        self.push_back(item);
    }
}

impl Container<char> for String {
    fn with_capacity(n: usize) -> Self {
        // most characters are assumed to be ASCII
        String::with_capacity(n)
    }

    fn push(&mut self, item: char) {
        String::push(self, item);
    }
}

///Flatten a run of runs into one container.
pub fn concat<C, T, I>(parts: I) -> C
where
    C: Container<T>,
    I: IntoIterator,
    I::Item: IntoIterator<Item = T>,
{
    C::from_elements(parts.into_iter().flatten())
}

///`a`'s elements followed by `b`'s.
pub fn append<C, T>(a: impl IntoIterator<Item = T>, b: impl IntoIterator<Item = T>) -> C
where
    C: Container<T>,
{
    C::from_elements(a.into_iter().chain(b))
}
