use std::iter::Fuse;

use crate::Sequence;

/// A sequence over a borrowed slice.
///
/// Holds a read cursor into the slice and yields each element once, in order. The slice
/// itself is never modified.
#[derive(Debug, Clone)]
pub struct OfArray<'a, T> {
    items: &'a [T],
    cursor: usize,
}

/// Create a sequence from an already materialized slice.
///
/// # Examples
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let words = vec!["alpha", "beta"];
/// let mut seq = of_array(&words);
/// assert_eq!(seq.next(), Some("alpha"));
/// assert_eq!(seq.next(), Some("beta"));
/// assert_eq!(seq.next(), None);
/// ```
pub fn of_array<T: Clone>(items: &[T]) -> OfArray<'_, T> {
    OfArray { items, cursor: 0 }
}

impl<T: Clone> Sequence for OfArray<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let item = self.items.get(self.cursor)?.clone();
        self.cursor += 1;
        Some(item)
    }
}

/// A sequence over any [`IntoIterator`].
///
/// The underlying iterator is fused, so exhaustion stays permanent.
#[derive(Debug, Clone)]
pub struct OfIter<I>(Fuse<I>);

/// Create a sequence that pulls from an iterator.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let squares = of_iter(1..=4).map(|x| x * x);
/// assert_eq!(squares.to_array(), vec![1, 4, 9, 16]);
/// ```
pub fn of_iter<I: IntoIterator>(iter: I) -> OfIter<I::IntoIter> {
    OfIter(iter.into_iter().fuse())
}

impl<I: Iterator> Sequence for OfIter<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        self.0.next()
    }
}
