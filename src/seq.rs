//! Core trait for pull-based sequences.
//!
//! This module defines the [`Sequence`] trait, the building block every source and
//! combinator in this crate implements. A [`Sequence`] is a capability rather than a
//! container: it is identified only by what `next()` produces.
//!
//! # The Sequence Trait
//!
//! Each call to [`Sequence::next`]:
//! - returns `Some(item)` and advances past it, or
//! - returns `None`, signalling exhaustion for this and every later call.
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let data = [1, 2, 3, 4, 5, 6];
//! let mut seq = of_array(&data).filter(|x| x % 2 == 0).map(|x| x * 10);
//! assert_eq!(seq.next(), Some(20));
//! assert_eq!(seq.to_array(), vec![40, 60]);
//! ```

use either::Either;

use crate::{
    combinators::{
        Filter, Map, Skip, SkipWhile, Take, TakeWhile, filter, map, skip, skip_while, take,
        take_while,
    },
    iter::SeqIter,
    terminal,
};

/// A lazily evaluated source of elements, pulled one at a time.
///
/// Only [`next`](Sequence::next) must be implemented. The provided methods wrap `self`
/// in a combinator without doing any work, or drive it to exhaustion (the terminal
/// operations).
///
/// Implementations must keep exhaustion permanent: once `next()` has returned `None`
/// it returns `None` forever, and calling it again must never panic.
pub trait Sequence {
    /// Type of element produced
    type Item;

    /// Produce the next element, or `None` once the sequence is exhausted.
    fn next(&mut self) -> Option<Self::Item>;

    /// Transform every element with `f`.
    fn map<O, F>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> O,
    {
        map(self, f)
    }

    /// Keep only the elements for which `predicate` holds.
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        filter(self, predicate)
    }

    /// Discard the first `n` elements, deferred until the first pull.
    fn skip(self, n: usize) -> Skip<Self>
    where
        Self: Sized,
    {
        skip(self, n)
    }

    /// Discard the leading elements for which `predicate` holds.
    fn skip_while<P>(self, predicate: P) -> SkipWhile<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        skip_while(self, predicate)
    }

    /// Yield at most `n` elements.
    fn take(self, n: usize) -> Take<Self>
    where
        Self: Sized,
    {
        take(self, n)
    }

    /// Yield elements until `predicate` first fails.
    fn take_while<P>(self, predicate: P) -> TakeWhile<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        take_while(self, predicate)
    }

    /// Fold every element into an accumulator, left to right.
    fn reduce<A, F>(self, init: A, f: F) -> A
    where
        Self: Sized,
        F: FnMut(A, Self::Item) -> A,
    {
        terminal::reduce(self, init, f)
    }

    /// Fold with a fallible reducer, stopping at the first error.
    fn try_reduce<A, E, F>(self, init: A, f: F) -> Result<A, E>
    where
        Self: Sized,
        F: FnMut(A, Self::Item) -> Result<A, E>,
    {
        terminal::try_reduce(self, init, f)
    }

    /// Collect every element into a `Vec`, in production order.
    fn to_array(self) -> Vec<Self::Item>
    where
        Self: Sized,
    {
        terminal::to_array(self)
    }

    /// Call `f` once per element, in order.
    fn for_each<F>(self, f: F)
    where
        Self: Sized,
        F: FnMut(Self::Item),
    {
        terminal::for_each(self, f)
    }

    /// Call a fallible `f` once per element, stopping at the first error.
    fn try_for_each<E, F>(self, f: F) -> Result<(), E>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> Result<(), E>,
    {
        terminal::try_for_each(self, f)
    }

    /// Borrow this sequence so a combinator can consume a prefix of it.
    ///
    /// ```rust
    /// use lazyseq::prelude::*;
    ///
    /// let data = [1, 2, 3, 4, 5];
    /// let mut seq = of_array(&data);
    /// assert_eq!(seq.by_ref().take(2).to_array(), vec![1, 2]);
    /// assert_eq!(seq.to_array(), vec![3, 4, 5]);
    /// ```
    fn by_ref(&mut self) -> &mut Self
    where
        Self: Sized,
    {
        self
    }

    /// Erase the concrete type behind a `Box`.
    fn boxed<'a>(self) -> Box<dyn Sequence<Item = Self::Item> + 'a>
    where
        Self: Sized + 'a,
    {
        Box::new(self)
    }

    /// Adapt into a standard [`Iterator`].
    fn into_iterator(self) -> SeqIter<Self>
    where
        Self: Sized,
    {
        SeqIter::new(self)
    }
}

impl<S> Sequence for &mut S
where
    S: Sequence + ?Sized,
{
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        (**self).next()
    }
}

impl<S> Sequence for Box<S>
where
    S: Sequence + ?Sized,
{
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        (**self).next()
    }
}

impl<L, R> Sequence for Either<L, R>
where
    L: Sequence,
    R: Sequence<Item = L::Item>,
{
    type Item = L::Item;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Either::Left(l) => l.next(),
            Either::Right(r) => r.next(),
        }
    }
}
