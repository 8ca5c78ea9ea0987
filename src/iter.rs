//! Iterator adapter for sequences.
//!
//! [`SeqIter`] lets any [`Sequence`] be used where the standard library expects an
//! [`Iterator`], including `for` loops and `collect`.
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let data = [1, 2, 3, 4];
//! let mut iter = of_array(&data).filter(|x| x % 2 == 1).into_iterator();
//! let odds: Vec<_> = iter.by_ref().collect();
//! assert_eq!(odds, vec![1, 3]);
//! assert!(iter.is_exhausted());
//! ```

use std::iter::FusedIterator;

use crate::Sequence;

/// Iterator adapter for [`Sequence`].
///
/// Both `SeqIter` and `&mut SeqIter` implement `Iterator`, so you can iterate without
/// consuming the wrapper and inspect it afterwards.
pub struct SeqIter<S> {
    seq: S,
    exhausted: bool,
}

impl<S: Sequence> SeqIter<S> {
    /// Wrap a sequence.
    pub fn new(seq: S) -> Self {
        Self {
            seq,
            exhausted: false,
        }
    }

    /// Check whether the wrapped sequence has reported exhaustion.
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Unwrap the underlying sequence.
    pub fn into_inner(self) -> S {
        self.seq
    }
}

impl<S: Sequence> Iterator for SeqIter<S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let item = self.seq.next();
        self.exhausted = item.is_none();
        item
    }
}

impl<S: Sequence> FusedIterator for SeqIter<S> {}
