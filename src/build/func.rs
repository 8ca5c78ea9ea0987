use std::marker::PhantomData;

use crate::Sequence;

/// A sequence driven by a closure.
///
/// The closure is dropped the first time it returns `None`, so exhaustion is permanent
/// even if the closure itself would produce more values later.
pub struct FromFn<F>(Option<F>);

/// Create a sequence from a closure returning `Some(item)` or `None` when done.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let mut n = 0;
/// let countdown = from_fn(move || {
///     n += 1;
///     (n <= 3).then_some(4 - n)
/// });
/// assert_eq!(countdown.to_array(), vec![3, 2, 1]);
/// ```
pub fn from_fn<T, F>(f: F) -> FromFn<F>
where
    F: FnMut() -> Option<T>,
{
    FromFn(Some(f))
}

impl<T, F> Sequence for FromFn<F>
where
    F: FnMut() -> Option<T>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let item = (self.0.as_mut()?)();
        if item.is_none() {
            self.0 = None;
        }
        item
    }
}

/// A sequence with no elements.
pub struct Empty<T>(PhantomData<fn() -> T>);

/// Create a sequence that is exhausted from the start.
pub fn empty<T>() -> Empty<T> {
    Empty(PhantomData)
}

impl<T> Sequence for Empty<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_fn_is_fused() {
        let mut calls = 0;
        let mut flip = false;
        {
            let mut seq = from_fn(|| {
                calls += 1;
                flip = !flip;
                flip.then_some(calls)
            });
            assert_eq!(seq.next(), Some(1));
            assert_eq!(seq.next(), None);
            // the closure would yield again here
            assert_eq!(seq.next(), None);
            assert_eq!(seq.next(), None);
        }
        assert_eq!(calls, 2);
    }

    #[test]
    fn test_empty() {
        let mut seq = empty::<String>();
        assert_eq!(seq.next(), None);
        assert_eq!(seq.next(), None);
    }
}
