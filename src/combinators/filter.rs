use crate::Sequence;

/// Yields only the elements of the wrapped sequence that satisfy a predicate.
///
/// A single call may pull any number of upstream elements while they are rejected.
pub struct Filter<S, P> {
    predicate: P,
    seq: S,
}

/// Create a sequence that keeps the elements of `seq` for which `predicate` holds.
///
/// # Examples
///
/// ```
/// use lazyseq::prelude::*;
///
/// let data = [1, 2, 3, 4, 5, 6, 7, 8, 9];
/// let evens = filter(of_array(&data), |v| v % 2 == 0);
///
/// assert_eq!(evens.to_array(), vec![2, 4, 6, 8]);
/// ```
pub fn filter<S, P>(seq: S, predicate: P) -> Filter<S, P>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    Filter { predicate, seq }
}

impl<S, P> Sequence for Filter<S, P>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        loop {
            let item = self.seq.next()?;
            if (self.predicate)(&item) {
                return Some(item);
            }
        }
    }
}
