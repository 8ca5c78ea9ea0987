use crate::Sequence;

/// Yields at most `n` elements of the wrapped sequence.
///
/// Once the count is spent the wrapped sequence is never pulled again.
pub struct Take<S> {
    remaining: usize,
    seq: S,
}

/// Create a sequence over the first `n` elements of `seq`.
///
/// # Examples
///
/// ```
/// use lazyseq::prelude::*;
///
/// let data = [1, 2, 3, 4];
/// assert_eq!(take(of_array(&data), 2).to_array(), vec![1, 2]);
/// assert_eq!(take(of_array(&data), 10).to_array(), vec![1, 2, 3, 4]);
/// ```
pub fn take<S: Sequence>(seq: S, n: usize) -> Take<S> {
    Take { remaining: n, seq }
}

impl<S: Sequence> Sequence for Take<S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.seq.next()
    }
}

/// Yields elements while a predicate holds.
///
/// The first element that fails the predicate is dropped and ends the sequence; the
/// wrapped sequence is not pulled again after that.
pub struct TakeWhile<S, P> {
    predicate: P,
    done: bool,
    seq: S,
}

/// Create a sequence over the leading elements of `seq` that satisfy `predicate`.
///
/// # Examples
///
/// ```
/// use lazyseq::prelude::*;
///
/// let data = [1, 2, 5, 1, 2];
/// let head = take_while(of_array(&data), |v| *v < 3);
///
/// assert_eq!(head.to_array(), vec![1, 2]);
/// ```
pub fn take_while<S, P>(seq: S, predicate: P) -> TakeWhile<S, P>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    TakeWhile {
        predicate,
        done: false,
        seq,
    }
}

impl<S, P> Sequence for TakeWhile<S, P>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        if self.done {
            return None;
        }
        match self.seq.next() {
            Some(item) if (self.predicate)(&item) => Some(item),
            _ => {
                self.done = true;
                None
            }
        }
    }
}
