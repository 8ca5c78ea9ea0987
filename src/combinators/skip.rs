use crate::Sequence;

/// Discards a fixed number of leading elements.
///
/// The discarding is deferred: nothing is pulled until the first call to `next()`,
/// which pulls and drops up to `n` elements before returning the one after them.
/// Every later call passes straight through to the wrapped sequence.
pub struct Skip<S> {
    n: usize,
    seq: S,
}

/// Create a sequence that skips the first `n` elements of `seq`.
///
/// Skipping more elements than `seq` holds yields an empty sequence.
///
/// # Examples
///
/// ```
/// use lazyseq::prelude::*;
///
/// let data = [0, 1, 2, 3, 4];
/// assert_eq!(skip(of_array(&data), 2).to_array(), vec![2, 3, 4]);
/// assert!(skip(of_array(&data), 9).to_array().is_empty());
/// ```
pub fn skip<S: Sequence>(seq: S, n: usize) -> Skip<S> {
    Skip { n, seq }
}

impl<S: Sequence> Sequence for Skip<S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        for _ in 0..std::mem::take(&mut self.n) {
            self.seq.next()?;
        }
        self.seq.next()
    }
}

/// Discards leading elements while a predicate holds.
///
/// The skipping phase ends for good at the first element that fails the predicate;
/// that element is returned, and after it the predicate is never called again.
pub struct SkipWhile<S, P> {
    predicate: P,
    skipping: bool,
    seq: S,
}

/// Create a sequence that drops the leading elements of `seq` matching `predicate`.
///
/// # Examples
///
/// ```
/// use lazyseq::prelude::*;
///
/// let data = [1, 2, 5, 1, 2];
/// let rest = skip_while(of_array(&data), |v| *v < 3);
///
/// assert_eq!(rest.to_array(), vec![5, 1, 2]);
/// ```
pub fn skip_while<S, P>(seq: S, predicate: P) -> SkipWhile<S, P>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    SkipWhile {
        predicate,
        skipping: true,
        seq,
    }
}

impl<S, P> Sequence for SkipWhile<S, P>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        if !self.skipping {
            return self.seq.next();
        }
        loop {
            let item = self.seq.next();
            match item {
                Some(ref v) if (self.predicate)(v) => continue,
                _ => {
                    self.skipping = false;
                    return item;
                }
            }
        }
    }
}
