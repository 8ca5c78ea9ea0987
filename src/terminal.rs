//! Operations that drive a sequence to exhaustion.
//!
//! Building a chain of combinators does no work; these functions are where elements
//! are actually pulled. Each one opens a `trace`-level span and reports how many
//! elements it consumed when it finishes.
//!
//! [`reduce`] is the primitive the others are built from.

use tracing::{trace, trace_span};

use crate::Sequence;

/// Fold every element of `seq` into `init`, left to right.
///
/// # Examples
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let data = [1, 2, 3, 4];
/// assert_eq!(reduce(of_array(&data), 0, |acc, x| acc + x), 10);
/// ```
pub fn reduce<S, A, F>(seq: S, init: A, f: F) -> A
where
    S: Sequence,
    F: FnMut(A, S::Item) -> A,
{
    let _span = trace_span!("reduce").entered();
    let (acc, consumed) = fold_counted(seq, init, f);
    trace!(consumed, "sequence exhausted");
    acc
}

/// Fold with a fallible reducer.
///
/// The first `Err` is returned unchanged and `seq` is not pulled again.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let data = ["1", "2", "x", "4"];
/// let sum = try_reduce(of_array(&data), 0, |acc, s| s.parse::<i32>().map(|n| acc + n));
/// assert!(sum.is_err());
/// ```
pub fn try_reduce<S, A, E, F>(seq: S, init: A, f: F) -> Result<A, E>
where
    S: Sequence,
    F: FnMut(A, S::Item) -> Result<A, E>,
{
    let _span = trace_span!("try_reduce").entered();
    let (result, consumed) = try_fold_counted(seq, init, f);
    match &result {
        Ok(_) => trace!(consumed, "sequence exhausted"),
        Err(_) => trace!(failed_at = consumed, "reducer failed, stopping"),
    }
    result
}

/// Fold to exhaustion, also returning how many elements were folded.
fn fold_counted<S, A, F>(mut seq: S, init: A, mut f: F) -> (A, usize)
where
    S: Sequence,
    F: FnMut(A, S::Item) -> A,
{
    let mut acc = init;
    let mut consumed = 0usize;
    while let Some(item) = seq.next() {
        acc = f(acc, item);
        consumed += 1;
    }
    (acc, consumed)
}

/// Fallible fold; the count covers only elements the reducer accepted, so on error
/// it is also the zero-based index of the rejected element.
fn try_fold_counted<S, A, E, F>(mut seq: S, init: A, mut f: F) -> (Result<A, E>, usize)
where
    S: Sequence,
    F: FnMut(A, S::Item) -> Result<A, E>,
{
    let mut acc = init;
    let mut consumed = 0usize;
    while let Some(item) = seq.next() {
        match f(acc, item) {
            Ok(next) => {
                acc = next;
                consumed += 1;
            }
            Err(e) => return (Err(e), consumed),
        }
    }
    (Ok(acc), consumed)
}

/// Collect every element of `seq` into a `Vec`, in production order.
pub fn to_array<S: Sequence>(seq: S) -> Vec<S::Item> {
    reduce(seq, Vec::new(), |mut acc, item| {
        acc.push(item);
        acc
    })
}

/// Call `f` once per element of `seq`, in order.
pub fn for_each<S, F>(seq: S, mut f: F)
where
    S: Sequence,
    F: FnMut(S::Item),
{
    reduce(seq, (), |(), item| f(item))
}

/// Call a fallible `f` once per element, stopping at the first error.
pub fn try_for_each<S, E, F>(seq: S, mut f: F) -> Result<(), E>
where
    S: Sequence,
    F: FnMut(S::Item) -> Result<(), E>,
{
    try_reduce(seq, (), |(), item| f(item))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{empty, from_fn, of_array};

    #[test]
    fn test_reduce_left_to_right() {
        let data = ["a", "b", "c"];
        let out = reduce(of_array(&data), String::new(), |mut acc, s| {
            acc.push_str(s);
            acc
        });
        assert_eq!(out, "abc");
    }

    #[test]
    fn test_reduce_empty_returns_init() {
        assert_eq!(reduce(empty::<i32>(), 7, |acc, x| acc + x), 7);
    }

    #[test]
    fn test_reduce_with_push_matches_to_array() {
        let data = [5, 3, 8, 1];
        let folded = reduce(of_array(&data).skip(1), Vec::new(), |mut acc, x| {
            acc.push(x);
            acc
        });
        assert_eq!(folded, to_array(of_array(&data).skip(1)));
    }

    #[test]
    fn test_for_each_in_order() {
        let data = [1, 2, 3];
        let mut seen = Vec::new();
        for_each(of_array(&data).map(|x| x * 2), |x| seen.push(x));
        assert_eq!(seen, vec![2, 4, 6]);
    }

    #[test]
    fn test_try_reduce_stops_at_first_error() {
        let mut pulls = 0;
        let result = {
            let seq = from_fn(|| {
                pulls += 1;
                Some(pulls)
            });
            try_reduce(seq, 0, |acc, x| if x == 3 { Err(x) } else { Ok(acc + x) })
        };
        assert_eq!(result, Err(3));
        assert_eq!(pulls, 3);
    }

    #[test]
    fn test_try_reduce_ok() {
        let data = ["1", "2", "3"];
        let sum = try_reduce(of_array(&data), 0, |acc, s| s.parse::<i32>().map(|n| acc + n));
        assert_eq!(sum, Ok(6));
    }

    #[test]
    fn test_try_for_each_propagates_error() {
        let data = [1, 2, 3, 4];
        let mut seen = Vec::new();
        let result = try_for_each(of_array(&data), |x| {
            if x > 2 {
                return Err(format!("too big: {x}"));
            }
            seen.push(x);
            Ok(())
        });
        assert_eq!(result, Err("too big: 3".to_string()));
        assert_eq!(seen, vec![1, 2]);
    }

    #[test]
    fn test_fold_counts_match_between_reduce_and_try_reduce() {
        let data = [1, 2, 3, 4];
        let (sum, folded) = fold_counted(of_array(&data), 0, |acc, x| acc + x);
        assert_eq!((sum, folded), (10, 4));

        let (ok, folded) = try_fold_counted(of_array(&data), 0, |acc, x| Ok::<_, ()>(acc + x));
        assert_eq!((ok, folded), (Ok(10), 4));

        let (err, folded) = try_fold_counted(of_array(&data), 0, |acc, x| {
            if x == 3 {
                return Err(x);
            }
            Ok(acc + x)
        });
        assert_eq!((err, folded), (Err(3), 2));
    }

    #[test]
    fn test_try_fold_rejecting_first_element_counts_nothing() {
        let data = [7, 8];
        let (err, folded) = try_fold_counted(of_array(&data), 0, |_, x| Err::<i32, _>(x));
        assert_eq!((err, folded), (Err(7), 0));
    }

    #[test]
    #[should_panic(expected = "boom")]
    fn test_panicking_transform_propagates() {
        let data = [1, 2, 3];
        of_array(&data)
            .map(|x| if x == 2 { panic!("boom") } else { x })
            .for_each(drop);
    }
}
