use crate::Sequence;

/// Transforms each element pulled from the wrapped sequence.
///
/// Pulls exactly one upstream element per call; there is no look-ahead.
pub struct Map<S, F> {
    f: F,
    seq: S,
}

/// Create a sequence that applies `f` to every element of `seq`.
///
/// # Examples
///
/// ```
/// use lazyseq::prelude::*;
///
/// let data = [1, 2, 3];
/// let mut names = map(of_array(&data), |x: i32| format!("#{x}"));
///
/// assert_eq!(names.next(), Some("#1".to_string()));
/// assert_eq!(names.to_array(), vec!["#2", "#3"]);
/// ```
pub fn map<S, O, F>(seq: S, f: F) -> Map<S, F>
where
    S: Sequence,
    F: FnMut(S::Item) -> O,
{
    Map { f, seq }
}

impl<S, O, F> Sequence for Map<S, F>
where
    S: Sequence,
    F: FnMut(S::Item) -> O,
{
    type Item = O;

    fn next(&mut self) -> Option<O> {
        self.seq.next().map(&mut self.f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{from_fn, of_array};

    #[test]
    fn test_map_is_even() {
        let data = [1, 2, 3, 4, 5, 6, 7, 8, 9];
        let out = map(of_array(&data), |v: i32| v % 2 == 0).to_array();
        assert_eq!(
            out,
            vec![false, true, false, true, false, true, false, true, false]
        );
    }

    #[test]
    fn test_map_empty() {
        let data: [i32; 0] = [];
        let out = map(of_array(&data), |v: i32| v % 2 == 0).to_array();
        assert!(out.is_empty());
    }

    #[test]
    fn test_map_changes_type() {
        let data = ["a", "bb", "ccc"];
        let out = of_array(&data).map(str::len).to_array();
        assert_eq!(out, vec![1, 2, 3]);
    }

    #[test]
    fn test_map_does_not_call_transform_on_exhaustion() {
        let data = [1, 2];
        let mut calls = 0;
        let mut seq = of_array(&data).map(|x| {
            calls += 1;
            x
        });
        while seq.next().is_some() {}
        assert_eq!(seq.next(), None);
        drop(seq);
        assert_eq!(calls, 2);
    }

    #[test]
    fn test_map_pulls_once_per_element() {
        let mut pulls = 0;
        let mut seq = from_fn(|| {
            pulls += 1;
            Some(pulls)
        })
        .map(|x| x * 100);
        assert_eq!(seq.next(), Some(100));
        assert_eq!(seq.next(), Some(200));
        drop(seq);
        assert_eq!(pulls, 2);
    }
}
