//! # Lazyseq: Lazy Pull-Based Sequences
//!
//! Build chains of transformations over a source of values without allocating
//! intermediate collections. Each element is produced on demand and flows through the
//! whole chain before the next one is requested.
//!
//! ## Core Trait
//!
//! - **[`Sequence`]**: one method, `next()`, returning `Some(item)` or `None` once the
//!   sequence is exhausted. Exhaustion is permanent.
//!
//! ## Example
//!
//! ```
//! use lazyseq::prelude::*;
//!
//! let data = [1, 2, 3, 4, 5, 6, 7, 8, 9];
//! let out = of_array(&data)
//!     .filter(|x| x % 2 == 0) // 2, 4, 6, 8
//!     .map(|x| x * x)         // 4, 16, 36, 64
//!     .skip(1)
//!     .to_array();
//!
//! assert_eq!(out, vec![16, 36, 64]);
//! ```
//!
//! ## Common Functions
//!
//! **Sources:**
//! - [`of_array(slice)`](of_array) - Yield the elements of a slice in order
//! - [`of_iter(iter)`](of_iter) - Pull from any `IntoIterator`
//! - [`from_fn(f)`](from_fn) - Pull from a closure until it returns `None`
//!
//! **Combinators:**
//! - [`map`], [`filter`] - Stateless per-element transforms
//! - [`skip`], [`skip_while`], [`take`], [`take_while`] - Counting and phase-based cuts
//!
//! **Terminal operations:**
//! - [`reduce`] - Fold to a single value
//! - [`to_array`] - Collect into a `Vec`
//! - [`for_each`] - Run a side effect per element
//!
//! Nothing is pulled until a terminal operation runs.

pub mod build;
pub mod combinators;
pub mod iter;
pub mod prelude;
mod seq;
pub mod terminal;

pub use build::*;
pub use combinators::*;
pub use iter::SeqIter;
pub use seq::Sequence;
pub use terminal::*;
