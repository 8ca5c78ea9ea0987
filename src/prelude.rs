//! Commonly used imports
//!
//! Use `use lazyseq::prelude::*;` for quick access to the most common types and functions.

// Core trait
pub use crate::Sequence;

// Sources
pub use crate::build::{empty, from_fn, of_array, of_iter};

// Combinators
pub use crate::combinators::{filter, map, skip, skip_while, take, take_while};

// Terminal operations
pub use crate::terminal::{for_each, reduce, to_array, try_for_each, try_reduce};
