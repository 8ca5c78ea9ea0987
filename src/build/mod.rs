//! Building sequences from scratch
//!
//! This module provides the sources every pipeline starts from.

mod func;
mod source;

// Re-export building blocks
pub use func::{Empty, FromFn, empty, from_fn};
pub use source::{OfArray, OfIter, of_array, of_iter};
