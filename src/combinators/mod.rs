//! Lazy combinators over sequences
//!
//! Every combinator owns exactly one upstream [`Sequence`](crate::Sequence) and does no
//! work until it is pulled.

mod filter;
mod map;
mod skip;
mod take;

pub use filter::{Filter, filter};
pub use map::{Map, map};
pub use skip::{Skip, SkipWhile, skip, skip_while};
pub use take::{Take, TakeWhile, take, take_while};
