//! Various procedures for querying and mutating a context.
//!
//! For the most part these are methods accessed via a context, placed here together with the pure functions which do the work.
//!
//! The pure functions --- [entails](entailment::entails), [remainders](remainders::remainders), and [select](selection::select) --- borrow snapshots of belief-base state and mutate nothing.
//! The context methods thread configuration and state through the pure functions, and mutate the belief database only after every fallible step has succeeded, so a failed procedure leaves the base as it was.

pub mod contraction;
pub mod entailment;
pub mod expansion;
pub mod remainders;
pub mod revision;
pub mod selection;
