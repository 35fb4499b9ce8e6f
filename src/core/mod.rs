//! Core game logic
//!
//! The word store, guess evaluation, and hint filtering. Everything here is
//! a pure computation over in-memory data apart from word list loading.

mod hint;
mod store;
mod verdict;

pub use hint::{Hint, HintError};
pub use store::{StoreError, WordStore};
pub use verdict::{Verdict, Verdicts};
