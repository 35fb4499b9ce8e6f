//! Mordle
//!
//! A terminal Wordle clone with a companion solver mode that lists the
//! words still consistent with the hints from earlier guesses.
//!
//! # Quick Start
//!
//! ```rust
//! use mordle::core::{Verdicts, WordStore};
//!
//! let store = WordStore::from_lines("crane\nslate\n").unwrap();
//! assert!(store.contains("crane"));
//!
//! let verdicts = Verdicts::evaluate("slate", "crane");
//! assert_eq!(verdicts.to_string(), "xx!x!");
//! ```

// Core game logic: word store, evaluation, hint filtering
pub mod core;

// Interactive play
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Player statistics persistence
pub mod stats;

// Built-in word list
pub mod wordlists;
