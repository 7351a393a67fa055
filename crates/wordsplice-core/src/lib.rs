//! Word splicing engine.
//!
//! Given a set of input words, discovers every dictionary word that can be
//! assembled from a prefix of one word, an interior substring of a second
//! and a suffix of a third, across all choices of three words and all six
//! role assignments per choice.
//!
//! # Architecture
//!
//! - [`segments`] -- prefix / suffix / distinct-substring enumerators
//! - [`candidates`] -- candidate assembly and the run-wide seen-set
//! - [`search`] -- triple selection, role permutation, dictionary filter
//! - [`dictionary`] -- normalized exact-match word set
//!
//! The engine is pure: one call to [`find_valid_words`] is a synchronous
//! computation over its arguments, with no I/O and no state outliving the
//! call. The [`Dictionary`] is built once and only read afterwards, so it
//! can be shared freely between concurrent callers.

pub mod candidates;
pub mod dictionary;
pub mod search;
pub mod segments;

pub use dictionary::{Dictionary, DictionaryError};
pub use search::{find_valid_words, generate_candidates};
