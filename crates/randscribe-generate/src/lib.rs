//! Random data generation for randscribe.
//!
//! This crate produces random integers and lowercase letter strings from an
//! injected RNG, echoes every generated value to an output sink and writes
//! the letter strings to a fixed set of files.

pub mod engine;
pub mod errors;
pub mod generators;
pub mod model;
pub mod output;

pub use engine::{ScribeEngine, ScribeResult};
pub use errors::GenerationError;
pub use generators::LetterString;
pub use model::{ScribeOptions, WrittenFile};
