//! Knowledge search core library.
//!
//! Everything between the raw text in the query bar and the single article
//! shown to the user lives here:
//!
//! ```text
//! raw query ──► normalizer ──► search (matcher) ──► resolver ──► SelectionResult
//!                                   ▲
//!                                catalog
//! ```
//!
//! The catalog is loaded once and never mutated. Normalisation, matching and
//! selection are pure functions; randomness comes in through the
//! [`RandomSource`] capability so callers decide how draws are made.

pub mod catalog;
pub mod config;
pub mod normalizer;
pub mod resolver;
pub mod search;
pub mod types;

pub use catalog::{Catalog, CatalogError};
pub use resolver::{
    resolve, RandomSource, SeededRandom, SelectionPolicy, SelectionResult, Selector, ThreadRandom,
};
pub use types::Article;
