//! Message understanding: tokenization, the disease index, and matching.

pub mod index;
pub mod matcher;
pub mod tokenize;

pub use index::DiseaseIndex;
pub use matcher::{DiseaseMatch, DiseaseMatcher, MatchedAnswer};
pub use tokenize::{tokenize, TermSet};
