//! Matching subsystem.
//!
//! # Data Flow
//! ```text
//! Typed token ("newsletter")              Navigated URL ("https://@news/")
//!     → engine.rs (exact → prefix → default)  → normalize.rs (decode, lower-case)
//!                                           → rules.rs (search → marker → exact → structural)
//!     → Return: MatchResult (Matched or NoMatch)
//! ```
//!
//! # Design Decisions
//! - Pure functions over an immutable registry
//! - Deterministic: same input always resolves to the same entry
//! - Malformed input degrades to NoMatch, never to an error

pub mod engine;
pub mod normalize;
pub mod result;
pub mod rules;
pub mod search;

pub use engine::MatchEngine;
pub use result::{MatchResult, MatchRule, Resolution};
pub use search::SearchEngine;
