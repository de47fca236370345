//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! shortcuts.json / shortcuts.toml
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → ShortcutConfig (validated, immutable)
//!     → ShortcutRegistry built once at startup
//! ```
//!
//! # Design Decisions
//! - Config is read once; there is no reload
//! - All fields have defaults to allow the bare `{ "shortcuts": [...] }` file
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::MatchingConfig;
pub use schema::ObservabilityConfig;
pub use schema::SearchEngineConfig;
pub use schema::ShortcutConfig;
pub use schema::ShortcutDefinition;
pub use schema::SuggestionConfig;
