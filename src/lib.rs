//! Keyword shortcut resolution and navigation redirects.

pub mod config;
pub mod guard;
pub mod host;
pub mod lifecycle;
pub mod matching;
pub mod observability;
pub mod registry;
pub mod suggest;
pub mod watcher;

pub use config::schema::ShortcutConfig;
pub use host::Runtime;
pub use matching::{MatchEngine, MatchResult};
pub use registry::ShortcutRegistry;
