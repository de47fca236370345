//! Shortcut registry subsystem.
//!
//! # Data Flow
//! ```text
//! ShortcutDefinition[] (config, load order)
//!     → entry.rs (validate marker, keyword, destination)
//!     → shortcuts.rs (index by marked / bare keyword)
//!     → Arc<ShortcutRegistry> shared by matching and suggestions
//! ```

pub mod entry;
pub mod shortcuts;

pub use entry::{EntryError, ShortcutEntry};
pub use shortcuts::ShortcutRegistry;
