//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Read config → Init logging → Build registry → Runtime → Serve events
//! ```
//!
//! # Design Decisions
//! - Ordered startup: no event source is consumed before the registry is built
//! - Shutdown is end-of-stream on the host channel

pub mod startup;

pub use startup::{read_config, start, LoadedConfig};
