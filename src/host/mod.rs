//! Host platform integration.
//!
//! # Data Flow
//! ```text
//! browser ──(native messaging frame: u32 LE length + JSON)──▶ native.rs
//!     → event.rs (HostEvent)
//!     → runtime.rs (one handler per event kind)
//!         → MatchEngine / NavigationGuard / SuggestionProvider
//!     → event.rs (Directive[])
//!     → native.rs ──▶ browser
//! ```
//!
//! # Design Decisions
//! - Events are handled to completion, one at a time
//! - A malformed frame is skipped; only I/O failure ends the session
//! - Directives are fire-and-forget

pub mod event;
pub mod native;
pub mod runtime;

use thiserror::Error;

pub use event::{Directive, HostEvent};
pub use runtime::Runtime;

/// Errors on the host channel.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed message: {0}")]
    Json(#[from] serde_json::Error),

    #[error("frame of {len} bytes exceeds limit of {max} bytes")]
    FrameTooLarge { len: usize, max: usize },
}
