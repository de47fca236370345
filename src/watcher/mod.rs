//! Page-side input watching.
//!
//! # Data Flow
//! ```text
//! keydown (DOM key name)
//!     → buffer.rs (bounded keystroke buffer, extract "@token")
//!     → message.rs ({action: "checkShortcut", text})
//!     → host runtime → MatchEngine::resolve_typed_text
//!     → {success} → buffer cleared on success
//!
//! location change → url_observer.rs → {action: "checkUrl", url}
//! ```

pub mod buffer;
pub mod message;
pub mod url_observer;

pub use buffer::{Key, KeystrokeBuffer, MAX_BUFFER_CHARS};
pub use message::{MessageResponse, PageMessage};
pub use url_observer::UrlObserver;
