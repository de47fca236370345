//! Navigation guard subsystem.
//!
//! # Data Flow
//! ```text
//! before_navigate / committed / tab_updated / page report (tab, url)
//!     → navigation.rs (per-tab check)
//!     → state.rs (Idle → Checking → Redirected | Idle)
//!     → MatchEngine::resolve_navigated_url
//!     → navigator.rs (fire-and-forget "update tab" directive)
//! ```

pub mod navigation;
pub mod navigator;
pub mod state;

pub use navigation::{GuardOutcome, NavigationGuard, NavigationSource};
pub use navigator::{RecordingNavigator, TabId, TabNavigator};
pub use state::TabState;
