//! Shared fixtures for integration tests.

use std::sync::Arc;

use shortcut_redirect::config::{ShortcutConfig, ShortcutDefinition};
use shortcut_redirect::host::native::write_frame;
use shortcut_redirect::{Runtime, ShortcutRegistry};
use tokio::io::AsyncWrite;

/// Two-entry configuration: `@news` (default) and `@docs`.
pub fn sample_config() -> ShortcutConfig {
    ShortcutConfig {
        shortcuts: vec![
            ShortcutDefinition::new("@news", "https://news.example"),
            ShortcutDefinition::new("@docs", "https://docs.example"),
        ],
        ..Default::default()
    }
}

/// Runtime built the way startup builds it.
pub fn runtime_for(config: &ShortcutConfig) -> Runtime {
    let registry = Arc::new(ShortcutRegistry::from_config(config));
    Runtime::new(registry, config)
}

/// Write a raw JSON event as one native messaging frame.
#[allow(dead_code)]
pub async fn send_json<W: AsyncWrite + Unpin>(writer: &mut W, json: &str) {
    write_frame(writer, json.as_bytes()).await.unwrap();
}
