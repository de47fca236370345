//! Events delivered by the browser and directives sent back to it.

use serde::{Deserialize, Serialize};

use crate::guard::TabId;
use crate::suggest::Suggestion;
use crate::watcher::PageMessage;

/// An event from the host platform, tagged by `event`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HostEvent {
    /// The user accepted text in the keyword input.
    KeywordInputEntered { text: String },
    /// The keyword input changed; suggestions are expected back.
    KeywordInputChanged { text: String },
    BeforeNavigate { tab_id: TabId, url: String },
    NavigationCommitted { tab_id: TabId, url: String },
    TabUrlUpdated { tab_id: TabId, url: String },
    TabRemoved { tab_id: TabId },
    /// A blocking request check; always answered by exactly one `redirect`.
    BeforeRequest {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        request_id: Option<String>,
        url: String,
    },
    /// A message from a page script.
    Message {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        tab_id: Option<TabId>,
        message: PageMessage,
    },
}

impl HostEvent {
    /// Event name used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            HostEvent::KeywordInputEntered { .. } => "keyword_input_entered",
            HostEvent::KeywordInputChanged { .. } => "keyword_input_changed",
            HostEvent::BeforeNavigate { .. } => "before_navigate",
            HostEvent::NavigationCommitted { .. } => "navigation_committed",
            HostEvent::TabUrlUpdated { .. } => "tab_url_updated",
            HostEvent::TabRemoved { .. } => "tab_removed",
            HostEvent::BeforeRequest { .. } => "before_request",
            HostEvent::Message { .. } => "message",
        }
    }
}

/// An action for the host platform, tagged by `directive`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "directive", rename_all = "snake_case")]
pub enum Directive {
    /// Set a tab's location; no `tab_id` means the active tab.
    UpdateTab {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        tab_id: Option<TabId>,
        url: String,
    },
    /// Suggestion list for the keyword input.
    Suggest { suggestions: Vec<Suggestion> },
    /// Reply to a page message.
    Respond { success: bool },
    /// Answer to `before_request`; no `url` lets the request through.
    Redirect {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        request_id: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        url: Option<String>,
    },
}

impl Directive {
    /// Directive name used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Directive::UpdateTab { .. } => "update_tab",
            Directive::Suggest { .. } => "suggest",
            Directive::Respond { .. } => "respond",
            Directive::Redirect { .. } => "redirect",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_wire_format() {
        let event: HostEvent =
            serde_json::from_str(r#"{"event":"before_navigate","tab_id":4,"url":"https://@news/"}"#).unwrap();
        assert_eq!(
            event,
            HostEvent::BeforeNavigate {
                tab_id: TabId(4),
                url: "https://@news/".into()
            }
        );

        let event: HostEvent = serde_json::from_str(
            r#"{"event":"message","message":{"action":"checkShortcut","text":"news"}}"#,
        )
        .unwrap();
        assert_eq!(event.kind(), "message");
        assert!(matches!(event, HostEvent::Message { tab_id: None, .. }));
    }

    #[test]
    fn test_directive_wire_format() {
        let json = serde_json::to_string(&Directive::UpdateTab {
            tab_id: None,
            url: "https://news.example".into(),
        })
        .unwrap();
        assert_eq!(json, r#"{"directive":"update_tab","url":"https://news.example"}"#);

        let json = serde_json::to_string(&Directive::Respond { success: false }).unwrap();
        assert_eq!(json, r#"{"directive":"respond","success":false}"#);

        let json = serde_json::to_string(&Directive::Redirect {
            request_id: Some("17".into()),
            url: None,
        })
        .unwrap();
        assert_eq!(json, r#"{"directive":"redirect","request_id":"17"}"#);
    }

    #[test]
    fn test_before_request_wire_format() {
        let event: HostEvent =
            serde_json::from_str(r#"{"event":"before_request","url":"https://@docs/"}"#).unwrap();
        assert_eq!(event.kind(), "before_request");
        assert_eq!(
            event,
            HostEvent::BeforeRequest {
                request_id: None,
                url: "https://@docs/".into()
            }
        );
    }
}
