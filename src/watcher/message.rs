//! Messages sent from a page to the shortcut engine.

use serde::{Deserialize, Serialize};

/// Inbound page message, tagged by `action` as the page script sends it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum PageMessage {
    /// A candidate token typed on the page, marker already removed.
    CheckShortcut { text: String },
    /// The page's URL changed without a browser navigation.
    CheckUrl { url: String },
}

/// Reply to a page message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct MessageResponse {
    pub success: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_format() {
        let msg: PageMessage = serde_json::from_str(r#"{"action":"checkShortcut","text":"news"}"#).unwrap();
        assert_eq!(msg, PageMessage::CheckShortcut { text: "news".into() });

        let msg: PageMessage = serde_json::from_str(r#"{"action":"checkUrl","url":"https://a.example/"}"#).unwrap();
        assert_eq!(msg, PageMessage::CheckUrl { url: "https://a.example/".into() });

        assert!(serde_json::from_str::<PageMessage>(r#"{"action":"unknown"}"#).is_err());
        assert_eq!(
            serde_json::to_string(&MessageResponse { success: true }).unwrap(),
            r#"{"success":true}"#
        );
    }
}
