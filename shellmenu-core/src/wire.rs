//! Request/response payloads exchanged with the host collaborator.
//!
//! The transport itself (message channel, bus, socket) is out of scope; these
//! types only fix the shape that crosses it. Field names follow the wire
//! convention (camelCase) so either side can be implemented in any language.

use serde::{Deserialize, Serialize};

use crate::template::MenuItemRecord;

/// Raw, unscaled client coordinates. DPI/zoom scaling is the host's job.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Modifier-key details attached to a click response. Mirrors the host's
/// native keyboard event; everything defaults to false so a host may omit
/// fields it doesn't track.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClickInfo {
    /// True when the item was activated via its accelerator rather than a
    /// pointer click.
    pub triggered_by_accelerator: bool,
    pub ctrl_key: bool,
    pub alt_key: bool,
    pub shift_key: bool,
    pub meta_key: bool,
}

/// Client → host: display this menu.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowRequest {
    /// Correlation key, stable per menu instance (not per call).
    pub menu_id: String,
    pub position: Position,
    pub template: Vec<MenuItemRecord>,
    /// `href` of the anchor under the cursor, when the show originated from a
    /// link element.
    #[serde(rename = "linkURL", default, skip_serializing_if = "Option::is_none")]
    pub link_url: Option<String>,
}

/// Host → client: the popup closed.
///
/// `menu_item_id: None` means the user dismissed the menu without choosing an
/// item. The host must resolve exactly once per show request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowResponse {
    pub menu_id: String,
    pub menu_item_id: Option<String>,
    #[serde(default)]
    pub event: ClickInfo,
}

/// Client → host: proactively close any open popup for this menu.
/// Fire-and-forget; the open show request still resolves with no selection
/// through the normal close callback.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HideRequest {
    pub menu_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_request_omits_absent_link_url() {
        let request = ShowRequest {
            menu_id: "m1".into(),
            position: Position { x: 10.0, y: 20.0 },
            template: Vec::new(),
            link_url: None,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("linkURL").is_none());
        assert!(json.get("linkUrl").is_none());
        assert_eq!(json["menuId"], "m1");
        assert_eq!(json["position"]["x"], 10.0);
    }

    #[test]
    fn response_event_defaults_when_omitted() {
        let response: ShowResponse =
            serde_json::from_str(r#"{"menuId":"m1","menuItemId":null}"#).unwrap();
        assert_eq!(response.menu_item_id, None);
        assert!(!response.event.triggered_by_accelerator);
    }

    #[test]
    fn response_round_trips_modifiers() {
        let response: ShowResponse = serde_json::from_str(
            r#"{"menuId":"m1","menuItemId":"open","event":{"triggeredByAccelerator":true,"ctrlKey":true}}"#,
        )
        .unwrap();
        assert_eq!(response.menu_item_id.as_deref(), Some("open"));
        assert!(response.event.triggered_by_accelerator);
        assert!(response.event.ctrl_key);
        assert!(!response.event.shift_key);
    }
}
