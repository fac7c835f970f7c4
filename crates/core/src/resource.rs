//! Resource representations returned by the API.
//!
//! The client names the handful of fields it or its callers commonly touch
//! and keeps everything else intact in a flattened map, so payloads are
//! stored, forwarded, and returned whole. The managers never interpret
//! payload fields beyond the one id projection in the bulk-delete composite.

use serde::{Deserialize, Serialize};

/// A channel (text, voice, category, DM group, or thread).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Channel {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The remote's numeric channel type.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<u8>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// A message posted in a channel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Message {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// An invite to a channel, keyed by its code.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Invite {
    pub code: String,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// A member of a thread.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ThreadMember {
    /// The thread's channel id. Absent in some list responses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// The result of following a news channel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FollowedChannel {
    pub channel_id: String,
    pub webhook_id: String,
}

/// One page of archived threads.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ArchivedThreads {
    pub threads: Vec<Channel>,
    pub members: Vec<ThreadMember>,
    pub has_more: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_keeps_unknown_fields_whole() {
        let raw = r#"{
            "id": "123",
            "name": "general",
            "type": 0,
            "topic": "chatter",
            "nsfw": false
        }"#;
        let channel: Channel = serde_json::from_str(raw).unwrap();
        assert_eq!(channel.id, "123");
        assert_eq!(channel.name.as_deref(), Some("general"));
        assert_eq!(channel.kind, Some(0));
        assert_eq!(channel.extra["topic"], "chatter");

        // Round-trips with the unknown fields intact.
        let back = serde_json::to_value(&channel).unwrap();
        assert_eq!(back["topic"], "chatter");
        assert_eq!(back["nsfw"], false);
        assert_eq!(back["type"], 0);
    }

    #[test]
    fn message_minimal_payload() {
        let msg: Message = serde_json::from_str(r#"{"id": "9"}"#).unwrap();
        assert_eq!(msg.id, "9");
        assert!(msg.content.is_none());
        assert!(msg.extra.is_empty());
    }

    #[test]
    fn archived_threads_page() {
        let page: ArchivedThreads = serde_json::from_str(
            r#"{
                "threads": [{"id": "t1", "name": "old thread"}],
                "members": [{"id": "t1", "user_id": "u1"}],
                "has_more": true
            }"#,
        )
        .unwrap();
        assert_eq!(page.threads.len(), 1);
        assert_eq!(page.members[0].user_id.as_deref(), Some("u1"));
        assert!(page.has_more);
    }
}
