//! Option and query records for channel operations.
//!
//! Each record is a closed, explicitly enumerated field set rather than an
//! open bag; optional fields are skipped entirely when unset so the wire
//! body only carries what the caller asked to change.

use serde::Serialize;

/// Fields that can be changed on a channel (PATCH body).
#[derive(Debug, Clone, Default, Serialize)]
pub struct ModifyChannelOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<u8>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub nsfw: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate_limit_per_user: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bitrate: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_limit: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
}

/// Body for sending a message.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateMessageOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub nonce: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tts: Option<bool>,
}

impl CreateMessageOptions {
    /// A plain text message.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Self::default()
        }
    }
}

/// Body for editing a message.
#[derive(Debug, Clone, Default, Serialize)]
pub struct EditMessageOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub flags: Option<u32>,
}

/// Body for setting a permission overwrite (PUT).
#[derive(Debug, Clone, Default, Serialize)]
pub struct EditPermissionsOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub deny: Option<String>,

    /// 0 = role overwrite, 1 = member overwrite.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<u8>,
}

/// Body for creating an invite. An all-default body is valid and produces
/// an invite with the remote's defaults.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateInviteOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_age: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_uses: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub temporary: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique: Option<bool>,
}

/// Body for following a news channel.
#[derive(Debug, Clone, Serialize)]
pub struct FollowChannelOptions {
    pub webhook_channel_id: String,
}

/// Body for adding a recipient to a DM group.
#[derive(Debug, Clone, Serialize)]
pub struct AddRecipientOptions {
    pub access_token: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub nick: Option<String>,
}

/// Body for starting a thread, with or without a message to anchor it.
#[derive(Debug, Clone, Serialize)]
pub struct StartThreadOptions {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_archive_duration: Option<u32>,

    /// Thread channel type. Only meaningful when no anchor message is given.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<u8>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate_limit_per_user: Option<u32>,
}

impl StartThreadOptions {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            auto_archive_duration: None,
            kind: None,
            rate_limit_per_user: None,
        }
    }
}

/// Query parameters for fetching channel messages. `around`, `before`, and
/// `after` are mutually exclusive on the remote side; the client forwards
/// whatever was set.
#[derive(Debug, Clone, Default)]
pub struct GetMessagesQuery {
    pub around: Option<String>,
    pub before: Option<String>,
    pub after: Option<String>,
    pub limit: Option<u8>,
}

impl GetMessagesQuery {
    pub fn with_limit(limit: u8) -> Self {
        Self {
            limit: Some(limit),
            ..Self::default()
        }
    }

    /// Render into URL query pairs, skipping unset fields.
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(ref around) = self.around {
            pairs.push(("around".to_string(), around.clone()));
        }
        if let Some(ref before) = self.before {
            pairs.push(("before".to_string(), before.clone()));
        }
        if let Some(ref after) = self.after {
            pairs.push(("after".to_string(), after.clone()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit".to_string(), limit.to_string()));
        }
        pairs
    }
}

/// Query parameters for listing archived threads.
#[derive(Debug, Clone, Default)]
pub struct ArchivedThreadsQuery {
    /// ISO8601 timestamp; returns threads archived before this.
    pub before: Option<String>,
    pub limit: Option<u32>,
}

impl ArchivedThreadsQuery {
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(ref before) = self.before {
            pairs.push(("before".to_string(), before.clone()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit".to_string(), limit.to_string()));
        }
        pairs
    }
}

/// Which messages a bulk delete should target.
///
/// `MostRecent(n)` is resolved by the manager into an explicit id list via a
/// read of the channel's `n` most recent messages before the delete is
/// issued. The remote caps bulk deletes at 100 ids, hence `u8`.
#[derive(Debug, Clone)]
pub enum MessageSelector {
    Ids(Vec<String>),
    MostRecent(u8),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_fields_are_skipped() {
        let opts = ModifyChannelOptions {
            name: Some("renamed".into()),
            ..Default::default()
        };
        let json = serde_json::to_value(&opts).unwrap();
        assert_eq!(json, serde_json::json!({"name": "renamed"}));
    }

    #[test]
    fn kind_serializes_as_type() {
        let opts = EditPermissionsOptions {
            allow: Some("1024".into()),
            deny: None,
            kind: Some(1),
        };
        let json = serde_json::to_value(&opts).unwrap();
        assert_eq!(json, serde_json::json!({"allow": "1024", "type": 1}));
    }

    #[test]
    fn default_invite_body_is_empty_object() {
        let json = serde_json::to_value(CreateInviteOptions::default()).unwrap();
        assert_eq!(json, serde_json::json!({}));
    }

    #[test]
    fn messages_query_pairs() {
        let query = GetMessagesQuery {
            before: Some("111".into()),
            limit: Some(50),
            ..Default::default()
        };
        assert_eq!(
            query.to_pairs(),
            vec![
                ("before".to_string(), "111".to_string()),
                ("limit".to_string(), "50".to_string()),
            ]
        );

        assert!(GetMessagesQuery::default().to_pairs().is_empty());
    }

    #[test]
    fn archived_threads_query_pairs() {
        let query = ArchivedThreadsQuery {
            before: Some("2024-01-01T00:00:00Z".into()),
            limit: Some(25),
        };
        let pairs = query.to_pairs();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].0, "before");
    }

    #[test]
    fn text_message_helper() {
        let json = serde_json::to_value(CreateMessageOptions::text("hello")).unwrap();
        assert_eq!(json, serde_json::json!({"content": "hello"}));
    }
}
