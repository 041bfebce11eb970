//! Activity schema: the subset of the Bot Framework activity shape exchanged with the host channel.
//!
//! Field names follow the wire format (camelCase); optional fields are omitted when absent.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{HandlerError, Result};

/// Content type of an Adaptive Card attachment.
pub const ADAPTIVE_CARD_CONTENT_TYPE: &str = "application/vnd.microsoft.card.adaptive";

/// Kind of an activity. Unrecognised kinds decode to [`ActivityType::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActivityType {
    Message,
    Invoke,
    InvokeResponse,
    ConversationUpdate,
    Typing,
    #[serde(other)]
    Unknown,
}

/// A user or bot on the channel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelAccount {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// The conversation an activity belongs to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationAccount {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversation_type: Option<String>,
}

/// Opaque attachment; `content` is rendered by the client according to `content_type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub content_type: String,
    pub content: Value,
}

impl Attachment {
    /// Wraps serialized Adaptive Card JSON as an attachment.
    pub fn adaptive_card(content: Value) -> Self {
        Self {
            content_type: ADAPTIVE_CARD_CONTENT_TYPE.to_string(),
            content,
        }
    }
}

/// Acknowledgment of an invoke activity. `body` is serialized as `null` when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvokeResponse {
    pub status: u16,
    #[serde(default)]
    pub body: Option<Value>,
}

impl InvokeResponse {
    /// Status 200 with the given body.
    pub fn ok(body: Option<Value>) -> Self {
        Self { status: 200, body }
    }
}

/// One inbound or outbound event on the channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    #[serde(rename = "type")]
    pub activity_type: ActivityType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<ChannelAccount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient: Option<ChannelAccount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversation: Option<ConversationAccount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_to_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,
}

impl Activity {
    /// Empty activity of the given kind.
    pub fn new(activity_type: ActivityType) -> Self {
        Self {
            activity_type,
            id: None,
            timestamp: None,
            channel_id: None,
            service_url: None,
            from: None,
            recipient: None,
            conversation: None,
            reply_to_id: None,
            text: None,
            name: None,
            value: None,
            attachments: Vec::new(),
        }
    }

    /// Plain text message.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::new(ActivityType::Message)
        }
    }

    /// Message carrying a single attachment.
    pub fn attachment(attachment: Attachment) -> Self {
        Self {
            attachments: vec![attachment],
            ..Self::new(ActivityType::Message)
        }
    }

    /// Named invoke with an optional value.
    pub fn invoke(name: impl Into<String>, value: Option<Value>) -> Self {
        Self {
            name: Some(name.into()),
            value,
            ..Self::new(ActivityType::Invoke)
        }
    }

    /// `invokeResponse` activity carrying the acknowledgment as its value.
    pub fn invoke_response(response: &InvokeResponse) -> Result<Self> {
        Ok(Self {
            value: Some(serde_json::to_value(response)?),
            ..Self::new(ActivityType::InvokeResponse)
        })
    }

    /// Invoke-typed view of this activity. Fails with [`HandlerError::NotInvoke`] for any other kind.
    pub fn as_invoke(&self) -> std::result::Result<InvokeActivity<'_>, HandlerError> {
        if self.activity_type != ActivityType::Invoke {
            return Err(HandlerError::NotInvoke);
        }
        Ok(InvokeActivity {
            name: self.name.as_deref().unwrap_or_default(),
            value: self.value.as_ref(),
        })
    }
}

/// Borrowed view over an activity known to be an invoke.
#[derive(Debug, Clone, Copy)]
pub struct InvokeActivity<'a> {
    pub name: &'a str,
    pub value: Option<&'a Value>,
}

impl InvokeActivity<'_> {
    /// Decodes the invoke value into `T`. An absent value is [`HandlerError::MissingValue`];
    /// a value of the wrong shape is [`HandlerError::InvalidPayload`].
    pub fn decode_value<T: serde::de::DeserializeOwned>(&self) -> std::result::Result<T, HandlerError> {
        let value = self.value.ok_or_else(|| HandlerError::MissingValue {
            name: self.name.to_string(),
        })?;
        T::deserialize(value).map_err(|source| HandlerError::InvalidPayload {
            name: self.name.to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_invoke_activity() {
        let activity: Activity = serde_json::from_value(json!({
            "type": "invoke",
            "id": "a1",
            "name": "task/fetch",
            "from": { "id": "user-1", "name": "Ada" },
            "conversation": { "id": "conv-1" },
            "value": { "data": { "ActionType": "action 1" } }
        }))
        .unwrap();

        assert_eq!(activity.activity_type, ActivityType::Invoke);
        let invoke = activity.as_invoke().unwrap();
        assert_eq!(invoke.name, "task/fetch");
        assert!(invoke.value.is_some());
    }

    #[test]
    fn test_unknown_activity_type() {
        let activity: Activity =
            serde_json::from_value(json!({ "type": "installationUpdate" })).unwrap();
        assert_eq!(activity.activity_type, ActivityType::Unknown);
    }

    #[test]
    fn test_as_invoke_rejects_message() {
        let activity = Activity::text("hello");
        assert!(matches!(activity.as_invoke(), Err(HandlerError::NotInvoke)));
    }

    #[test]
    fn test_decode_value_missing() {
        let activity = Activity::invoke("task/fetch", None);
        let invoke = activity.as_invoke().unwrap();
        let err = invoke.decode_value::<Value>().unwrap_err();
        assert!(matches!(err, HandlerError::MissingValue { name } if name == "task/fetch"));
    }

    #[test]
    fn test_invoke_response_null_body() {
        let value = serde_json::to_value(InvokeResponse::ok(None)).unwrap();
        assert_eq!(value, json!({ "status": 200, "body": null }));
    }

    #[test]
    fn test_message_omits_absent_fields() {
        let value = serde_json::to_value(Activity::text("hi")).unwrap();
        assert_eq!(value, json!({ "type": "message", "text": "hi" }));
    }
}
