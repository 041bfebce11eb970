//! Adaptive Card builders for the greeting card and the card shown inside the task module.

use bot_core::{Attachment, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::{ActionDetails, TaskFetchData, ACTION_1, ACTION_2};

const ADAPTIVE_CARD_SCHEMA: &str = "http://adaptivecards.io/schemas/adaptive-card.json";
const ADAPTIVE_CARD_VERSION: &str = "1.0";

/// Image shown inside the task module card.
pub const TASK_MODULE_IMAGE_URL: &str = "http://adaptivecards.io/content/cats/1.png";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TextSize {
    Small,
    Default,
    Medium,
    Large,
    ExtraLarge,
}

/// Body element of a card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CardElement {
    TextBlock {
        text: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        size: Option<TextSize>,
        #[serde(default, skip_serializing_if = "std::ops::Not::not")]
        wrap: bool,
    },
    Image {
        url: String,
    },
}

/// Action button of a card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CardAction {
    #[serde(rename = "Action.Submit")]
    Submit {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        data: Option<Value>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdaptiveCard {
    #[serde(rename = "$schema")]
    pub schema: String,
    #[serde(rename = "type")]
    pub card_type: String,
    pub version: String,
    #[serde(default)]
    pub body: Vec<CardElement>,
    #[serde(default)]
    pub actions: Vec<CardAction>,
}

impl AdaptiveCard {
    /// Empty version 1.0 card.
    pub fn new() -> Self {
        Self {
            schema: ADAPTIVE_CARD_SCHEMA.to_string(),
            card_type: "AdaptiveCard".to_string(),
            version: ADAPTIVE_CARD_VERSION.to_string(),
            body: Vec::new(),
            actions: Vec::new(),
        }
    }

    pub fn with_element(mut self, element: CardElement) -> Self {
        self.body.push(element);
        self
    }

    pub fn with_action(mut self, action: CardAction) -> Self {
        self.actions.push(action);
        self
    }

    /// Serializes the card into an Adaptive Card attachment.
    pub fn to_attachment(&self) -> Result<Attachment> {
        Ok(Attachment::adaptive_card(serde_json::to_value(self)?))
    }
}

impl Default for AdaptiveCard {
    fn default() -> Self {
        Self::new()
    }
}

/// `Action.Submit` that makes the client issue `task/fetch` with `details` as the request data.
pub fn task_fetch_action(title: &str, details: ActionDetails) -> Result<CardAction> {
    Ok(CardAction::Submit {
        title: Some(title.to_string()),
        data: Some(serde_json::to_value(TaskFetchData::new(details))?),
    })
}

/// Card sent in reply to a plain message: a prompt and one button per sample action.
pub fn greeting_card() -> Result<AdaptiveCard> {
    Ok(AdaptiveCard::new()
        .with_element(CardElement::TextBlock {
            text: "Hello, click on Show Task Module.".to_string(),
            size: Some(TextSize::Large),
            wrap: false,
        })
        .with_action(task_fetch_action(
            "Show Task Module 1",
            ActionDetails::new(ACTION_1),
        )?)
        .with_action(task_fetch_action(
            "Show Task Module 2",
            ActionDetails::new(ACTION_2),
        )?))
}

/// Card rendered inside the task module for the given action label.
pub fn task_module_card(action_type: &str) -> AdaptiveCard {
    AdaptiveCard::new()
        .with_element(CardElement::TextBlock {
            text: format!("This is opened in Task Module for {}", action_type),
            size: Some(TextSize::Large),
            wrap: true,
        })
        .with_element(CardElement::Image {
            url: TASK_MODULE_IMAGE_URL.to_string(),
        })
        .with_action(CardAction::Submit {
            title: None,
            data: None,
        })
}
