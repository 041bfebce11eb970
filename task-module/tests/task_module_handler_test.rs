//! Integration tests for [`task_module::TaskModuleHandler`].
//!
//! Drives the handler with inbound activities through a [`TurnContext`] backed by a recording
//! [`MockBot`], then asserts on the outbound activities: the greeting card, the `task/fetch`
//! response, the `task/submit` acknowledgment and thank-you text, and the silent paths.

mod common;

use std::sync::Arc;

use bot_core::{
    Activity, ActivityType, BotError, ChannelAccount, ConversationAccount, Handler, HandlerError,
    HandlerResponse, TurnContext,
};
use common::mock_bot::MockBot;
use serde_json::{json, Value};
use task_module::{
    AdaptiveCard, CardAction, TaskModuleHandler, SUBMIT_THANKS_TEXT, TASK_FETCH, TASK_SUBMIT,
};
use tokio_util::sync::CancellationToken;

fn addressed(activity: Activity) -> Activity {
    Activity {
        id: Some("inbound-1".to_string()),
        channel_id: Some("msteams".to_string()),
        from: Some(ChannelAccount {
            id: "user-1".to_string(),
            name: Some("Test User".to_string()),
        }),
        recipient: Some(ChannelAccount {
            id: "bot-1".to_string(),
            name: Some("Task Module Bot".to_string()),
        }),
        conversation: Some(ConversationAccount {
            id: "conversation-1".to_string(),
            conversation_type: Some("personal".to_string()),
        }),
        ..activity
    }
}

fn fetch_invoke(data: Value) -> Activity {
    addressed(Activity::invoke(
        TASK_FETCH,
        Some(json!({ "data": data, "context": { "theme": "default" } })),
    ))
}

async fn run(activity: Activity) -> (Arc<MockBot>, bot_core::Result<HandlerResponse>) {
    let bot = Arc::new(MockBot::new());
    let turn = TurnContext::new(activity, bot.clone());
    let result = TaskModuleHandler::new().handle(&turn).await;
    (bot, result)
}

fn invoke_body(activity: &Activity) -> Value {
    assert_eq!(activity.activity_type, ActivityType::InvokeResponse);
    let value = activity.value.clone().expect("invoke response carries a value");
    assert_eq!(value["status"], 200);
    value["body"].clone()
}

/// **Test: A plain message produces exactly one card with two task/fetch buttons.**
#[tokio::test]
async fn test_message_sends_greeting_card() {
    let (bot, result) = run(addressed(Activity::text("hi"))).await;

    assert_eq!(result.unwrap(), HandlerResponse::Stop);
    let sent = bot.sent();
    assert_eq!(sent.len(), 1);

    let out = &sent[0];
    assert_eq!(out.activity_type, ActivityType::Message);
    assert_eq!(out.conversation.as_ref().unwrap().id, "conversation-1");
    assert_eq!(out.attachments.len(), 1);
    assert_eq!(
        out.attachments[0].content_type,
        "application/vnd.microsoft.card.adaptive"
    );

    let card: AdaptiveCard = serde_json::from_value(out.attachments[0].content.clone()).unwrap();
    assert_eq!(card.actions.len(), 2);
    let action_types: Vec<_> = card
        .actions
        .iter()
        .map(|CardAction::Submit { data, .. }| data.as_ref().unwrap()["ActionType"].clone())
        .collect();
    assert_eq!(action_types, vec![json!("action 1"), json!("action 2")]);
}

/// **Test: task/fetch for "action 1" opens the dialog with the fixed title and size.**
#[tokio::test]
async fn test_task_fetch_opens_dialog() {
    let (bot, result) = run(fetch_invoke(json!({ "ActionType": "action 1" }))).await;

    assert_eq!(result.unwrap(), HandlerResponse::Stop);
    let sent = bot.sent();
    assert_eq!(sent.len(), 1);

    let body = invoke_body(&sent[0]);
    assert_eq!(body["task"]["type"], "continue");
    let info = &body["task"]["value"];
    assert_eq!(info["title"], "Test task module");
    assert_eq!(info["height"], 470);
    assert_eq!(info["width"], 400);

    let text = info["card"]["content"]["body"][0]["text"].as_str().unwrap();
    assert!(text.ends_with("for action 1"));
}

/// **Test: task/fetch accepts the `Data` envelope key as well as `data`.**
#[tokio::test]
async fn test_task_fetch_accepts_pascal_case_data_key() {
    let activity = addressed(Activity::invoke(
        TASK_FETCH,
        Some(json!({ "Data": { "ActionType": "action 1" } })),
    ));
    let (bot, result) = run(activity).await;

    assert_eq!(result.unwrap(), HandlerResponse::Stop);
    let sent = bot.sent();
    assert_eq!(sent.len(), 1);

    let body = invoke_body(&sent[0]);
    assert_eq!(body["task"]["type"], "continue");
    assert_eq!(body["task"]["value"]["title"], "Test task module");
    let text = body["task"]["value"]["card"]["content"]["body"][0]["text"]
        .as_str()
        .unwrap();
    assert!(text.ends_with("for action 1"));
}

/// **Test: Button payload round-trips through task/fetch with the label unchanged.**
///
/// **Setup:** Take the second button's data from the greeting card, as the client would echo it.
/// **Expected:** The dialog card text contains the label verbatim.
#[tokio::test]
async fn test_button_payload_round_trip() {
    let (bot, _) = run(addressed(Activity::text("hi"))).await;
    let card: AdaptiveCard =
        serde_json::from_value(bot.sent()[0].attachments[0].content.clone()).unwrap();
    let CardAction::Submit { data, .. } = &card.actions[1];
    let data = data.clone().unwrap();

    let (bot, result) = run(fetch_invoke(data)).await;
    result.unwrap();

    let body = invoke_body(&bot.sent()[0]);
    let text = body["task"]["value"]["card"]["content"]["body"][0]["text"]
        .as_str()
        .unwrap();
    assert_eq!(text, "This is opened in Task Module for action 2");
}

/// **Test: Arbitrary labels pass through task/fetch unchanged.**
#[tokio::test]
async fn test_task_fetch_preserves_custom_label() {
    let label = "ünïcode & <markup> label";
    let (bot, result) = run(fetch_invoke(json!({ "ActionType": label }))).await;
    result.unwrap();

    let body = invoke_body(&bot.sent()[0]);
    let text = body["task"]["value"]["card"]["content"]["body"][0]["text"]
        .as_str()
        .unwrap();
    assert!(text.contains(label));
}

/// **Test: Malformed data on task/fetch is a deserialization error and nothing is sent.**
#[tokio::test]
async fn test_task_fetch_malformed_data() {
    let (bot, result) = run(fetch_invoke(json!({ "ActionType": 42 }))).await;

    let err = result.unwrap_err();
    assert!(matches!(
        err,
        BotError::Handler(HandlerError::InvalidPayload { ref name, .. }) if name == "task/fetch"
    ));
    assert!(bot.sent().is_empty());
}

/// **Test: task/fetch without data is rejected the same way.**
#[tokio::test]
async fn test_task_fetch_missing_data() {
    let activity = addressed(Activity::invoke(TASK_FETCH, Some(json!({}))));
    let (bot, result) = run(activity).await;

    assert!(matches!(
        result.unwrap_err(),
        BotError::Handler(HandlerError::InvalidPayload { .. })
    ));
    assert!(bot.sent().is_empty());
}

/// **Test: task/fetch without any value fails with MissingValue and sends nothing.**
#[tokio::test]
async fn test_task_fetch_absent_value() {
    let (bot, result) = run(addressed(Activity::invoke(TASK_FETCH, None))).await;

    assert!(matches!(
        result.unwrap_err(),
        BotError::Handler(HandlerError::MissingValue { .. })
    ));
    assert!(bot.sent().is_empty());
}

/// **Test: task/submit acknowledges with a null body, then sends the thank-you text, in that order.**
#[tokio::test]
async fn test_task_submit_closes_dialog_and_thanks() {
    let activity = addressed(Activity::invoke(
        TASK_SUBMIT,
        Some(json!({ "data": { "anything": ["goes", 1, null] } })),
    ));
    let (bot, result) = run(activity).await;

    assert_eq!(result.unwrap(), HandlerResponse::Stop);
    let sent = bot.sent();
    assert_eq!(sent.len(), 2);
    assert_eq!(invoke_body(&sent[0]), Value::Null);
    assert_eq!(sent[1].activity_type, ActivityType::Message);
    assert_eq!(sent[1].text.as_deref(), Some(SUBMIT_THANKS_TEXT));
    assert_eq!(sent[1].text.as_deref(), Some("Thanks for submitting your request."));
}

/// **Test: task/submit with no value at all still closes the dialog.**
#[tokio::test]
async fn test_task_submit_without_value() {
    let (bot, result) = run(addressed(Activity::invoke(TASK_SUBMIT, None))).await;

    result.unwrap();
    assert_eq!(bot.sent().len(), 2);
}

/// **Test: An unrecognized invoke name sends nothing and is reported as Ignore.**
#[tokio::test]
async fn test_unrecognized_invoke_is_ignored() {
    let bot = Arc::new(MockBot::new());
    let turn = TurnContext::new(
        addressed(Activity::invoke("composeExtension/query", Some(json!({})))),
        bot.clone(),
    );

    let response = TaskModuleHandler::new().handle(&turn).await.unwrap();

    assert_eq!(response, HandlerResponse::Ignore);
    assert!(bot.sent().is_empty());
    assert!(!turn.invoke_responded());
}

/// **Test: Other activity kinds are left to default handling.**
#[tokio::test]
async fn test_other_activity_kinds_continue() {
    let (bot, result) = run(addressed(Activity::new(ActivityType::ConversationUpdate))).await;

    assert_eq!(result.unwrap(), HandlerResponse::Continue);
    assert!(bot.sent().is_empty());
}

/// **Test: A channel failure on send propagates as a Bot error.**
#[tokio::test]
async fn test_send_failure_propagates() {
    let bot = Arc::new(MockBot::failing());
    let turn = TurnContext::new(addressed(Activity::invoke(TASK_SUBMIT, None)), bot);

    let err = TaskModuleHandler::new().handle(&turn).await.unwrap_err();
    assert!(matches!(err, BotError::Bot(_)));
}

/// **Test: A cancelled turn aborts before the acknowledgment and surfaces Cancelled.**
#[tokio::test]
async fn test_cancelled_turn_propagates() {
    let bot = Arc::new(MockBot::new());
    let token = CancellationToken::new();
    token.cancel();
    let turn = TurnContext::with_cancellation(
        fetch_invoke(json!({ "ActionType": "action 1" })),
        bot.clone(),
        token,
    );

    let err = TaskModuleHandler::new().handle(&turn).await.unwrap_err();
    assert!(matches!(err, BotError::Cancelled));
    assert!(bot.sent().is_empty());
}
