//! Task module payloads: button data, the `task/fetch` request, and the `continue` response.

use bot_core::Attachment;
use serde::{Deserialize, Serialize};

/// Label of the first sample button.
pub const ACTION_1: &str = "action 1";
/// Label of the second sample button.
pub const ACTION_2: &str = "action 2";

/// Identifies which button opened the task module. Echoed back by the client as the fetch request's `data`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionDetails {
    #[serde(rename = "ActionType", alias = "actionType")]
    pub action_type: String,
}

impl ActionDetails {
    pub fn new(action_type: impl Into<String>) -> Self {
        Self {
            action_type: action_type.into(),
        }
    }
}

/// Teams-specific marker inside `Action.Submit` data that turns the click into a `task/fetch` invoke.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsTeamsAction {
    #[serde(rename = "type")]
    pub action_type: String,
}

/// Button payload: the `msteams` marker plus the action details, flattened into one object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskFetchData {
    pub msteams: MsTeamsAction,
    #[serde(flatten)]
    pub details: ActionDetails,
}

impl TaskFetchData {
    pub fn new(details: ActionDetails) -> Self {
        Self {
            msteams: MsTeamsAction {
                action_type: crate::invoke::TASK_FETCH.to_string(),
            },
            details,
        }
    }
}

/// Client context sent with a task module request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskModuleRequestContext {
    #[serde(default, alias = "Theme", skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
}

/// Inbound value of a `task/fetch` invoke, with `data` decoded as `T`.
/// Envelope keys are accepted in either casing (`data` / `Data`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskModuleRequest<T> {
    #[serde(alias = "Data")]
    pub data: T,
    #[serde(default, alias = "Context", skip_serializing_if = "Option::is_none")]
    pub context: Option<TaskModuleRequestContext>,
}

/// Dialog to open: title, size, and the card to render inside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskModuleTaskInfo {
    pub title: String,
    pub height: u32,
    pub width: u32,
    pub card: Attachment,
}

/// What the client should do with the dialog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum TaskModuleTask {
    /// Open (or keep open) the dialog with the given content.
    Continue(TaskModuleTaskInfo),
}

/// Body of the invoke response to `task/fetch`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskModuleResponse {
    pub task: TaskModuleTask,
}

impl TaskModuleResponse {
    pub fn continue_with(info: TaskModuleTaskInfo) -> Self {
        Self {
            task: TaskModuleTask::Continue(info),
        }
    }
}
