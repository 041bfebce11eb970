//! Task module handler: replies to messages with the greeting card and answers `task/fetch` /
//! `task/submit` invokes.

use async_trait::async_trait;
use bot_core::{
    Activity, ActivityType, Handler, HandlerResponse, InvokeActivity, Result, TurnContext,
};
use tracing::{debug, info, instrument, warn};

use crate::cards;
use crate::invoke::InvokeName;
use crate::models::{ActionDetails, TaskModuleRequest, TaskModuleResponse, TaskModuleTaskInfo};

/// Title of the dialog opened by `task/fetch`.
pub const TASK_MODULE_TITLE: &str = "Test task module";
pub const TASK_MODULE_HEIGHT: u32 = 470;
pub const TASK_MODULE_WIDTH: u32 = 400;
/// Sent after the dialog is closed by `task/submit`.
pub const SUBMIT_THANKS_TEXT: &str = "Thanks for submitting your request.";

/// Builds the `continue` response that opens the dialog for `details`.
pub fn fetch_response(details: &ActionDetails) -> Result<TaskModuleResponse> {
    let card = cards::task_module_card(&details.action_type).to_attachment()?;
    Ok(TaskModuleResponse::continue_with(TaskModuleTaskInfo {
        title: TASK_MODULE_TITLE.to_string(),
        height: TASK_MODULE_HEIGHT,
        width: TASK_MODULE_WIDTH,
        card,
    }))
}

/// Stateless; one instance can serve every conversation.
#[derive(Debug, Clone, Default)]
pub struct TaskModuleHandler;

impl TaskModuleHandler {
    pub fn new() -> Self {
        Self
    }

    /// Dispatches on the activity kind. Messages and recognised invokes return Stop; unrecognised
    /// invoke names return Ignore without sending anything; other kinds return Continue.
    #[instrument(skip(self, turn), fields(activity_type = ?turn.activity().activity_type))]
    pub async fn on_turn(&self, turn: &TurnContext) -> Result<HandlerResponse> {
        match turn.activity().activity_type {
            ActivityType::Message => {
                self.on_message(turn).await?;
                Ok(HandlerResponse::Stop)
            }
            ActivityType::Invoke => {
                let invoke = turn.activity().as_invoke()?;
                self.on_invoke(turn, invoke).await
            }
            other => {
                debug!(activity_type = ?other, "Not a task module turn; deferring to default handling");
                Ok(HandlerResponse::Continue)
            }
        }
    }

    /// Sends the greeting card with one button per sample action.
    pub async fn on_message(&self, turn: &TurnContext) -> Result<()> {
        let card = cards::greeting_card()?.to_attachment()?;
        turn.send_activity(Activity::attachment(card)).await?;
        info!("step: greeting card sent");
        Ok(())
    }

    async fn on_invoke(
        &self,
        turn: &TurnContext,
        invoke: InvokeActivity<'_>,
    ) -> Result<HandlerResponse> {
        match InvokeName::from(invoke.name) {
            InvokeName::TaskFetch => {
                self.on_task_fetch(turn, invoke).await?;
                Ok(HandlerResponse::Stop)
            }
            InvokeName::TaskSubmit => {
                self.on_task_submit(turn).await?;
                Ok(HandlerResponse::Stop)
            }
            InvokeName::Unrecognized(name) => {
                warn!(invoke_name = %name, "Unrecognized invoke; no response sent");
                Ok(HandlerResponse::Ignore)
            }
        }
    }

    /// Decodes the request, then answers with the dialog to open. A malformed or missing payload
    /// fails before anything is sent.
    async fn on_task_fetch(&self, turn: &TurnContext, invoke: InvokeActivity<'_>) -> Result<()> {
        let request: TaskModuleRequest<ActionDetails> = invoke.decode_value()?;
        let response = fetch_response(&request.data)?;
        turn.send_invoke_response(Some(serde_json::to_value(&response)?))
            .await?;
        info!(action_type = %request.data.action_type, "step: task module opened");
        Ok(())
    }

    /// Closes the dialog, then thanks the user. The submitted values are not read.
    async fn on_task_submit(&self, turn: &TurnContext) -> Result<()> {
        turn.send_invoke_response(None).await?;
        turn.send_text(SUBMIT_THANKS_TEXT).await?;
        info!("step: task module submitted");
        Ok(())
    }
}

#[async_trait]
impl Handler for TaskModuleHandler {
    async fn handle(&self, turn: &TurnContext) -> Result<HandlerResponse> {
        self.on_turn(turn).await
    }
}
