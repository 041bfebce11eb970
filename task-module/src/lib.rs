//! # task-module
//!
//! Opens a task module (modal dialog) from a card button. A plain message gets a card with two
//! buttons; a button click arrives as a `task/fetch` invoke, answered with the dialog to open;
//! submitting the dialog arrives as `task/submit`, answered by closing it and thanking the user.

pub mod cards;
pub mod handler;
pub mod invoke;
pub mod models;

pub use cards::{greeting_card, task_module_card, AdaptiveCard, CardAction, CardElement, TextSize};
pub use handler::{
    fetch_response, TaskModuleHandler, SUBMIT_THANKS_TEXT, TASK_MODULE_HEIGHT, TASK_MODULE_TITLE,
    TASK_MODULE_WIDTH,
};
pub use invoke::{InvokeName, TASK_FETCH, TASK_SUBMIT};
pub use models::{
    ActionDetails, TaskFetchData, TaskModuleRequest, TaskModuleResponse, TaskModuleTask,
    TaskModuleTaskInfo, ACTION_1, ACTION_2,
};
