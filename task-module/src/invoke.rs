//! Invoke names recognised by the task module handler.

/// Client asks for the dialog to open.
pub const TASK_FETCH: &str = "task/fetch";
/// Client submitted the dialog.
pub const TASK_SUBMIT: &str = "task/submit";

/// Closed set of invoke names; anything else is carried as [`InvokeName::Unrecognized`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvokeName<'a> {
    TaskFetch,
    TaskSubmit,
    Unrecognized(&'a str),
}

impl<'a> From<&'a str> for InvokeName<'a> {
    fn from(name: &'a str) -> Self {
        match name {
            TASK_FETCH => InvokeName::TaskFetch,
            TASK_SUBMIT => InvokeName::TaskSubmit,
            other => InvokeName::Unrecognized(other),
        }
    }
}
