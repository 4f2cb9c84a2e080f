use crate::{RequestId, SearchCriteria};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Issue one search request to the backend.
    RunSearch {
        request_id: RequestId,
        criteria: SearchCriteria,
    },
    /// Show a user-visible notification.
    Notify(Notification),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn new(kind: NotificationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}
