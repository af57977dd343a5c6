/// Transient notices
///
/// Success and error messages raised by the views. The front-end drains them
/// after each command; nothing is kept once shown.

use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

/// Queue of notices waiting to be shown
#[derive(Debug, Default)]
pub struct Notices {
    queue: Mutex<VecDeque<Notice>>,
}

impl Notices {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(NoticeKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(NoticeKind::Error, message.into());
    }

    /// Removes and returns every pending notice, oldest first
    pub fn drain(&self) -> Vec<Notice> {
        self.queue
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .drain(..)
            .collect()
    }

    fn push(&self, kind: NoticeKind, message: String) {
        tracing::debug!(kind = ?kind, message = %message, "Notice raised");
        self.queue
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(Notice { kind, message });
    }
}
