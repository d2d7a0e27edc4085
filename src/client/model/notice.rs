use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_NOTICE_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A one-shot message for the user.
///
/// Every notice gets its own `id`, so a timer started for one notice cannot close
/// a later one.
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Success, message.into())
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Error, message.into())
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }

    fn new(kind: NoticeKind, message: String) -> Self {
        Self {
            id: NEXT_NOTICE_ID.fetch_add(1, Ordering::Relaxed),
            kind,
            message,
        }
    }
}
