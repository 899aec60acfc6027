// ── User notices ──
//
// Stores report outcomes through a notice channel instead of printing.
// Consumers (the CLI today) drain the receiver and render however they
// like; a dropped receiver makes sends silent no-ops.

use tokio::sync::mpsc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
    Info,
}

/// A one-shot user-facing message emitted by a store action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }
}

/// Cloneable sending half handed to every store.
#[derive(Debug, Clone)]
pub struct NoticeSender {
    tx: mpsc::UnboundedSender<Notice>,
}

impl NoticeSender {
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<Notice>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    pub fn send(&self, notice: Notice) {
        // Receiver gone means nobody is listening; that's fine.
        let _ = self.tx.send(notice);
    }

    pub fn success(&self, message: impl Into<String>) {
        self.send(Notice::success(message));
    }

    pub fn error(&self, message: impl Into<String>) {
        self.send(Notice::error(message));
    }

    pub fn info(&self, message: impl Into<String>) {
        self.send(Notice::info(message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notices_arrive_in_order() {
        let (tx, mut rx) = NoticeSender::channel();
        tx.success("Project created");
        tx.error("Failed to delete task");
        assert_eq!(rx.try_recv().ok(), Some(Notice::success("Project created")));
        assert_eq!(
            rx.try_recv().ok(),
            Some(Notice::error("Failed to delete task"))
        );
    }

    #[test]
    fn send_without_receiver_is_silent() {
        let (tx, rx) = NoticeSender::channel();
        drop(rx);
        tx.info("nobody home");
    }
}
