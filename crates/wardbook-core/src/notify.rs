//! Transient user-facing notices.
//!
//! Notices are queued by the session controller and read by the
//! rendering layer. Each notice lives for a fixed duration; expired
//! notices drop out of the visible view and can be swept from the queue.
//! Notices are independent of each other, multiple may be visible at
//! once, and nothing coalesces repeats.

use std::time::{Duration, Instant};

/// How long a notice stays visible after being posted.
pub const NOTICE_TTL: Duration = Duration::from_secs(5);

/// Severity of a notice, mapped to display styling upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
    Warning,
    Info,
}

/// A single transient message.
#[derive(Debug, Clone)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
    posted_at: Instant,
}

impl Notice {
    fn new(level: NoticeLevel, message: String, posted_at: Instant) -> Self {
        Self {
            level,
            message,
            posted_at,
        }
    }

    /// Whether this notice is still within its display window at `now`.
    pub fn is_visible_at(&self, now: Instant) -> bool {
        now.duration_since(self.posted_at) < NOTICE_TTL
    }
}

/// Queue of pending notices, oldest first.
#[derive(Debug, Default)]
pub struct NoticeQueue {
    notices: Vec<Notice>,
}

impl NoticeQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Post a notice stamped with the current time.
    pub fn push(&mut self, level: NoticeLevel, message: impl Into<String>) {
        self.push_at(level, message, Instant::now());
    }

    /// Post a notice stamped with an explicit time.
    pub fn push_at(&mut self, level: NoticeLevel, message: impl Into<String>, now: Instant) {
        self.notices.push(Notice::new(level, message.into(), now));
    }

    /// Notices currently within their display window.
    pub fn visible(&self) -> Vec<&Notice> {
        self.visible_at(Instant::now())
    }

    /// Notices within their display window at an explicit time.
    pub fn visible_at(&self, now: Instant) -> Vec<&Notice> {
        self.notices
            .iter()
            .filter(|notice| notice.is_visible_at(now))
            .collect()
    }

    /// Drop every notice whose display window has passed.
    pub fn sweep(&mut self) {
        self.sweep_at(Instant::now());
    }

    /// Drop expired notices relative to an explicit time.
    pub fn sweep_at(&mut self, now: Instant) {
        self.notices.retain(|notice| notice.is_visible_at(now));
    }

    pub fn len(&self) -> usize {
        self.notices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }
}
