//! Transient toast notifications.
//!
//! A [`Notifier`] owns one display slot. Showing a new toast replaces the
//! current one and restarts the auto-hide timer, which is how repeated clicks
//! on a copy button keep the latest message on screen.

use std::time::{Duration, Instant};

use tracing::debug;

/// Auto-hide delay for status notifications.
pub const NOTIFICATION_DURATION: Duration = Duration::from_secs(2);

/// Auto-hide delay for the eyedropper tooltip.
pub const TOOLTIP_DURATION: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Failure,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    shown_at: Instant,
    duration: Duration,
}

impl Toast {
    pub fn is_visible_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) < self.duration
    }

    /// Time left before the toast hides itself.
    pub fn remaining_at(&self, now: Instant) -> Duration {
        self.duration.saturating_sub(now.saturating_duration_since(self.shown_at))
    }
}

/// Single-slot toast presenter with a fixed auto-hide delay.
#[derive(Debug, Clone)]
pub struct Notifier {
    duration: Duration,
    current: Option<Toast>,
}

impl Default for Notifier {
    fn default() -> Self {
        Self::with_duration(NOTIFICATION_DURATION)
    }
}

impl Notifier {
    pub fn with_duration(duration: Duration) -> Self {
        Self {
            duration,
            current: None,
        }
    }

    /// Notifier configured like the eyedropper tooltip.
    pub fn tooltip() -> Self {
        Self::with_duration(TOOLTIP_DURATION)
    }

    pub fn show(&mut self, message: impl Into<String>, kind: ToastKind) -> &Toast {
        self.show_at(message, kind, Instant::now())
    }

    /// Replace any pending toast, starting its timer at `now`.
    pub fn show_at(&mut self, message: impl Into<String>, kind: ToastKind, now: Instant) -> &Toast {
        let message = message.into();
        if let Some(previous) = self.current.as_ref()
            && previous.is_visible_at(now)
        {
            debug!(previous = %previous.message, "superseding pending toast");
        }
        self.current.insert(Toast {
            message,
            kind,
            shown_at: now,
            duration: self.duration,
        })
    }

    pub fn visible(&self) -> Option<&Toast> {
        self.visible_at(Instant::now())
    }

    pub fn visible_at(&self, now: Instant) -> Option<&Toast> {
        self.current.as_ref().filter(|toast| toast.is_visible_at(now))
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }
}
