use chrono::{DateTime, Duration, Utc};

/// How long a banner stays up before it expires on its own.
pub const DISMISS_AFTER_SECS: i64 = 10;

/// Dismissible banner used for validation failures and request errors.
/// Pure state; the caller supplies `now` when asking whether it is visible.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotificationBanner {
    message: String,
    shown_at: Option<DateTime<Utc>>,
}

impl NotificationBanner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, message: impl Into<String>, now: DateTime<Utc>) {
        self.message = message.into();
        self.shown_at = Some(now);
    }

    pub fn dismiss(&mut self) {
        self.shown_at = None;
    }

    /// Visible until dismissed or ten seconds after it was shown.
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        match self.shown_at {
            Some(shown) => now - shown < Duration::seconds(DISMISS_AFTER_SECS),
            None => false,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
