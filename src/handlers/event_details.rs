use chrono::Utc;
use tracing::error;

use crate::clients::api_client::EventsApi;
use crate::models::event::Event;
use crate::service::notification::NotificationBanner;
use crate::service::session::Navigator;

pub const LOAD_FAILED_MESSAGE: &str = "Failed to load event. Please try again later.";

/// The event viewer page: either the loaded event or an error banner.
#[derive(Debug, Default)]
pub struct EventDetailsPage {
    pub event: Option<Event>,
    pub notification: NotificationBanner,
}

impl EventDetailsPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the event for display. On failure the user is told and sent
    /// home; there is no retry.
    pub async fn mount<A, N>(&mut self, uid: &str, api: &A, navigator: &mut N)
    where
        A: EventsApi + ?Sized,
        N: Navigator + ?Sized,
    {
        match api.event(uid).await {
            Ok(event) => self.event = Some(event),
            Err(err) => {
                error!(error = %err, uid, "failed to load event");
                self.notification.show(LOAD_FAILED_MESSAGE, Utc::now());
                navigator.push("/");
            }
        }
    }
}
