use chrono::Utc;
use tracing::{error, warn};

use crate::clients::api_client::EventsApi;
use crate::service::new_event_form::NewEventForm;
use crate::service::notification::NotificationBanner;
use crate::service::session::{Navigator, Session};

pub const CREATE_FAILED_MESSAGE: &str = "Failed to create event. Please try again later.";
pub const NEW_EVENT_PATH: &str = "/event/new";

/// How a submission attempt ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The event was created and the user sent to its page.
    Created { event_id: String },
    /// Local validation failed; nothing was sent.
    Blocked,
    /// The POST itself failed; the user stays on the form.
    Failed,
}

/// The event-creation page: the form plus its notification banner.
#[derive(Debug, Default)]
pub struct NewEventPage {
    pub form: NewEventForm,
    pub notification: NotificationBanner,
}

impl NewEventPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mount guard: visitors who are not signed in are sent home, with this
    /// page remembered as the post-login destination (first writer wins).
    pub async fn guard_signed_in<A, S, N>(api: &A, session: &mut S, navigator: &mut N) -> bool
    where
        A: EventsApi + ?Sized,
        S: Session + ?Sized,
        N: Navigator + ?Sized,
    {
        let signed_in = match api.current_user().await {
            Ok(user) => user.is_some(),
            Err(err) => {
                warn!(error = %err, "auth check failed, treating visitor as anonymous");
                false
            }
        };
        if signed_in {
            return true;
        }
        if session.redirect_path().is_none() {
            session.remember_redirect(NEW_EVENT_PATH);
        }
        navigator.push("/");
        false
    }

    /// Validates locally, then posts the event and navigates to its page.
    /// Validation failures never reach the network; a failed POST shows a
    /// banner and stays put.
    pub async fn submit<A, N>(&mut self, api: &A, navigator: &mut N) -> SubmitOutcome
    where
        A: EventsApi + ?Sized,
        N: Navigator + ?Sized,
    {
        let now = Utc::now();
        if let Err(message) = self.form.validate() {
            self.notification.show(message, now);
            return SubmitOutcome::Blocked;
        }

        let input = self.form.submission(now.date_naive());
        match api.create_event(&input).await {
            Ok(event) => {
                navigator.push(&format!("/event/{}", event.id));
                SubmitOutcome::Created { event_id: event.id }
            }
            Err(err) => {
                error!(error = %err, "failed to create event");
                self.notification.show(CREATE_FAILED_MESSAGE, Utc::now());
                SubmitOutcome::Failed
            }
        }
    }
}
