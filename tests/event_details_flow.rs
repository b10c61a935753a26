use async_trait::async_trait;
use chrono::Utc;
use letsmeet_client::clients::api_client::{ApiError, EventsApi};
use letsmeet_client::handlers::event_details::{EventDetailsPage, LOAD_FAILED_MESSAGE};
use letsmeet_client::models::event::{Event, EventInput};
use letsmeet_client::models::user::CurrentUser;
use letsmeet_client::service::session::Navigator;

struct FakeApi {
    event: Result<Event, String>,
}

#[async_trait]
impl EventsApi for FakeApi {
    async fn current_user(&self) -> Result<Option<CurrentUser>, ApiError> {
        Ok(None)
    }

    async fn event(&self, _uid: &str) -> Result<Event, ApiError> {
        match &self.event {
            Ok(event) => Ok(event.clone()),
            Err(err) => Err(err.clone().into()),
        }
    }

    async fn create_event(&self, _input: &EventInput) -> Result<Event, ApiError> {
        Err("not under test".into())
    }
}

#[derive(Default)]
struct RecordingNavigator {
    paths: Vec<String>,
}

impl Navigator for RecordingNavigator {
    fn push(&mut self, path: &str) {
        self.paths.push(path.to_string());
    }
}

#[tokio::test]
async fn mount_displays_the_loaded_event() {
    let api = FakeApi {
        event: Ok(Event {
            id: "evt1".to_string(),
            name: "Team lunch".to_string(),
            week_days: None,
            dates: vec![],
        }),
    };
    let mut navigator = RecordingNavigator::default();
    let mut page = EventDetailsPage::new();

    page.mount("evt1", &api, &mut navigator).await;

    assert_eq!(page.event.as_ref().map(|e| e.name.as_str()), Some("Team lunch"));
    assert!(!page.notification.is_active(Utc::now()));
    assert!(navigator.paths.is_empty());
}

#[tokio::test]
async fn mount_failure_notifies_and_goes_home() {
    let api = FakeApi {
        event: Err("404 not found".to_string()),
    };
    let mut navigator = RecordingNavigator::default();
    let mut page = EventDetailsPage::new();

    page.mount("missing", &api, &mut navigator).await;

    assert!(page.event.is_none());
    assert_eq!(page.notification.message(), LOAD_FAILED_MESSAGE);
    assert!(page.notification.is_active(Utc::now()));
    assert_eq!(navigator.paths, vec!["/".to_string()]);
}
