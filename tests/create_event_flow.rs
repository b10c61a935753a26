use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{NaiveDate, Utc, Weekday};
use letsmeet_client::clients::api_client::{ApiError, EventsApi};
use letsmeet_client::handlers::new_event::{NewEventPage, SubmitOutcome, CREATE_FAILED_MESSAGE};
use letsmeet_client::models::event::{Event, EventInput};
use letsmeet_client::models::user::CurrentUser;
use letsmeet_client::service::new_event_form::MISSING_DATE_AND_NAME;
use letsmeet_client::service::session::Navigator;

struct FakeApi {
    created_id: Option<String>,
    create_calls: Mutex<u32>,
    last_input: Mutex<Option<EventInput>>,
}

impl FakeApi {
    fn creating(id: &str) -> Self {
        Self {
            created_id: Some(id.to_string()),
            create_calls: Mutex::new(0),
            last_input: Mutex::new(None),
        }
    }

    fn failing() -> Self {
        Self {
            created_id: None,
            create_calls: Mutex::new(0),
            last_input: Mutex::new(None),
        }
    }

    fn calls(&self) -> u32 {
        *self.create_calls.lock().unwrap()
    }
}

#[async_trait]
impl EventsApi for FakeApi {
    async fn current_user(&self) -> Result<Option<CurrentUser>, ApiError> {
        Ok(None)
    }

    async fn event(&self, _uid: &str) -> Result<Event, ApiError> {
        Err("not under test".into())
    }

    async fn create_event(&self, input: &EventInput) -> Result<Event, ApiError> {
        *self.create_calls.lock().unwrap() += 1;
        *self.last_input.lock().unwrap() = Some(input.clone());
        match &self.created_id {
            Some(id) => Ok(Event {
                id: id.clone(),
                name: input.name.clone(),
                week_days: input.week_days,
                dates: input.dates.clone(),
            }),
            None => Err("server rejected the event".into()),
        }
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

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2027, 1, d).unwrap()
}

#[tokio::test]
async fn blocked_submission_makes_no_network_call() {
    let api = FakeApi::creating("evt1");
    let mut navigator = RecordingNavigator::default();
    let mut page = NewEventPage::new();

    let outcome = page.submit(&api, &mut navigator).await;

    assert_eq!(outcome, SubmitOutcome::Blocked);
    assert_eq!(page.notification.message(), MISSING_DATE_AND_NAME);
    assert!(page.notification.is_active(Utc::now()));
    assert_eq!(api.calls(), 0);
    assert!(navigator.paths.is_empty());
}

#[tokio::test]
async fn successful_submission_navigates_to_event_page() {
    let api = FakeApi::creating("evt1");
    let mut navigator = RecordingNavigator::default();
    let mut page = NewEventPage::new();
    page.form.set_event_name("Team lunch");
    page.form.click_day(day(10), day(5));
    page.form.click_day(day(11), day(5));

    let outcome = page.submit(&api, &mut navigator).await;

    assert_eq!(
        outcome,
        SubmitOutcome::Created {
            event_id: "evt1".to_string()
        }
    );
    assert_eq!(navigator.paths, vec!["/event/evt1".to_string()]);
    assert_eq!(api.calls(), 1);

    let input = api.last_input.lock().unwrap().clone().unwrap();
    assert_eq!(input.name, "Team lunch");
    assert!(input.week_days.is_none());
    assert_eq!(input.dates.len(), 1);
    assert_eq!(input.dates[0].from_date.date_naive(), day(10));
    assert_eq!(input.dates[0].to_date.date_naive(), day(11));
}

#[tokio::test]
async fn failed_post_notifies_and_stays() {
    let api = FakeApi::failing();
    let mut navigator = RecordingNavigator::default();
    let mut page = NewEventPage::new();
    page.form.set_event_name("Team lunch");
    page.form.click_day(day(10), day(5));

    let outcome = page.submit(&api, &mut navigator).await;

    assert_eq!(outcome, SubmitOutcome::Failed);
    assert_eq!(page.notification.message(), CREATE_FAILED_MESSAGE);
    assert!(page.notification.is_active(Utc::now()));
    assert!(navigator.paths.is_empty());
}

#[tokio::test]
async fn weekday_submission_includes_week_days() {
    let api = FakeApi::creating("evt2");
    let mut navigator = RecordingNavigator::default();
    let mut page = NewEventPage::new();
    page.form.set_event_name("Standup");
    page.form.toggle_mode();
    page.form.toggle_week_day(Weekday::Mon);
    page.form.toggle_week_day(Weekday::Thu);

    let outcome = page.submit(&api, &mut navigator).await;

    assert!(matches!(outcome, SubmitOutcome::Created { .. }));
    let input = api.last_input.lock().unwrap().clone().unwrap();
    let week_days = input.week_days.expect("weekday mode posts the selection");
    assert!(week_days.mon && week_days.thu && !week_days.fri);
    assert_eq!(input.dates.len(), 2);
}
