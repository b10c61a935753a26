use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::models::date_range::RangeSet;
use crate::models::event::{EventDate, EventInput, WeekDays};
use crate::service::time_slider::{self, TimeRange};

pub const MISSING_DATE_AND_NAME: &str = "Please select a date and enter an event name.";
pub const MISSING_DATE: &str = "Please select a date.";
pub const MISSING_NAME: &str = "Please enter an event name.";
pub const MISSING_WEEKDAY_AND_NAME: &str = "Please select a weekday and enter an event name.";
pub const MISSING_WEEKDAY: &str = "Please select a weekday.";

/// Everything the new-event form tracks between clicks: the event name, the
/// picked date ranges or weekdays, which of the two modes is active, and the
/// time slider. All operations are synchronous and mutate nothing but this
/// value; submission itself lives in the page handler.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewEventForm {
    pub event_name: String,
    pub ranges: RangeSet,
    pub week_days: WeekDays,
    pub by_week_day: bool,
    pub time_range: TimeRange,
}

impl NewEventForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_event_name(&mut self, name: &str) {
        self.event_name = name.to_string();
    }

    pub fn toggle_week_day(&mut self, day: Weekday) {
        self.week_days.toggle(day);
    }

    /// Switches between picking concrete dates and picking weekdays.
    pub fn toggle_mode(&mut self) {
        self.by_week_day = !self.by_week_day;
    }

    /// Past days are disabled in the picker and never reach the range set.
    pub fn click_day(&mut self, day: NaiveDate, today: NaiveDate) {
        if day < today {
            return;
        }
        self.ranges = self.ranges.toggle_day(day);
    }

    pub fn reset_dates(&mut self) {
        self.ranges = self.ranges.reset();
    }

    /// The submit-button enable rule: a name plus at least one date (or
    /// weekday, in weekday mode).
    pub fn can_submit(&self) -> bool {
        if self.event_name.is_empty() {
            return false;
        }
        if self.by_week_day {
            self.week_days.any_selected()
        } else {
            self.ranges.has_selection()
        }
    }

    /// The user-facing reason submission is blocked, if it is.
    pub fn validate(&self) -> Result<(), &'static str> {
        let has_name = !self.event_name.is_empty();
        if self.by_week_day {
            match (self.week_days.any_selected(), has_name) {
                (true, true) => Ok(()),
                (false, false) => Err(MISSING_WEEKDAY_AND_NAME),
                (false, true) => Err(MISSING_WEEKDAY),
                (true, false) => Err(MISSING_NAME),
            }
        } else {
            match (self.ranges.has_selection(), has_name) {
                (true, true) => Ok(()),
                (false, false) => Err(MISSING_DATE_AND_NAME),
                (false, true) => Err(MISSING_DATE),
                (true, false) => Err(MISSING_NAME),
            }
        }
    }

    /// Builds the POST body. `today` anchors weekday selections to the
    /// current week.
    pub fn submission(&self, today: NaiveDate) -> EventInput {
        let from_time = time_slider::to_time_of_day(self.time_range.from);
        let to_time = time_slider::to_time_of_day(self.time_range.to);

        if self.by_week_day {
            let dates = self
                .week_days
                .selected()
                .into_iter()
                .map(|day| {
                    let date = date_of_weekday(today, day);
                    EventDate {
                        from_date: date.and_time(from_time).and_utc(),
                        to_date: date.and_time(to_time).and_utc(),
                    }
                })
                .collect();
            EventInput {
                name: self.event_name.clone(),
                week_days: Some(self.week_days),
                dates,
            }
        } else {
            EventInput {
                name: self.event_name.clone(),
                week_days: None,
                dates: self.ranges.to_submission_dates(from_time, to_time),
            }
        }
    }
}

/// The given weekday within `today`'s week, weeks running Sunday through
/// Saturday (the convention the browser client's date library used).
fn date_of_weekday(today: NaiveDate, day: Weekday) -> NaiveDate {
    let delta =
        day.num_days_from_sunday() as i64 - today.weekday().num_days_from_sunday() as i64;
    if delta >= 0 {
        today
            .checked_add_days(Days::new(delta as u64))
            .unwrap_or(today)
    } else {
        today
            .checked_sub_days(Days::new(delta.unsigned_abs()))
            .unwrap_or(today)
    }
}
