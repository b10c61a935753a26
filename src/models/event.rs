use chrono::{DateTime, Utc, Weekday};
use serde::{Deserialize, Serialize};

/// One submitted candidate interval, boundary dates carrying the time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDate {
    #[serde(rename = "fromDate")]
    pub from_date: DateTime<Utc>,
    #[serde(rename = "toDate")]
    pub to_date: DateTime<Utc>,
}

/// Weekday checkboxes of the "what days might work" mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekDays {
    pub mon: bool,
    pub tue: bool,
    pub wed: bool,
    pub thu: bool,
    pub fri: bool,
    pub sat: bool,
    pub sun: bool,
}

impl WeekDays {
    pub fn toggle(&mut self, day: Weekday) {
        let flag = self.flag_mut(day);
        *flag = !*flag;
    }

    pub fn is_selected(&self, day: Weekday) -> bool {
        match day {
            Weekday::Mon => self.mon,
            Weekday::Tue => self.tue,
            Weekday::Wed => self.wed,
            Weekday::Thu => self.thu,
            Weekday::Fri => self.fri,
            Weekday::Sat => self.sat,
            Weekday::Sun => self.sun,
        }
    }

    pub fn selected(&self) -> Vec<Weekday> {
        use Weekday::*;
        [Mon, Tue, Wed, Thu, Fri, Sat, Sun]
            .into_iter()
            .filter(|d| self.is_selected(*d))
            .collect()
    }

    pub fn any_selected(&self) -> bool {
        !self.selected().is_empty()
    }

    fn flag_mut(&mut self, day: Weekday) -> &mut bool {
        match day {
            Weekday::Mon => &mut self.mon,
            Weekday::Tue => &mut self.tue,
            Weekday::Wed => &mut self.wed,
            Weekday::Thu => &mut self.thu,
            Weekday::Fri => &mut self.fri,
            Weekday::Sat => &mut self.sat,
            Weekday::Sun => &mut self.sun,
        }
    }
}

/// An event as the server returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(rename = "weekDays", skip_serializing_if = "Option::is_none")]
    pub week_days: Option<WeekDays>,
    #[serde(default)]
    pub dates: Vec<EventDate>,
}

/// POST body for event creation: `{ name, dates }`, or
/// `{ name, weekDays, dates }` in weekday mode.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventInput {
    pub name: String,
    #[serde(rename = "weekDays", skip_serializing_if = "Option::is_none")]
    pub week_days: Option<WeekDays>,
    pub dates: Vec<EventDate>,
}
