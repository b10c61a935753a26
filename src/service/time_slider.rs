use chrono::NaiveTime;

/// Slider geometry for "what times might work": a 24-hour track in
/// quarter-hour steps, handles starting at 9:00 and 17:00.
pub const MIN_HOUR: f64 = 0.0;
pub const MAX_HOUR: f64 = 24.0;
pub const STEP: f64 = 0.25;
pub const DEFAULT_RANGE: (f64, f64) = (9.0, 17.0);

/// The two slider handles. `from` never passes `to`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeRange {
    pub from: f64,
    pub to: f64,
}

impl Default for TimeRange {
    fn default() -> Self {
        Self {
            from: DEFAULT_RANGE.0,
            to: DEFAULT_RANGE.1,
        }
    }
}

impl TimeRange {
    pub fn set_from(&mut self, value: f64) {
        self.from = snap(value).min(self.to);
    }

    pub fn set_to(&mut self, value: f64) {
        self.to = snap(value).max(self.from);
    }
}

/// Clamps a handle position to the track and snaps it to the step.
fn snap(value: f64) -> f64 {
    let clamped = value.clamp(MIN_HOUR, MAX_HOUR);
    (clamped / STEP).round() * STEP
}

pub fn hours(value: f64) -> u32 {
    value.trunc() as u32
}

pub fn minutes(value: f64) -> u32 {
    (value.fract() * 60.0).round() as u32
}

/// Display label for a handle position, e.g. `9.25` -> `"9:15"`.
pub fn format_time(value: f64) -> String {
    format!("{}:{:02}", hours(value), minutes(value))
}

/// Clock time for a handle position. The top of the track (24.0) has no
/// clock representation and maps to the last minute of the day.
pub fn to_time_of_day(value: f64) -> NaiveTime {
    if value >= MAX_HOUR {
        return NaiveTime::from_hms_opt(23, 59, 0).unwrap_or(NaiveTime::MIN);
    }
    NaiveTime::from_hms_opt(hours(value), minutes(value), 0).unwrap_or(NaiveTime::MIN)
}
