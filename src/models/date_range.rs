use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::models::event::EventDate;

/// A closed, inclusive interval of calendar days.
///
/// Both bounds unset is the placeholder range: "no day picked yet". The day
/// picker keeps exactly one of these around while a selection is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self {
            from: Some(from),
            to: Some(to),
        }
    }

    pub fn placeholder() -> Self {
        Self {
            from: None,
            to: None,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    /// Whether `day` falls inside the interval. Reversed bounds are treated
    /// as if they were swapped; a placeholder contains nothing.
    pub fn contains(&self, day: NaiveDate) -> bool {
        match (self.from, self.to) {
            (Some(from), Some(to)) => {
                let (lo, hi) = if from <= to { (from, to) } else { (to, from) };
                lo <= day && day <= hi
            }
            _ => false,
        }
    }
}

/// The candidate days of an event, kept as an ordered set of disjoint ranges.
///
/// Invariants after every operation: non-empty ranges are sorted, pairwise
/// non-overlapping and separated by at least one unselected day; at most one
/// placeholder exists, and only when no other range does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeSet {
    ranges: Vec<DateRange>,
}

impl Default for RangeSet {
    fn default() -> Self {
        Self::new()
    }
}

impl RangeSet {
    /// A fresh set holds a single placeholder, mirroring the form at mount.
    pub fn new() -> Self {
        Self {
            ranges: vec![DateRange::placeholder()],
        }
    }

    /// Builds a set from arbitrary ranges, normalizing them on the way in.
    pub fn from_ranges(ranges: Vec<DateRange>) -> Self {
        Self::normalized(ranges)
    }

    pub fn ranges(&self) -> &[DateRange] {
        &self.ranges
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        self.ranges.iter().any(|r| r.contains(day))
    }

    /// True once the user has picked at least one day.
    pub fn has_selection(&self) -> bool {
        self.ranges.iter().any(|r| !r.is_placeholder())
    }

    /// Discards every selection, leaving the single placeholder.
    pub fn reset(&self) -> Self {
        Self::new()
    }

    /// Toggles membership of a single day.
    ///
    /// A day inside an existing range is removed from it: a singleton range
    /// disappears, a boundary day shrinks the range, an interior day splits
    /// it in two. A day outside every range fills the trailing placeholder
    /// (or opens a fresh one first) as a one-day range. The result is
    /// normalized, so a new day touching an existing range merges into it.
    ///
    /// Note the asymmetry: removing a boundary day and re-adding it restores
    /// the merged range, but removal followed by re-add of a day that was
    /// isolated before neighbors appeared may land in different boundaries
    /// than the set had originally. That matches the day picker's behavior.
    pub fn toggle_day(&self, day: NaiveDate) -> Self {
        let mut ranges = self.ranges.clone();

        if let Some(idx) = ranges.iter().position(|r| r.contains(day)) {
            let range = ranges.remove(idx);
            if let (Some(from), Some(to)) = (range.from, range.to) {
                let (from, to) = if from <= to { (from, to) } else { (to, from) };
                if day > from {
                    if let Some(yesterday) = day.pred_opt() {
                        ranges.push(DateRange::new(from, yesterday));
                    }
                }
                if day < to {
                    if let Some(tomorrow) = day.succ_opt() {
                        ranges.push(DateRange::new(tomorrow, to));
                    }
                }
            }
            return Self::normalized(ranges);
        }

        match ranges.last_mut() {
            Some(last) if last.is_placeholder() => *last = DateRange::new(day, day),
            _ => ranges.push(DateRange::new(day, day)),
        }
        Self::normalized(ranges)
    }

    /// One submission interval per range, with the times of day attached.
    /// Reversed bounds are swapped, so `from_date` never exceeds `to_date`
    /// as long as `from_time <= to_time`.
    pub fn to_submission_dates(&self, from_time: NaiveTime, to_time: NaiveTime) -> Vec<EventDate> {
        Self::normalized(self.ranges.clone())
            .ranges
            .iter()
            .filter_map(|r| match (r.from, r.to) {
                (Some(from), Some(to)) => {
                    let (from, to) = if from <= to { (from, to) } else { (to, from) };
                    Some(EventDate {
                        from_date: from.and_time(from_time).and_utc(),
                        to_date: to.and_time(to_time).and_utc(),
                    })
                }
                _ => None,
            })
            .collect()
    }

    /// Sorts the real ranges and merges any that overlap or touch. An empty
    /// result collapses to the single placeholder.
    fn normalized(ranges: Vec<DateRange>) -> Self {
        let mut bounds: Vec<(NaiveDate, NaiveDate)> = ranges
            .into_iter()
            .filter_map(|r| match (r.from, r.to) {
                (Some(from), Some(to)) => {
                    Some(if from <= to { (from, to) } else { (to, from) })
                }
                _ => None,
            })
            .collect();
        bounds.sort();

        let mut merged: Vec<DateRange> = Vec::with_capacity(bounds.len());
        for (from, to) in bounds {
            if let Some(DateRange {
                from: Some(last_from),
                to: Some(last_to),
            }) = merged.last().copied()
            {
                // A gap of zero days means the ranges touch and must merge.
                let touches = last_to.succ_opt().is_some_and(|next| from <= next);
                if touches {
                    if let Some(last) = merged.last_mut() {
                        *last = DateRange::new(last_from, last_to.max(to));
                    }
                    continue;
                }
            }
            merged.push(DateRange::new(from, to));
        }

        if merged.is_empty() {
            merged.push(DateRange::placeholder());
        }
        Self { ranges: merged }
    }
}
