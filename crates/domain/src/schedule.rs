use crate::shared::recurrence::RecurrenceBounds;
use chrono::{prelude::*, Duration};
use chrono_tz::Tz;
use itertools::Itertools;
use serde::{de::Visitor, Deserialize, Serialize};
use std::{collections::HashSet, fmt::Display, str::FromStr};
use thiserror::Error;

/// Wall clock time written as `HH:MM` in 24 hour format
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(NaiveTime);

impl TimeOfDay {
    pub fn new(hours: u32, minutes: u32) -> Result<Self, InvalidTimeOfDayError> {
        NaiveTime::from_hms_opt(hours, minutes, 0)
            .map(Self)
            .ok_or_else(|| InvalidTimeOfDayError(format!("{}:{}", hours, minutes)))
    }

    pub fn hours(&self) -> u32 {
        self.0.hour()
    }

    pub fn minutes(&self) -> u32 {
        self.0.minute()
    }

    fn on(&self, day: NaiveDate) -> NaiveDateTime {
        day.and_time(self.0)
    }
}

#[derive(Error, Debug)]
#[error("Invalid time of day: `{0}`, expected HH:MM")]
pub struct InvalidTimeOfDayError(String);

impl FromStr for TimeOfDay {
    type Err = InvalidTimeOfDayError;

    fn from_str(time: &str) -> Result<Self, Self::Err> {
        let e = || InvalidTimeOfDayError(time.to_string());
        let (hours, minutes) = time.trim().split_once(':').ok_or_else(e)?;
        if hours.is_empty() || hours.len() > 2 || minutes.len() != 2 {
            return Err(e());
        }
        let hours = hours.parse::<u32>().map_err(|_| e())?;
        let minutes = minutes.parse::<u32>().map_err(|_| e())?;
        Self::new(hours, minutes).map_err(|_| e())
    }
}

impl Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hours(), self.minutes())
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct TimeOfDayVisitor;

        impl<'de> Visitor<'de> for TimeOfDayVisitor {
            type Value = TimeOfDay;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("A time of day formatted as HH:MM")
            }

            fn visit_str<E>(self, value: &str) -> Result<TimeOfDay, E>
            where
                E: serde::de::Error,
            {
                value
                    .parse::<TimeOfDay>()
                    .map_err(|e| E::custom(e.to_string()))
            }
        }

        deserializer.deserialize_str(TimeOfDayVisitor)
    }
}

fn default_active() -> bool {
    true
}

/// A weekly slot on which a `Service` takes place
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ServiceSchedule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Sunday = 0
    pub day_of_week: u32,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

impl ServiceSchedule {
    pub fn new(day_of_week: u32, start_time: TimeOfDay, end_time: TimeOfDay) -> Self {
        Self {
            name: None,
            day_of_week,
            start_time,
            end_time,
            is_active: true,
        }
    }

    fn runs_on(&self, day: &NaiveDate) -> bool {
        self.is_active && self.day_of_week == day.weekday().num_days_from_sunday()
    }

    /// Start and end of this schedule on the given day. An end time earlier
    /// than the start time belongs to the following day.
    fn slot_on(&self, day: NaiveDate, tz: &Tz) -> (DateTime<Utc>, DateTime<Utc>) {
        let start = self.start_time.on(day);
        let mut end = self.end_time.on(day);
        if end < start {
            end = end + Duration::days(1);
        }
        (to_utc(&start, tz), to_utc(&end, tz))
    }
}

/// Resolves wall clock time in `tz`. Ambiguous times take the earliest
/// instant and times skipped by a DST transition are moved one hour ahead.
fn to_utc(local: &NaiveDateTime, tz: &Tz) -> DateTime<Utc> {
    tz.from_local_datetime(local)
        .earliest()
        .or_else(|| {
            tz.from_local_datetime(&(*local + Duration::hours(1)))
                .earliest()
        })
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|| Utc.from_utc_datetime(local))
}

#[derive(Error, Debug, PartialEq)]
pub enum ServiceScheduleError {
    #[error("Invalid day of week: {0}, expected 0 (Sunday) to 6 (Saturday)")]
    InvalidDayOfWeek(u32),
    #[error("There are multiple active schedules on day {day_of_week} starting at {start_time}")]
    Duplicate {
        day_of_week: u32,
        start_time: TimeOfDay,
    },
}

pub fn validate_schedules(schedules: &[ServiceSchedule]) -> Result<(), ServiceScheduleError> {
    let mut seen = HashSet::new();
    for schedule in schedules {
        if schedule.day_of_week > 6 {
            return Err(ServiceScheduleError::InvalidDayOfWeek(schedule.day_of_week));
        }
        if schedule.is_active && !seen.insert((schedule.day_of_week, schedule.start_time)) {
            return Err(ServiceScheduleError::Duplicate {
                day_of_week: schedule.day_of_week,
                start_time: schedule.start_time,
            });
        }
    }
    Ok(())
}

/// One concrete occurrence of a `ServiceSchedule`
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleSlot {
    pub name: Option<String>,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Turns weekly schedules into concrete slots.
///
/// Days are walked one by one from `window_start` up to and including
/// `window_end`, or up to the bounds' horizon when no end is given. A day on
/// which at least one active schedule runs counts as one occurrence no matter
/// how many schedules run on it, and the walk stops once `max_occurrences`
/// such days are found.
pub fn expand_schedules(
    schedules: &[ServiceSchedule],
    tz: &Tz,
    window_start: NaiveDate,
    window_end: Option<NaiveDate>,
    max_occurrences: Option<usize>,
    bounds: &RecurrenceBounds,
) -> Vec<ScheduleSlot> {
    let last_day = window_end.unwrap_or_else(|| {
        window_start
            .checked_add_signed(bounds.horizon())
            .unwrap_or(NaiveDate::MAX)
    });
    let max_occurrences = max_occurrences.unwrap_or(bounds.max_occurrences);

    let mut slots = Vec::new();
    let mut occurrences = 0;
    let mut day = window_start;
    while day <= last_day && occurrences < max_occurrences {
        let running = schedules
            .iter()
            .filter(|s| s.runs_on(&day))
            .sorted_by_key(|s| s.start_time)
            .collect::<Vec<_>>();

        if !running.is_empty() {
            occurrences += 1;
            for schedule in running {
                let (start, end) = schedule.slot_on(day, tz);
                slots.push(ScheduleSlot {
                    name: schedule.name.clone(),
                    start,
                    end,
                });
            }
        }

        day = match day.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }

    slots
}
