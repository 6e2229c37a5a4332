use chrono::{prelude::*, Duration, Months};
use serde::{de::Visitor, Deserialize, Serialize};
use std::{collections::BTreeSet, fmt::Display};
use thiserror::Error;
use tracing::warn;

/// Largest `count` a client may ask for when generating recurring events
pub const MAX_RECURRENCE_COUNT: u32 = 500;

/// Longest generation horizon honored by `RecurrenceBounds`, about ten years
pub const MAX_HORIZON_DAYS: i64 = 3650;

/// How often a recurring event repeats, as sent by clients.
///
/// Values outside of the known set are kept as `Unrecognized` instead of
/// failing deserialization. They are resolved to a weekly cadence by
/// `RecurrencePattern::rule`.
#[derive(Clone, Debug, PartialEq)]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    Custom,
    Unrecognized(String),
}

impl Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let freq = match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Custom => "custom",
            Self::Unrecognized(freq) => freq.as_str(),
        };
        write!(f, "{}", freq)
    }
}

impl From<&str> for Frequency {
    fn from(freq: &str) -> Self {
        match freq.to_lowercase().as_str() {
            "daily" => Self::Daily,
            "weekly" => Self::Weekly,
            "monthly" => Self::Monthly,
            "custom" => Self::Custom,
            _ => Self::Unrecognized(freq.to_string()),
        }
    }
}

impl Serialize for Frequency {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Frequency {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct FrequencyVisitor;

        impl<'de> Visitor<'de> for FrequencyVisitor {
            type Value = Frequency;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("A string representation of a recurrence frequency")
            }

            fn visit_str<E>(self, value: &str) -> Result<Frequency, E>
            where
                E: serde::de::Error,
            {
                Ok(Frequency::from(value))
            }
        }

        deserializer.deserialize_str(FrequencyVisitor)
    }
}

fn default_interval() -> u32 {
    1
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecurrencePattern {
    pub frequency: Frequency,
    #[serde(default = "default_interval")]
    pub interval: u32,
    /// Sunday = 0
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_of_week: Option<Vec<u32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_of_month: Option<Vec<u32>>,
    /// Stored with the pattern, does not steer the cadence
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub months_of_year: Option<Vec<u32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
}

impl RecurrencePattern {
    pub fn new(frequency: Frequency) -> Self {
        Self {
            frequency,
            interval: 1,
            days_of_week: None,
            days_of_month: None,
            months_of_year: None,
            end_date: None,
            count: None,
        }
    }

    /// Resolves the pattern into the closed set of cadences the calculator knows.
    pub fn rule(&self) -> RecurrenceRule {
        let interval = self.interval.max(1);
        match &self.frequency {
            Frequency::Daily => RecurrenceRule::Daily { interval },
            Frequency::Weekly => RecurrenceRule::Weekly { interval },
            Frequency::Monthly => RecurrenceRule::Monthly { interval },
            Frequency::Custom => {
                let weekdays = valid_set(&self.days_of_week, 0..=6);
                if !weekdays.is_empty() {
                    return RecurrenceRule::CustomByWeekday(weekdays);
                }
                let monthdays = listed_days(&self.days_of_month, 1..=31);
                if !monthdays.is_empty() {
                    return RecurrenceRule::CustomByMonthday(monthdays);
                }
                RecurrenceRule::CustomDefault
            }
            Frequency::Unrecognized(freq) => {
                warn!(
                    "Unrecognized recurrence frequency: `{}`, falling back to a weekly cadence",
                    freq
                );
                RecurrenceRule::CustomDefault
            }
        }
    }

    pub fn validate(&self) -> Result<(), InvalidRecurrenceError> {
        if self.interval < 1 {
            return Err(InvalidRecurrenceError::Interval(self.interval));
        }
        if let Some(count) = self.count {
            if count < 1 || count > MAX_RECURRENCE_COUNT {
                return Err(InvalidRecurrenceError::Count(count));
            }
        }
        check_range(&self.days_of_week, 0..=6, InvalidRecurrenceError::DayOfWeek)?;
        check_range(&self.days_of_month, 1..=31, InvalidRecurrenceError::DayOfMonth)?;
        check_range(&self.months_of_year, 1..=12, InvalidRecurrenceError::MonthOfYear)?;
        Ok(())
    }
}

fn valid_set(values: &Option<Vec<u32>>, range: std::ops::RangeInclusive<u32>) -> BTreeSet<u32> {
    values
        .iter()
        .flatten()
        .filter(|v| range.contains(v))
        .copied()
        .collect()
}

/// Valid values in the order the client listed them, without repeats
fn listed_days(values: &Option<Vec<u32>>, range: std::ops::RangeInclusive<u32>) -> Vec<u32> {
    let mut days: Vec<u32> = Vec::new();
    for day in values.iter().flatten().filter(|v| range.contains(v)) {
        if !days.contains(day) {
            days.push(*day);
        }
    }
    days
}

fn check_range<F>(
    values: &Option<Vec<u32>>,
    range: std::ops::RangeInclusive<u32>,
    err: F,
) -> Result<(), InvalidRecurrenceError>
where
    F: Fn(u32) -> InvalidRecurrenceError,
{
    match values.iter().flatten().find(|v| !range.contains(v)) {
        Some(v) => Err(err(*v)),
        None => Ok(()),
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum InvalidRecurrenceError {
    #[error("Interval must be at least 1, got: {0}")]
    Interval(u32),
    #[error("Count must be between 1 and {max}, got: {0}", max = MAX_RECURRENCE_COUNT)]
    Count(u32),
    #[error("Invalid day of week: {0}, expected 0 (Sunday) to 6 (Saturday)")]
    DayOfWeek(u32),
    #[error("Invalid day of month: {0}, expected 1 to 31")]
    DayOfMonth(u32),
    #[error("Invalid month of year: {0}, expected 1 to 12")]
    MonthOfYear(u32),
}

#[derive(Clone, Debug, PartialEq)]
pub enum RecurrenceRule {
    Daily { interval: u32 },
    Weekly { interval: u32 },
    /// Day-of-month is clamped to the last day of shorter months:
    /// Jan 31 -> Feb 29 -> Mar 29
    Monthly { interval: u32 },
    /// Weekdays with Sunday = 0
    CustomByWeekday(BTreeSet<u32>),
    /// Days of month in listed order. The first listed day that exists
    /// in a month is used when moving on to that month.
    CustomByMonthday(Vec<u32>),
    /// Custom frequency without any usable set, or an unrecognized frequency
    CustomDefault,
}

impl RecurrenceRule {
    /// The occurrence following `current`, always strictly after it.
    /// `None` when the calendar runs out of representable dates.
    pub fn next_after(&self, current: DateTime<Utc>) -> Option<DateTime<Utc>> {
        match self {
            Self::Daily { interval } => {
                current.checked_add_signed(Duration::days(*interval as i64))
            }
            Self::Weekly { interval } => {
                current.checked_add_signed(Duration::days(7 * *interval as i64))
            }
            Self::Monthly { interval } => current.checked_add_months(Months::new(*interval)),
            Self::CustomByWeekday(weekdays) => {
                for offset in 1..=7 {
                    let candidate = current.checked_add_signed(Duration::days(offset))?;
                    if weekdays.contains(&candidate.weekday().num_days_from_sunday()) {
                        return Some(candidate);
                    }
                }
                current.checked_add_signed(Duration::days(7))
            }
            Self::CustomByMonthday(monthdays) => next_monthday(current, monthdays),
            Self::CustomDefault => current.checked_add_signed(Duration::days(7)),
        }
    }
}

fn next_monthday(current: DateTime<Utc>, monthdays: &[u32]) -> Option<DateTime<Utc>> {
    let later_this_month = monthdays
        .iter()
        .filter(|day| **day > current.day())
        .filter_map(|day| current.with_day(*day))
        .min();
    if later_this_month.is_some() {
        return later_this_month;
    }

    let first_of_month = current.with_day(1)?;
    // Every listed day exists in at least one of the next 12 months
    for months_ahead in 1..=12 {
        let month = first_of_month.checked_add_months(Months::new(months_ahead))?;
        if let Some(date) = monthdays.iter().find_map(|day| month.with_day(*day)) {
            return Some(date);
        }
    }
    current.checked_add_signed(Duration::days(7))
}

/// Bounds applied when a caller does not limit generation itself
#[derive(Clone, Debug, PartialEq)]
pub struct RecurrenceBounds {
    /// Occurrences generated when no `count` is given
    pub max_occurrences: usize,
    /// Days after the start date generation stops at when no end date is given
    pub horizon_days: i64,
}

impl Default for RecurrenceBounds {
    fn default() -> Self {
        Self {
            max_occurrences: 52,
            horizon_days: 365,
        }
    }
}

impl RecurrenceBounds {
    /// The horizon with `horizon_days` clamped to `1..=MAX_HORIZON_DAYS`
    pub fn horizon(&self) -> Duration {
        Duration::days(self.horizon_days.clamp(1, MAX_HORIZON_DAYS))
    }
}

/// Computes the occurrences of `pattern` starting at `start`.
///
/// Generation stops at whichever comes first of the end date and the
/// occurrence count. The end date is `end` or the pattern's own `end_date`
/// (the earlier when both are set), falling back to `start` plus the bounds'
/// horizon. The count falls back to `bounds.max_occurrences`.
///
/// The first occurrence is `start` itself and every following one is
/// strictly later. An end date before `start` gives no occurrences.
pub fn calculate_dates(
    start: DateTime<Utc>,
    end: Option<DateTime<Utc>>,
    pattern: &RecurrencePattern,
    bounds: &RecurrenceBounds,
) -> Vec<DateTime<Utc>> {
    let rule = pattern.rule();
    let end = match (end, pattern.end_date) {
        (Some(end), Some(pattern_end)) => Some(end.min(pattern_end)),
        (end, pattern_end) => end.or(pattern_end),
    };
    let max_date = end.unwrap_or_else(|| {
        start
            .checked_add_signed(bounds.horizon())
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    });
    let max_count = pattern
        .count
        .map(|count| count as usize)
        .unwrap_or(bounds.max_occurrences);

    let mut dates = Vec::new();
    let mut current = start;
    while current <= max_date && dates.len() < max_count {
        dates.push(current);
        current = match rule.next_after(current) {
            Some(next) => next,
            None => break,
        };
    }

    dates
}

#[cfg(test)]
mod test {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, 10, 0, 0).unwrap()
    }

    fn pattern(frequency: Frequency, interval: u32, count: Option<u32>) -> RecurrencePattern {
        RecurrencePattern {
            interval,
            count,
            ..RecurrencePattern::new(frequency)
        }
    }

    fn calculate(
        start: DateTime<Utc>,
        end: Option<DateTime<Utc>>,
        pattern: &RecurrencePattern,
    ) -> Vec<DateTime<Utc>> {
        calculate_dates(start, end, pattern, &RecurrenceBounds::default())
    }

    #[test]
    fn returns_exactly_count_increasing_dates() {
        let start = date(2024, 3, 15);
        for frequency in vec![Frequency::Daily, Frequency::Weekly, Frequency::Monthly] {
            for interval in 1..4 {
                let p = pattern(frequency.clone(), interval, Some(7));
                let dates = calculate(start, None, &p);
                assert_eq!(dates.len(), 7);
                assert_eq!(dates[0], start);
                for pair in dates.windows(2) {
                    assert!(pair[0] < pair[1]);
                }
            }
        }
    }

    #[test]
    fn weekly_with_interval() {
        let p = pattern(Frequency::Weekly, 2, Some(3));
        let dates = calculate(date(2024, 1, 7), None, &p);
        assert_eq!(
            dates,
            vec![date(2024, 1, 7), date(2024, 1, 21), date(2024, 2, 4)]
        );
    }

    #[test]
    fn daily_with_interval() {
        let p = pattern(Frequency::Daily, 3, Some(3));
        let dates = calculate(date(2024, 2, 27), None, &p);
        assert_eq!(
            dates,
            vec![date(2024, 2, 27), date(2024, 3, 1), date(2024, 3, 4)]
        );
    }

    #[test]
    fn custom_days_of_week() {
        let p = RecurrencePattern {
            days_of_week: Some(vec![1, 3, 5]),
            count: Some(4),
            ..RecurrencePattern::new(Frequency::Custom)
        };
        // 2024-01-01 is a Monday
        let dates = calculate(date(2024, 1, 1), None, &p);
        assert_eq!(
            dates,
            vec![
                date(2024, 1, 1),
                date(2024, 1, 3),
                date(2024, 1, 5),
                date(2024, 1, 8)
            ]
        );
    }

    #[test]
    fn custom_days_of_week_starting_off_pattern() {
        let p = RecurrencePattern {
            days_of_week: Some(vec![0]),
            count: Some(3),
            ..RecurrencePattern::new(Frequency::Custom)
        };
        // Starts on a Wednesday, then every Sunday
        let dates = calculate(date(2024, 1, 3), None, &p);
        assert_eq!(
            dates,
            vec![date(2024, 1, 3), date(2024, 1, 7), date(2024, 1, 14)]
        );
    }

    #[test]
    fn monthly_clamps_to_end_of_month() {
        let p = pattern(Frequency::Monthly, 1, Some(2));
        let dates = calculate(date(2024, 1, 31), None, &p);
        assert_eq!(dates, vec![date(2024, 1, 31), date(2024, 2, 29)]);

        // The clamped day is carried forward
        let p = pattern(Frequency::Monthly, 1, Some(3));
        let dates = calculate(date(2024, 1, 31), None, &p);
        assert_eq!(
            dates,
            vec![date(2024, 1, 31), date(2024, 2, 29), date(2024, 3, 29)]
        );
    }

    #[test]
    fn custom_days_of_month() {
        let p = RecurrencePattern {
            days_of_month: Some(vec![15, 1]),
            count: Some(5),
            ..RecurrencePattern::new(Frequency::Custom)
        };
        let dates = calculate(date(2024, 1, 10), None, &p);
        assert_eq!(
            dates,
            vec![
                date(2024, 1, 10),
                date(2024, 1, 15),
                date(2024, 2, 15),
                date(2024, 3, 15),
                date(2024, 4, 15)
            ]
        );
    }

    #[test]
    fn custom_days_of_month_moves_on_to_first_listed_day() {
        let p = RecurrencePattern {
            days_of_month: Some(vec![15, 1, 15]),
            count: Some(3),
            ..RecurrencePattern::new(Frequency::Custom)
        };
        assert_eq!(p.rule(), RecurrenceRule::CustomByMonthday(vec![15, 1]));
        let dates = calculate(date(2024, 1, 20), None, &p);
        assert_eq!(
            dates,
            vec![date(2024, 1, 20), date(2024, 2, 15), date(2024, 3, 15)]
        );

        // Listed days later in the current month still come first
        let p = RecurrencePattern {
            days_of_month: Some(vec![28, 5, 20]),
            count: Some(4),
            ..RecurrencePattern::new(Frequency::Custom)
        };
        let dates = calculate(date(2024, 1, 2), None, &p);
        assert_eq!(
            dates,
            vec![
                date(2024, 1, 2),
                date(2024, 1, 5),
                date(2024, 1, 20),
                date(2024, 1, 28)
            ]
        );
    }

    #[test]
    fn custom_days_of_month_skips_missing_days() {
        let p = RecurrencePattern {
            days_of_month: Some(vec![31]),
            count: Some(3),
            ..RecurrencePattern::new(Frequency::Custom)
        };
        let dates = calculate(date(2024, 3, 31), None, &p);
        assert_eq!(
            dates,
            vec![date(2024, 3, 31), date(2024, 5, 31), date(2024, 7, 31)]
        );
    }

    #[test]
    fn custom_without_sets_is_weekly() {
        let p = pattern(Frequency::Custom, 3, Some(3));
        let dates = calculate(date(2024, 1, 1), None, &p);
        assert_eq!(
            dates,
            vec![date(2024, 1, 1), date(2024, 1, 8), date(2024, 1, 15)]
        );
        assert_eq!(p.rule(), RecurrenceRule::CustomDefault);

        // Empty and out of range sets count as missing
        let p = RecurrencePattern {
            days_of_week: Some(vec![]),
            days_of_month: Some(vec![0, 40]),
            ..RecurrencePattern::new(Frequency::Custom)
        };
        assert_eq!(p.rule(), RecurrenceRule::CustomDefault);
    }

    #[test]
    fn unrecognized_frequency_is_weekly() {
        let p: RecurrencePattern =
            serde_json::from_str(r#"{ "frequency": "yearly", "interval": 4, "count": 3 }"#)
                .unwrap();
        assert_eq!(p.frequency, Frequency::Unrecognized("yearly".into()));
        assert_eq!(p.rule(), RecurrenceRule::CustomDefault);
        let dates = calculate(date(2024, 1, 1), None, &p);
        assert_eq!(
            dates,
            vec![date(2024, 1, 1), date(2024, 1, 8), date(2024, 1, 15)]
        );
    }

    #[test]
    fn zero_interval_is_clamped() {
        let p = pattern(Frequency::Daily, 0, Some(3));
        let dates = calculate(date(2024, 1, 1), None, &p);
        assert_eq!(
            dates,
            vec![date(2024, 1, 1), date(2024, 1, 2), date(2024, 1, 3)]
        );
        assert!(p.validate().is_err());
    }

    #[test]
    fn end_date_bounds_generation() {
        let p = pattern(Frequency::Weekly, 1, None);
        let dates = calculate(date(2024, 1, 1), Some(date(2024, 1, 29)), &p);
        assert_eq!(dates.len(), 5);
        assert_eq!(*dates.last().unwrap(), date(2024, 1, 29));

        // Count wins when it is reached first
        let p = pattern(Frequency::Weekly, 1, Some(2));
        let dates = calculate(date(2024, 1, 1), Some(date(2024, 1, 29)), &p);
        assert_eq!(dates.len(), 2);
    }

    #[test]
    fn pattern_end_date_is_used_when_no_end_is_given() {
        let p = RecurrencePattern {
            end_date: Some(date(2024, 1, 3)),
            ..RecurrencePattern::new(Frequency::Daily)
        };
        assert_eq!(calculate(date(2024, 1, 1), None, &p).len(), 3);
        // The earlier end wins
        assert_eq!(
            calculate(date(2024, 1, 1), Some(date(2024, 1, 10)), &p).len(),
            3
        );
        assert_eq!(
            calculate(date(2024, 1, 1), Some(date(2024, 1, 2)), &p).len(),
            2
        );
    }

    #[test]
    fn end_before_start_yields_nothing() {
        let p = pattern(Frequency::Daily, 1, Some(10));
        assert!(calculate(date(2024, 1, 10), Some(date(2024, 1, 9)), &p).is_empty());
    }

    #[test]
    fn default_bounds_cap_generation() {
        // Neither count nor end date: 52 occurrences at most
        let p = pattern(Frequency::Daily, 1, None);
        assert_eq!(calculate(date(2024, 1, 1), None, &p).len(), 52);

        // Horizon of 365 days is reached before the default count
        let p = pattern(Frequency::Monthly, 1, None);
        assert_eq!(calculate(date(2024, 1, 1), None, &p).len(), 12);
    }

    #[test]
    fn bounds_are_configurable() {
        let bounds = RecurrenceBounds {
            max_occurrences: 3,
            horizon_days: 10,
        };
        let p = pattern(Frequency::Daily, 1, None);
        assert_eq!(calculate_dates(date(2024, 1, 1), None, &p, &bounds).len(), 3);

        let p = pattern(Frequency::Daily, 4, None);
        // 1st, 5th and 9th fit within 10 days, 13th does not
        assert_eq!(calculate_dates(date(2024, 1, 1), None, &p, &bounds).len(), 3);
        let p = pattern(Frequency::Weekly, 1, None);
        assert_eq!(calculate_dates(date(2024, 1, 1), None, &p, &bounds).len(), 2);
    }

    #[test]
    fn oversized_horizon_is_clamped() {
        let bounds = RecurrenceBounds {
            max_occurrences: 52,
            horizon_days: 100_000_000,
        };
        assert_eq!(bounds.horizon(), Duration::days(MAX_HORIZON_DAYS));
        let p = pattern(Frequency::Daily, 1, None);
        assert_eq!(calculate_dates(date(2024, 1, 1), None, &p, &bounds).len(), 52);

        // A horizon reaching past the last representable date is not a panic
        let bounds = RecurrenceBounds {
            max_occurrences: 3,
            horizon_days: MAX_HORIZON_DAYS,
        };
        let last = DateTime::<Utc>::MAX_UTC - Duration::days(1);
        assert_eq!(calculate_dates(last, None, &p, &bounds).len(), 2);
    }

    #[test]
    fn non_positive_horizon_keeps_the_start() {
        let p = pattern(Frequency::Daily, 1, None);
        for horizon_days in [0, -5, i64::MIN] {
            let bounds = RecurrenceBounds {
                max_occurrences: 10,
                horizon_days,
            };
            // Clamped to a single day: start and the day after
            assert_eq!(
                calculate_dates(date(2024, 1, 1), None, &p, &bounds),
                vec![date(2024, 1, 1), date(2024, 1, 2)]
            );
        }
    }

    #[test]
    fn is_idempotent() {
        let p = RecurrencePattern {
            days_of_week: Some(vec![2, 4]),
            count: Some(10),
            ..RecurrencePattern::new(Frequency::Custom)
        };
        let start = date(2024, 5, 5);
        assert_eq!(calculate(start, None, &p), calculate(start, None, &p));
    }

    #[test]
    fn validates_patterns() {
        assert!(RecurrencePattern::new(Frequency::Daily).validate().is_ok());
        assert_eq!(
            pattern(Frequency::Daily, 1, Some(0)).validate(),
            Err(InvalidRecurrenceError::Count(0))
        );
        assert_eq!(
            pattern(Frequency::Daily, 1, Some(MAX_RECURRENCE_COUNT + 1)).validate(),
            Err(InvalidRecurrenceError::Count(MAX_RECURRENCE_COUNT + 1))
        );
        let p = RecurrencePattern {
            days_of_week: Some(vec![1, 7]),
            ..RecurrencePattern::new(Frequency::Custom)
        };
        assert_eq!(p.validate(), Err(InvalidRecurrenceError::DayOfWeek(7)));
        let p = RecurrencePattern {
            days_of_month: Some(vec![0]),
            ..RecurrencePattern::new(Frequency::Custom)
        };
        assert_eq!(p.validate(), Err(InvalidRecurrenceError::DayOfMonth(0)));
        let p = RecurrencePattern {
            months_of_year: Some(vec![13]),
            ..RecurrencePattern::new(Frequency::Custom)
        };
        assert_eq!(p.validate(), Err(InvalidRecurrenceError::MonthOfYear(13)));
    }

    #[test]
    fn deserializes_camel_case_pattern() {
        let p: RecurrencePattern = serde_json::from_str(
            r#"{ "frequency": "Custom", "daysOfWeek": [1, 3], "endDate": "2024-02-01T00:00:00Z" }"#,
        )
        .unwrap();
        assert_eq!(p.frequency, Frequency::Custom);
        assert_eq!(p.interval, 1);
        assert_eq!(p.days_of_week, Some(vec![1, 3]));
        assert_eq!(
            p.end_date,
            Some(Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap())
        );
        assert!(p.count.is_none());
    }
}
