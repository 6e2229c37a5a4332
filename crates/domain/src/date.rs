use chrono::prelude::*;
use std::ops::RangeInclusive;

/// Years accepted in date input, whichever format it is written in
const YEARS: RangeInclusive<i32> = 1970..=2100;

fn parse_rfc3339(datestr: &str) -> Option<anyhow::Result<DateTime<FixedOffset>>> {
    let datetime = DateTime::parse_from_rfc3339(datestr).ok()?;
    if YEARS.contains(&datetime.year()) {
        Some(Ok(datetime))
    } else {
        Some(Err(anyhow::Error::msg(datestr.to_string())))
    }
}

/// Parses an instant given either as RFC 3339 (`2024-01-07T10:00:00Z`) or as a
/// plain calendar date (`2024-01-07`), which is read as midnight UTC.
pub fn parse_iso_datetime(datestr: &str) -> anyhow::Result<DateTime<Utc>> {
    let datestr = datestr.trim();
    if let Some(datetime) = parse_rfc3339(datestr) {
        return Ok(datetime?.with_timezone(&Utc));
    }
    let date = parse_plain_date(datestr)?;
    let midnight = date
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| anyhow::Error::msg(datestr.to_string()))?;
    Ok(Utc.from_utc_datetime(&midnight))
}

/// Parses the calendar date written in the string. For RFC 3339 input the date
/// is taken in the offset the string was written in.
pub fn parse_iso_date(datestr: &str) -> anyhow::Result<NaiveDate> {
    let datestr = datestr.trim();
    if let Some(datetime) = parse_rfc3339(datestr) {
        return Ok(datetime?.date_naive());
    }
    parse_plain_date(datestr)
}

fn parse_plain_date(datestr: &str) -> anyhow::Result<NaiveDate> {
    let dates = datestr.split('-').collect::<Vec<_>>();
    if dates.len() != 3 {
        return Err(anyhow::Error::msg(datestr.to_string()));
    }
    let year = dates[0].parse::<i32>();
    let month = dates[1].parse::<u32>();
    let day = dates[2].parse::<u32>();

    match (year, month, day) {
        (Ok(year), Ok(month), Ok(day)) if YEARS.contains(&year) => {
            NaiveDate::from_ymd_opt(year, month, day)
                .ok_or_else(|| anyhow::Error::msg(datestr.to_string()))
        }
        _ => Err(anyhow::Error::msg(datestr.to_string())),
    }
}

pub fn format_date(date: &NaiveDate) -> String {
    date.format("%F").to_string()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn it_accepts_valid_dates() {
        let valid_dates = vec![
            "2018-1-1",
            "2025-12-31",
            "2020-1-12",
            "2020-2-29",
            "2020-02-2",
            "2020-02-02",
            "2020-2-09",
        ];

        for date in &valid_dates {
            assert!(parse_iso_date(date).is_ok());
        }
    }

    #[test]
    fn it_rejects_invalid_dates() {
        let invalid_dates = vec![
            "2018--1-1",
            "2020-1-32",
            "2020-2-30",
            "2020-0-1",
            "2020-1-0",
            "1900-1-1",
            "yesterday",
        ];

        for date in &invalid_dates {
            assert!(parse_iso_date(date).is_err());
            assert!(parse_iso_datetime(date).is_err());
        }
    }

    #[test]
    fn plain_dates_are_midnight_utc() {
        let dt = parse_iso_datetime("2024-01-07").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2024, 1, 7, 0, 0, 0).unwrap());
    }

    #[test]
    fn rfc3339_instants_are_converted_to_utc() {
        let dt = parse_iso_datetime("2024-01-07T10:30:00+02:00").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2024, 1, 7, 8, 30, 0).unwrap());

        // The calendar date is the one written in the string
        let date = parse_iso_date("2024-01-07T00:30:00+02:00").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 7).unwrap());
    }

    #[test]
    fn rfc3339_years_share_the_plain_date_range() {
        for datestr in &[
            "0001-01-01T00:00:00Z",
            "1969-12-31T23:59:59Z",
            "2101-01-01T00:00:00Z",
            "9999-12-31T00:00:00Z",
        ] {
            assert!(parse_iso_date(datestr).is_err());
            assert!(parse_iso_datetime(datestr).is_err());
        }
        assert!(parse_iso_datetime("1970-01-01T00:00:00Z").is_ok());
        assert!(parse_iso_date("2100-12-31T23:59:59Z").is_ok());
    }

    #[test]
    fn formats_dates() {
        let date = NaiveDate::from_ymd_opt(2001, 7, 8).unwrap();
        assert_eq!(format_date(&date), "2001-07-08");
    }
}
