use chrono::NaiveDate;
use std::num::IntErrorKind;
use tracing::debug;

use crate::config::CalendarConfig;
use crate::error::{CalError, Result};
use crate::model::{CalendarMonth, StartDay};

/// `Ok(None)` is a whole number too large for `i64`; the caller reports it as out of range.
fn parse_number(field: &'static str, raw: &str) -> Result<Option<i64>> {
    match raw.trim().parse::<i64>() {
        Ok(n) => Ok(Some(n)),
        Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
            Ok(None)
        }
        Err(_) => Err(CalError::InvalidNumber {
            field,
            value: raw.to_string(),
        }),
    }
}

/// Checks month, year and start day in that order; the first violation is returned.
pub fn run(
    config: &CalendarConfig,
    month: &str,
    year: &str,
    start_day: &str,
) -> Result<CalendarMonth> {
    let month = match parse_number("Month", month)? {
        Some(n) if (1..=12).contains(&n) => n as u32,
        _ => return Err(CalError::MonthOutOfRange(month.trim().to_string())),
    };

    let year_out_of_range = || CalError::YearOutOfRange {
        year: year.trim().to_string(),
        min: config.min_year,
        max: config.max_year,
    };
    let year = match parse_number("Year", year)? {
        Some(n) if config.contains_year(n) => n,
        _ => return Err(year_out_of_range()),
    };

    let start_day: StartDay = start_day.parse()?;

    // Out-of-range values were rejected above, so chrono only refuses years beyond its own limits
    let first_day = i32::try_from(year)
        .ok()
        .and_then(|y| NaiveDate::from_ymd_opt(y, month, 1))
        .ok_or_else(year_out_of_range)?;

    debug!(%first_day, %start_day, "validated calendar request");
    Ok(CalendarMonth::new(first_day, start_day))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(month: &str, year: &str, start_day: &str) -> Result<CalendarMonth> {
        run(&CalendarConfig::default(), month, year, start_day)
    }

    #[test]
    fn accepts_valid_input() {
        let month = check("2", "2024", "Su").unwrap();
        assert_eq!(month.month(), 2);
        assert_eq!(month.year(), 2024);
        assert_eq!(month.start_day().abbreviation(), "Su");
    }

    #[test]
    fn accepts_boundaries() {
        assert!(check("1", "1980", "Mo").is_ok());
        assert!(check("12", "2030", "Sa").is_ok());
    }

    #[test]
    fn rejects_month_out_of_range() {
        assert_eq!(check("13", "2024", "Su"), Err(CalError::MonthOutOfRange("13".into())));
        assert_eq!(check("0", "2024", "Su"), Err(CalError::MonthOutOfRange("0".into())));
        assert_eq!(check("-1", "2024", "Su"), Err(CalError::MonthOutOfRange("-1".into())));
    }

    #[test]
    fn rejects_year_out_of_range() {
        assert_eq!(
            check("5", "1979", "Su"),
            Err(CalError::YearOutOfRange {
                year: "1979".into(),
                min: 1980,
                max: 2030
            })
        );
        assert!(matches!(
            check("5", "2031", "Su"),
            Err(CalError::YearOutOfRange { ref year, .. }) if year == "2031"
        ));
    }

    #[test]
    fn rejects_unknown_start_day() {
        assert_eq!(
            check("5", "2024", "Xx"),
            Err(CalError::InvalidStartDay("Xx".into()))
        );
        assert!(check("5", "2024", "su").is_err());
    }

    #[test]
    fn rejects_non_numeric_values() {
        assert_eq!(
            check("May", "2024", "Su"),
            Err(CalError::InvalidNumber {
                field: "Month",
                value: "May".into()
            })
        );
        assert!(matches!(
            check("5", "20x4", "Su"),
            Err(CalError::InvalidNumber { field: "Year", .. })
        ));
        assert!(matches!(
            check("5", "", "Su"),
            Err(CalError::InvalidNumber { field: "Year", .. })
        ));
    }

    #[test]
    fn oversized_numbers_are_out_of_range() {
        assert_eq!(
            check("99999999999999999999", "2024", "Su"),
            Err(CalError::MonthOutOfRange("99999999999999999999".into()))
        );
        assert_eq!(
            check("-99999999999999999999", "2024", "Su"),
            Err(CalError::MonthOutOfRange("-99999999999999999999".into()))
        );
        let err = check("5", "99999999999999999999", "Su").unwrap_err();
        assert!(matches!(err, CalError::YearOutOfRange { .. }));
        assert_eq!(
            err.to_string(),
            "Year must be between 1980 and 2030 (got 99999999999999999999)"
        );
    }

    #[test]
    fn month_is_checked_before_year_and_start_day() {
        assert_eq!(check("13", "1900", "Xx"), Err(CalError::MonthOutOfRange("13".into())));
        assert!(matches!(
            check("5", "1900", "Xx"),
            Err(CalError::YearOutOfRange { .. })
        ));
    }

    #[test]
    fn honours_custom_year_range() {
        let config = CalendarConfig::default().with_year_range(1900, 2100);
        let month = run(&config, "2", "1900", "Su").unwrap();
        assert_eq!(month.last_day(), 28);
    }
}
