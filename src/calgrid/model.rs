use chrono::{Datelike, NaiveDate, Weekday};
use std::fmt;
use std::str::FromStr;

use crate::error::CalError;

/// Month names as printed in the grid title, January first.
pub const MONTH_NAMES: [&str; 12] = [
    "JANUARY",
    "FEBRUARY",
    "MARCH",
    "APRIL",
    "MAY",
    "JUNE",
    "JULY",
    "AUGUST",
    "SEPTEMBER",
    "OCTOBER",
    "NOVEMBER",
    "DECEMBER",
];

/// Sunday based weekday abbreviations. Also the set of accepted start days.
pub const WEEKDAY_ABBREVIATIONS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// The weekday shown in the leftmost column of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartDay(Weekday);

impl StartDay {
    pub fn new(weekday: Weekday) -> Self {
        Self(weekday)
    }

    pub fn weekday(&self) -> Weekday {
        self.0
    }

    /// Position within [`WEEKDAY_ABBREVIATIONS`] (0 = Sunday).
    pub fn index(&self) -> usize {
        self.0.num_days_from_sunday() as usize
    }

    pub fn abbreviation(&self) -> &'static str {
        WEEKDAY_ABBREVIATIONS[self.index()]
    }

    /// The seven abbreviations, starting at this day and wrapping around.
    pub fn rotated_header(&self) -> [&'static str; 7] {
        let start = self.index();
        std::array::from_fn(|i| WEEKDAY_ABBREVIATIONS[(start + i) % 7])
    }
}

impl FromStr for StartDay {
    type Err = CalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let weekday = match s {
            "Su" => Weekday::Sun,
            "Mo" => Weekday::Mon,
            "Tu" => Weekday::Tue,
            "We" => Weekday::Wed,
            "Th" => Weekday::Thu,
            "Fr" => Weekday::Fri,
            "Sa" => Weekday::Sat,
            other => return Err(CalError::InvalidStartDay(other.to_string())),
        };
        Ok(Self(weekday))
    }
}

impl fmt::Display for StartDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

/// A month that passed validation, ready to be laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarMonth {
    first_day: NaiveDate,
    start_day: StartDay,
}

impl CalendarMonth {
    pub(crate) fn new(first_day: NaiveDate, start_day: StartDay) -> Self {
        Self {
            first_day,
            start_day,
        }
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    pub fn start_day(&self) -> StartDay {
        self.start_day
    }

    pub fn year(&self) -> i32 {
        self.first_day.year()
    }

    /// 1-based month number.
    pub fn month(&self) -> u32 {
        self.first_day.month()
    }

    pub fn name(&self) -> &'static str {
        MONTH_NAMES[self.first_day.month0() as usize]
    }

    /// Number of days in the month, leap years included.
    pub fn last_day(&self) -> u32 {
        let month = self.first_day.month();
        self.first_day
            .iter_days()
            .take_while(|d| d.month() == month)
            .count() as u32
    }

    /// Blank columns before day 1 in the first week row.
    pub fn initial_offset(&self) -> usize {
        let first = self.first_day.weekday().num_days_from_sunday() as usize;
        (first + 7 - self.start_day.index()) % 7
    }
}

/// A rendered month: title, rotated weekday header and week rows.
///
/// `None` cells are the blank columns that precede day 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarGrid {
    pub title: String,
    pub header: [&'static str; 7],
    pub weeks: Vec<Vec<Option<u32>>>,
}

impl CalendarGrid {
    /// All day numbers in reading order.
    pub fn days(&self) -> impl Iterator<Item = u32> + '_ {
        self.weeks.iter().flatten().flatten().copied()
    }

    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.weeks.len() + 2);
        lines.push(format!("****{}****", self.title));
        lines.push(self.header.join(" "));
        for week in &self.weeks {
            let cells: Vec<String> = week
                .iter()
                .map(|cell| match cell {
                    Some(day) => format!("{:02}", day),
                    None => "  ".to_string(),
                })
                .collect();
            lines.push(cells.join(" ").trim_end().to_string());
        }
        lines
    }
}

impl fmt::Display for CalendarGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines().join("\n"))
    }
}
