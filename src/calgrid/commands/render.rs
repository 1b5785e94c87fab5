use tracing::debug;

use crate::model::{CalendarGrid, CalendarMonth};

pub fn run(month: &CalendarMonth) -> CalendarGrid {
    let offset = month.initial_offset();
    let last_day = month.last_day();
    debug!(offset, last_day, "laying out month");

    let mut weeks = Vec::new();
    let mut week: Vec<Option<u32>> = vec![None; offset];
    for day in 1..=last_day {
        week.push(Some(day));
        if (day as usize + offset) % 7 == 0 {
            weeks.push(std::mem::take(&mut week));
        }
    }
    if !week.is_empty() {
        weeks.push(week);
    }

    CalendarGrid {
        title: format!("{} {}", month.name(), month.year()),
        header: month.start_day().rotated_header(),
        weeks,
    }
}
