//! # API Layer
//!
//! Thin facade over the commands. Callers hand in raw strings exactly as typed and get back
//! either a [`CalendarGrid`] or the first [`CalError`] encountered. Nothing here prints or
//! exits; that belongs to the client.

use crate::commands::{render, validate};
use crate::config::CalendarConfig;
use crate::error::Result;
use crate::model::CalendarGrid;

#[derive(Debug, Clone, Default)]
pub struct CalendarApi {
    config: CalendarConfig,
}

impl CalendarApi {
    pub fn new(config: CalendarConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CalendarConfig {
        &self.config
    }

    /// Validate the request, then lay the month out.
    pub fn month_grid(&self, month: &str, year: &str, start_day: &str) -> Result<CalendarGrid> {
        let month = validate::run(&self.config, month, year, start_day)?;
        Ok(render::run(&month))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CalError;

    #[test]
    fn returns_rendered_grid() {
        let api = CalendarApi::default();
        let grid = api.month_grid("2", "2024", "Su").unwrap();
        assert_eq!(grid.title, "FEBRUARY 2024");
        assert_eq!(grid.days().count(), 29);
    }

    #[test]
    fn propagates_validation_errors() {
        let api = CalendarApi::default();
        assert_eq!(
            api.month_grid("13", "2024", "Su"),
            Err(CalError::MonthOutOfRange("13".into()))
        );
    }

    #[test]
    fn uses_configured_year_range() {
        let api = CalendarApi::new(CalendarConfig::default().with_year_range(2000, 2001));
        assert_eq!(api.config().max_year, 2001);
        assert!(api.month_grid("1", "1999", "Su").is_err());
        assert!(api.month_grid("1", "2001", "Su").is_ok());
    }
}
