/// Earliest year the command line accepts.
pub const MIN_YEAR: i32 = 1980;
/// Latest year the command line accepts.
pub const MAX_YEAR: i32 = 2030;

/// Bounds applied while validating a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarConfig {
    pub min_year: i32,
    pub max_year: i32,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            min_year: MIN_YEAR,
            max_year: MAX_YEAR,
        }
    }
}

impl CalendarConfig {
    /// Replace the accepted year range (inclusive on both ends).
    pub fn with_year_range(mut self, min_year: i32, max_year: i32) -> Self {
        self.min_year = min_year;
        self.max_year = max_year;
        self
    }

    pub fn contains_year(&self, year: i64) -> bool {
        (i64::from(self.min_year)..=i64::from(self.max_year)).contains(&year)
    }
}
