use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalError {
    #[error("expected 3 arguments (month, year, start day), got {found}")]
    ArgumentCount { found: usize },

    #[error("{0}")]
    InvalidArguments(String),

    #[error("{field} must be a whole number, got '{value}'")]
    InvalidNumber { field: &'static str, value: String },

    #[error("Month must be between 1 and 12 (got {0})")]
    MonthOutOfRange(String),

    #[error("Year must be between {min} and {max} (got {year})")]
    YearOutOfRange { year: String, min: i32, max: i32 },

    #[error("Start day must be one of: Su, Mo, Tu, We, Th, Fr, Sa (got '{0}')")]
    InvalidStartDay(String),
}

impl CalError {
    /// Errors caused by the shape of the command line rather than its values.
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            CalError::ArgumentCount { .. } | CalError::InvalidArguments(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, CalError>;
