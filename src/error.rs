use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Failures raised by the BS <-> AD conversion primitive.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    #[error("BS year {year} is outside the supported range {min}..={max}")]
    YearOutOfRange { year: i32, min: i32, max: i32 },

    #[error("BS month {month} is not between 1 and 12")]
    MonthOutOfRange { month: u32 },

    #[error("BS {year}-{month:02} has {max} days, got day {day}")]
    DayOutOfRange {
        year: i32,
        month: u32,
        day: u32,
        max: u32,
    },

    #[error("AD date {date} is outside the supported range {min}..={max}")]
    AdOutOfRange {
        date: chrono::NaiveDate,
        min: chrono::NaiveDate,
        max: chrono::NaiveDate,
    },

    #[error("AD year {year} is outside the supported range")]
    AdYearOutOfRange { year: i32 },

    #[error("AD date arithmetic overflowed near {date}")]
    Overflow { date: chrono::NaiveDate },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Conversion(#[from] ConversionError),

    /// A date string did not have the `YYYY-MM-DD` shape.
    #[error("invalid date format '{input}': {reason}")]
    InvalidDateFormat { input: String, reason: String },

    #[error("range starts after it ends: {from} > {to}")]
    InvertedRange {
        from: chrono::NaiveDate,
        to: chrono::NaiveDate,
    },

    #[error("month {month} is not between 1 and 12")]
    InvalidMonth { month: u32 },

    #[error("unknown date range '{0}'")]
    UnknownSelector(String),

    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Build an [`Error::InvalidDateFormat`] for `input`.
    pub(crate) fn invalid_format(input: &str, reason: impl Into<String>) -> Self {
        Self::InvalidDateFormat {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}
