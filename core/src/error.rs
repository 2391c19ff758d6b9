use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Week anchor {date} is not a Sunday")]
    WeekStartNotSunday { date: NaiveDate },

    #[error("Invalid demand parameters: {reason}")]
    InvalidDemand { reason: String },

    #[error("Invalid schedule configuration: {reason}")]
    InvalidConfig { reason: String },

    #[error("No active employees to schedule")]
    NoActiveEmployees,

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
