use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("hour {0} out of range 0-23")]
    HourOutOfRange(u8),
    #[error("minute {0} out of range 0-59")]
    MinuteOutOfRange(u8),
    #[error("malformed time {0:?}, expected H:MM")]
    MalformedTime(String),
    #[error("layover bounds reversed: min {min} > max {max}")]
    LayoverBoundsReversed { min: u32, max: u32 },
}
