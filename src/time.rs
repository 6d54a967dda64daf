use crate::error::QueryError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub const MINUTES_PER_DAY: u16 = 1440;

/// A point on the 24-hour clock, minute granularity. There is no date
/// component, so "earlier" and "later" only make sense relative to a
/// reference time; arithmetic walks forward on a 1440-minute ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTimeOfDay")]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

#[derive(Deserialize)]
struct RawTimeOfDay {
    hour: u8,
    minute: u8,
}

impl TryFrom<RawTimeOfDay> for TimeOfDay {
    type Error = QueryError;

    fn try_from(raw: RawTimeOfDay) -> Result<Self, Self::Error> {
        TimeOfDay::new(raw.hour, raw.minute)
    }
}

impl TimeOfDay {
    pub fn new(hour: u8, minute: u8) -> Result<TimeOfDay, QueryError> {
        if hour > 23 {
            return Err(QueryError::HourOutOfRange(hour));
        }
        if minute > 59 {
            return Err(QueryError::MinuteOutOfRange(minute));
        }
        Ok(TimeOfDay { hour, minute })
    }

    pub fn hour(self) -> u8 {
        self.hour
    }

    pub fn minute(self) -> u8 {
        self.minute
    }

    fn total_minutes(self) -> u16 {
        u16::from(self.hour) * 60 + u16::from(self.minute)
    }

    /// Minutes to advance from `earlier` to reach `self`, always walking
    /// forward and possibly across midnight. Result is in 0..=1439;
    /// `t.minutes_since(t)` is 0, never 1440.
    pub fn minutes_since(self, earlier: TimeOfDay) -> u16 {
        (self.total_minutes() + MINUTES_PER_DAY - earlier.total_minutes()) % MINUTES_PER_DAY
    }

    /// Whether `self` lies on the closed arc from `from` forward to `to`.
    /// The arc may cross midnight; when `from == to` it is the single
    /// instant `from`.
    pub fn is_in_interval(self, from: TimeOfDay, to: TimeOfDay) -> bool {
        self.minutes_since(from) <= to.minutes_since(from)
    }
}

impl std::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for TimeOfDay {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || QueryError::MalformedTime(s.to_string());
        let (h, m) = s.split_once(':').ok_or_else(malformed)?;
        let hour = h.parse::<u8>().map_err(|_| malformed())?;
        let minute = m.parse::<u8>().map_err(|_| malformed())?;
        TimeOfDay::new(hour, minute)
    }
}
