use crate::airport::Airport;
use crate::time::TimeOfDay;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::fmt::Formatter;
use std::sync::Arc;
use tabled::Tabled;

pub type AirlineCode = Arc<str>;

/// One scheduled flight. `(airline_code, flight_num)` is the sole identity
/// key; the data supplier guarantees it is unique across a collection.
/// Records are immutable once loaded.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Tabled)]
pub struct Flight {
    pub airline_code: AirlineCode,
    pub flight_num: Arc<str>,
    pub origin: Airport,
    pub destination: Airport,
    pub depart_time: TimeOfDay,
    pub arrive_time: TimeOfDay,
}

impl Flight {
    pub fn key(&self) -> (&str, &str) {
        (&self.airline_code, &self.flight_num)
    }

    /// Canonical result ordering: `(airline_code, flight_num)` ascending.
    pub fn cmp_by_key(&self, other: &Flight) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl fmt::Display for Flight {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {}",
            self.airline_code,
            self.flight_num,
            self.origin.name,
            self.depart_time,
            self.destination.name,
            self.arrive_time
        )
    }
}
