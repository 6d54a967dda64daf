use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::Formatter;
use std::sync::Arc;
use tabled::Tabled;

pub type AirportName = Arc<str>;
pub type CityName = Arc<str>;

/// Reference data. `name` is the unique key; `close_to_city` is many-to-one
/// (several airports may serve the same city).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Tabled)]
pub struct Airport {
    pub name: AirportName,
    pub close_to_city: CityName,
}

impl fmt::Display for Airport {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
