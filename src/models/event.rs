use chrono::{DateTime, Utc};

use super::status::Status;

/// One derived activity event, ready for layout.
///
/// `timestamp` is the raw `Time` field multiplied by 1000 and read as a UTC
/// instant; rows whose time field does not parse keep `None` and are never
/// placed on the chart. `lane` is the position of `application` in the
/// sorted catalog.
#[derive(Debug, Clone)]
pub struct Event {
    pub timestamp: Option<DateTime<Utc>>,
    pub application: String,
    pub status: Status,
    pub lane: usize,
}

impl Event {
    pub fn time_str(&self) -> String {
        match self.timestamp {
            Some(ts) => ts.to_rfc3339(),
            None => String::new(),
        }
    }
}
