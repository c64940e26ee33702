use serde::Deserialize;

/// One raw row of the activity log, as read from CSV.
///
/// Columns are matched by header name, so their order in the file does not
/// matter. All fields are kept as strings: validation happens at derive time.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRecord {
    #[serde(rename = "Time")]
    pub time: String, // seconds since epoch, numeric string

    #[serde(rename = "Application")]
    pub application: String,

    #[serde(rename = "Status")]
    pub status: String,
}

impl RawRecord {
    pub fn new(time: &str, application: &str, status: &str) -> Self {
        Self {
            time: time.to_string(),
            application: application.to_string(),
            status: status.to_string(),
        }
    }
}
