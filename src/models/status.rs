/// Lifecycle state of an application at a point in time.
///
/// Matching is exact and case-sensitive; anything outside the four known
/// values is carried along as `Other` and rendered as an invisible marker
/// rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Activated,
    Deactivated,
    Launched,
    Terminated,
    Other(String),
}

impl Status {
    pub fn st_from_str(s: &str) -> Self {
        match s {
            "Activated" => Status::Activated,
            "Deactivated" => Status::Deactivated,
            "Launched" => Status::Launched,
            "Terminated" => Status::Terminated,
            other => Status::Other(other.to_string()),
        }
    }

    pub fn st_as_str(&self) -> &str {
        match self {
            Status::Activated => "Activated",
            Status::Deactivated => "Deactivated",
            Status::Launched => "Launched",
            Status::Terminated => "Terminated",
            Status::Other(s) => s,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Status::Other(_))
    }
}
