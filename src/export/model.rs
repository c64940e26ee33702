// src/export/model.rs

use serde::Serialize;

use crate::models::event::Event;

/// Flat view of a derived event for CSV/JSON export.
#[derive(Serialize, Clone, Debug)]
pub struct EventExport {
    pub timestamp: String,
    pub application: String,
    pub status: String,
    pub lane: usize,
}

impl EventExport {
    pub fn from_event(ev: &Event) -> Self {
        Self {
            timestamp: ev.time_str(),
            application: ev.application.clone(),
            status: ev.status.st_as_str().to_string(),
            lane: ev.lane,
        }
    }
}

pub(crate) fn events_to_exports(events: &[Event]) -> Vec<EventExport> {
    events.iter().map(EventExport::from_event).collect()
}
