use chrono::{DateTime, Utc};
use serde::Serialize;

/// One logged maintenance request. `room` is free text and never checked
/// against the hall's rooms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MaintenanceRequest {
    pub room: String,
    pub entry: String,
    pub logged_at: DateTime<Utc>,
}

impl MaintenanceRequest {
    fn for_room(room: &str, logged_at: DateTime<Utc>) -> Self {
        Self {
            room: room.to_string(),
            entry: format!("Maintenance requested for {room}"),
            logged_at,
        }
    }
}

/// Append-only request log kept in submission order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MaintenanceLog {
    requests: Vec<MaintenanceRequest>,
}

impl MaintenanceLog {
    pub fn record(&mut self, room: &str) -> &MaintenanceRequest {
        self.record_at(room, Utc::now())
    }

    pub(crate) fn record_at(
        &mut self,
        room: &str,
        logged_at: DateTime<Utc>,
    ) -> &MaintenanceRequest {
        self.requests.push(MaintenanceRequest::for_room(room, logged_at));
        &self.requests[self.requests.len() - 1]
    }

    pub fn requests(&self) -> &[MaintenanceRequest] {
        &self.requests
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }
}
