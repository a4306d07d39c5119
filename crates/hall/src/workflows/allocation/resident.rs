use serde::{Deserialize, Serialize};
use std::fmt;

/// Caller-supplied resident identifier. Not validated and not required to be unique.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResidentId(pub String);

impl ResidentId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResidentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Label of a hall room, e.g. `Room 3`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomLabel(pub String);

impl RoomLabel {
    pub fn numbered(prefix: &str, number: u16) -> Self {
        Self(format!("{prefix} {number}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Placeholder shown when a resident holds no room.
pub const UNASSIGNED_LABEL: &str = "Not Assigned";

/// A registered hall resident and their current room, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resident {
    pub name: String,
    pub id: ResidentId,
    assigned_room: Option<RoomLabel>,
}

impl Resident {
    pub fn new(name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: ResidentId(id.into()),
            assigned_room: None,
        }
    }

    pub fn assigned_room(&self) -> Option<&RoomLabel> {
        self.assigned_room.as_ref()
    }

    /// Overwrites any current room and hands back the one it replaced.
    /// The replaced room is not released anywhere.
    pub(crate) fn assign_room(&mut self, room: RoomLabel) -> Option<RoomLabel> {
        self.assigned_room.replace(room)
    }

    pub(crate) fn cancel_room(&mut self) -> Option<RoomLabel> {
        self.assigned_room.take()
    }

    pub fn describe(&self) -> String {
        let room = self
            .assigned_room
            .as_ref()
            .map(RoomLabel::as_str)
            .unwrap_or(UNASSIGNED_LABEL);
        format!(
            "Student Name: {}, ID: {}, Room: {}",
            self.name, self.id, room
        )
    }
}

impl fmt::Display for Resident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
