use serde::Serialize;
use tracing::{debug, info, warn};

use super::maintenance::{MaintenanceLog, MaintenanceRequest};
use super::pool::RoomPool;
use super::resident::{Resident, ResidentId, RoomLabel};
use super::roster::RosterEntry;
use crate::config::HallConfig;

/// Owns the resident register, the free-room pool, and the maintenance log for one run.
///
/// Every room label is either in the pool or held by exactly one resident, with one
/// known exception: reassigning a room to a resident who already holds one drops the
/// old room without returning it to the pool (see [`RoomAssignment::replaced`]).
#[derive(Debug, Clone, Default)]
pub struct Hall {
    residents: Vec<Resident>,
    pool: RoomPool,
    maintenance: MaintenanceLog,
}

/// Outcome of a successful room assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoomAssignment {
    pub resident_name: String,
    pub resident_id: ResidentId,
    pub room: RoomLabel,
    /// Room the resident held before. It is not back in the pool.
    pub replaced: Option<RoomLabel>,
}

/// Outcome of a successful cancellation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoomCancellation {
    pub resident_name: String,
    pub resident_id: ResidentId,
    pub room: RoomLabel,
}

/// Informational outcomes the console reports back. None of these end the session.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HallError {
    #[error("Student not found.")]
    ResidentNotFound { id: ResidentId },
    #[error("No rooms available.")]
    NoRoomsAvailable,
    #[error("No room assigned to this student.")]
    NoRoomAssigned { resident_name: String },
}

/// Serializable view of the whole hall.
#[derive(Debug, Serialize)]
pub struct HallSnapshot<'a> {
    pub residents: &'a [Resident],
    pub available_rooms: &'a RoomPool,
    pub maintenance_requests: &'a MaintenanceLog,
}

impl Hall {
    /// Hall with the standard `Room 1`..`Room 5` pool.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: &HallConfig) -> Self {
        Self::with_pool(RoomPool::from_config(config))
    }

    pub fn with_pool(pool: RoomPool) -> Self {
        Self {
            residents: Vec::new(),
            pool,
            maintenance: MaintenanceLog::default(),
        }
    }

    /// Always succeeds. Duplicate ids are accepted; later duplicates are shadowed by
    /// [`Hall::find_by_id`].
    pub fn register(&mut self, name: impl Into<String>, id: impl Into<String>) -> &Resident {
        let resident = Resident::new(name, id);
        if self.find_by_id(resident.id.as_str()).is_some() {
            warn!(
                id = %resident.id,
                "duplicate resident id; lookups resolve to the earlier resident"
            );
        }
        info!(id = %resident.id, name = %resident.name, "resident registered");
        self.residents.push(resident);
        &self.residents[self.residents.len() - 1]
    }

    pub fn register_roster<I>(&mut self, entries: I) -> usize
    where
        I: IntoIterator<Item = RosterEntry>,
    {
        let mut registered = 0;
        for entry in entries {
            self.register(entry.name, entry.id);
            registered += 1;
        }
        registered
    }

    /// First resident registered under `id`.
    pub fn find_by_id(&self, id: &str) -> Option<&Resident> {
        let found = self.residents.iter().find(|resident| resident.id.as_str() == id);
        debug!(id, found = found.is_some(), "resident lookup");
        found
    }

    fn position_of(&self, id: &str) -> Result<usize, HallError> {
        self.residents
            .iter()
            .position(|resident| resident.id.as_str() == id)
            .ok_or_else(|| HallError::ResidentNotFound {
                id: ResidentId(id.to_string()),
            })
    }

    /// Hands the front room of the pool to the resident registered under `id`.
    pub fn assign_room(&mut self, id: &str) -> Result<RoomAssignment, HallError> {
        let index = self.position_of(id)?;
        let room = self.pool.take_first().ok_or_else(|| {
            warn!(id, "room assignment refused: pool exhausted");
            HallError::NoRoomsAvailable
        })?;

        let resident = &mut self.residents[index];
        let replaced = resident.assign_room(room.clone());
        if let Some(previous) = &replaced {
            warn!(
                id,
                previous = %previous,
                room = %room,
                "resident reassigned; previous room is not returned to the pool"
            );
        }
        info!(id, room = %room, "room assigned");

        Ok(RoomAssignment {
            resident_name: resident.name.clone(),
            resident_id: resident.id.clone(),
            room,
            replaced,
        })
    }

    /// Returns the resident's room to the back of the pool.
    pub fn cancel_room(&mut self, id: &str) -> Result<RoomCancellation, HallError> {
        let index = self.position_of(id)?;
        let resident = &mut self.residents[index];
        let room = resident
            .cancel_room()
            .ok_or_else(|| HallError::NoRoomAssigned {
                resident_name: resident.name.clone(),
            })?;

        info!(id, room = %room, "room cancelled");
        let cancellation = RoomCancellation {
            resident_name: resident.name.clone(),
            resident_id: resident.id.clone(),
            room: room.clone(),
        };
        self.pool.release(room);
        Ok(cancellation)
    }

    pub fn request_maintenance(&mut self, room: &str) -> &MaintenanceRequest {
        info!(room, "maintenance requested");
        self.maintenance.record(room)
    }

    /// Resident descriptions in registration order, `None` when nobody is registered.
    pub fn list_residents(&self) -> Option<Vec<String>> {
        if self.residents.is_empty() {
            return None;
        }
        Some(self.residents.iter().map(Resident::describe).collect())
    }

    /// Free rooms in hand-out order, `None` when the pool is empty.
    pub fn list_available_rooms(&self) -> Option<Vec<&RoomLabel>> {
        if self.pool.is_empty() {
            return None;
        }
        Some(self.pool.rooms().collect())
    }

    /// Logged requests in submission order, `None` when nothing was logged.
    pub fn list_maintenance_requests(&self) -> Option<Vec<&str>> {
        if self.maintenance.is_empty() {
            return None;
        }
        Some(
            self.maintenance
                .requests()
                .iter()
                .map(|request| request.entry.as_str())
                .collect(),
        )
    }

    pub fn residents(&self) -> &[Resident] {
        &self.residents
    }

    pub fn pool(&self) -> &RoomPool {
        &self.pool
    }

    pub fn maintenance(&self) -> &MaintenanceLog {
        &self.maintenance
    }

    pub fn snapshot(&self) -> HallSnapshot<'_> {
        HallSnapshot {
            residents: &self.residents,
            available_rooms: &self.pool,
            maintenance_requests: &self.maintenance,
        }
    }
}
