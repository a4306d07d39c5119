//! Residence hall room allocation: resident register, free-room pool, and the
//! maintenance request log.

mod hall;
pub mod maintenance;
pub mod pool;
pub mod resident;
pub mod roster;

#[cfg(test)]
mod tests;

pub use hall::{Hall, HallError, HallSnapshot, RoomAssignment, RoomCancellation};
pub use maintenance::{MaintenanceLog, MaintenanceRequest};
pub use pool::RoomPool;
pub use resident::{Resident, ResidentId, RoomLabel, UNASSIGNED_LABEL};
pub use roster::{load_roster, parse_roster, RosterEntry, RosterError};
