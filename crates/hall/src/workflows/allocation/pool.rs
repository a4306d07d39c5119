use std::collections::VecDeque;

use serde::Serialize;

use super::resident::RoomLabel;
use crate::config::{HallConfig, DEFAULT_ROOM_COUNT, DEFAULT_ROOM_PREFIX};

/// Free rooms in hand-out order. Rooms leave from the front and come back at the end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RoomPool {
    rooms: VecDeque<RoomLabel>,
}

impl RoomPool {
    /// `Room 1` through `Room 5`.
    pub fn standard() -> Self {
        Self::with_rooms(DEFAULT_ROOM_PREFIX, DEFAULT_ROOM_COUNT)
    }

    pub fn with_rooms(prefix: &str, count: u16) -> Self {
        Self {
            rooms: (1..=count)
                .map(|number| RoomLabel::numbered(prefix, number))
                .collect(),
        }
    }

    pub fn from_config(config: &HallConfig) -> Self {
        Self::with_rooms(&config.room_prefix, config.room_count)
    }

    pub fn take_first(&mut self) -> Option<RoomLabel> {
        self.rooms.pop_front()
    }

    pub fn release(&mut self, room: RoomLabel) {
        self.rooms.push_back(room);
    }

    pub fn rooms(&self) -> impl Iterator<Item = &RoomLabel> {
        self.rooms.iter()
    }

    pub fn contains(&self, room: &RoomLabel) -> bool {
        self.rooms.contains(room)
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}

impl Default for RoomPool {
    fn default() -> Self {
        Self::standard()
    }
}
