use std::collections::HashSet;

use crate::workflows::allocation::{Hall, RoomLabel};

pub(super) fn standard_rooms() -> Vec<RoomLabel> {
    (1..=5).map(|n| RoomLabel::numbered("Room", n)).collect()
}

pub(super) fn room(number: u16) -> RoomLabel {
    RoomLabel::numbered("Room", number)
}

pub(super) fn hall_with_residents(count: usize) -> Hall {
    let mut hall = Hall::new();
    for n in 1..=count {
        hall.register(format!("Resident {n}"), format!("R-{n:03}"));
    }
    hall
}

pub(super) fn resident_id(n: usize) -> String {
    format!("R-{n:03}")
}

/// Each room is free or held by one resident, never both. Leaked rooms are in neither place.
pub(super) fn assert_pool_invariant(hall: &Hall, rooms: &[RoomLabel], leaked: &HashSet<RoomLabel>) {
    for label in rooms {
        let in_pool = hall.pool().rooms().filter(|free| *free == label).count();
        let held = hall
            .residents()
            .iter()
            .filter(|resident| resident.assigned_room() == Some(label))
            .count();
        let expected = if leaked.contains(label) { 0 } else { 1 };
        assert_eq!(
            in_pool + held,
            expected,
            "room {label} is in the pool {in_pool} time(s) and held {held} time(s)"
        );
    }
}

/// Small deterministic generator so operation sequences are reproducible.
pub(super) struct Lcg(u64);

impl Lcg {
    pub(super) fn new(seed: u64) -> Self {
        Self(seed)
    }

    pub(super) fn next_below(&mut self, bound: usize) -> usize {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        ((self.0 >> 33) as usize) % bound
    }
}
