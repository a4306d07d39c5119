use std::io::Cursor;

use hall::config::HallConfig;
use hall::workflows::allocation::{parse_roster, Hall, HallError, RoomLabel};

fn roster_csv() -> &'static str {
    "Name,ID\nAmina Rahman,221-15-001\nTanvir Hasan,221-15-002\nNadia Islam,221-15-003\n"
}

#[test]
fn roster_import_feeds_a_full_allocation_cycle() {
    let entries = parse_roster(Cursor::new(roster_csv())).expect("roster parses");
    let mut hall = Hall::with_config(&HallConfig::default());
    assert_eq!(hall.register_roster(entries), 3);

    for id in ["221-15-001", "221-15-002", "221-15-003"] {
        hall.assign_room(id).expect("room available");
    }
    let cancelled = hall.cancel_room("221-15-002").expect("room held");
    assert_eq!(cancelled.room, RoomLabel("Room 2".to_string()));
    hall.request_maintenance("Room 1");

    assert_eq!(
        hall.list_residents().expect("residents registered"),
        vec![
            "Student Name: Amina Rahman, ID: 221-15-001, Room: Room 1".to_string(),
            "Student Name: Tanvir Hasan, ID: 221-15-002, Room: Not Assigned".to_string(),
            "Student Name: Nadia Islam, ID: 221-15-003, Room: Room 3".to_string(),
        ]
    );
    let free: Vec<&str> = hall
        .list_available_rooms()
        .expect("rooms free")
        .into_iter()
        .map(RoomLabel::as_str)
        .collect();
    assert_eq!(free, vec!["Room 4", "Room 5", "Room 2"]);
    assert_eq!(
        hall.list_maintenance_requests(),
        Some(vec!["Maintenance requested for Room 1"])
    );
}

#[test]
fn outcomes_render_as_console_messages() {
    let mut hall = Hall::with_config(&HallConfig {
        room_prefix: "Room".to_string(),
        room_count: 1,
    });
    hall.register("Farhan Kabir", "F-1");
    hall.register("Lamia Akter", "L-1");

    let not_found = hall.assign_room("missing").expect_err("unknown id");
    assert_eq!(not_found.to_string(), "Student not found.");

    hall.assign_room("F-1").expect("one room available");
    let exhausted = hall.assign_room("L-1").expect_err("pool exhausted");
    assert_eq!(exhausted, HallError::NoRoomsAvailable);
    assert_eq!(exhausted.to_string(), "No rooms available.");

    let nothing_held = hall.cancel_room("L-1").expect_err("no room held");
    assert_eq!(nothing_held.to_string(), "No room assigned to this student.");
}
