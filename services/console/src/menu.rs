use clap::Args;
use hall::config::AppConfig;
use hall::error::AppError;
use hall::workflows::allocation::{load_roster, Hall, HallError};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Args, Debug, Default)]
pub(crate) struct MenuArgs {
    /// CSV roster (`Name,ID` columns) registered before the menu opens
    #[arg(long)]
    pub(crate) roster: Option<PathBuf>,
    /// Override the configured number of rooms in the initial pool
    #[arg(long)]
    pub(crate) rooms: Option<u16>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MenuChoice {
    Register,
    ShowResidents,
    ShowRooms,
    AssignRoom,
    RequestMaintenance,
    CancelRoom,
    ShowMaintenance,
    Exit,
}

impl MenuChoice {
    pub(crate) fn parse(raw: &str) -> Option<Self> {
        match raw.trim().parse::<u8>().ok()? {
            1 => Some(Self::Register),
            2 => Some(Self::ShowResidents),
            3 => Some(Self::ShowRooms),
            4 => Some(Self::AssignRoom),
            5 => Some(Self::RequestMaintenance),
            6 => Some(Self::CancelRoom),
            7 => Some(Self::ShowMaintenance),
            8 => Some(Self::Exit),
            _ => None,
        }
    }
}

const BANNER: &str = "===== Daffodil Student Hall Management System =====";
const OPTIONS: [&str; 8] = [
    "1. Register Student",
    "2. Show Student Details",
    "3. Show Available Rooms",
    "4. Assign Room",
    "5. Request for Maintenance",
    "6. Cancel Room",
    "7. Show Maintenance Requests",
    "8. Exit",
];

pub(crate) fn run_menu(args: MenuArgs, config: AppConfig) -> Result<(), AppError> {
    let MenuArgs { roster, rooms } = args;

    let mut hall_config = config.hall;
    if let Some(rooms) = rooms {
        hall_config.room_count = rooms;
    }
    let mut hall = Hall::with_config(&hall_config);

    if let Some(path) = roster {
        let entries = load_roster(&path)?;
        let registered = hall.register_roster(entries);
        info!(path = %path.display(), registered, "roster loaded");
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    Menu::new(&mut hall, stdin.lock(), stdout.lock()).run()?;
    Ok(())
}

/// Interactive dispatcher. Reads choices and fields from `input`, writes every
/// prompt and outcome to `output`.
pub(crate) struct Menu<'h, R, W> {
    hall: &'h mut Hall,
    input: R,
    output: W,
}

impl<'h, R, W> Menu<'h, R, W>
where
    R: BufRead,
    W: Write,
{
    pub(crate) fn new(hall: &'h mut Hall, input: R, output: W) -> Self {
        Self {
            hall,
            input,
            output,
        }
    }

    /// Runs until the exit choice or end of input.
    pub(crate) fn run(&mut self) -> io::Result<()> {
        loop {
            self.print_menu()?;
            let Some(line) = self.read_line()? else {
                debug!("input closed; leaving menu");
                writeln!(self.output)?;
                return self.farewell();
            };

            match MenuChoice::parse(&line) {
                Some(MenuChoice::Exit) => return self.farewell(),
                Some(choice) => self.dispatch(choice)?,
                None => writeln!(self.output, "Invalid choice. Try again.")?,
            }
        }
    }

    fn dispatch(&mut self, choice: MenuChoice) -> io::Result<()> {
        match choice {
            MenuChoice::Register => {
                let Some(name) = self.prompt("Enter student name: ")? else {
                    return Ok(());
                };
                let Some(id) = self.prompt("Enter student ID: ")? else {
                    return Ok(());
                };
                self.hall.register(name, id);
                writeln!(self.output, "Student registered successfully.")
            }
            MenuChoice::ShowResidents => write_residents(&mut self.output, self.hall),
            MenuChoice::ShowRooms => write_available_rooms(&mut self.output, self.hall),
            MenuChoice::AssignRoom => {
                let Some(id) = self.prompt("Enter student ID to assign room: ")? else {
                    return Ok(());
                };
                match self.hall.assign_room(&id) {
                    Ok(assignment) => writeln!(
                        self.output,
                        "Assigned {} to {}",
                        assignment.room, assignment.resident_name
                    ),
                    Err(err) => write_outcome(&mut self.output, &err),
                }
            }
            MenuChoice::RequestMaintenance => {
                let Some(room) = self.prompt("Enter room for maintenance request: ")? else {
                    return Ok(());
                };
                self.hall.request_maintenance(&room);
                writeln!(self.output, "Maintenance request submitted for {room}")
            }
            MenuChoice::CancelRoom => {
                let Some(id) = self.prompt("Enter student ID to cancel room: ")? else {
                    return Ok(());
                };
                match self.hall.cancel_room(&id) {
                    Ok(cancellation) => writeln!(
                        self.output,
                        "Room canceled for {}",
                        cancellation.resident_name
                    ),
                    Err(err) => write_outcome(&mut self.output, &err),
                }
            }
            MenuChoice::ShowMaintenance => write_maintenance_requests(&mut self.output, self.hall),
            MenuChoice::Exit => Ok(()),
        }
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n{BANNER}")?;
        for option in OPTIONS {
            writeln!(self.output, "{option}")?;
        }
        write!(self.output, "Enter choice: ")?;
        self.output.flush()
    }

    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;
        self.read_line()
    }

    /// `None` once the input is exhausted.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    fn farewell(&mut self) -> io::Result<()> {
        writeln!(self.output, "Exiting system. Goodbye!")?;
        self.output.flush()
    }
}

pub(crate) fn write_outcome<W: Write>(output: &mut W, outcome: &HallError) -> io::Result<()> {
    writeln!(output, "{outcome}")
}

pub(crate) fn write_residents<W: Write>(output: &mut W, hall: &Hall) -> io::Result<()> {
    match hall.list_residents() {
        Some(descriptions) => {
            for description in descriptions {
                writeln!(output, "{description}")?;
            }
            Ok(())
        }
        None => writeln!(output, "No students found."),
    }
}

pub(crate) fn write_available_rooms<W: Write>(output: &mut W, hall: &Hall) -> io::Result<()> {
    match hall.list_available_rooms() {
        Some(rooms) => {
            writeln!(output, "Available rooms:")?;
            for room in rooms {
                writeln!(output, "{room}")?;
            }
            Ok(())
        }
        None => writeln!(output, "No rooms available."),
    }
}

pub(crate) fn write_maintenance_requests<W: Write>(output: &mut W, hall: &Hall) -> io::Result<()> {
    match hall.list_maintenance_requests() {
        Some(requests) => {
            writeln!(output, "Maintenance Requests:")?;
            for request in requests {
                writeln!(output, "{request}")?;
            }
            Ok(())
        }
        None => writeln!(output, "No maintenance requests."),
    }
}
