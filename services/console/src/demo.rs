use crate::menu::{
    write_available_rooms, write_maintenance_requests, write_outcome, write_residents,
};
use clap::Args;
use hall::config::AppConfig;
use hall::error::AppError;
use hall::workflows::allocation::Hall;
use std::io::{self, Write};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Print the final hall state as JSON instead of the console listings
    #[arg(long)]
    pub(crate) json: bool,
}

const DEMO_RESIDENTS: [(&str, &str); 3] = [
    ("Amina Rahman", "221-15-001"),
    ("Tanvir Hasan", "221-15-002"),
    ("Nadia Islam", "221-15-003"),
];

pub(crate) fn run_demo(args: DemoArgs, config: AppConfig) -> Result<(), AppError> {
    let mut hall = Hall::with_config(&config.hall);
    let stdout = io::stdout();
    let mut output = stdout.lock();
    write_demo(&mut hall, &mut output, args.json)
}

fn write_demo<W: Write>(hall: &mut Hall, output: &mut W, json: bool) -> Result<(), AppError> {
    let mut steps = Vec::new();

    for (name, id) in DEMO_RESIDENTS {
        hall.register(name, id);
        match hall.assign_room(id) {
            Ok(assignment) => steps.push(format!(
                "Assigned {} to {}",
                assignment.room, assignment.resident_name
            )),
            Err(err) => steps.push(err.to_string()),
        }
    }

    let (_, second_id) = DEMO_RESIDENTS[1];
    for _ in 0..2 {
        match hall.cancel_room(second_id) {
            Ok(cancellation) => {
                steps.push(format!("Room canceled for {}", cancellation.resident_name))
            }
            Err(err) => steps.push(err.to_string()),
        }
    }

    let request = hall.request_maintenance("Room 1");
    steps.push(format!("Maintenance request submitted for {}", request.room));

    if json {
        let rendered = serde_json::to_string_pretty(&hall.snapshot())?;
        writeln!(output, "{rendered}")?;
        return Ok(());
    }

    writeln!(output, "Hall allocation demo")?;
    for step in &steps {
        writeln!(output, "- {step}")?;
    }
    writeln!(output, "\nResidents")?;
    write_residents(output, hall)?;
    writeln!(output)?;
    write_available_rooms(output, hall)?;
    writeln!(output)?;
    write_maintenance_requests(output, hall)?;

    if let Err(err) = hall.assign_room("not-registered") {
        writeln!(output, "\nLookup of an unknown ID")?;
        write_outcome(output, &err)?;
    }

    Ok(())
}
