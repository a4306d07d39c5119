mod cli;
mod demo;
mod menu;

use hall::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
