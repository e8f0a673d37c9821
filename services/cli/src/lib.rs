mod cli;
mod demo;
mod input;
mod render;

use phd_readiness::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
