//! Vacancy salary statistics
//!
//! Searches HeadHunter and SuperJob for programming-language vacancies in
//! Moscow and prints found/processed/average-salary tables for each board.

mod config;
mod error;
mod report;
mod sources;
mod telemetry;

use common::render_table;
use config::AppConfig;
use error::AppError;
use sources::{HeadHunter, SuperJob, VacancySource};
use tracing::info;

fn main() {
    if let Err(err) = run() {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let client = config.http.client().map_err(AppError::Client)?;
    let superjob = SuperJob::new(client.clone(), &config.superjob);
    let headhunter = HeadHunter::new(client, &config.headhunter);

    info!(
        keywords = config.keywords.len(),
        "collecting vacancy statistics"
    );

    let sources: [&dyn VacancySource; 2] = [&superjob, &headhunter];
    for table in report::run(&sources, &config.keywords)? {
        println!("{}", render_table(&table));
    }
    Ok(())
}
