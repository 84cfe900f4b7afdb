use std::env;
use std::io;
use std::process::ExitCode;
use anyhow::{Context, Result};
use log::error;
use crate::initialization::init;
use crate::models::forecast::LocationQuery;
use crate::prompt::{ask_location, greet};
use crate::worker::run;

mod aggregation;
mod config;
mod errors;
mod initialization;
mod manager_open_weather;
mod models;
mod persist;
mod prompt;
mod transitions;
mod worker;

const DEFAULT_CONFIG: &str = "config.toml";

/// Usage: weather_digest [config.toml] [city country]
///
/// Without city and country on the command line they are asked for interactively.
fn main() -> ExitCode {
    match digest() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn digest() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let config_path = args.first().map(String::as_str).unwrap_or(DEFAULT_CONFIG);

    let (config, open_weather) = init(config_path)
        .with_context(|| format!("unable to initialize from '{}'", config_path))?;

    let query = match (args.get(1), args.get(2)) {
        (Some(city), Some(country)) => LocationQuery::new(city, country)?,
        _ => {
            let mut stdout = io::stdout();
            greet(&mut stdout)?;
            ask_location(&mut io::stdin().lock(), &mut stdout)?
        },
    };

    println!("\nRetrieving forecasts for {}...", query);

    let outcome = run(&open_weather, &query, &config.files.result_file)
        .context("unable to retrieve data, check the city/country")?;

    println!("\nForecast summary:\n{}\n", outcome.summary);

    match outcome.persist_error {
        None => println!("File '{}' created successfully!", config.files.result_file),
        Some(e) => println!("Error during saving: {}", e),
    }

    Ok(())
}
