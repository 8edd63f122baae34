use crate::{config::Config, gateways};
use anyhow::{anyhow, Result};
use clap::Parser;
use pgps_application::{
    csv,
    error::AppError,
    prelude::{BatchCache, PharmacyLocator},
    sample,
};
use pgps_core::{
    entities::{Column, Severity, Table},
    gateways::geocode::GeoCodingGateway,
    geocoder::RateLimitedGeocoder,
    usecases::{self, BatchResolution},
};
use std::{fs, path::PathBuf, time::Duration};

const STDOUT: &str = "-";

#[derive(Debug, Parser)]
#[command(version, about = "Resolve the GPS coordinates of pharmacies")]
struct Args {
    /// Configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// CSV file with the columns `Name`, `Address`, `Postal Code`, `City` and `Type`.
    /// The built-in sample data is used if omitted.
    #[arg(short, long, value_name = "CSV_FILE")]
    input: Option<PathBuf>,

    /// Destination of the resolved table ('-' for stdout)
    #[arg(short, long, value_name = "CSV_FILE")]
    output: Option<PathBuf>,

    /// Write the positions that can be shown on a map into this file
    #[arg(long, value_name = "CSV_FILE")]
    map_output: Option<PathBuf>,

    /// Country that is appended to every address
    #[arg(long)]
    country: Option<String>,

    /// Minimum delay between two geocoding requests, e.g. "1s" or "500ms"
    #[arg(long, value_parser = parse_duration)]
    min_delay: Option<Duration>,
}

fn parse_duration(s: &str) -> Result<Duration, String> {
    duration_str::parse(s).map_err(|err| err.to_string())
}

fn load_table(input: Option<&PathBuf>) -> Result<Table> {
    let table = match input {
        Some(path) => {
            log::info!("Reading pharmacies from {}", path.display());
            let file = fs::File::open(path)?;
            csv::read_table(file)?
        }
        None => {
            log::info!("Using sample data with 5 entries.");
            sample::sample_table()
        }
    };
    Ok(table)
}

fn write_output(path: &PathBuf, data: &str) -> Result<()> {
    if path.as_os_str() == STDOUT {
        print!("{data}");
    } else {
        fs::write(path, data)?;
        log::info!("Wrote {}", path.display());
    }
    Ok(())
}

fn join<'a>(names: impl Iterator<Item = &'a str>) -> String {
    names.collect::<Vec<_>>().join(", ")
}

fn report_missing_columns(table: &Table, missing: &[Column]) {
    log::error!(
        "The input is missing required columns: {}",
        join(missing.iter().map(|c| c.as_str()))
    );
    log::error!(
        "Expected columns: {}",
        join(Column::ALL.iter().map(|c| c.as_str()))
    );
    log::error!(
        "Actual columns found: {}",
        join(table.columns().iter().map(String::as_str))
    );
}

fn report(resolution: &BatchResolution) {
    for diagnostic in &resolution.diagnostics {
        match diagnostic.severity() {
            Severity::Error => log::error!("{diagnostic}"),
            Severity::Warning => log::warn!("{diagnostic}"),
        }
    }
    let table = &resolution.table;
    log::info!(
        "{} of {} pharmacies have GPS coordinates",
        table.len() - table.count_unresolved(),
        table.len()
    );
    if table.map_points().next().is_none() {
        log::warn!("No valid GPS coordinates available for mapping.");
    }
}

fn locate_or_report<G>(locator: &PharmacyLocator<G>, table: &Table) -> Result<BatchResolution>
where
    G: GeoCodingGateway,
{
    match locator.locate(table) {
        Ok(resolution) => Ok(resolution),
        Err(AppError::Business(usecases::Error::MissingColumns(missing))) => {
            report_missing_columns(table, &missing);
            Err(anyhow!(
                "Unable to resolve the pharmacies: {}",
                usecases::Error::MissingColumns(missing)
            ))
        }
        Err(err) => Err(err.into()),
    }
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    let mut cfg = Config::try_load_from_file_or_default(args.config.as_ref())?;
    if let Some(country) = args.country {
        cfg.geocoding.country = country;
    }
    if let Some(min_delay) = args.min_delay {
        cfg.geocoding.min_delay = min_delay;
    }

    let gateway = gateways::geocoding_gateway(&cfg.geocoding)?;
    let geocoder = RateLimitedGeocoder::new(gateway, cfg.geocoding.min_delay);
    log::debug!(
        "Wait at least {} ms between geocoding requests",
        geocoder.min_delay().as_millis()
    );
    let locator = PharmacyLocator::new(
        geocoder,
        cfg.geocoding.country,
        BatchCache::new(cfg.cache.capacity),
    );

    let table = load_table(args.input.as_ref())?;
    if table.is_empty() {
        log::warn!("The input does not contain any pharmacies");
    }

    let resolution = locate_or_report(&locator, &table)?;
    report(&resolution);

    let output = args.output.unwrap_or(cfg.export.file_name);
    write_output(&output, &csv::resolved_table_to_csv(&resolution.table)?)?;

    if let Some(map_output) = args.map_output {
        write_output(&map_output, &csv::map_points_to_csv(&resolution.table)?)?;
    }
    Ok(())
}
