//! Loading atmospheric chemistry simulation output
//!
//! A simulation file holds one NetCDF group per run. The loader always works
//! on the first group in the file's native enumeration order and reads two
//! variables from it, species concentrations and reaction rates, each with a
//! comma-separated `head` attribute naming its columns.
//!
//! # Organization
//!
//! - [`reader`]: scoped file access and raw array extraction ([`inspect`])
//! - [`table`]: the time-indexed [`TimeTable`]
//! - [`operations`]: first-step time correction and epoch conversion
//!
//! [`load`] combines them: it corrects the first species timestamp, builds
//! one time index from it and applies that index to both tables.

pub mod operations;
pub mod reader;
pub mod table;

pub use reader::{inspect, inspect_with, Extraction};
pub use table::TimeTable;

use crate::config::LoaderConfig;
use crate::errors::{AtmoError, Result};
use std::path::Path;

/// Loads the first run of `path` as (species, rates) tables with the standard names.
pub fn load<P: AsRef<Path>>(path: P) -> Result<(TimeTable, TimeTable)> {
    load_with(path, &LoaderConfig::default())
}

/// Loads the first run of `path` as (species, rates) tables.
///
/// The first row of each TIME column is rebuilt as `2 * t[1] - t[2]`. The
/// species times then become the index of both tables and are written back
/// into both TIME columns, so the rates table shares the species clock.
///
/// # Errors
///
/// Everything [`inspect_with`] reports, plus `MissingColumn` when a header has
/// no time column, `ColumnMismatch`, `InsufficientRows`, `RowCountMismatch`
/// and `InvalidTimestamp`.
pub fn load_with<P: AsRef<Path>>(path: P, config: &LoaderConfig) -> Result<(TimeTable, TimeTable)> {
    let Extraction {
        mut species,
        mut rates,
        species_columns,
        rates_columns,
        ..
    } = inspect_with(path, config)?;

    table::check_columns(&config.species_variable, &species_columns, &species)?;
    table::check_columns(&config.rates_variable, &rates_columns, &rates)?;

    let species_time = time_column(&species_columns, &config.species_variable, &config.time_column)?;
    let rates_time = time_column(&rates_columns, &config.rates_variable, &config.time_column)?;

    operations::correct_first_time(&config.species_variable, species.column_mut(species_time))?;
    operations::correct_first_time(&config.rates_variable, rates.column_mut(rates_time))?;

    if species.nrows() != rates.nrows() {
        return Err(AtmoError::RowCountMismatch {
            species: species.nrows(),
            rates: rates.nrows(),
        });
    }

    let corrected = species.column(species_time).to_owned();
    let index = operations::time_index(corrected.view())?;
    rates.column_mut(rates_time).assign(&corrected);

    let species = TimeTable::new(&config.species_variable, species_columns, index.clone(), species)?;
    let rates = TimeTable::new(&config.rates_variable, rates_columns, index, rates)?;
    Ok((species, rates))
}

fn time_column(columns: &[String], var: &str, name: &str) -> Result<usize> {
    columns
        .iter()
        .position(|c| c == name)
        .ok_or_else(|| AtmoError::MissingColumn {
            var: var.to_string(),
            column: name.to_string(),
        })
}
