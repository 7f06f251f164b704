//! Raw extraction of species and rate arrays from simulation output
//!
//! The file is opened read-only and owned by the reading function, so the
//! handle is released when that function returns, on success and on every
//! error path. Everything handed back is copied out of the file.

use crate::config::LoaderConfig;
use crate::errors::{AtmoError, Result};
use crate::metadata::{attribute_as_string, read_dataset_info, select_first_group, DatasetInfo};
use ndarray::Array2;
use netcdf::{File, Group};
use std::path::Path;
use tracing::debug;

/// Arrays and column names read from the first run of a simulation file
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    pub info: DatasetInfo,
    /// Species concentrations, one row per time step
    pub species: Array2<f64>,
    /// Reaction rates, one row per time step
    pub rates: Array2<f64>,
    pub species_columns: Vec<String>,
    pub rates_columns: Vec<String>,
}

/// Reads species and rates from the first group of `path` with the standard names.
pub fn inspect<P: AsRef<Path>>(path: P) -> Result<Extraction> {
    inspect_with(path, &LoaderConfig::default())
}

/// Reads species and rates from the first group of `path`.
///
/// # Errors
///
/// `FileOpen` if the file cannot be opened, `NoGroups` if it has no runs,
/// `MissingVariable`/`MissingAttribute` if a table or its header is absent.
pub fn inspect_with<P: AsRef<Path>>(path: P, config: &LoaderConfig) -> Result<Extraction> {
    let path = path.as_ref();
    let file = open_dataset(path)?;
    let extraction = extract(&file, path, config)?;
    drop(file);
    Ok(extraction)
}

/// Opens a simulation file read-only.
pub fn open_dataset(path: &Path) -> Result<File> {
    netcdf::open(path).map_err(|source| AtmoError::FileOpen {
        path: path.to_path_buf(),
        source,
    })
}

fn extract(file: &File, path: &Path, config: &LoaderConfig) -> Result<Extraction> {
    let group = select_first_group(file, path)?;
    let info = read_dataset_info(file, &group)?;
    info.log();

    let (species, species_columns) = read_table_variable(&group, &config.species_variable, config)?;
    let (rates, rates_columns) = read_table_variable(&group, &config.rates_variable, config)?;

    Ok(Extraction {
        info,
        species,
        rates,
        species_columns,
        rates_columns,
    })
}

/// Reads one variable as a (rows, columns) array with its split header.
pub fn read_table_variable(
    group: &Group<'_>,
    var_name: &str,
    config: &LoaderConfig,
) -> Result<(Array2<f64>, Vec<String>)> {
    let var = group
        .variable(var_name)
        .ok_or_else(|| AtmoError::MissingVariable {
            group: group.name(),
            var: var_name.to_string(),
        })?;

    let header = var
        .attribute(&config.column_attribute)
        .and_then(|a| attribute_as_string(&a))
        .ok_or_else(|| AtmoError::MissingAttribute {
            var: var_name.to_string(),
            attr: config.column_attribute.clone(),
        })?;
    let columns = split_columns(&header, config.delimiter);

    let shape: Vec<usize> = var
        .dimensions()
        .iter()
        .map(netcdf::Dimension::len)
        .collect();
    let values = var.get_values::<f64, _>(..)?;
    debug!(var = var_name, ?shape, columns = columns.len(), "read variable");

    let data = match shape.as_slice() {
        [rows, cols] => Array2::from_shape_vec((*rows, *cols), values)?,
        [rows] => Array2::from_shape_vec((*rows, 1), values)?,
        _ => {
            return Err(AtmoError::InvalidShape {
                var: var_name.to_string(),
                shape,
            })
        }
    };

    Ok((data, columns))
}

/// Splits a column header on `delimiter`, keeping names verbatim.
pub fn split_columns(header: &str, delimiter: char) -> Vec<String> {
    header.split(delimiter).map(str::to_string).collect()
}
