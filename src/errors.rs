//! Centralized error handling for atmo_toolkit
//!
//! Every failure surfaces to the caller as a distinct variant so that bad
//! coordinates, malformed simulation files and I/O failures can be told apart.

use std::fmt;
use std::path::PathBuf;

/// Main error type for atmo_toolkit operations
#[derive(Debug)]
pub enum AtmoError {
    /// Geographic lookup found no timezone for the coordinates
    UnresolvableTimezone { latitude: f64, longitude: f64 },

    /// Lookup produced a zone name the timezone database does not know
    UnknownTimezone { name: String },

    /// Latitude or longitude is NaN or infinite
    InvalidCoordinate { latitude: f64, longitude: f64 },

    /// The input file could not be opened
    FileOpen { path: PathBuf, source: netcdf::Error },

    /// NetCDF read errors after the file is open
    NetCDFError(netcdf::Error),

    /// I/O operation errors
    IoError(std::io::Error),

    /// The file contains no sub-groups to select from
    NoGroups { path: PathBuf },

    /// Expected variable absent from the selected group
    MissingVariable { group: String, var: String },

    /// Expected attribute absent or not a string
    MissingAttribute { var: String, attr: String },

    /// Expected column absent from a variable's column header
    MissingColumn { var: String, column: String },

    /// Column header length differs from the array width
    ColumnMismatch {
        var: String,
        columns: usize,
        width: usize,
    },

    /// Too few rows to extrapolate the first timestamp
    InsufficientRows { var: String, rows: usize },

    /// Species and rates tables cannot share one time index
    RowCountMismatch { species: usize, rates: usize },

    /// Time index length differs from the table's row count
    IndexLengthMismatch {
        var: String,
        index: usize,
        rows: usize,
    },

    /// Variable rank cannot be viewed as a table
    InvalidShape { var: String, shape: Vec<usize> },

    /// Seconds value that cannot become a calendar timestamp
    InvalidTimestamp { row: usize, value: f64 },

    /// Array shape or dimension error
    ArrayError(ndarray::ShapeError),
}

impl fmt::Display for AtmoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AtmoError::UnresolvableTimezone {
                latitude,
                longitude,
            } => write!(
                f,
                "No timezone could be resolved for latitude {}, longitude {}",
                latitude, longitude
            ),
            AtmoError::UnknownTimezone { name } => {
                write!(f, "Timezone '{}' is not in the timezone database", name)
            }
            AtmoError::InvalidCoordinate {
                latitude,
                longitude,
            } => write!(
                f,
                "Invalid coordinate: latitude {}, longitude {}",
                latitude, longitude
            ),
            AtmoError::FileOpen { path, source } => {
                write!(f, "Failed to open '{}': {}", path.display(), source)
            }
            AtmoError::NetCDFError(e) => write!(f, "NetCDF error: {}", e),
            AtmoError::IoError(e) => write!(f, "I/O error: {}", e),
            AtmoError::NoGroups { path } => {
                write!(f, "No simulation groups found in '{}'", path.display())
            }
            AtmoError::MissingVariable { group, var } => {
                write!(f, "Variable '{}' not found in group '{}'", var, group)
            }
            AtmoError::MissingAttribute { var, attr } => {
                write!(f, "Attribute '{}' not found on variable '{}'", attr, var)
            }
            AtmoError::MissingColumn { var, column } => {
                write!(f, "Column '{}' not found in variable '{}'", column, var)
            }
            AtmoError::ColumnMismatch {
                var,
                columns,
                width,
            } => write!(
                f,
                "Variable '{}' names {} columns but has {} values per row",
                var, columns, width
            ),
            AtmoError::InsufficientRows { var, rows } => write!(
                f,
                "Variable '{}' has {} rows, at least 3 are needed to correct the first time step",
                var, rows
            ),
            AtmoError::RowCountMismatch { species, rates } => write!(
                f,
                "Species has {} rows but rates has {}; they cannot share a time index",
                species, rates
            ),
            AtmoError::IndexLengthMismatch { var, index, rows } => write!(
                f,
                "Time index for '{}' has {} entries but the table has {} rows",
                var, index, rows
            ),
            AtmoError::InvalidShape { var, shape } => {
                write!(f, "Variable '{}' has unsupported shape {:?}", var, shape)
            }
            AtmoError::InvalidTimestamp { row, value } => {
                write!(f, "Row {} holds invalid time value {}", row, value)
            }
            AtmoError::ArrayError(e) => write!(f, "Array error: {}", e),
        }
    }
}

impl std::error::Error for AtmoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AtmoError::FileOpen { source, .. } => Some(source),
            AtmoError::NetCDFError(e) => Some(e),
            AtmoError::IoError(e) => Some(e),
            AtmoError::ArrayError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<netcdf::Error> for AtmoError {
    fn from(error: netcdf::Error) -> Self {
        AtmoError::NetCDFError(error)
    }
}

impl From<std::io::Error> for AtmoError {
    fn from(error: std::io::Error) -> Self {
        AtmoError::IoError(error)
    }
}

impl From<ndarray::ShapeError> for AtmoError {
    fn from(error: ndarray::ShapeError) -> Self {
        AtmoError::ArrayError(error)
    }
}

/// Result type alias for atmo_toolkit operations
pub type Result<T> = std::result::Result<T, AtmoError>;
