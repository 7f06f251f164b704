//! atmo_toolkit: timezone offsets and simulation output loading
//!
//! Two independent utilities used around atmospheric chemistry box-model runs:
//!
//! - **Timezone offsets**: the signed UTC offset, in seconds, of any land
//!   coordinate at a given instant, resolved through IANA timezone polygons.
//! - **Simulation loading**: species concentrations and reaction rates read
//!   from the first run of a NetCDF-4 output file, either as raw arrays or as
//!   time-indexed tables.
//!
//! ## Module Organization
//!
//! - [`timezone`]: coordinate to timezone resolution and offset calculation
//! - [`simulation`]: `inspect` and `load` for simulation output files
//! - [`metadata`]: dataset description, run listing and compute time
//! - [`config`]: loader and resolver configuration
//! - [`errors`]: Centralized error handling
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use atmo_toolkit::prelude::*;
//!
//! // Seconds between local time in Denver and UTC, right now
//! let seconds = atmo_toolkit::timezone::offset(39.74, -104.99).unwrap();
//!
//! // Species and rates of the first run, indexed by time
//! let (species, rates) = atmo_toolkit::simulation::load("run.nc").unwrap();
//! let ozone = species.column("O3").unwrap();
//! ```
//!
//! Nothing is cached between calls: every call opens, reads and closes its
//! own file, and offsets are only valid for the instant they were computed at.

pub mod config;
pub mod errors;
pub mod metadata;
pub mod simulation;
pub mod timezone;

pub use errors::*;
pub use simulation::{inspect, inspect_with, load, load_with, Extraction, TimeTable};
pub use timezone::{offset, offset_at};

// High-level convenience API
pub mod prelude {
    //! Commonly used imports for convenience
    pub use crate::config::{LoaderConfig, ResolverConfig};
    pub use crate::errors::{AtmoError, Result};
    pub use crate::metadata::DatasetInfo;
    pub use crate::simulation::{Extraction, TimeTable};
    pub use crate::timezone::{TimezoneLookup, TimezoneResolver};
}
