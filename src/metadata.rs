//! Dataset-level metadata for simulation output files
//!
//! A simulation file carries a creation date and a free-text description at
//! the root, plus one sub-group per simulation run. Each run records how long
//! it took to compute in its `WALL_time` attribute.

use crate::errors::{AtmoError, Result};
use netcdf::{Attribute, AttributeValue, File, Group};
use std::path::Path;
use tracing::{debug, info, warn};

/// Root attribute holding the creation timestamp
pub const DATE_ATTRIBUTE: &str = "date";
/// Root attribute holding the run description
pub const DESCRIPTION_ATTRIBUTE: &str = "description";
/// Group attribute holding the compute duration in seconds
pub const WALL_TIME_ATTRIBUTE: &str = "WALL_time";

/// Observability metadata collected while reading a simulation file
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetInfo {
    pub date: Option<String>,
    pub description: Option<String>,
    /// Group names in native enumeration order
    pub groups: Vec<String>,
    pub selected_group: String,
    /// Compute duration of the selected run, in seconds
    pub wall_time: Option<f64>,
}

impl DatasetInfo {
    /// Log the collected metadata
    pub fn log(&self) {
        info!(
            date = self.date.as_deref().unwrap_or("<unknown>"),
            description = self.description.as_deref().unwrap_or("<none>"),
            "simulation dataset"
        );
        for (i, name) in self.groups.iter().enumerate() {
            debug!(index = i, group = %name, "available group");
        }
        match self.wall_time {
            Some(seconds) => info!(
                group = %self.selected_group,
                wall_time = seconds,
                "group {} selected, took {} seconds to compute",
                self.selected_group,
                seconds
            ),
            None => warn!(group = %self.selected_group, "selected group has no {}", WALL_TIME_ATTRIBUTE),
        }
    }
}

/// Lists group names in the order the file enumerates them.
pub fn list_groups(file: &File) -> Result<Vec<String>> {
    Ok(file.groups()?.map(|g| g.name()).collect())
}

/// Returns the run a reader works on: the first group in native enumeration order.
pub fn select_first_group<'f>(file: &'f File, path: &Path) -> Result<Group<'f>> {
    file.groups()?.next().ok_or_else(|| AtmoError::NoGroups {
        path: path.to_path_buf(),
    })
}

/// Reads root metadata and the selected group's compute time.
pub fn read_dataset_info(file: &File, group: &Group<'_>) -> Result<DatasetInfo> {
    let date = file.attribute(DATE_ATTRIBUTE).and_then(|a| attribute_as_string(&a));
    let description = file
        .attribute(DESCRIPTION_ATTRIBUTE)
        .and_then(|a| attribute_as_string(&a));
    let wall_time = group
        .attribute(WALL_TIME_ATTRIBUTE)
        .and_then(|a| attribute_as_f64(&a));

    Ok(DatasetInfo {
        date,
        description,
        groups: list_groups(file)?,
        selected_group: group.name(),
        wall_time,
    })
}

/// Text content of an attribute, if it holds a single string.
pub fn attribute_as_string(attr: &Attribute<'_>) -> Option<String> {
    match attr.value().ok()? {
        AttributeValue::Str(s) => Some(s),
        AttributeValue::Strs(mut v) if v.len() == 1 => v.pop(),
        _ => None,
    }
}

/// Numeric content of a scalar attribute, widened to f64.
pub fn attribute_as_f64(attr: &Attribute<'_>) -> Option<f64> {
    match attr.value().ok()? {
        AttributeValue::Double(v) => Some(v),
        AttributeValue::Float(v) => Some(f64::from(v)),
        AttributeValue::Int(v) => Some(f64::from(v)),
        AttributeValue::Uint(v) => Some(f64::from(v)),
        AttributeValue::Short(v) => Some(f64::from(v)),
        AttributeValue::Ushort(v) => Some(f64::from(v)),
        AttributeValue::Longlong(v) => Some(v as f64),
        AttributeValue::Ulonglong(v) => Some(v as f64),
        AttributeValue::Doubles(v) if v.len() == 1 => Some(v[0]),
        AttributeValue::Floats(v) if v.len() == 1 => Some(f64::from(v[0])),
        _ => None,
    }
}
