//! Configuration for the timezone resolver and the simulation loader
//!
//! Both structs carry defaults that match the simulation output format and the
//! usual resolver behaviour, with `with_*` constructors for overrides.

/// Names used to locate data inside a simulation output file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderConfig {
    /// Variable holding species concentrations
    pub species_variable: String,
    /// Variable holding reaction rates
    pub rates_variable: String,
    /// Variable attribute holding the delimited column names
    pub column_attribute: String,
    /// Column holding seconds since the Unix epoch
    pub time_column: String,
    pub delimiter: char,
}

impl LoaderConfig {
    /// Create a configuration with the standard simulation names
    pub fn new_default() -> Self {
        Self {
            species_variable: "Spec".to_string(),
            rates_variable: "Rate".to_string(),
            column_attribute: "head".to_string(),
            time_column: "TIME".to_string(),
            delimiter: ',',
        }
    }

    /// Override the species and rates variable names
    pub fn with_variables(mut self, species: &str, rates: &str) -> Self {
        self.species_variable = species.to_string();
        self.rates_variable = rates.to_string();
        self
    }

    /// Override the name of the time column
    pub fn with_time_column(mut self, time_column: &str) -> Self {
        self.time_column = time_column.to_string();
        self
    }

    /// Override the header attribute name and its delimiter
    pub fn with_header(mut self, attribute: &str, delimiter: char) -> Self {
        self.column_attribute = attribute.to_string();
        self.delimiter = delimiter;
        self
    }
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self::new_default()
    }
}

/// Behaviour of the coordinate to timezone lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolverConfig {
    /// Accept `Etc/GMT±N` ocean zones instead of reporting no timezone
    pub accept_ocean_zones: bool,
}

impl ResolverConfig {
    /// Only land timezones count as resolved
    pub fn new_default() -> Self {
        Self {
            accept_ocean_zones: false,
        }
    }

    /// Treat nautical ocean zones as valid results
    pub fn with_ocean_zones() -> Self {
        Self {
            accept_ocean_zones: true,
        }
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self::new_default()
    }
}
