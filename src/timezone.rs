//! UTC offset of a location from its latitude and longitude
//!
//! The coordinate is resolved to an IANA zone name through polygon lookup,
//! then the zone's offset is evaluated at a concrete instant. Because the
//! offset moves with daylight saving, results are only valid for the instant
//! they were computed at.
//!
//! ```rust,no_run
//! use atmo_toolkit::timezone::{offset_at, TimezoneResolver};
//! use chrono::Utc;
//!
//! let resolver = TimezoneResolver::global();
//! let seconds = offset_at(resolver, 39.74, -104.99, Utc::now()).unwrap();
//! println!("Denver is {} seconds from UTC", seconds);
//! ```

use crate::config::ResolverConfig;
use crate::errors::{AtmoError, Result};
use chrono::{DateTime, Offset, TimeZone, Utc};
use chrono_tz::Tz;
use std::sync::OnceLock;
use tracing::debug;
use tzf_rs::DefaultFinder;

static GLOBAL_RESOLVER: OnceLock<TimezoneResolver> = OnceLock::new();

/// Maps a coordinate to an IANA timezone name
pub trait TimezoneLookup {
    /// Returns `None` when no timezone covers the coordinate.
    fn timezone_name(&self, latitude: f64, longitude: f64) -> Option<String>;
}

/// Polygon-based resolver over the bundled timezone boundary data
pub struct TimezoneResolver {
    finder: DefaultFinder,
    config: ResolverConfig,
}

impl TimezoneResolver {
    /// Build a resolver. Loading the polygon index takes a noticeable moment,
    /// so construct it once and reuse it.
    pub fn new(config: ResolverConfig) -> Self {
        Self {
            finder: DefaultFinder::new(),
            config,
        }
    }

    /// Process-wide resolver with default configuration, built on first use.
    pub fn global() -> &'static TimezoneResolver {
        GLOBAL_RESOLVER.get_or_init(|| TimezoneResolver::new(ResolverConfig::default()))
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }
}

impl Default for TimezoneResolver {
    fn default() -> Self {
        Self::new(ResolverConfig::default())
    }
}

impl TimezoneLookup for TimezoneResolver {
    fn timezone_name(&self, latitude: f64, longitude: f64) -> Option<String> {
        let name = self.finder.get_tz_name(longitude, latitude);
        debug!(latitude, longitude, zone = name, "timezone lookup");

        accept_zone(name, &self.config)
    }
}

/// Keeps a looked-up zone name unless it is empty or an ocean zone the config rejects.
fn accept_zone(name: &str, config: &ResolverConfig) -> Option<String> {
    if name.is_empty() {
        return None;
    }
    if is_ocean_zone(name) && !config.accept_ocean_zones {
        return None;
    }
    Some(name.to_string())
}

/// Nautical zones (`Etc/GMT+9` and friends) cover open water, not land.
fn is_ocean_zone(name: &str) -> bool {
    name.starts_with("Etc/")
}

/// Resolves the timezone covering a coordinate.
pub fn resolve_timezone<L>(lookup: &L, latitude: f64, longitude: f64) -> Result<Tz>
where
    L: TimezoneLookup + ?Sized,
{
    if !latitude.is_finite() || !longitude.is_finite() {
        return Err(AtmoError::InvalidCoordinate {
            latitude,
            longitude,
        });
    }

    let name = lookup
        .timezone_name(latitude, longitude)
        .ok_or(AtmoError::UnresolvableTimezone {
            latitude,
            longitude,
        })?;

    name.parse::<Tz>()
        .map_err(|_| AtmoError::UnknownTimezone { name })
}

/// Offset of `tz` from UTC at `instant`, in seconds, positive east of Greenwich.
pub fn utc_offset_seconds(tz: Tz, instant: DateTime<Utc>) -> f64 {
    let local = tz.offset_from_utc_datetime(&instant.naive_utc());
    f64::from(local.fix().local_minus_utc())
}

/// Offset in seconds between local civil time at the coordinate and UTC, at `instant`.
pub fn offset_at<L>(lookup: &L, latitude: f64, longitude: f64, instant: DateTime<Utc>) -> Result<f64>
where
    L: TimezoneLookup + ?Sized,
{
    let tz = resolve_timezone(lookup, latitude, longitude)?;
    Ok(utc_offset_seconds(tz, instant))
}

/// Offset in seconds for the coordinate right now, using the process-wide resolver.
pub fn offset(latitude: f64, longitude: f64) -> Result<f64> {
    offset_at(TimezoneResolver::global(), latitude, longitude, Utc::now())
}
