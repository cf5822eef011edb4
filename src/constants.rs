//! Application constants for the space weather index reader
//!
//! Provider URLs, cache file names, staleness thresholds and column names
//! used throughout the crate.

// =============================================================================
// Provider URLs and File Names
// =============================================================================

/// Celestrak combined (historic) space weather file, legacy SW format
pub const CELESTRAK_URL_ALL: &str = "https://celestrak.com/SpaceData/SW-All.txt";

/// Celestrak last-five-years space weather file, legacy SW format
pub const CELESTRAK_URL_5Y: &str = "https://celestrak.com/SpaceData/SW-Last5Years.txt";

/// GFZ Kp/ap/Ap/SN/F10.7 series since 1932
pub const GFZ_URL_ALL: &str = "https://kp.gfz-potsdam.de/app/files/Kp_ap_Ap_SN_F107_since_1932.txt";

/// GFZ Kp/ap/Ap/SN/F10.7 nowcast (last 30 days)
pub const GFZ_URL_30D: &str = "https://kp.gfz-potsdam.de/app/files/Kp_ap_Ap_SN_F107_nowcast.txt";

/// GFZ Kp/ap series in WDC format since 1932
pub const WDC_URL_ALL: &str = "https://kp.gfz-potsdam.de/app/files/Kp_ap_since_1932.wdc";

/// GFZ Kp/ap nowcast in WDC format
pub const WDC_URL_30D: &str = "https://kp.gfz-potsdam.de/app/files/Kp_ap_nowcast.wdc";

/// GFZ Hp30/ap30 complete series
pub const HP30_URL_ALL: &str = "https://kp.gfz-potsdam.de/app/files/Hp30_ap30_complete_series.txt";

/// GFZ Hp30/ap30 nowcast
pub const HP30_URL_30D: &str = "https://kp.gfz-potsdam.de/app/files/Hp30_ap30_nowcast.txt";

/// GFZ Hp60/ap60 complete series
pub const HP60_URL_ALL: &str = "https://kp.gfz-potsdam.de/app/files/Hp60_ap60_complete_series.txt";

/// GFZ Hp60/ap60 nowcast
pub const HP60_URL_30D: &str = "https://kp.gfz-potsdam.de/app/files/Hp60_ap60_nowcast.txt";

/// Directory holding the yearly OMNI2 extended files
pub const OMNI_URL_BASE: &str = "https://spdf.gsfc.nasa.gov/pub/data/omni/low_res_omni/extended";

/// OMNI2 file name prefix, files are named `<prefix>_<year>.<ext>`
pub const OMNI_PREFIX: &str = "omni2";

/// OMNI2 file name extension
pub const OMNI_EXT: &str = "dat";

/// Sub-directory of the data directory for OMNI2 yearly files
pub const OMNI_SUBDIR: &str = "omni_extended";

/// Name of the application data directory below the user data directory
pub const DATA_DIR_NAME: &str = "spaceweather";

// =============================================================================
// Staleness Thresholds
// =============================================================================

/// Refresh thresholds, in seconds
///
/// The Celestrak history file is only refreshed every four years (4 * 365
/// days) so that it keeps overlapping the five-year file.
pub mod staleness {
    pub const HOUR: u64 = 3600;
    pub const DAY: u64 = 24 * HOUR;

    pub const CELESTRAK_HISTORY_MAX_AGE: u64 = 1460 * DAY;
    pub const CELESTRAK_UPDATE_MIN_AGE: u64 = 3 * HOUR;
    pub const CELESTRAK_UPDATE_INTERVAL: u64 = 30 * DAY;

    pub const GFZ_HISTORY_MAX_AGE: u64 = 30 * DAY;
    pub const GFZ_UPDATE_MIN_AGE: u64 = DAY;
    pub const GFZ_UPDATE_INTERVAL: u64 = 10 * DAY;
}

// =============================================================================
// File Markers
// =============================================================================

/// Trailer line prefix carrying the Celestrak update time
pub const UPDATED_MARKER: &str = "UPDATED";

/// Comment prefix used by the GFZ files
pub const COMMENT_MARKER: char = '#';

/// Year value marking a placeholder row
pub const NO_DATA_YEAR: i32 = -1;

/// WDC two-digit years below this value belong to the 2000s
pub const WDC_CENTURY_PIVOT: i32 = 32;

// =============================================================================
// Column Names
// =============================================================================

/// Column names shared by the output tables
pub mod columns {
    /// Timestamp column of every table
    pub const TIME: &str = "time";

    pub const YEAR: &str = "year";
    pub const MONTH: &str = "month";
    pub const DAY: &str = "day";
    pub const DOY: &str = "doy";
    pub const HOUR: &str = "hour";
    pub const HH_H: &str = "hh_h";

    pub const KP_SUM: &str = "Kpsum";
    pub const AP: &str = "Ap";
    pub const KP: &str = "Kp";

    /// 3-hourly Kp columns, ordered by offset hour
    pub const KP_3H: [&str; 8] = ["Kp0", "Kp3", "Kp6", "Kp9", "Kp12", "Kp15", "Kp18", "Kp21"];

    /// 3-hourly Ap columns, ordered by offset hour
    pub const AP_3H: [&str; 8] = ["Ap0", "Ap3", "Ap6", "Ap9", "Ap12", "Ap15", "Ap18", "Ap21"];
}

/// Timestamp conversion factor (nanoseconds per second for datetime64[ns] compatibility)
pub const TIMESTAMP_NANOS_PER_SECOND: i64 = 1_000_000_000;

/// Nanoseconds in one hour
pub const NANOS_PER_HOUR: i64 = 3600 * TIMESTAMP_NANOS_PER_SECOND;
