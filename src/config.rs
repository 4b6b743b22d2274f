use serde::Deserialize;

const DEFAULT_SCAN_SETTLE_MS: u64 = 1500;

/// Plugin configuration, read from `plugins.wifi-scanner` in the host config.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ScannerConfig {
    /// Only scan on this wireless interface (e.g. `wlan0`).
    pub interface: Option<String>,
    /// How long to wait after an accepted scan request before reading results.
    pub scan_settle_ms: u64,
    /// Networks weaker than this many dBm are left out of the report.
    pub min_signal_dbm: Option<i32>,
    pub sort_by_signal: bool,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            interface: None,
            scan_settle_ms: DEFAULT_SCAN_SETTLE_MS,
            min_signal_dbm: None,
            sort_by_signal: true,
        }
    }
}
