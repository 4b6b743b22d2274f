use crate::error::Result;
use crate::models::RawScanRecord;

/// Platform WiFi facility the retriever drives.
///
/// The NetworkManager implementation lives in `desktop`; tests use in-memory
/// doubles.
pub trait WifiBackend: Send + Sync {
    fn is_wifi_enabled(&self) -> Result<bool>;

    /// Ask the radio for a fresh scan. `Ok(false)` means the request was
    /// rejected, e.g. because the platform throttles scans.
    fn start_scan(&self) -> Result<bool>;

    /// Access points from the most recent scan.
    fn scan_results(&self) -> Result<Vec<RawScanRecord>>;

    /// BSSID of the access point the device is associated with, if any.
    fn connected_bssid(&self) -> Result<Option<String>>;
}

impl<B: WifiBackend + ?Sized> WifiBackend for Box<B> {
    fn is_wifi_enabled(&self) -> Result<bool> {
        (**self).is_wifi_enabled()
    }

    fn start_scan(&self) -> Result<bool> {
        (**self).start_scan()
    }

    fn scan_results(&self) -> Result<Vec<RawScanRecord>> {
        (**self).scan_results()
    }

    fn connected_bssid(&self) -> Result<Option<String>> {
        (**self).connected_bssid()
    }
}
