use log::{debug, info};

use crate::backend::WifiBackend;
use crate::config::ScannerConfig;
use crate::error::{Result, ScanError};
use crate::models::{NetworkDescriptor, ScanReport};

/// Runs one scan cycle against a [`WifiBackend`] and turns the records into
/// descriptors.
pub struct NetworkDetailsRetriever<B> {
    backend: B,
    config: ScannerConfig,
}

impl<B: WifiBackend> NetworkDetailsRetriever<B> {
    pub fn new(backend: B) -> Self {
        Self::with_config(backend, ScannerConfig::default())
    }

    pub fn with_config(backend: B, config: ScannerConfig) -> Self {
        Self { backend, config }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn is_wifi_enabled(&self) -> Result<bool> {
        self.backend.is_wifi_enabled()
    }

    /// Scan and return the visible networks.
    ///
    /// Fails with [`ScanError::WifiDisabled`] before touching the radio when
    /// WiFi is off, with [`ScanError::ScanFailure`] when the scan request is
    /// rejected, and with [`ScanError::InsufficientNetworkDetails`] when no
    /// record carries both an SSID and a BSSID.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn retrieve(&self) -> Result<ScanReport> {
        if !self.backend.is_wifi_enabled()? {
            return Err(ScanError::WifiDisabled);
        }

        if !self.backend.start_scan()? {
            return Err(ScanError::ScanFailure("Scan initiation failed".to_string()));
        }

        let records = self.backend.scan_results()?;
        let total = records.len();

        let mut networks: Vec<NetworkDescriptor> = records
            .iter()
            .filter(|record| {
                let keep = record.has_identity();
                if !keep {
                    debug!("Dropping scan record without SSID/BSSID: {:?}", record);
                }
                keep
            })
            .map(NetworkDescriptor::from_raw)
            .collect();

        if networks.is_empty() {
            return Err(ScanError::InsufficientNetworkDetails);
        }

        if let Some(connected) = self.backend.connected_bssid()? {
            networks = networks
                .into_iter()
                .map(|n| {
                    let is_connected = n.bssid.eq_ignore_ascii_case(&connected);
                    n.connected(is_connected)
                })
                .collect();
        }

        if let Some(min) = self.config.min_signal_dbm {
            networks.retain(|n| n.signal_strength >= min);
        }

        if self.config.sort_by_signal {
            networks.sort_by(|a, b| b.signal_strength.cmp(&a.signal_strength));
        }

        info!("WiFi scan found {} networks ({} raw records)", networks.len(), total);

        Ok(ScanReport::new(networks))
    }
}
