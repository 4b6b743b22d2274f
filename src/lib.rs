//! Tauri plugin that lists nearby WiFi networks and labels their security
//! and signal quality.
//!
//! On desktop the scan data comes from NetworkManager over the system bus.
//! The classification helpers in [`classifier`] are pure and usable on their
//! own.

use std::sync::{Arc, RwLock};

use commands::{describe_signal_strength, get_wifi_status, list_wifi_networks};
use log::error;
use tauri::{
    plugin::{Builder, TauriPlugin},
    Manager, Runtime,
};

#[cfg(desktop)]
mod desktop;
#[cfg(desktop)]
mod nm_constants;
#[cfg(desktop)]
mod proxy_traits;

mod backend;
mod capabilities;
pub mod classifier;
mod commands;
mod config;
mod error;
mod models;
mod retriever;

pub use crate::backend::WifiBackend;
pub use crate::capabilities::render_capabilities;
pub use crate::classifier::classify_security;
pub use crate::config::ScannerConfig;
#[cfg(desktop)]
pub use crate::desktop::{strength_to_dbm, NmWifiBackend};
pub use crate::error::{Result as ScanResult, ScanError};
pub use crate::models::{
    frequency_to_channel, Band, NetworkDescriptor, RawScanRecord, ScanReport, SecurityCategory,
    SignalQuality, UNKNOWN_FIELD,
};
pub use crate::retriever::NetworkDetailsRetriever;

type SharedRetriever = NetworkDetailsRetriever<Box<dyn WifiBackend>>;

#[derive(Default)]
pub struct WifiScannerState {
    retriever: Arc<RwLock<Option<SharedRetriever>>>,
}

impl WifiScannerState {
    pub fn new<B: WifiBackend + 'static>(backend: B, config: ScannerConfig) -> Self {
        let backend: Box<dyn WifiBackend> = Box::new(backend);
        let retriever = NetworkDetailsRetriever::with_config(backend, config);
        Self {
            retriever: Arc::new(RwLock::new(Some(retriever))),
        }
    }

    /// Run one blocking scan cycle.
    pub fn scan(&self) -> ScanResult<ScanReport> {
        let guard = self.retriever.read().map_err(|_| ScanError::LockError)?;
        guard.as_ref().ok_or(ScanError::NotInitialized)?.retrieve()
    }

    pub fn is_wifi_enabled(&self) -> ScanResult<bool> {
        let guard = self.retriever.read().map_err(|_| ScanError::LockError)?;
        guard.as_ref().ok_or(ScanError::NotInitialized)?.is_wifi_enabled()
    }
}

/// Initializes the plugin.
pub fn init<R: Runtime>() -> TauriPlugin<R, Option<ScannerConfig>> {
    Builder::<R, Option<ScannerConfig>>::new("wifi-scanner")
        .setup(|app, api| -> std::result::Result<(), Box<dyn std::error::Error>> {
            let config = api.config().clone().unwrap_or_default();

            #[cfg(desktop)]
            {
                match NmWifiBackend::new(config.clone()) {
                    Ok(backend) => {
                        app.manage(WifiScannerState::new(backend, config));
                        return Ok(());
                    }
                    Err(e) => error!("Failed to connect to NetworkManager: {}", e),
                }
            }

            #[cfg(not(desktop))]
            {
                let _ = config;
                error!("No WiFi scan backend available on this platform");
            }

            app.manage(WifiScannerState::default());
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            list_wifi_networks,
            get_wifi_status,
            describe_signal_strength,
        ])
        .build()
}

/// Extensions to [`tauri::App`], [`tauri::AppHandle`] and [`tauri::Window`] to access the
/// WiFi scanner.
pub trait WifiScannerExt<R: Runtime> {
    fn wifi_scanner(&self) -> &WifiScannerState;
}

impl<R: Runtime, T: Manager<R>> WifiScannerExt<R> for T {
    fn wifi_scanner(&self) -> &WifiScannerState {
        self.state::<WifiScannerState>().inner()
    }
}
