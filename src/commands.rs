use tauri::State;

use crate::classifier;
use crate::error::{Result, ScanError};
use crate::models::ScanReport;
use crate::WifiScannerState;

/// Scan and list nearby WiFi networks
#[tauri::command]
pub async fn list_wifi_networks(state: State<'_, WifiScannerState>) -> Result<ScanReport> {
    let retriever = state.retriever.clone();

    tokio::task::spawn_blocking(move || {
        let guard = retriever.read().map_err(|_| ScanError::LockError)?;
        guard.as_ref().ok_or(ScanError::NotInitialized)?.retrieve()
    })
    .await?
}

/// Whether the WiFi radio is switched on
#[tauri::command]
pub fn get_wifi_status(state: State<'_, WifiScannerState>) -> Result<bool> {
    state.inner().is_wifi_enabled()
}

/// Label for a signal level in dBm
#[tauri::command]
pub fn describe_signal_strength(dbm: i32) -> String {
    classifier::describe_signal_strength(dbm).to_string()
}
