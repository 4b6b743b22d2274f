use std::sync::Mutex;

use tauri_plugin_wifi_scanner::{
    classify_security, render_capabilities, NetworkDetailsRetriever, RawScanRecord, ScanError,
    ScannerConfig, SecurityCategory, WifiBackend, WifiScannerState,
};

/// Backend that replays a sequence of scans, one per cycle.
struct ReplayBackend {
    scans: Mutex<Vec<Vec<RawScanRecord>>>,
    connected: Option<String>,
}

impl ReplayBackend {
    fn new(mut scans: Vec<Vec<RawScanRecord>>) -> Self {
        scans.reverse();
        Self {
            scans: Mutex::new(scans),
            connected: None,
        }
    }
}

impl WifiBackend for ReplayBackend {
    fn is_wifi_enabled(&self) -> tauri_plugin_wifi_scanner::ScanResult<bool> {
        Ok(true)
    }

    fn start_scan(&self) -> tauri_plugin_wifi_scanner::ScanResult<bool> {
        Ok(!self.scans.lock().unwrap().is_empty())
    }

    fn scan_results(&self) -> tauri_plugin_wifi_scanner::ScanResult<Vec<RawScanRecord>> {
        Ok(self.scans.lock().unwrap().pop().unwrap_or_default())
    }

    fn connected_bssid(&self) -> tauri_plugin_wifi_scanner::ScanResult<Option<String>> {
        Ok(self.connected.clone())
    }
}

fn ap(ssid: &str, bssid: &str, level: i32, frequency: u32, caps: String) -> RawScanRecord {
    RawScanRecord {
        ssid: Some(ssid.to_string()),
        bssid: Some(bssid.to_string()),
        level,
        frequency,
        capabilities: caps,
        channel_width_mhz: None,
    }
}

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn each_cycle_replaces_the_previous_list() {
    init_logging();

    let backend = ReplayBackend::new(vec![
        vec![
            ap("Home", "aa:bb:cc:dd:ee:01", -48, 5180, render_capabilities(0x1, 0, 0x0408 | 0x80)),
            ap("Cafe", "aa:bb:cc:dd:ee:02", -72, 2437, render_capabilities(0, 0, 0)),
        ],
        vec![ap("Lab", "aa:bb:cc:dd:ee:03", -66, 2412, render_capabilities(0x1, 0, 0))],
    ]);
    let state = WifiScannerState::new(backend, ScannerConfig::default());

    let first = state.scan().unwrap();
    let summary: Vec<_> = first
        .networks
        .iter()
        .map(|n| (n.ssid.as_str(), n.security_type, n.signal_description()))
        .collect();
    assert_eq!(
        summary,
        [
            ("Home", SecurityCategory::Wpa3, "Excellent"),
            ("Cafe", SecurityCategory::Open, "Weak"),
        ]
    );

    let second = state.scan().unwrap();
    assert_ne!(first.scan_id, second.scan_id);
    assert_eq!(second.networks.len(), 1);
    assert_eq!(second.networks[0].security_type, SecurityCategory::Wep);
    assert_eq!(second.networks[0].channel(), 1);

    let err = state.scan().unwrap_err();
    assert!(matches!(err, ScanError::ScanFailure(_)));
}

#[test]
fn report_wire_shape() {
    let mut backend = ReplayBackend::new(vec![vec![ap(
        "Office",
        "AA:BB:CC:DD:EE:FF",
        -58,
        5745,
        "[WPA2-EAP-CCMP][ESS]".to_string(),
    )]]);
    backend.connected = Some("aa:bb:cc:dd:ee:ff".to_string());

    let report = NetworkDetailsRetriever::new(backend).retrieve().unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["wifiEnabled"], true);
    assert!(json["scanId"].is_string());
    assert_eq!(json["networks"][0]["ssid"], "Office");
    assert_eq!(json["networks"][0]["securityType"], "WPA2");
    assert_eq!(json["networks"][0]["isConnected"], true);
    assert_eq!(json["networks"][0]["frequency"], 5745);
}

#[test]
fn uninitialized_state_reports_not_initialized() {
    let state = WifiScannerState::default();
    assert!(matches!(state.scan(), Err(ScanError::NotInitialized)));
    assert!(matches!(state.is_wifi_enabled(), Err(ScanError::NotInitialized)));
}

#[test]
fn classifier_is_usable_standalone() {
    assert_eq!(classify_security("[WPA2-PSK-CCMP][WPA3-SAE-CCMP][ESS]"), SecurityCategory::Wpa3);
    assert_eq!(classify_security(""), SecurityCategory::Unknown);
    assert_eq!(tauri_plugin_wifi_scanner::classifier::describe_signal_strength(-85), "Very Weak");
}
