use tauri_plugin_wifi_scanner::{NetworkDetailsRetriever, NmWifiBackend, ScannerConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = ScannerConfig {
        interface: std::env::args().nth(1),
        ..ScannerConfig::default()
    };
    let backend = NmWifiBackend::new(config.clone())?;
    let retriever = NetworkDetailsRetriever::with_config(backend, config);

    println!("Scanning WiFi networks...");
    match retriever.retrieve() {
        Ok(report) => {
            println!("Networks found: {}", report.networks.len());
            for (i, network) in report.networks.iter().enumerate() {
                println!(
                    "{:>2}. {:<32} {} {:>4} dBm ({:<9}) {:<5} ch {:<3} {}{}",
                    i + 1,
                    network.ssid,
                    network.bssid,
                    network.signal_strength,
                    network.signal_description(),
                    network.security_type,
                    network.channel(),
                    network.band(),
                    if network.is_connected { "  [connected]" } else { "" },
                );
            }
        }
        Err(e) => {
            println!("{}", e.user_message());
            println!("Error scanning WiFi networks: {}", e);
        }
    }

    Ok(())
}
