const COMMANDS: &[&str] = &["list_wifi_networks", "get_wifi_status", "describe_signal_strength"];

fn main() {
  tauri_plugin::Builder::new(COMMANDS).build();
}
