use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Placeholder shown when the platform did not report an SSID or BSSID.
pub const UNKNOWN_FIELD: &str = "Unknown";

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum SecurityCategory {
    Open,
    Wep,
    Wpa,
    Wpa2,
    Wpa3,
    Unknown,
}

impl fmt::Display for SecurityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Open => "Open",
            Self::Wep => "WEP",
            Self::Wpa => "WPA",
            Self::Wpa2 => "WPA2",
            Self::Wpa3 => "WPA3",
            Self::Unknown => "Unknown",
        };
        f.pad(name)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "kebab-case")]
pub enum SignalQuality {
    VeryWeak,
    Weak,
    Fair,
    Good,
    Excellent,
}

impl SignalQuality {
    pub fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Weak => "Weak",
            Self::VeryWeak => "Very Weak",
        }
    }
}

impl fmt::Display for SignalQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Band {
    #[serde(rename = "2.4GHz")]
    Band2_4GHz,
    #[serde(rename = "5GHz")]
    Band5GHz,
    #[serde(rename = "6GHz")]
    Band6GHz,
    #[serde(rename = "unknown")]
    Unknown,
}

impl Band {
    pub fn from_frequency(freq_mhz: u32) -> Self {
        match freq_mhz {
            2400..=2500 => Self::Band2_4GHz,
            5150..=5895 => Self::Band5GHz,
            5925..=7125 => Self::Band6GHz,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Band2_4GHz => write!(f, "2.4 GHz"),
            Self::Band5GHz => write!(f, "5 GHz"),
            Self::Band6GHz => write!(f, "6 GHz"),
            Self::Unknown => write!(f, "unknown band"),
        }
    }
}

/// 802.11 channel number for a centre frequency, 0 when it is not a known channel.
pub fn frequency_to_channel(freq_mhz: u32) -> u16 {
    match freq_mhz {
        2412..=2472 => ((freq_mhz - 2407) / 5) as u16,
        2484 => 14,
        5160..=5885 => ((freq_mhz - 5000) / 5) as u16,
        5955..=7115 => ((freq_mhz - 5950) / 5) as u16,
        _ => 0,
    }
}

/// One access point as the platform reported it, before classification.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RawScanRecord {
    pub ssid: Option<String>,
    pub bssid: Option<String>,
    /// Signal level in dBm.
    pub level: i32,
    /// Centre frequency in MHz.
    pub frequency: u32,
    pub capabilities: String,
    pub channel_width_mhz: Option<u32>,
}

impl RawScanRecord {
    pub fn has_identity(&self) -> bool {
        self.ssid.is_some() && self.bssid.is_some()
    }
}

/// A scanned network ready for display.
///
/// Built once per scan cycle from a [`RawScanRecord`] and replaced on the next
/// scan. Two descriptors are the same network when all fields match.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NetworkDescriptor {
    pub ssid: String,
    pub bssid: String,
    /// Signal strength in dBm.
    pub signal_strength: i32,
    /// Centre frequency in MHz.
    pub frequency: u32,
    pub security_type: SecurityCategory,
    #[serde(default)]
    pub is_connected: bool,
    pub capabilities: String,
    pub channel_width_mhz: Option<u32>,
}

impl NetworkDescriptor {
    pub fn signal_quality(&self) -> SignalQuality {
        SignalQuality::from_dbm(self.signal_strength)
    }

    pub fn signal_description(&self) -> &'static str {
        self.signal_quality().label()
    }

    pub fn band(&self) -> Band {
        Band::from_frequency(self.frequency)
    }

    pub fn channel(&self) -> u16 {
        frequency_to_channel(self.frequency)
    }

    pub fn connected(self, is_connected: bool) -> Self {
        Self { is_connected, ..self }
    }
}

/// Result of one scan cycle.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ScanReport {
    pub scan_id: Uuid,
    pub wifi_enabled: bool,
    pub networks: Vec<NetworkDescriptor>,
}

impl ScanReport {
    pub fn new(networks: Vec<NetworkDescriptor>) -> Self {
        Self {
            scan_id: Uuid::new_v4(),
            wifi_enabled: true,
            networks,
        }
    }

    pub fn connected(&self) -> Option<&NetworkDescriptor> {
        self.networks.iter().find(|n| n.is_connected)
    }
}
