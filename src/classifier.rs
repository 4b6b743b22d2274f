//! Pure mapping from raw scan records to display-ready descriptors.

use crate::models::{
    NetworkDescriptor, RawScanRecord, SecurityCategory, SignalQuality, UNKNOWN_FIELD,
};

// Capability strings carry several tokens at once ("[WPA2-PSK][WPA3-SAE]"),
// so the strongest protocol has to be checked first.
const SECURITY_PRECEDENCE: &[(&str, SecurityCategory)] = &[
    ("WPA3", SecurityCategory::Wpa3),
    ("WPA2", SecurityCategory::Wpa2),
    ("WPA", SecurityCategory::Wpa),
    ("WEP", SecurityCategory::Wep),
    ("Open", SecurityCategory::Open),
];

/// Derive the security category from a capability annotation.
///
/// Substring matching, first hit wins. Never fails: anything unrecognised is
/// [`SecurityCategory::Unknown`].
pub fn classify_security(capabilities: &str) -> SecurityCategory {
    SECURITY_PRECEDENCE
        .iter()
        .find(|(token, _)| capabilities.contains(token))
        .map(|(_, category)| *category)
        .unwrap_or(SecurityCategory::Unknown)
}

impl SignalQuality {
    pub fn from_dbm(dbm: i32) -> Self {
        match dbm {
            d if d >= -50 => Self::Excellent,
            d if d >= -60 => Self::Good,
            d if d >= -70 => Self::Fair,
            d if d >= -80 => Self::Weak,
            _ => Self::VeryWeak,
        }
    }
}

/// Human-readable label for a signal level in dBm.
pub fn describe_signal_strength(dbm: i32) -> &'static str {
    SignalQuality::from_dbm(dbm).label()
}

impl NetworkDescriptor {
    /// Build a descriptor from a raw record.
    ///
    /// Missing SSID or BSSID becomes `"Unknown"`. The signal label is left to
    /// the caller.
    pub fn from_raw(raw: &RawScanRecord) -> Self {
        Self {
            ssid: raw.ssid.clone().unwrap_or_else(|| UNKNOWN_FIELD.to_string()),
            bssid: raw.bssid.clone().unwrap_or_else(|| UNKNOWN_FIELD.to_string()),
            signal_strength: raw.level,
            frequency: raw.frequency,
            security_type: classify_security(&raw.capabilities),
            is_connected: false,
            capabilities: raw.capabilities.clone(),
            channel_width_mhz: raw.channel_width_mhz,
        }
    }
}

impl From<&RawScanRecord> for NetworkDescriptor {
    fn from(raw: &RawScanRecord) -> Self {
        Self::from_raw(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(capabilities: &str) -> RawScanRecord {
        RawScanRecord {
            ssid: Some("TestNetwork".into()),
            bssid: Some("00:11:22:33:44:55".into()),
            level: -65,
            frequency: 2437,
            capabilities: capabilities.into(),
            channel_width_mhz: Some(20),
        }
    }

    #[test]
    fn security_detection() {
        let cases = [
            ("WPA3-PSK", SecurityCategory::Wpa3),
            ("WPA2-PSK", SecurityCategory::Wpa2),
            ("WPA-PSK", SecurityCategory::Wpa),
            ("WEP", SecurityCategory::Wep),
            ("Open", SecurityCategory::Open),
            ("", SecurityCategory::Unknown),
        ];

        for (capabilities, expected) in cases {
            assert_eq!(classify_security(capabilities), expected, "{capabilities:?}");
        }
    }

    #[test]
    fn wpa3_wins_over_everything_else() {
        for caps in [
            "[WPA2-PSK-CCMP][WPA3-SAE-CCMP][ESS]",
            "[WEP][WPA3-SAE]",
            "Open WPA WPA3",
            "WPA3",
        ] {
            assert_eq!(classify_security(caps), SecurityCategory::Wpa3, "{caps}");
        }
    }

    #[test]
    fn precedence_between_lower_tiers() {
        assert_eq!(classify_security("[WPA-PSK-TKIP][WPA2-PSK-CCMP]"), SecurityCategory::Wpa2);
        assert_eq!(classify_security("[WEP][WPA-PSK]"), SecurityCategory::Wpa);
        assert_eq!(classify_security("[Open][WEP]"), SecurityCategory::Wep);
    }

    #[test]
    fn open_match_is_case_sensitive() {
        assert_eq!(classify_security("[open]"), SecurityCategory::Unknown);
        assert_eq!(classify_security("OPEN"), SecurityCategory::Unknown);
        assert_eq!(classify_security("[ESS]"), SecurityCategory::Unknown);
    }

    #[test]
    fn signal_strength_description() {
        let cases = [
            (-40, "Excellent"),
            (-55, "Good"),
            (-65, "Fair"),
            (-75, "Weak"),
            (-85, "Very Weak"),
        ];

        for (dbm, expected) in cases {
            assert_eq!(describe_signal_strength(dbm), expected, "{dbm} dBm");
        }
    }

    #[test]
    fn signal_boundaries_are_inclusive_on_upper_tier() {
        assert_eq!(describe_signal_strength(-50), "Excellent");
        assert_eq!(describe_signal_strength(-51), "Good");
        assert_eq!(describe_signal_strength(-60), "Good");
        assert_eq!(describe_signal_strength(-61), "Fair");
        assert_eq!(describe_signal_strength(-70), "Fair");
        assert_eq!(describe_signal_strength(-71), "Weak");
        assert_eq!(describe_signal_strength(-80), "Weak");
        assert_eq!(describe_signal_strength(-81), "Very Weak");
        assert_eq!(describe_signal_strength(0), "Excellent");
        assert_eq!(describe_signal_strength(i32::MIN), "Very Weak");
    }

    #[test]
    fn descriptor_from_raw_record() {
        let network = NetworkDescriptor::from_raw(&record("WPA2-PSK"));

        assert_eq!(network.ssid, "TestNetwork");
        assert_eq!(network.bssid, "00:11:22:33:44:55");
        assert_eq!(network.signal_strength, -65);
        assert_eq!(network.frequency, 2437);
        assert_eq!(network.security_type, SecurityCategory::Wpa2);
        assert_eq!(network.capabilities, "WPA2-PSK");
        assert_eq!(network.channel_width_mhz, Some(20));
        assert!(!network.is_connected);
    }

    #[test]
    fn missing_identity_becomes_unknown() {
        let mut raw = record("");
        raw.ssid = None;
        raw.bssid = None;

        let network = NetworkDescriptor::from(&raw);
        assert_eq!(network.ssid, "Unknown");
        assert_eq!(network.bssid, "Unknown");
        assert_eq!(network.security_type, SecurityCategory::Unknown);
    }

    #[test]
    fn classifying_twice_yields_equal_descriptors() {
        let raw = record("[WPA2-EAP-CCMP][ESS]");
        assert_eq!(NetworkDescriptor::from_raw(&raw), NetworkDescriptor::from_raw(&raw));
    }
}
