//! Renders NetworkManager access point flags as a capability string.
//!
//! NetworkManager describes security with three flag words (`Flags`,
//! `WpaFlags`, `RsnFlags`). The classifier works on bracketed capability
//! tokens such as `[WPA2-PSK-CCMP][ESS]`, so the backend converts one into the
//! other before a record leaves it.

use bitflags::bitflags;

bitflags! {
    /// `NM80211ApFlags`
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ApFlags: u32 {
        const PRIVACY = 0x0000_0001;
        const WPS     = 0x0000_0002;
        const WPS_PBC = 0x0000_0004;
        const WPS_PIN = 0x0000_0008;
    }
}

bitflags! {
    /// `NM80211ApSecurityFlags`
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ApSecurityFlags: u32 {
        const PAIR_WEP40              = 0x0000_0001;
        const PAIR_WEP104             = 0x0000_0002;
        const PAIR_TKIP               = 0x0000_0004;
        const PAIR_CCMP               = 0x0000_0008;
        const GROUP_WEP40             = 0x0000_0010;
        const GROUP_WEP104            = 0x0000_0020;
        const GROUP_TKIP              = 0x0000_0040;
        const GROUP_CCMP              = 0x0000_0080;
        const KEY_MGMT_PSK            = 0x0000_0100;
        const KEY_MGMT_802_1X         = 0x0000_0200;
        const KEY_MGMT_SAE            = 0x0000_0400;
        const KEY_MGMT_OWE            = 0x0000_0800;
        const KEY_MGMT_OWE_TM         = 0x0000_1000;
        const KEY_MGMT_EAP_SUITE_B_192 = 0x0000_2000;
    }
}

fn cipher_suffix(sec: ApSecurityFlags) -> &'static str {
    let ccmp = sec.contains(ApSecurityFlags::PAIR_CCMP);
    let tkip = sec.contains(ApSecurityFlags::PAIR_TKIP);
    match (ccmp, tkip) {
        (true, true) => "-CCMP+TKIP",
        (true, false) => "-CCMP",
        (false, true) => "-TKIP",
        (false, false) => "",
    }
}

fn rsn_tokens(rsn: ApSecurityFlags, tokens: &mut Vec<String>) {
    let suffix = cipher_suffix(rsn);
    let before = tokens.len();

    if rsn.contains(ApSecurityFlags::KEY_MGMT_SAE) {
        tokens.push(format!("WPA3-SAE{suffix}"));
    }
    if rsn.intersects(ApSecurityFlags::KEY_MGMT_OWE | ApSecurityFlags::KEY_MGMT_OWE_TM) {
        tokens.push(format!("WPA3-OWE{suffix}"));
    }
    if rsn.contains(ApSecurityFlags::KEY_MGMT_EAP_SUITE_B_192) {
        tokens.push(format!("WPA3-EAP-SUITE-B-192{suffix}"));
    }
    if rsn.contains(ApSecurityFlags::KEY_MGMT_PSK) {
        tokens.push(format!("WPA2-PSK{suffix}"));
    }
    if rsn.contains(ApSecurityFlags::KEY_MGMT_802_1X) {
        tokens.push(format!("WPA2-EAP{suffix}"));
    }
    if tokens.len() == before {
        tokens.push(format!("WPA2{suffix}"));
    }
}

fn wpa_tokens(wpa: ApSecurityFlags, tokens: &mut Vec<String>) {
    let suffix = cipher_suffix(wpa);
    let before = tokens.len();

    if wpa.contains(ApSecurityFlags::KEY_MGMT_PSK) {
        tokens.push(format!("WPA-PSK{suffix}"));
    }
    if wpa.contains(ApSecurityFlags::KEY_MGMT_802_1X) {
        tokens.push(format!("WPA-EAP{suffix}"));
    }
    if tokens.len() == before {
        tokens.push(format!("WPA{suffix}"));
    }
}

/// Build a capability string from raw NetworkManager flag words.
///
/// Unknown bits are ignored.
pub fn render_capabilities(flags: u32, wpa_flags: u32, rsn_flags: u32) -> String {
    let flags = ApFlags::from_bits_truncate(flags);
    let wpa = ApSecurityFlags::from_bits_truncate(wpa_flags);
    let rsn = ApSecurityFlags::from_bits_truncate(rsn_flags);

    let mut tokens = Vec::new();

    if !wpa.is_empty() {
        wpa_tokens(wpa, &mut tokens);
    }
    if !rsn.is_empty() {
        rsn_tokens(rsn, &mut tokens);
    }
    if wpa.is_empty() && rsn.is_empty() {
        if flags.contains(ApFlags::PRIVACY) {
            tokens.push("WEP".to_string());
        } else {
            tokens.push("Open".to_string());
        }
    }
    if flags.intersects(ApFlags::WPS | ApFlags::WPS_PBC | ApFlags::WPS_PIN) {
        tokens.push("WPS".to_string());
    }
    tokens.push("ESS".to_string());

    tokens.iter().map(|t| format!("[{t}]")).collect()
}
