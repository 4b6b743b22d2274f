use std::collections::HashMap;

use zbus::zvariant::{OwnedObjectPath, Value};

use crate::capabilities::render_capabilities;
use crate::nm_constants::*;

/// Build an uncached proxy for a NetworkManager object.
///
/// Scan data changes between calls, so properties are always read from the
/// daemon.
pub fn nm_proxy<'a>(
    connection: &zbus::blocking::Connection,
    path: &'a str,
    interface: &'static str,
) -> zbus::Result<zbus::blocking::Proxy<'a>> {
    zbus::blocking::ProxyBuilder::new_bare(connection)
        .destination(NM_DBUS_SERVICE)?
        .path(path)?
        .interface(interface)?
        .cache_properties(zbus::CacheProperties::No)
        .build()
}

pub trait DeviceProxy {
    fn device_type(&self) -> zbus::Result<u32>;
    fn interface_name(&self) -> zbus::Result<String>;
}

pub trait WirelessDeviceProxy {
    fn access_points(&self) -> zbus::Result<Vec<OwnedObjectPath>>;
    fn active_access_point(&self) -> zbus::Result<Option<OwnedObjectPath>>;
    fn request_scan(&self) -> zbus::Result<()>;
}

pub trait AccessPointProxy {
    /// Empty for hidden networks.
    fn ssid(&self) -> zbus::Result<String>;
    fn hw_address(&self) -> zbus::Result<Option<String>>;
    /// Signal quality in percent.
    fn strength(&self) -> zbus::Result<u8>;
    fn frequency(&self) -> zbus::Result<u32>;
    fn capabilities(&self) -> zbus::Result<String>;
    /// Channel width in MHz. Only newer daemons expose it.
    fn bandwidth(&self) -> Option<u32>;
}

impl DeviceProxy for zbus::blocking::Proxy<'_> {
    fn device_type(&self) -> zbus::Result<u32> {
        self.get_property("DeviceType")
    }

    fn interface_name(&self) -> zbus::Result<String> {
        self.get_property("Interface")
    }
}

impl WirelessDeviceProxy for zbus::blocking::Proxy<'_> {
    fn access_points(&self) -> zbus::Result<Vec<OwnedObjectPath>> {
        self.get_property("AccessPoints")
    }

    fn active_access_point(&self) -> zbus::Result<Option<OwnedObjectPath>> {
        let path: OwnedObjectPath = self.get_property("ActiveAccessPoint")?;
        Ok((path.as_str() != NM_NULL_PATH).then_some(path))
    }

    fn request_scan(&self) -> zbus::Result<()> {
        let options: HashMap<&str, Value<'_>> = HashMap::new();
        self.call_method("RequestScan", &(options,))?;
        Ok(())
    }
}

impl AccessPointProxy for zbus::blocking::Proxy<'_> {
    fn ssid(&self) -> zbus::Result<String> {
        let bytes: Vec<u8> = self.get_property("Ssid")?;
        Ok(parse_ssid(&bytes))
    }

    fn hw_address(&self) -> zbus::Result<Option<String>> {
        let address: String = self.get_property("HwAddress")?;
        let address = address.trim();
        Ok((!address.is_empty()).then(|| address.to_ascii_lowercase()))
    }

    fn strength(&self) -> zbus::Result<u8> {
        self.get_property("Strength")
    }

    fn frequency(&self) -> zbus::Result<u32> {
        self.get_property("Frequency")
    }

    fn capabilities(&self) -> zbus::Result<String> {
        let flags: u32 = self.get_property("Flags")?;
        let wpa_flags: u32 = self.get_property("WpaFlags")?;
        let rsn_flags: u32 = self.get_property("RsnFlags")?;
        Ok(render_capabilities(flags, wpa_flags, rsn_flags))
    }

    fn bandwidth(&self) -> Option<u32> {
        self.get_property::<u32>("Bandwidth").ok().filter(|mhz| *mhz > 0)
    }
}

/// SSIDs are raw bytes on the bus. Hidden networks broadcast no name or a
/// run of NUL bytes; both come back as an empty string.
pub fn parse_ssid(bytes: &[u8]) -> String {
    if bytes.iter().all(|b| *b == 0) {
        return String::new();
    }
    String::from_utf8_lossy(bytes).into_owned()
}
