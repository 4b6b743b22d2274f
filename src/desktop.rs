use std::thread;
use std::time::Duration;

use log::{debug, warn};
use zbus::zvariant::OwnedObjectPath;

use crate::backend::WifiBackend;
use crate::config::ScannerConfig;
use crate::error::{Result, ScanError};
use crate::models::RawScanRecord;
use crate::nm_constants::*;
use crate::proxy_traits::{nm_proxy, AccessPointProxy, DeviceProxy, WirelessDeviceProxy};

/// Convert NetworkManager's 0-100 quality percentage to dBm.
pub fn strength_to_dbm(percent: u8) -> i32 {
    i32::from(percent.min(100)) / 2 - 100
}

fn is_vanished_name(name: &str) -> bool {
    matches!(name, ERR_UNKNOWN_OBJECT | ERR_UNKNOWN_METHOD)
}

// Access points come and go while a scan list is being walked.
fn is_vanished(err: &zbus::Error) -> bool {
    match err {
        zbus::Error::MethodError(name, _, _) => is_vanished_name(name.as_str()),
        zbus::Error::FDO(fdo) => matches!(
            **fdo,
            zbus::fdo::Error::UnknownObject(_) | zbus::fdo::Error::UnknownMethod(_)
        ),
        _ => false,
    }
}

/// [`WifiBackend`] backed by NetworkManager on the system bus.
#[derive(Clone, Debug)]
pub struct NmWifiBackend {
    pub connection: zbus::blocking::Connection,
    config: ScannerConfig,
}

impl NmWifiBackend {
    pub fn new(config: ScannerConfig) -> Result<Self> {
        let connection = zbus::blocking::Connection::system()?;
        Ok(Self { connection, config })
    }

    fn manager(&self) -> zbus::Result<zbus::blocking::Proxy<'static>> {
        nm_proxy(&self.connection, NM_DBUS_PATH, IFACE_NM)
    }

    /// Wireless devices, narrowed to the configured interface if any.
    pub fn wireless_devices(&self) -> Result<Vec<OwnedObjectPath>> {
        let devices: Vec<OwnedObjectPath> = self.manager()?.get_property("Devices")?;
        let mut wireless = Vec::new();

        for path in devices {
            let device = nm_proxy(&self.connection, path.as_str(), IFACE_NM_DEVICE)?;
            if device.device_type()? != DEVICE_TYPE_WIFI {
                continue;
            }
            if let Some(wanted) = &self.config.interface {
                if device.interface_name()? != *wanted {
                    continue;
                }
            }
            wireless.push(path.clone());
        }

        debug!("Found {} wireless devices", wireless.len());
        Ok(wireless)
    }

    fn read_access_point(&self, path: &OwnedObjectPath) -> Result<Option<RawScanRecord>> {
        let ap = nm_proxy(&self.connection, path.as_str(), IFACE_NM_ACCESS_POINT)?;

        let read = || -> zbus::Result<RawScanRecord> {
            Ok(RawScanRecord {
                // Hidden networks keep their empty SSID.
                ssid: Some(ap.ssid()?),
                bssid: ap.hw_address()?,
                level: strength_to_dbm(ap.strength()?),
                frequency: ap.frequency()?,
                capabilities: ap.capabilities()?,
                channel_width_mhz: ap.bandwidth(),
            })
        };

        match read() {
            Ok(record) => Ok(Some(record)),
            Err(e) if is_vanished(&e) => {
                warn!("Access point {} vanished during scan: {}", path.as_str(), e);
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }
}

impl WifiBackend for NmWifiBackend {
    fn is_wifi_enabled(&self) -> Result<bool> {
        Ok(self.manager()?.get_property("WirelessEnabled")?)
    }

    fn start_scan(&self) -> Result<bool> {
        let devices = self.wireless_devices()?;
        if devices.is_empty() {
            return Err(ScanError::System(match &self.config.interface {
                Some(name) => format!("No wireless device named {name}"),
                None => "No wireless device available".to_string(),
            }));
        }

        let mut accepted = 0;
        for path in devices {
            let device = nm_proxy(&self.connection, path.as_str(), IFACE_NM_DEVICE_WIRELESS)?;
            match device.request_scan() {
                Ok(()) => accepted += 1,
                Err(e) => match ScanError::from(e) {
                    ScanError::PermissionDenied => return Err(ScanError::PermissionDenied),
                    other => warn!("Scan request on {} rejected: {}", path.as_str(), other),
                },
            }
        }

        if accepted > 0 && self.config.scan_settle_ms > 0 {
            debug!("Waiting {} ms for scan results", self.config.scan_settle_ms);
            thread::sleep(Duration::from_millis(self.config.scan_settle_ms));
        }

        Ok(accepted > 0)
    }

    fn scan_results(&self) -> Result<Vec<RawScanRecord>> {
        let mut records = Vec::new();

        for path in self.wireless_devices()? {
            let device = nm_proxy(&self.connection, path.as_str(), IFACE_NM_DEVICE_WIRELESS)?;
            for ap_path in device.access_points()? {
                if let Some(record) = self.read_access_point(&ap_path)? {
                    records.push(record);
                }
            }
        }

        Ok(records)
    }

    fn connected_bssid(&self) -> Result<Option<String>> {
        for path in self.wireless_devices()? {
            let device = nm_proxy(&self.connection, path.as_str(), IFACE_NM_DEVICE_WIRELESS)?;
            let Some(ap_path) = device.active_access_point()? else {
                continue;
            };
            let ap = nm_proxy(&self.connection, ap_path.as_str(), IFACE_NM_ACCESS_POINT)?;
            if let Some(bssid) = ap.hw_address()? {
                return Ok(Some(bssid));
            }
        }
        Ok(None)
    }
}
