// NetworkManager constants
pub const NM_DBUS_SERVICE: &str = "org.freedesktop.NetworkManager";
pub const NM_DBUS_PATH: &str = "/org/freedesktop/NetworkManager";

// Device types
pub const DEVICE_TYPE_WIFI: u32 = 2;

// Object path NetworkManager uses for "no object"
pub const NM_NULL_PATH: &str = "/";

// D-Bus interface names
pub const IFACE_NM: &str = "org.freedesktop.NetworkManager";
pub const IFACE_NM_DEVICE: &str = "org.freedesktop.NetworkManager.Device";
pub const IFACE_NM_DEVICE_WIRELESS: &str = "org.freedesktop.NetworkManager.Device.Wireless";
pub const IFACE_NM_ACCESS_POINT: &str = "org.freedesktop.NetworkManager.AccessPoint";

// Errors for objects that disappeared between listing and reading
pub const ERR_UNKNOWN_OBJECT: &str = "org.freedesktop.DBus.Error.UnknownObject";
pub const ERR_UNKNOWN_METHOD: &str = "org.freedesktop.DBus.Error.UnknownMethod";
