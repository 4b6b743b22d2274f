use serde::{Serialize, Serializer};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScanError>;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("WiFi is currently disabled")]
    WifiDisabled,

    #[error("Network scan failed: {0}")]
    ScanFailure(String),

    #[error("Network details are incomplete")]
    InsufficientNetworkDetails,

    #[error("WiFi scanning permission not granted")]
    PermissionDenied,

    #[error("System error: {0}")]
    System(String),

    #[error(transparent)]
    Dbus(zbus::Error),

    #[error("WiFi scanner is not initialized")]
    NotInitialized,

    #[error("Failed to acquire lock on WiFi scanner")]
    LockError,
}

impl ScanError {
    /// Text meant for the person looking at the network list.
    pub fn user_message(&self) -> String {
        match self {
            Self::PermissionDenied => "Please grant WiFi scanning permission".to_string(),
            Self::WifiDisabled => "Please enable WiFi to scan networks".to_string(),
            Self::ScanFailure(detail) => format!("Network scan failed: {detail}"),
            Self::InsufficientNetworkDetails => {
                "Unable to retrieve complete network information".to_string()
            }
            _ => "A system error occurred while scanning networks".to_string(),
        }
    }
}

const PERMISSION_ERRORS: &[&str] = &[
    "org.freedesktop.DBus.Error.AccessDenied",
    "org.freedesktop.DBus.Error.AuthFailed",
    "org.freedesktop.NetworkManager.PermissionDenied",
];

/// Whether a D-Bus error name means the caller lacks the rights for the call.
pub fn is_permission_error(name: &str) -> bool {
    PERMISSION_ERRORS.contains(&name)
}

impl From<zbus::Error> for ScanError {
    fn from(err: zbus::Error) -> Self {
        let denied = match &err {
            zbus::Error::MethodError(name, _, _) => is_permission_error(name.as_str()),
            zbus::Error::FDO(fdo) => matches!(
                **fdo,
                zbus::fdo::Error::AccessDenied(_) | zbus::fdo::Error::AuthFailed(_)
            ),
            _ => false,
        };

        if denied {
            Self::PermissionDenied
        } else {
            Self::Dbus(err)
        }
    }
}

impl From<zbus::fdo::Error> for ScanError {
    fn from(err: zbus::fdo::Error) -> Self {
        Self::from(zbus::Error::from(err))
    }
}

impl From<tokio::task::JoinError> for ScanError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::System(format!("scan task failed: {err}"))
    }
}

// Errors cross the IPC boundary as their display string.
impl Serialize for ScanError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
