//! Windows-specific sensor plumbing.
//!
//! Dynamic sensors come from the LibreHardwareMonitor WMI namespace when
//! that application is running; static board and memory facts come from
//! the SMBIOS-backed classes in the default namespace.

mod lhm;
pub mod smbios;

pub use lhm::LhmSensorSource;

use wmi::WMIConnection;

use crate::error::{BridgeError, Result};

/// Connect to a WMI namespace; `None` selects the default (root\cimv2).
fn open_connection(namespace: Option<&str>) -> Result<WMIConnection> {
    let connection = match namespace {
        Some(path) => WMIConnection::with_namespace_path(path),
        None => WMIConnection::new(),
    };
    connection.map_err(|e| BridgeError::platform(format!("Failed to connect to WMI: {}", e)))
}
