// Platform-specific code module

pub mod host;
pub mod process;
pub mod sensors;
#[cfg(windows)]
pub mod windows;

// Re-exports para imports limpios
pub use host::{describe_host, is_virtual_machine, HostInfo};
pub use process::SystemProcessDirectory;
pub use sensors::SystemSensors;

use crate::core::bridge::ProcessDirectory;
use crate::core::hardware::{Capabilities, SensorSource};
use crate::error::Result;

/// Process directory backed by the OS process table
pub fn get_process_directory() -> Box<dyn ProcessDirectory> {
    Box::new(SystemProcessDirectory::new())
}

/// Best sensor backend for this platform
///
/// On Windows the LibreHardwareMonitor WMI namespace is preferred when
/// reachable; everywhere else (and as the Windows fallback) the portable
/// sysinfo backend is used.
#[cfg(windows)]
pub fn get_sensor_source(capabilities: Capabilities) -> Result<Box<dyn SensorSource>> {
    match windows::LhmSensorSource::new(capabilities) {
        Ok(source) => Ok(Box::new(source)),
        Err(err) => {
            log::debug!("LibreHardwareMonitor backend unavailable: {}", err);
            Ok(Box::new(SystemSensors::new(capabilities)))
        }
    }
}

#[cfg(not(windows))]
pub fn get_sensor_source(capabilities: Capabilities) -> Result<Box<dyn SensorSource>> {
    Ok(Box::new(SystemSensors::new(capabilities)))
}
