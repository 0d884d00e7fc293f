//! Static hardware facts from the SMBIOS-backed WMI classes.

use serde::Deserialize;

use crate::core::hardware::{BoardDescriptor, MemoryModule};
use crate::error::{BridgeError, Result};

use super::open_connection;

#[derive(Deserialize, Debug)]
#[serde(rename = "Win32_BaseBoard")]
#[serde(rename_all = "PascalCase")]
struct Win32BaseBoard {
    manufacturer: Option<String>,
    product: Option<String>,
}

#[derive(Deserialize, Debug)]
#[serde(rename = "Win32_PhysicalMemory")]
#[serde(rename_all = "PascalCase")]
struct Win32PhysicalMemory {
    // uint64 properties cross COM as strings
    capacity: Option<String>,
    speed: Option<u32>,
    device_locator: Option<String>,
}

#[derive(Deserialize, Debug)]
#[serde(rename = "Win32_ComputerSystem")]
#[serde(rename_all = "PascalCase")]
struct Win32ComputerSystem {
    total_physical_memory: Option<String>,
}

/// Board identity from Win32_BaseBoard; `Ok(None)` when the class has no
/// instances (virtual machines frequently omit it).
pub fn baseboard() -> Result<Option<BoardDescriptor>> {
    let wmi = open_connection(None)?;
    let boards: Vec<Win32BaseBoard> = wmi
        .query()
        .map_err(|e| BridgeError::platform(format!("Win32_BaseBoard query failed: {}", e)))?;

    Ok(boards.into_iter().next().map(|board| BoardDescriptor {
        manufacturer: board.manufacturer,
        product: board.product,
    }))
}

/// Installed modules from Win32_PhysicalMemory. Unparsable capacities
/// degrade to 0 rather than failing the probe.
pub fn memory_modules() -> Result<Vec<MemoryModule>> {
    let wmi = open_connection(None)?;
    let modules: Vec<Win32PhysicalMemory> = wmi
        .query()
        .map_err(|e| BridgeError::platform(format!("Win32_PhysicalMemory query failed: {}", e)))?;

    Ok(modules
        .into_iter()
        .map(|module| MemoryModule {
            capacity_bytes: module
                .capacity
                .as_deref()
                .and_then(|raw| raw.parse().ok())
                .unwrap_or(0),
            speed_mts: module.speed,
            slot: module.device_locator,
        })
        .collect())
}

/// Total physical memory in bytes from Win32_ComputerSystem
pub fn total_physical_memory() -> Result<u64> {
    let wmi = open_connection(None)?;
    let systems: Vec<Win32ComputerSystem> = wmi
        .query()
        .map_err(|e| BridgeError::platform(format!("Win32_ComputerSystem query failed: {}", e)))?;

    Ok(systems
        .first()
        .and_then(|system| system.total_physical_memory.as_deref())
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(0))
}
