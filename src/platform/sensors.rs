//! Portable sensor backend built on sysinfo.
//!
//! Components expose free-form hwmon/SMC labels; this module classifies
//! them into the node vocabulary the aggregator matches on and rewrites
//! AMD per-die labels (`Tccd<n>`) into the canonical `CCD<n> (Tdie)`
//! form. Coverage is whatever the host kernel exposes; on Windows this
//! backend usually reports an empty component list and only memory load.

use sysinfo::{Components, MemoryRefreshKind, RefreshKind, System};

use crate::core::hardware::{
    BoardDescriptor, Capabilities, HardwareNode, MemoryModule, NodeKind, SensorKind,
    SensorReading, SensorSource,
};

/// Component labels that belong to the CPU package
const CPU_MARKERS: &[&str] = &["k10temp", "coretemp", "tctl", "tdie", "tccd", "package id", "cpu"];
/// Socket-header thermistors name the CPU but are measured by the
/// super-IO chip on the board, not by the die
const CPU_HEADER_MARKERS: &[&str] = &["cputin", "cpu socket"];
/// Component labels that belong to the memory modules
const MEMORY_MARKERS: &[&str] = &["spd", "dimm"];
/// Component labels that belong to the board itself
const BOARD_MARKERS: &[&str] = &["pch", "acpitz"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ComponentClass {
    Cpu,
    Memory,
    Board,
}

fn classify(label: &str) -> Option<ComponentClass> {
    let lower = label.to_lowercase();
    // Header thermistors must be routed before the plain "cpu" marker
    // can claim them for the package
    if CPU_HEADER_MARKERS.iter().any(|marker| lower.contains(marker)) {
        Some(ComponentClass::Board)
    } else if CPU_MARKERS.iter().any(|marker| lower.contains(marker)) {
        Some(ComponentClass::Cpu)
    } else if MEMORY_MARKERS.iter().any(|marker| lower.contains(marker)) {
        Some(ComponentClass::Memory)
    } else if BOARD_MARKERS.iter().any(|marker| lower.contains(marker)) {
        Some(ComponentClass::Board)
    } else {
        None
    }
}

/// Die index from an AMD hwmon label, e.g. "k10temp Tccd2" -> 2
fn ccd_index(label: &str) -> Option<u32> {
    let lower = label.to_lowercase();
    let pos = lower.find("tccd")?;
    let digits: String = lower[pos + 4..]
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

fn cpu_sensor_name(label: &str) -> String {
    match ccd_index(label) {
        Some(die) => format!("CCD{} (Tdie)", die),
        None => label.trim().to_string(),
    }
}

fn load_percent(used: u64, total: u64) -> f32 {
    if total > 0 {
        (used as f32 / total as f32) * 100.0
    } else {
        0.0
    }
}

/// Sensor backend reading the kernel's own sensor interfaces via sysinfo
pub struct SystemSensors {
    system: System,
    components: Components,
    capabilities: Capabilities,
}

impl SystemSensors {
    pub fn new(capabilities: Capabilities) -> Self {
        Self {
            system: System::new_with_specifics(
                RefreshKind::nothing().with_memory(MemoryRefreshKind::everything()),
            ),
            components: Components::new_with_refreshed_list(),
            capabilities,
        }
    }
}

impl SensorSource for SystemSensors {
    fn backend(&self) -> &'static str {
        "sysinfo"
    }

    fn board(&mut self) -> Option<BoardDescriptor> {
        read_board()
    }

    #[cfg(windows)]
    fn memory_modules(&mut self) -> Vec<MemoryModule> {
        super::windows::smbios::memory_modules().unwrap_or_default()
    }

    #[cfg(not(windows))]
    fn memory_modules(&mut self) -> Vec<MemoryModule> {
        Vec::new()
    }

    fn total_memory_bytes(&mut self) -> u64 {
        self.system.refresh_memory();
        self.system.total_memory()
    }

    fn refresh_and_read(&mut self) -> Vec<HardwareNode> {
        self.system.refresh_memory();
        self.components.refresh(true);

        let mut cpu = HardwareNode::new(NodeKind::Cpu, "CPU");
        let mut memory = HardwareNode::new(NodeKind::Memory, "Memory");
        let mut board = HardwareNode::new(NodeKind::Motherboard, "Motherboard");

        for component in self.components.iter() {
            let label = component.label();
            let Some(class) = classify(label) else {
                continue;
            };

            let value = component.temperature();
            match class {
                ComponentClass::Cpu => cpu.sensors.push(SensorReading::new(
                    SensorKind::Temperature,
                    cpu_sensor_name(label),
                    value,
                )),
                ComponentClass::Memory => memory.sensors.push(SensorReading::new(
                    SensorKind::Temperature,
                    label.trim(),
                    value,
                )),
                ComponentClass::Board => board.sensors.push(SensorReading::new(
                    SensorKind::Temperature,
                    label.trim(),
                    value,
                )),
            }
        }

        memory.sensors.push(SensorReading::new(
            SensorKind::Load,
            "Memory",
            Some(load_percent(
                self.system.used_memory(),
                self.system.total_memory(),
            )),
        ));

        let mut nodes = vec![cpu];
        if self.capabilities.memory {
            nodes.push(memory);
        }
        if self.capabilities.motherboard && !board.sensors.is_empty() {
            nodes.push(board);
        }
        nodes
    }
}

#[cfg(target_os = "linux")]
fn read_board() -> Option<BoardDescriptor> {
    use std::fs;

    let read_id = |name: &str| {
        fs::read_to_string(format!("/sys/class/dmi/id/{}", name))
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    };

    let manufacturer = read_id("board_vendor");
    let product = read_id("board_name");
    if manufacturer.is_none() && product.is_none() {
        return None;
    }
    Some(BoardDescriptor {
        manufacturer,
        product,
    })
}

#[cfg(windows)]
fn read_board() -> Option<BoardDescriptor> {
    super::windows::smbios::baseboard().ok().flatten()
}

#[cfg(all(not(windows), not(target_os = "linux")))]
fn read_board() -> Option<BoardDescriptor> {
    None
}
