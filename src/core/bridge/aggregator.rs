//! Snapshot aggregation: a pure fold over the refreshed hardware tree.

use crate::core::hardware::{HardwareNode, NodeKind, SensorKind, StaticSystemInfo};

use super::snapshot::Snapshot;

/// Name prefix of per-die CPU temperature sensors
const CCD_PREFIX: &str = "CCD";
/// Name suffix of per-die CPU temperature sensors
const CCD_SUFFIX: &str = "(Tdie)";

/// Name of the CPU core voltage sensor
pub const CORE_VOLTAGE_SENSOR: &str = "Core (SVI2 TFN)";
/// Name of the CPU package power sensor
pub const PACKAGE_POWER_SENSOR: &str = "Package";

/// Fold one refreshed tree into a snapshot.
///
/// Unmatched node and sensor kinds are ignored. Optional fields follow a
/// first-readable-value-wins rule; a nested sub-node never overwrites a
/// value the top-level node already supplied.
pub fn aggregate(nodes: &[HardwareNode], info: &StaticSystemInfo) -> Snapshot {
    let mut snapshot = Snapshot::from_static(info);
    let mut memory_load = None;

    for node in nodes {
        match node.kind {
            NodeKind::Cpu => fold_cpu(node, &mut snapshot),
            NodeKind::Memory => fold_memory(node, &mut snapshot, &mut memory_load),
            NodeKind::Motherboard => fold_motherboard(node, &mut snapshot),
            NodeKind::Storage | NodeKind::Other => {}
        }
    }

    snapshot.memory_usage = memory_load.unwrap_or(0.0);
    snapshot
}

fn fold_cpu(node: &HardwareNode, snapshot: &mut Snapshot) {
    for sensor in &node.sensors {
        match sensor.kind {
            SensorKind::Temperature => {
                // A die sensor must never land in the generic field, so
                // the plain case is decided purely on the name prefix.
                if !sensor.name.starts_with(CCD_PREFIX) {
                    snapshot.cpu_temp = sensor.value.unwrap_or(0.0);
                } else if sensor.name.ends_with(CCD_SUFFIX) {
                    snapshot.ccd_temperatures.push(sensor.value);
                }
            }
            SensorKind::Voltage if sensor.name == CORE_VOLTAGE_SENSOR => {
                snapshot.cpu_voltage = sensor.value;
            }
            SensorKind::Power if sensor.name == PACKAGE_POWER_SENSOR => {
                snapshot.cpu_power = sensor.value;
            }
            _ => {}
        }
    }
}

fn fold_memory(node: &HardwareNode, snapshot: &mut Snapshot, memory_load: &mut Option<f32>) {
    for sensor in &node.sensors {
        match sensor.kind {
            SensorKind::Load => {
                if memory_load.is_none() {
                    *memory_load = sensor.value;
                }
            }
            SensorKind::Temperature => {
                if snapshot.memory_temp.is_none() {
                    snapshot.memory_temp = sensor.value;
                }
            }
            _ => {}
        }
    }

    for child in &node.children {
        if snapshot.memory_temp.is_some() {
            break;
        }
        snapshot.memory_temp = first_temperature(child);
    }
}

fn fold_motherboard(node: &HardwareNode, snapshot: &mut Snapshot) {
    if snapshot.chipset_temp.is_none() {
        snapshot.chipset_temp = first_temperature(node);
    }

    for child in &node.children {
        if snapshot.chipset_temp.is_some() {
            break;
        }
        snapshot.chipset_temp = first_temperature(child);
    }
}

/// First readable Temperature value on a node, skipping unreadable ones
fn first_temperature(node: &HardwareNode) -> Option<f32> {
    node.sensors
        .iter()
        .filter(|s| s.kind == SensorKind::Temperature)
        .find_map(|s| s.value)
}
