//! LibreHardwareMonitor WMI backend.
//!
//! The LHM application republishes every hardware item and sensor it
//! monitors as `Hardware` and `Sensor` instances in its own namespace;
//! Parent identifier links encode the tree. Querying returns the values
//! of the application's most recent poll.

use serde::Deserialize;
use wmi::WMIConnection;

use crate::core::hardware::{
    BoardDescriptor, Capabilities, HardwareNode, MemoryModule, NodeKind, SensorKind,
    SensorReading, SensorSource,
};
use crate::error::{BridgeError, Result};

use super::{open_connection, smbios};

const LHM_NAMESPACE: &str = "ROOT\\LibreHardwareMonitor";

#[derive(Deserialize, Debug, Clone)]
#[serde(rename = "Hardware")]
#[serde(rename_all = "PascalCase")]
struct LhmHardware {
    hardware_type: String,
    name: String,
    identifier: String,
    parent: String,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename = "Sensor")]
#[serde(rename_all = "PascalCase")]
struct LhmSensor {
    sensor_type: String,
    name: String,
    value: Option<f32>,
    parent: String,
}

fn node_kind(hardware_type: &str) -> NodeKind {
    match hardware_type {
        "Cpu" => NodeKind::Cpu,
        "Memory" => NodeKind::Memory,
        "Motherboard" => NodeKind::Motherboard,
        "Storage" => NodeKind::Storage,
        _ => NodeKind::Other,
    }
}

fn sensor_kind(sensor_type: &str) -> Option<SensorKind> {
    match sensor_type {
        "Temperature" => Some(SensorKind::Temperature),
        "Voltage" => Some(SensorKind::Voltage),
        "Power" => Some(SensorKind::Power),
        "Load" => Some(SensorKind::Load),
        "Clock" => Some(SensorKind::Clock),
        _ => None,
    }
}

/// Root hardware groups follow the session capability set; children of a
/// kept root (super-IO chips, controllers) are always kept.
fn enabled(kind: NodeKind, capabilities: &Capabilities) -> bool {
    match kind {
        NodeKind::Cpu => true,
        NodeKind::Memory => capabilities.memory,
        NodeKind::Motherboard => capabilities.motherboard,
        NodeKind::Storage | NodeKind::Other => false,
    }
}

fn sensors_for(identifier: &str, sensors: &[LhmSensor]) -> Vec<SensorReading> {
    sensors
        .iter()
        .filter(|sensor| sensor.parent == identifier)
        .filter_map(|sensor| {
            let kind = sensor_kind(&sensor.sensor_type)?;
            Some(SensorReading::new(
                kind,
                sensor.name.clone(),
                sensor.value.filter(|v| v.is_finite()),
            ))
        })
        .collect()
}

/// Rebuild the node tree from Parent links, preserving row order.
fn build_tree(
    hardware: &[LhmHardware],
    sensors: &[LhmSensor],
    capabilities: &Capabilities,
) -> Vec<HardwareNode> {
    let mut nodes = Vec::new();

    for root in hardware.iter().filter(|h| h.parent.trim().is_empty()) {
        let kind = node_kind(&root.hardware_type);
        if !enabled(kind, capabilities) {
            continue;
        }

        let mut node = HardwareNode::new(kind, root.name.clone());
        node.sensors = sensors_for(&root.identifier, sensors);

        // LHM nests one level: e.g. a super-IO chip under the motherboard
        for child in hardware.iter().filter(|h| h.parent == root.identifier) {
            let mut child_node =
                HardwareNode::new(node_kind(&child.hardware_type), child.name.clone());
            child_node.sensors = sensors_for(&child.identifier, sensors);
            node.children.push(child_node);
        }

        nodes.push(node);
    }

    nodes
}

/// Sensor backend reading the LibreHardwareMonitor namespace
pub struct LhmSensorSource {
    wmi: WMIConnection,
    capabilities: Capabilities,
}

impl LhmSensorSource {
    /// Connects and verifies the namespace actually has hardware in it;
    /// an installed-but-not-running LHM leaves the namespace empty.
    pub fn new(capabilities: Capabilities) -> Result<Self> {
        let wmi = open_connection(Some(LHM_NAMESPACE))?;

        let hardware: Vec<LhmHardware> = wmi.query().map_err(|e| {
            BridgeError::hardware_init(format!("LibreHardwareMonitor query failed: {}", e))
        })?;
        if hardware.is_empty() {
            return Err(BridgeError::hardware_init(
                "LibreHardwareMonitor namespace is empty; is the application running?",
            ));
        }

        Ok(Self { wmi, capabilities })
    }
}

impl SensorSource for LhmSensorSource {
    fn backend(&self) -> &'static str {
        "LibreHardwareMonitor"
    }

    fn board(&mut self) -> Option<BoardDescriptor> {
        smbios::baseboard().ok().flatten()
    }

    fn memory_modules(&mut self) -> Vec<MemoryModule> {
        smbios::memory_modules().unwrap_or_default()
    }

    fn total_memory_bytes(&mut self) -> u64 {
        smbios::total_physical_memory().unwrap_or(0)
    }

    fn refresh_and_read(&mut self) -> Vec<HardwareNode> {
        let hardware: Vec<LhmHardware> = match self.wmi.query() {
            Ok(rows) => rows,
            Err(err) => {
                log::debug!("Hardware query failed: {}", err);
                return Vec::new();
            }
        };
        let sensors: Vec<LhmSensor> = match self.wmi.query() {
            Ok(rows) => rows,
            Err(err) => {
                log::debug!("Sensor query failed: {}", err);
                return Vec::new();
            }
        };

        build_tree(&hardware, &sensors, &self.capabilities)
    }
}
