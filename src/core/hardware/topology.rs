//! Hardware topology model.
//!
//! A refresh produces a flat list of root nodes; each node carries its
//! sensor readings and nested sub-nodes (e.g. a super-IO chip under the
//! motherboard). The tree is immutable once read: device polling happens
//! in the backends, never while the aggregator walks the tree.

/// Category of a hardware node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Cpu,
    Memory,
    Motherboard,
    Storage,
    Other,
}

/// Category of a sensor reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorKind {
    Temperature,
    Voltage,
    Power,
    Load,
    Clock,
}

/// A single sensor value at refresh time
///
/// `value` is `None` when the sensor exists but could not be read this
/// refresh; that is a normal condition, not an error.
#[derive(Debug, Clone, PartialEq)]
pub struct SensorReading {
    pub kind: SensorKind,
    pub name: String,
    pub value: Option<f32>,
}

impl SensorReading {
    pub fn new<S: Into<String>>(kind: SensorKind, name: S, value: Option<f32>) -> Self {
        Self {
            kind,
            name: name.into(),
            value,
        }
    }
}

/// One node in the hardware tree
#[derive(Debug, Clone, PartialEq)]
pub struct HardwareNode {
    pub kind: NodeKind,
    pub name: String,
    pub sensors: Vec<SensorReading>,
    pub children: Vec<HardwareNode>,
}

impl HardwareNode {
    pub fn new<S: Into<String>>(kind: NodeKind, name: S) -> Self {
        Self {
            kind,
            name: name.into(),
            sensors: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_sensors<S: Into<String>>(
        kind: NodeKind,
        name: S,
        sensors: Vec<SensorReading>,
    ) -> Self {
        Self {
            kind,
            name: name.into(),
            sensors,
            children: Vec::new(),
        }
    }
}

/// Motherboard identity as reported by the firmware tables
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoardDescriptor {
    pub manufacturer: Option<String>,
    pub product: Option<String>,
}

impl BoardDescriptor {
    /// Human-readable board name: trimmed manufacturer + product,
    /// "Unknown" when both are empty or absent.
    pub fn display_name(&self) -> String {
        let manufacturer = self.manufacturer.as_deref().unwrap_or("").trim();
        let product = self.product.as_deref().unwrap_or("").trim();

        match (manufacturer.is_empty(), product.is_empty()) {
            (true, true) => "Unknown".to_string(),
            (false, true) => manufacturer.to_string(),
            (true, false) => product.to_string(),
            (false, false) => format!("{} {}", manufacturer, product),
        }
    }
}

/// One installed memory module as reported by the firmware tables
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryModule {
    pub capacity_bytes: u64,
    /// Rated transfer speed in MT/s, when the firmware reports one
    pub speed_mts: Option<u32>,
    pub slot: Option<String>,
}
