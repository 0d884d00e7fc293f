use serde::Serialize;

use crate::core::hardware::StaticSystemInfo;

/// One telemetry record per tick.
///
/// The field names on the wire are fixed by the consuming GUI and must
/// not change: it deserializes these exact PascalCase keys from each
/// stdout line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    #[serde(rename = "MotherboardModel")]
    pub motherboard_model: String,

    #[serde(rename = "CpuTemp")]
    pub cpu_temp: f32,

    /// Per-die temperatures in sensor enumeration order; `None` entries
    /// are dies whose sensor was unreadable this tick
    #[serde(rename = "CcdTemperatures")]
    pub ccd_temperatures: Vec<Option<f32>>,

    #[serde(rename = "CpuVoltage")]
    pub cpu_voltage: Option<f32>,

    #[serde(rename = "CpuPower")]
    pub cpu_power: Option<f32>,

    #[serde(rename = "ChipsetTemp")]
    pub chipset_temp: Option<f32>,

    #[serde(rename = "MemoryUsage")]
    pub memory_usage: f32,

    #[serde(rename = "MemoryTemp")]
    pub memory_temp: Option<f32>,

    #[serde(rename = "TotalMemoryMB")]
    pub total_memory_mb: i32,

    #[serde(rename = "MemorySpeedMTS")]
    pub memory_speed_mts: i32,
}

impl Snapshot {
    /// Fresh record carrying only the static facts; dynamic fields start
    /// at their defaults (0 for the required numbers, absent otherwise).
    pub fn from_static(info: &StaticSystemInfo) -> Self {
        Self {
            motherboard_model: info.motherboard_model.clone(),
            cpu_temp: 0.0,
            ccd_temperatures: Vec::new(),
            cpu_voltage: None,
            cpu_power: None,
            chipset_temp: None,
            memory_usage: 0.0,
            memory_temp: None,
            total_memory_mb: info.total_memory_mb,
            memory_speed_mts: info.memory_speed_mts,
        }
    }
}
