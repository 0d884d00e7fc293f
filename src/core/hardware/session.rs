use crate::error::{BridgeError, Result};

use super::topology::{BoardDescriptor, HardwareNode, MemoryModule};

/// Component groups a session is opened with
///
/// CPU access is always on; memory and motherboard access can be dropped.
/// The degraded retry after a failed open removes the motherboard group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    pub memory: bool,
    pub motherboard: bool,
}

impl Capabilities {
    /// Everything enabled
    pub fn full() -> Self {
        Self {
            memory: true,
            motherboard: true,
        }
    }

    /// Same set with motherboard access dropped
    pub fn without_motherboard(self) -> Self {
        Self {
            motherboard: false,
            ..self
        }
    }
}

/// Backend seam for sensor access
///
/// Implementations live in the platform layer. `refresh_and_read` must
/// poll the underlying devices before returning; the returned tree is a
/// point-in-time snapshot.
pub trait SensorSource {
    /// Short backend name for diagnostics
    fn backend(&self) -> &'static str;

    /// Motherboard identity, `None` when the firmware tables are unreadable
    fn board(&mut self) -> Option<BoardDescriptor>;

    /// Installed memory modules; empty when the platform cannot enumerate them
    fn memory_modules(&mut self) -> Vec<MemoryModule>;

    /// Total physical memory in bytes, used when no modules are enumerable
    fn total_memory_bytes(&mut self) -> u64;

    /// Refresh every node and sub-node, then return the current tree
    fn refresh_and_read(&mut self) -> Vec<HardwareNode>;
}

/// Static facts derived once after the session opens
#[derive(Debug, Clone, PartialEq)]
pub struct StaticSystemInfo {
    pub motherboard_model: String,
    pub total_memory_mb: i32,
    pub memory_speed_mts: i32,
}

/// Open handle to the sensor backends
///
/// Holds the backend for the process lifetime; the emission loop never
/// closes it explicitly, process exit reclaims it.
pub struct HardwareSession {
    source: Box<dyn SensorSource>,
    capabilities: Capabilities,
    static_info: StaticSystemInfo,
}

impl HardwareSession {
    /// Open a session with the requested capability set.
    ///
    /// Fails when the motherboard group is requested but the board
    /// identity cannot be read; callers recover from that by retrying
    /// once with `Capabilities::without_motherboard`.
    pub fn open(capabilities: Capabilities) -> Result<Self> {
        let source = crate::platform::get_sensor_source(capabilities)?;
        Self::with_source(source, capabilities)
    }

    /// Open around an existing backend. Used by `open` and by tests.
    pub fn with_source(
        mut source: Box<dyn SensorSource>,
        capabilities: Capabilities,
    ) -> Result<Self> {
        let motherboard_model = if capabilities.motherboard {
            match source.board() {
                Some(board) => board.display_name(),
                None => {
                    return Err(BridgeError::hardware_init(
                        "motherboard identity unavailable",
                    ))
                }
            }
        } else {
            "Unknown".to_string()
        };

        let modules = source.memory_modules();
        for module in &modules {
            log::debug!(
                "memory module {}: {} MiB @ {} MT/s",
                module.slot.as_deref().unwrap_or("?"),
                module.capacity_bytes / (1024 * 1024),
                module.speed_mts.unwrap_or(0)
            );
        }

        let total_bytes: u64 = if modules.is_empty() {
            source.total_memory_bytes()
        } else {
            modules.iter().map(|m| m.capacity_bytes).sum()
        };
        let memory_speed_mts = modules
            .iter()
            .filter_map(|m| m.speed_mts)
            .max()
            .unwrap_or(0) as i32;

        let static_info = StaticSystemInfo {
            motherboard_model,
            total_memory_mb: (total_bytes / (1024 * 1024)) as i32,
            memory_speed_mts,
        };

        Ok(Self {
            source,
            capabilities,
            static_info,
        })
    }

    /// Backend name for diagnostics
    pub fn backend(&self) -> &'static str {
        self.source.backend()
    }

    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    pub fn static_info(&self) -> &StaticSystemInfo {
        &self.static_info
    }

    /// Poll the devices and return the refreshed tree
    pub fn refresh_and_read(&mut self) -> Vec<HardwareNode> {
        self.source.refresh_and_read()
    }
}
