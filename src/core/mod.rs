// Core bridge logic

pub mod bridge;
pub mod hardware;

// Re-export commonly used items
pub use bridge::{aggregate, Bridge, ProcessDirectory, Snapshot, StopReason};
pub use hardware::{Capabilities, HardwareSession, SensorSource, StaticSystemInfo};
