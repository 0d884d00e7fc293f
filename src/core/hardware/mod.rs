//! Hardware access layer.
//!
//! Models the sensor topology as an immutable tree snapshot per refresh and
//! owns the session lifecycle around the platform sensor backends.

mod session;
mod topology;

pub use session::{Capabilities, HardwareSession, SensorSource, StaticSystemInfo};
pub use topology::{
    BoardDescriptor, HardwareNode, MemoryModule, NodeKind, SensorKind, SensorReading,
};
