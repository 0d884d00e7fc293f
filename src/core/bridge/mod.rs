//! Bridge core: process supervision, snapshot aggregation, emission loop.
//!
//! The bridge watches the process that (indirectly) launched it, polls the
//! hardware session once per tick, and writes one JSON snapshot per line
//! to its output channel until the watched process dies or the channel
//! closes.

mod aggregator;
mod emitter;
mod snapshot;
mod supervision;

pub use aggregator::{aggregate, CORE_VOLTAGE_SENSOR, PACKAGE_POWER_SENSOR};
pub use emitter::{Bridge, StopReason, TICK_INTERVAL};
pub use snapshot::Snapshot;
pub use supervision::ProcessDirectory;
