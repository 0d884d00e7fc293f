//! Emission loop: tick cadence, serialization, termination.

use std::io::Write;
use std::thread;
use std::time::Duration;

use crate::core::hardware::{Capabilities, HardwareSession};
use crate::error::Result;
use crate::platform;

use super::aggregator::aggregate;
use super::snapshot::Snapshot;
use super::supervision::ProcessDirectory;

/// Fixed delay between ticks
pub const TICK_INTERVAL: Duration = Duration::from_millis(500);

/// Why the emission loop stopped. Both reasons are graceful.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The watched process is no longer running
    ParentExited,
    /// The consumer closed the output channel
    OutputClosed,
}

/// The sensor-polling loop and everything it owns.
///
/// One logical thread of control: probe liveness, refresh, aggregate,
/// emit, sleep. Termination is observed cooperatively at the top of each
/// iteration and at the write step.
pub struct Bridge {
    directory: Box<dyn ProcessDirectory>,
    session: HardwareSession,
    watched_pid: u32,
    interval: Duration,
}

impl Bridge {
    /// Resolve the process to watch and open the hardware session.
    ///
    /// The direct parent is typically a short-lived launcher, so the
    /// grandparent is the liveness target. The session is opened with the
    /// full capability set first and retried exactly once without
    /// motherboard access; a second failure is fatal.
    pub fn bootstrap() -> Result<Self> {
        let mut directory = platform::get_process_directory();

        let own_pid = std::process::id();
        let parent_pid = directory.resolve_parent(own_pid);
        let watched_pid = directory.resolve_parent(parent_pid);
        log::info!(
            "watching pid {} (own pid {}, launcher pid {})",
            watched_pid,
            own_pid,
            parent_pid
        );

        let host = platform::describe_host();
        log::info!(
            "cpu: {} ({} cores, {} threads)",
            host.cpu_model,
            host.physical_cores,
            host.logical_cpus
        );
        if platform::is_virtual_machine() {
            log::warn!("virtual machine detected; sensor coverage will be limited");
        }

        let session = open_with_retry(HardwareSession::open)?;

        let info = session.static_info();
        log::info!(
            "sensor backend: {}{}",
            session.backend(),
            if session.capabilities().motherboard {
                ""
            } else {
                " (degraded, no motherboard access)"
            }
        );
        log::info!(
            "board: {}; memory: {} MB @ {} MT/s",
            info.motherboard_model,
            info.total_memory_mb,
            info.memory_speed_mts
        );

        Ok(Self {
            directory,
            session,
            watched_pid,
            interval: TICK_INTERVAL,
        })
    }

    /// Assemble a bridge from parts. Used by tests to control every seam.
    pub fn with_parts(
        directory: Box<dyn ProcessDirectory>,
        session: HardwareSession,
        watched_pid: u32,
        interval: Duration,
    ) -> Self {
        Self {
            directory,
            session,
            watched_pid,
            interval,
        }
    }

    pub fn watched_pid(&self) -> u32 {
        self.watched_pid
    }

    /// Run the loop until the watched process dies or the output closes.
    ///
    /// Snapshots go out strictly in tick order, one line per tick. A
    /// failed write or flush means the consumer is gone and stops the
    /// loop; it is not an error.
    pub fn run<W: Write>(&mut self, mut out: W) -> StopReason {
        loop {
            if !self.directory.is_alive(self.watched_pid) {
                return StopReason::ParentExited;
            }

            let nodes = self.session.refresh_and_read();
            let snapshot = aggregate(&nodes, self.session.static_info());

            if let Err(err) = emit(&mut out, &snapshot) {
                log::debug!("emit failed: {}", err);
                return StopReason::OutputClosed;
            }

            thread::sleep(self.interval);
        }
    }
}

/// Open a session with the full capability set, retrying exactly once
/// without motherboard access on failure. A second failure propagates.
fn open_with_retry<F>(mut open: F) -> Result<HardwareSession>
where
    F: FnMut(Capabilities) -> Result<HardwareSession>,
{
    match open(Capabilities::full()) {
        Ok(session) => Ok(session),
        Err(err) => {
            log::warn!(
                "hardware session open failed ({}); retrying without motherboard access",
                err
            );
            open(Capabilities::full().without_motherboard())
        }
    }
}

/// Serialize one snapshot as a single JSON line and flush it.
fn emit<W: Write>(out: &mut W, snapshot: &Snapshot) -> Result<()> {
    let line = serde_json::to_string(snapshot)?;
    writeln!(out, "{}", line)?;
    out.flush()?;
    Ok(())
}
