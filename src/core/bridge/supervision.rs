/// Process-table access used for supervision
///
/// Implementations live in the platform layer. Both operations take a
/// fresh look at the system on every call; neither one errors on a
/// vanished pid.
pub trait ProcessDirectory {
    /// Parent pid of `pid` from a full point-in-time scan of the process
    /// table, 0 when `pid` is not present in the scan.
    fn resolve_parent(&mut self, pid: u32) -> u32;

    /// Whether `pid` is currently running. A pid the OS refuses to open
    /// reads as dead, and pid 0 (the no-parent sentinel) is always dead.
    fn is_alive(&mut self, pid: u32) -> bool;
}
