use sysinfo::{Pid, ProcessRefreshKind, ProcessesToUpdate, System};

use crate::core::bridge::ProcessDirectory;

/// Process directory backed by the OS process table via sysinfo
///
/// Every `resolve_parent` call rescans the full table so the lookup runs
/// against one consistent point-in-time snapshot.
pub struct SystemProcessDirectory {
    system: System,
}

impl SystemProcessDirectory {
    pub fn new() -> Self {
        Self {
            system: System::new(),
        }
    }
}

impl Default for SystemProcessDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessDirectory for SystemProcessDirectory {
    fn resolve_parent(&mut self, pid: u32) -> u32 {
        self.system.refresh_processes_specifics(
            ProcessesToUpdate::All,
            true,
            ProcessRefreshKind::nothing(),
        );

        self.system
            .process(Pid::from_u32(pid))
            .and_then(|process| process.parent())
            .map(|parent| parent.as_u32())
            .unwrap_or(0)
    }

    fn is_alive(&mut self, pid: u32) -> bool {
        // 0 is the no-parent sentinel, never probe it against the OS
        if pid == 0 {
            return false;
        }
        probe_alive(pid)
    }
}

/// Open a minimal query handle and check the still-running indicator.
/// A pid the OS refuses to open reads as dead.
#[cfg(windows)]
fn probe_alive(pid: u32) -> bool {
    use winapi::shared::minwindef::DWORD;

    unsafe {
        let handle = winapi::um::processthreadsapi::OpenProcess(
            winapi::um::winnt::PROCESS_QUERY_LIMITED_INFORMATION,
            0,
            pid,
        );
        if handle.is_null() {
            return false;
        }

        let mut exit_code: DWORD = 0;
        let result =
            winapi::um::processthreadsapi::GetExitCodeProcess(handle, &mut exit_code);

        winapi::um::handleapi::CloseHandle(handle);

        result != 0 && exit_code == winapi::um::minwinbase::STILL_ACTIVE
    }
}

/// kill with signal 0 performs only the existence check. EPERM means the
/// process exists but belongs to someone else, which still counts as
/// alive.
#[cfg(not(windows))]
fn probe_alive(pid: u32) -> bool {
    let pid = match libc::pid_t::try_from(pid) {
        Ok(pid) if pid > 0 => pid,
        _ => return false,
    };

    if unsafe { libc::kill(pid, 0) } == 0 {
        return true;
    }
    std::io::Error::last_os_error().raw_os_error() == Some(libc::EPERM)
}
