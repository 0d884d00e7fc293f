use sysinfo::{CpuRefreshKind, RefreshKind, System};

/// Basic CPU identity, logged once at startup
#[derive(Debug, Clone)]
pub struct HostInfo {
    pub cpu_model: String,
    pub physical_cores: usize,
    pub logical_cpus: usize,
}

pub fn describe_host() -> HostInfo {
    let system =
        System::new_with_specifics(RefreshKind::nothing().with_cpu(CpuRefreshKind::everything()));

    HostInfo {
        cpu_model: system
            .cpus()
            .first()
            .map(|cpu| cpu.brand().trim().to_string())
            .unwrap_or_default(),
        physical_cores: System::physical_core_count().unwrap_or(0),
        logical_cpus: system.cpus().len(),
    }
}

/// Whether the host looks like a virtual machine.
///
/// Sensor coverage in VMs is typically near-empty, so the bridge logs a
/// warning when this returns true but keeps running.
pub fn is_virtual_machine() -> bool {
    let system =
        System::new_with_specifics(RefreshKind::nothing().with_cpu(CpuRefreshKind::everything()));

    if let Some(cpu) = system.cpus().first() {
        let brand = cpu.brand().to_lowercase();
        if brand.contains("qemu") || brand.contains("kvm") {
            return true;
        }
    }

    hyperv_guest()
}

/// The guest-parameters key only exists when running under Hyper-V
#[cfg(windows)]
fn hyperv_guest() -> bool {
    use winreg::enums::*;
    use winreg::RegKey;

    let hklm = RegKey::predef(HKEY_LOCAL_MACHINE);
    hklm.open_subkey_with_flags(
        "SOFTWARE\\Microsoft\\Virtual Machine\\Guest\\Parameters",
        KEY_READ,
    )
    .is_ok()
}

#[cfg(not(windows))]
fn hyperv_guest() -> bool {
    false
}
