//! System inspection
//!
//! Snapshot of host, CPU, memory, disk, network and process state.
//! CPU usage needs two samples, so `collect` blocks for the sysinfo
//! minimum sampling interval (around 200ms).

use std::cmp::Ordering;
use std::thread;

use sysinfo::{Disks, MINIMUM_CPU_UPDATE_INTERVAL, Networks, System};

/// How many processes `top_processes` keeps.
pub const TOP_PROCESSES: usize = 10;

#[derive(Debug, Clone)]
pub struct HostReport {
    pub os_name: Option<String>,
    pub os_version: Option<String>,
    pub kernel: Option<String>,
    pub arch: String,
    pub hostname: Option<String>,
    pub uptime_secs: u64,
}

#[derive(Debug, Clone)]
pub struct CpuReport {
    pub brand: String,
    pub physical_cores: Option<usize>,
    pub logical_cores: usize,
    /// Whole-machine usage percentage.
    pub global_usage: f32,
    /// Per-core usage percentages, core order.
    pub per_core: Vec<f32>,
}

#[derive(Debug, Clone)]
pub struct MemoryReport {
    pub total: u64,
    pub available: u64,
    pub used: u64,
}

impl MemoryReport {
    pub fn used_percent(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.used as f64 / self.total as f64 * 100.0
        }
    }
}

#[derive(Debug, Clone)]
pub struct DiskReport {
    pub name: String,
    pub mount: String,
    pub file_system: String,
    pub total: u64,
    pub available: u64,
}

impl DiskReport {
    pub fn used(&self) -> u64 {
        self.total.saturating_sub(self.available)
    }

    pub fn used_percent(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.used() as f64 / self.total as f64 * 100.0
        }
    }
}

#[derive(Debug, Clone)]
pub struct NetworkReport {
    pub interface: String,
    pub received: u64,
    pub transmitted: u64,
    pub packets_received: u64,
    pub packets_transmitted: u64,
    pub errors_received: u64,
    pub errors_transmitted: u64,
}

impl NetworkReport {
    pub fn errors(&self) -> u64 {
        self.errors_received + self.errors_transmitted
    }
}

#[derive(Debug, Clone)]
pub struct ProcessReport {
    pub pid: u32,
    pub name: String,
    pub cpu_usage: f32,
    pub memory: u64,
}

/// Full snapshot.
#[derive(Debug, Clone)]
pub struct SystemReport {
    pub host: HostReport,
    pub cpu: CpuReport,
    pub memory: MemoryReport,
    pub disks: Vec<DiskReport>,
    pub networks: Vec<NetworkReport>,
    /// Busiest processes by CPU, descending.
    pub top_processes: Vec<ProcessReport>,
}

impl SystemReport {
    /// Take a snapshot of the current machine.
    pub fn collect() -> Self {
        let mut sys = System::new_all();
        sys.refresh_all();
        // Second sample after the minimum interval makes usage deltas valid
        thread::sleep(MINIMUM_CPU_UPDATE_INTERVAL);
        sys.refresh_all();

        let host = HostReport {
            os_name: System::name(),
            os_version: System::os_version(),
            kernel: System::kernel_version(),
            arch: System::cpu_arch(),
            hostname: System::host_name(),
            uptime_secs: System::uptime(),
        };

        let cpus = sys.cpus();
        let cpu = CpuReport {
            brand: cpus.first().map(|c| c.brand().to_string()).unwrap_or_default(),
            physical_cores: sys.physical_core_count(),
            logical_cores: cpus.len(),
            global_usage: sys.global_cpu_usage(),
            per_core: cpus.iter().map(|c| c.cpu_usage()).collect(),
        };

        let memory = MemoryReport {
            total: sys.total_memory(),
            available: sys.available_memory(),
            used: sys.used_memory(),
        };

        let disks = Disks::new_with_refreshed_list()
            .list()
            .iter()
            .map(|disk| DiskReport {
                name: disk.name().to_string_lossy().into_owned(),
                mount: disk.mount_point().display().to_string(),
                file_system: disk.file_system().to_string_lossy().into_owned(),
                total: disk.total_space(),
                available: disk.available_space(),
            })
            .collect();

        let networks_list = Networks::new_with_refreshed_list();
        let mut networks: Vec<NetworkReport> = networks_list
            .iter()
            .map(|(interface, data)| NetworkReport {
                interface: interface.clone(),
                received: data.total_received(),
                transmitted: data.total_transmitted(),
                packets_received: data.total_packets_received(),
                packets_transmitted: data.total_packets_transmitted(),
                errors_received: data.total_errors_on_received(),
                errors_transmitted: data.total_errors_on_transmitted(),
            })
            .collect();
        networks.sort_unstable_by(|a, b| a.interface.cmp(&b.interface));

        let mut top_processes: Vec<ProcessReport> = sys
            .processes()
            .values()
            .map(|process| ProcessReport {
                pid: process.pid().as_u32(),
                name: process.name().to_string_lossy().into_owned(),
                cpu_usage: process.cpu_usage(),
                memory: process.memory(),
            })
            .collect();
        top_processes.sort_unstable_by(|a, b| {
            b.cpu_usage
                .partial_cmp(&a.cpu_usage)
                .unwrap_or(Ordering::Equal)
                .then_with(|| b.memory.cmp(&a.memory))
        });
        top_processes.truncate(TOP_PROCESSES);

        SystemReport {
            host,
            cpu,
            memory,
            disks,
            networks,
            top_processes,
        }
    }
}
