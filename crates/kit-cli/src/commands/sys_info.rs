//! System Info driver

use colored::Colorize;
use kit_tools::tools::file_info::human_size;
use kit_tools::tools::sys_info::SystemReport;

use crate::console;
use crate::error::Result;

/// Collect a system snapshot and print it.
pub fn run_sys_info() -> Result<()> {
    println!("{}", "Collecting system snapshot...".dimmed());
    let report = SystemReport::collect();
    print_report(&report);
    Ok(())
}

pub(crate) fn print_report(report: &SystemReport) {
    println!();
    console::heading("System Info");

    let os = match (&report.host.os_name, &report.host.os_version) {
        (Some(name), Some(version)) => format!("{name} {version}"),
        (Some(name), None) => name.clone(),
        _ => "unknown".to_string(),
    };
    console::kv("OS", os);
    console::kv("Kernel", report.host.kernel.as_deref().unwrap_or("unknown"));
    console::kv("Architecture", &report.host.arch);
    console::kv(
        "Hostname",
        report.host.hostname.as_deref().unwrap_or("unknown"),
    );
    console::kv("Uptime", fmt_uptime(report.host.uptime_secs));

    println!();
    println!("  {}", "CPU:".dimmed());
    console::kv("Model", &report.cpu.brand);
    let physical = match report.cpu.physical_cores {
        Some(n) => n.to_string(),
        None => "?".to_string(),
    };
    console::kv(
        "Cores",
        format!("{} physical / {} logical", physical, report.cpu.logical_cores),
    );
    console::kv("Usage", format!("{:.1}%", report.cpu.global_usage));
    let per_core: Vec<String> = report
        .cpu
        .per_core
        .iter()
        .map(|u| format!("{u:.0}%"))
        .collect();
    console::kv("Per core", per_core.join(" "));

    println!();
    println!("  {}", "Memory:".dimmed());
    console::kv("Total", human_size(report.memory.total));
    console::kv(
        "Used",
        format!(
            "{} ({:.1}%)",
            human_size(report.memory.used),
            report.memory.used_percent()
        ),
    );
    console::kv("Available", human_size(report.memory.available));

    if !report.disks.is_empty() {
        println!();
        println!("  {}", "Disks:".dimmed());
        for disk in &report.disks {
            println!(
                "    {} {} {} / {} ({:.1}%) [{}]",
                console::pad(&disk.mount, 18),
                console::pad(&disk.file_system, 8),
                human_size(disk.used()),
                human_size(disk.total),
                disk.used_percent(),
                disk.name
            );
        }
    }

    if !report.networks.is_empty() {
        println!();
        println!("  {}", "Network:".dimmed());
        for net in &report.networks {
            let errors = if net.errors() > 0 {
                format!(", {} errors", net.errors()).red().to_string()
            } else {
                String::new()
            };
            println!(
                "    {} rx {} ({} packets), tx {} ({} packets){}",
                console::pad(&net.interface, 12),
                human_size(net.received),
                net.packets_received,
                human_size(net.transmitted),
                net.packets_transmitted,
                errors
            );
        }
    }

    if !report.top_processes.is_empty() {
        println!();
        println!("  {}", "Top processes by CPU:".dimmed());
        for process in &report.top_processes {
            println!(
                "    {:>7}  {} {:>6.1}%  {}",
                process.pid,
                console::pad(&process.name, 24),
                process.cpu_usage,
                human_size(process.memory)
            );
        }
    }
}

pub(crate) fn fmt_uptime(secs: u64) -> String {
    let days = secs / 86_400;
    let hours = (secs % 86_400) / 3_600;
    let minutes = (secs % 3_600) / 60;
    if days > 0 {
        format!("{days}d {hours}h {minutes}m")
    } else if hours > 0 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{minutes}m")
    }
}
