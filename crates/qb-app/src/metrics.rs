//! Best-effort system metric sampling.
//!
//! Architecture:
//!   - `cpu_user_percent` : user+nice share of `/proc/stat` (since boot)
//!   - `ram_used_percent` : MemTotal−MemAvailable over MemTotal
//!   - `gpu_percents`     : nvidia-smi CSV query via subprocess
//!   - `sample`           : gathers all four, substituting 0 on failure
//!
//! Sampling never fails hard: a missing `/proc` file or absent `nvidia-smi`
//! reports 0 for the affected channels, and the bar still renders.

use std::process::Command;

/// One snapshot of the four monitored percentages, unrounded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    /// CPU user+nice time share.
    pub cpu: f64,
    /// RAM used share.
    pub ram: f64,
    /// GPU utilisation.
    pub gpu: f64,
    /// GPU memory used share.
    pub vram: f64,
}

/// Gather all four metrics, substituting 0.0 for anything unavailable.
#[must_use]
pub fn sample() -> Metrics {
    let cpu = std::fs::read_to_string("/proc/stat")
        .ok()
        .and_then(|s| cpu_user_percent(&s))
        .unwrap_or_else(|| {
            log::warn!("could not read CPU usage from /proc/stat");
            0.0
        });

    let ram = std::fs::read_to_string("/proc/meminfo")
        .ok()
        .and_then(|s| ram_used_percent(&s))
        .unwrap_or_else(|| {
            log::warn!("could not read RAM usage from /proc/meminfo");
            0.0
        });

    let (gpu, vram) = query_nvidia_smi()
        .as_deref()
        .and_then(gpu_percents)
        .unwrap_or_else(|| {
            log::debug!("nvidia-smi unavailable, reporting GPU/VRAM as 0");
            (0.0, 0.0)
        });

    Metrics { cpu, ram, gpu, vram }
}

/// Parse the aggregate `cpu` line of `/proc/stat` into a user+nice share.
///
/// The share is computed over all jiffies since boot, matching the
/// traditional one-shot statusline reading.
fn cpu_user_percent(stat: &str) -> Option<f64> {
    let line = stat.lines().find(|l| l.starts_with("cpu "))?;
    let fields: Vec<u64> = line
        .split_whitespace()
        .skip(1)
        .map_while(|f| f.parse().ok())
        .collect();
    // Need at least user, nice, system, idle.
    if fields.len() < 4 {
        return None;
    }
    let total: u64 = fields.iter().sum();
    if total == 0 {
        return None;
    }
    let user_nice = fields[0] + fields[1];
    Some(100.0 * user_nice as f64 / total as f64)
}

/// Parse `/proc/meminfo` into a used-memory share.
fn ram_used_percent(meminfo: &str) -> Option<f64> {
    let mut mem_total: Option<f64> = None;
    let mut mem_available: Option<f64> = None;
    for line in meminfo.lines() {
        if let Some(rest) = line.strip_prefix("MemTotal:") {
            mem_total = parse_kb(rest);
        } else if let Some(rest) = line.strip_prefix("MemAvailable:") {
            mem_available = parse_kb(rest);
        }
        if mem_total.is_some() && mem_available.is_some() {
            break;
        }
    }
    let total = mem_total?;
    let available = mem_available?;
    if total <= 0.0 {
        return None;
    }
    Some(100.0 * (total - available) / total)
}

/// Parse the numeric part of a `/proc/meminfo` "NNNN kB" value.
fn parse_kb(rest: &str) -> Option<f64> {
    rest.split_whitespace().next()?.parse().ok()
}

/// Run nvidia-smi and return its raw CSV line, if the tool is present.
fn query_nvidia_smi() -> Option<String> {
    let output = Command::new("nvidia-smi")
        .args([
            "--query-gpu=utilization.gpu,memory.used,memory.total",
            "--format=csv,noheader,nounits",
        ])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8(output.stdout).ok()
}

/// Parse the first nvidia-smi CSV line into (util%, vram-used%).
///
/// Expected shape: ` 12, 1023, 4096` (one line per GPU; only the first
/// GPU is reported).
fn gpu_percents(csv: &str) -> Option<(f64, f64)> {
    let line = csv.lines().next()?;
    let mut fields = line.split(',').map(str::trim);
    let util: f64 = fields.next()?.parse().ok()?;
    let mem_used: f64 = fields.next()?.parse().ok()?;
    let mem_total: f64 = fields.next()?.parse().ok()?;
    if mem_total <= 0.0 {
        return Some((util, 0.0));
    }
    Some((util, 100.0 * mem_used / mem_total))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cpu_line_parses_user_nice_share() {
        let stat = "cpu  400 100 200 300 0 0 0 0 0 0\ncpu0 1 2 3 4 5 6 7 8 9 0\n";
        let pct = cpu_user_percent(stat).unwrap();
        // (400 + 100) / 1000
        assert!((pct - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn cpu_rejects_truncated_line() {
        assert_eq!(cpu_user_percent("cpu  400 100\n"), None);
        assert_eq!(cpu_user_percent("intr 12345\n"), None);
    }

    #[test]
    fn meminfo_parses_used_share() {
        let meminfo = "MemTotal:       8000 kB\nMemFree:        1000 kB\nMemAvailable:   2000 kB\n";
        let pct = ram_used_percent(meminfo).unwrap();
        assert!((pct - 75.0).abs() < f64::EPSILON);
    }

    #[test]
    fn meminfo_without_available_is_none() {
        assert_eq!(ram_used_percent("MemTotal: 8000 kB\n"), None);
    }

    #[test]
    fn nvidia_csv_parses_first_gpu() {
        let (util, vram) = gpu_percents(" 12, 1024, 4096\n 90, 1, 2\n").unwrap();
        assert!((util - 12.0).abs() < f64::EPSILON);
        assert!((vram - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn nvidia_csv_with_zero_total_reports_zero_vram() {
        let (util, vram) = gpu_percents("7, 0, 0\n").unwrap();
        assert!((util - 7.0).abs() < f64::EPSILON);
        assert!(vram.abs() < f64::EPSILON);
    }

    #[test]
    fn garbage_csv_is_none() {
        assert_eq!(gpu_percents("N/A, N/A, N/A\n"), None);
        assert_eq!(gpu_percents(""), None);
    }
}
