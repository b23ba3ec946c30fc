//! Snapshot collection using sysinfo.

use std::time::Duration;

use sysinfo::{LoadAvg, System};

use crate::error::ObservationError;
use crate::state::AppState;
use crate::types::{NetworkMb, Snapshot, UsageGb};

/// Window the CPU counters accumulate over between the two reads. Every
/// snapshot therefore takes at least this long; callers poll every 2 s.
pub const CPU_SAMPLE_WINDOW: Duration = Duration::from_secs(1);

/// Network identity reporting never materialized; the dashboard shows a
/// fixed placeholder instead.
const NETWORK_INFO: &str = "N/A";

/// Read one full snapshot from the OS. Fails without a partial result if any
/// counter cannot be read.
pub async fn collect_snapshot(state: &AppState) -> Result<Snapshot, ObservationError> {
    // First read arms the CPU counters; utilization is the delta over the window.
    {
        let mut sys = state.sys.lock().await;
        sys.refresh_cpu_usage();
    }
    tokio::time::sleep(CPU_SAMPLE_WINDOW).await;

    let (cpu_usage, processor, memory) = {
        let mut sys = state.sys.lock().await;
        sys.refresh_cpu_usage();
        sys.refresh_memory();

        let cpu_usage = crate::types::round1(f64::from(sys.global_cpu_usage().clamp(0.0, 100.0)));

        let processor = sys
            .cpus()
            .first()
            .map(|c| c.brand().trim().to_string())
            .filter(|b| !b.is_empty())
            .unwrap_or_else(|| "unknown".into());

        let total = sys.total_memory();
        if total == 0 {
            return Err(ObservationError::CounterUnavailable("memory totals"));
        }
        let used = total.saturating_sub(sys.available_memory());

        (cpu_usage, processor, UsageGb::from_bytes(used, total))
    };

    let disk = {
        let mut disks = state.disks.lock().await;
        disks.refresh(false); // don't drop missing disks
        let root = disks
            .iter()
            .find(|d| d.mount_point() == state.root_mount.as_path())
            .ok_or_else(|| {
                ObservationError::RootDiskMissing(state.root_mount.display().to_string())
            })?;
        let total = root.total_space();
        let used = total.saturating_sub(root.available_space());
        UsageGb::from_bytes(used, total)
    };

    let network = {
        let mut networks = state.networks.lock().await;
        networks.refresh(false);
        let (rx, tx) = networks.iter().fold((0u64, 0u64), |(rx, tx), (_, data)| {
            (
                rx.saturating_add(data.total_received()),
                tx.saturating_add(data.total_transmitted()),
            )
        });
        NetworkMb::from_bytes(rx, tx)
    };

    Ok(Snapshot {
        system: System::name().unwrap_or_else(|| "unknown".into()),
        node_name: System::host_name().unwrap_or_else(|| "unknown".into()),
        release: System::kernel_version().unwrap_or_else(|| "unknown".into()),
        version: System::long_os_version().unwrap_or_else(|| "unknown".into()),
        machine: System::cpu_arch(),
        processor,
        cpu_usage,
        cpu_load: format_load(&System::load_average()),
        memory,
        disk,
        network,
        network_info: NETWORK_INFO.into(),
    })
}

// "0.42, 0.36, 0.30": the 1/5/15-minute averages, two decimals each.
fn format_load(load: &LoadAvg) -> String {
    format!("{:.2}, {:.2}, {:.2}", load.one, load.five, load.fifteen)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn load_string_has_three_two_decimal_values() {
        let load = LoadAvg {
            one: 0.4234,
            five: 0.361,
            fifteen: 12.0,
        };
        assert_eq!(format_load(&load), "0.42, 0.36, 12.00");
    }

    #[tokio::test]
    async fn missing_root_mount_is_an_observation_error() {
        let state = AppState::with_root_mount(PathBuf::from("/definitely/not/mounted"));
        let err = collect_snapshot(&state).await.expect_err("must fail");
        assert!(matches!(err, ObservationError::RootDiskMissing(_)));
    }

    #[tokio::test]
    async fn snapshot_respects_usage_invariants() {
        let state = AppState::new();
        let snap = collect_snapshot(&state).await.expect("healthy host");

        assert!((0.0..=100.0).contains(&snap.cpu_usage));
        assert!((0.0..=100.0).contains(&snap.memory.percent));
        assert!((0.0..=100.0).contains(&snap.disk.percent));
        assert!(snap.memory.used <= snap.memory.total);
        assert!(snap.disk.used <= snap.disk.total);
        assert_eq!(snap.network_info, "N/A");
    }
}
