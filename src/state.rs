//! Shared server state: persistent sysinfo handles passed to every request.

use std::path::PathBuf;
use std::sync::Arc;

use sysinfo::{CpuRefreshKind, Disks, MemoryRefreshKind, Networks, RefreshKind, System};
use tokio::sync::Mutex;

pub type SharedSystem = Arc<Mutex<System>>;
pub type SharedNetworks = Arc<Mutex<Networks>>;
pub type SharedDisks = Arc<Mutex<Disks>>;

/// Built once at startup and cloned into request handlers. The sysinfo
/// handles must outlive single requests: CPU usage is a delta between
/// refreshes and network totals accumulate on the same `Networks`.
#[derive(Clone)]
pub struct AppState {
    pub sys: SharedSystem,
    pub networks: SharedNetworks,
    pub disks: SharedDisks,
    /// Mount point reported as "the disk" on the dashboard.
    pub root_mount: PathBuf,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_root_mount(PathBuf::from("/"))
    }

    pub fn with_root_mount(root_mount: PathBuf) -> Self {
        let refresh = RefreshKind::nothing()
            .with_cpu(CpuRefreshKind::nothing().with_cpu_usage())
            .with_memory(MemoryRefreshKind::everything());
        let sys = System::new_with_specifics(refresh);

        Self {
            sys: Arc::new(Mutex::new(sys)),
            networks: Arc::new(Mutex::new(Networks::new_with_refreshed_list())),
            disks: Arc::new(Mutex::new(Disks::new_with_refreshed_list())),
            root_mount,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
