//! Data types sent to the dashboard.
//! Keep this module minimal and stable: it defines the JSON the page polls.

use serde::Serialize;

const MIB: f64 = 1024.0 * 1024.0;
const GIB: f64 = 1024.0 * 1024.0 * 1024.0;

pub(crate) fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

pub(crate) fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Bytes to gigabytes (binary units), one decimal. Display rounding only.
pub fn bytes_to_gb(bytes: u64) -> f64 {
    round1(bytes as f64 / GIB)
}

/// Bytes to megabytes (binary units), two decimals. Display rounding only.
pub fn bytes_to_mb(bytes: u64) -> f64 {
    round2(bytes as f64 / MIB)
}

/// Used/total pair in gigabytes plus the percent used.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct UsageGb {
    pub percent: f64,
    pub used: f64,
    pub total: f64,
}

impl UsageGb {
    /// Build from raw byte counters. `used` is capped at `total`, so
    /// `used <= total` and `percent` stays inside 0..=100 by construction.
    pub fn from_bytes(used_bytes: u64, total_bytes: u64) -> Self {
        let used_bytes = used_bytes.min(total_bytes);
        let percent = if total_bytes == 0 {
            0.0
        } else {
            round1(used_bytes as f64 / total_bytes as f64 * 100.0)
        };
        Self {
            percent,
            used: bytes_to_gb(used_bytes),
            total: bytes_to_gb(total_bytes),
        }
    }
}

/// Cumulative network totals since boot, in megabytes.
///
/// Field names keep the byte-counter naming the dashboard script and wire
/// format use, even though the values are already unit-converted.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct NetworkMb {
    pub bytes_recv: f64,
    pub bytes_sent: f64,
}

impl NetworkMb {
    pub fn from_bytes(received: u64, transmitted: u64) -> Self {
        Self {
            bytes_recv: bytes_to_mb(received),
            bytes_sent: bytes_to_mb(transmitted),
        }
    }
}

/// One point-in-time read of host resource metrics.
#[derive(Debug, Serialize, Clone)]
pub struct Snapshot {
    pub system: String,
    pub node_name: String,
    pub release: String,
    pub version: String,
    pub machine: String,
    pub processor: String,
    pub cpu_usage: f64,
    pub cpu_load: String,
    pub memory: UsageGb,
    pub disk: UsageGb,
    pub network: NetworkMb,
    pub network_info: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_gib_is_exactly_one_gb() {
        assert_eq!(bytes_to_gb(1_073_741_824), 1.0);
    }

    #[test]
    fn mb_conversion_rounds_to_two_decimals() {
        // 1.5 MiB plus a little noise
        assert_eq!(bytes_to_mb(1_572_864), 1.5);
        assert_eq!(bytes_to_mb(1_577_058), 1.5);
        assert_eq!(bytes_to_mb(10_485_760), 10.0);
    }

    #[test]
    fn usage_percent_matches_quotient() {
        let usage = UsageGb::from_bytes(1_073_741_824, 4_294_967_296);
        assert_eq!(usage.percent, 25.0);
        assert_eq!(usage.used, 1.0);
        assert_eq!(usage.total, 4.0);
    }

    #[test]
    fn usage_caps_used_at_total() {
        let usage = UsageGb::from_bytes(u64::MAX, 1_073_741_824);
        assert!(usage.used <= usage.total);
        assert_eq!(usage.percent, 100.0);
    }

    #[test]
    fn usage_handles_zero_total() {
        let usage = UsageGb::from_bytes(0, 0);
        assert_eq!(usage.percent, 0.0);
        assert_eq!(usage.total, 0.0);
    }

    #[test]
    fn network_totals_round_to_two_decimals() {
        let net = NetworkMb::from_bytes(3_145_728, 1_048_576);
        assert_eq!(net.bytes_recv, 3.0);
        assert_eq!(net.bytes_sent, 1.0);
    }

    #[test]
    fn snapshot_serializes_nested_shapes() {
        let snap = Snapshot {
            system: "Linux".into(),
            node_name: "box".into(),
            release: "6.8.0".into(),
            version: "Linux 24.04 Ubuntu".into(),
            machine: "x86_64".into(),
            processor: "ACME 9000".into(),
            cpu_usage: 12.5,
            cpu_load: "0.42, 0.36, 0.30".into(),
            memory: UsageGb::from_bytes(0, 1_073_741_824),
            disk: UsageGb::from_bytes(0, 1_073_741_824),
            network: NetworkMb::from_bytes(0, 0),
            network_info: "N/A".into(),
        };
        let v: serde_json::Value = serde_json::to_value(&snap).expect("serialize");
        assert_eq!(v["memory"]["total"], 1.0);
        assert_eq!(v["network"]["bytes_recv"], 0.0);
        assert_eq!(v["network_info"], "N/A");
    }
}
