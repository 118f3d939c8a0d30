use serde::Serialize;

/// One parsed row of `df -P` output: a single mounted filesystem.
///
/// Field order matters: serde emits keys in declaration order, and the
/// JSON contract is `device, size, used, available, use, mount`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiskUsageRecord {
    pub device:    String,
    /// Total capacity in df's native block unit (512 or 1024 bytes).
    pub size:      u64,
    pub used:      u64,
    pub available: u64,
    /// Utilization as df reports it, trailing '%' included ("40%").
    #[serde(rename = "use")]
    pub use_pct:   String,
    pub mount:     String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DiskUsageRecord {
        DiskUsageRecord {
            device:    "/dev/disk1s1".into(),
            size:      500_000_000,
            used:      200_000_000,
            available: 300_000_000,
            use_pct:   "40%".into(),
            mount:     "/".into(),
        }
    }

    #[test]
    fn serializes_with_fixed_key_order() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert_eq!(
            json,
            r#"{"device":"/dev/disk1s1","size":500000000,"used":200000000,"available":300000000,"use":"40%","mount":"/"}"#
        );
    }

    #[test]
    fn empty_set_serializes_to_empty_array() {
        let records: Vec<DiskUsageRecord> = Vec::new();
        assert_eq!(serde_json::to_string(&records).unwrap(), "[]");
    }
}
