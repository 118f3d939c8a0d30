use crate::models::record::DiskUsageRecord;
use crate::util::human::fmt_bytes;

/// Render the parsed records as a human-readable usage table.
///
/// `block_size` is the byte value of one df block (1024 unless df was
/// invoked with a flag that changes it).
pub fn render(records: &[DiskUsageRecord], block_size: u64) -> String {
    let now = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
    let mut out = String::new();

    out.push_str("═══════════════════════════════════════════════\n");
    out.push_str(&format!("  Disk Usage — {}\n", now));
    out.push_str("═══════════════════════════════════════════════\n\n");

    out.push_str(&format!("── Filesystems ({}) ───────────────────────────\n", records.len()));
    out.push_str(&format!(
        "  {:<20} {:<20} {:>10} {:>10} {:>10} {:>6}\n",
        "Device", "Mount", "Size", "Used", "Avail", "Use%"
    ));
    out.push_str(&format!("  {}\n", "─".repeat(82)));
    for r in records {
        out.push_str(&format!(
            "  {:<20} {:<20} {:>10} {:>10} {:>10} {:>6}\n",
            r.device, r.mount,
            fmt_bytes(r.size * block_size),
            fmt_bytes(r.used * block_size),
            fmt_bytes(r.available * block_size),
            r.use_pct,
        ));
    }
    out.push('\n');
    out.push_str("═══════════════════════════════════════════════\n");
    out
}
