use crate::collectors::runner::CommandRunner;
use crate::models::record::DiskUsageRecord;
use anyhow::Result;

/// POSIX-portable mode: fixed column layout, no line-wrapping of long
/// device names, one header line then one line per mounted filesystem.
pub const DF_ARGS: &[&str] = &["-P"];

/// Run the disk-free utility through `runner` and parse every data line.
///
/// Err means the utility could not be invoked or exited non-zero;
/// Ok(empty) means it ran and reported no filesystems. Callers that want
/// the legacy "everything degrades to []" behavior collapse the two.
pub fn collect(
    runner: &dyn CommandRunner,
    program: &str,
    extra_args: &[String],
) -> Result<Vec<DiskUsageRecord>> {
    let mut args: Vec<String> = DF_ARGS.iter().map(|a| a.to_string()).collect();
    args.extend_from_slice(extra_args);

    let text = runner.run(program, &args)?;
    Ok(parse_output(&text))
}

/// Parse df's tabular output, preserving source line order.
///
/// The first line is the header row and is always skipped, which keeps
/// the filter independent of the locale's column labels.
pub fn parse_output(text: &str) -> Vec<DiskUsageRecord> {
    text.lines().skip(1).filter_map(parse_line).collect()
}

/// One data line: exactly six whitespace-separated tokens
/// (device, size, used, available, use%, mount), capacities numeric.
/// Anything else is silently skipped.
fn parse_line(line: &str) -> Option<DiskUsageRecord> {
    let f: Vec<&str> = line.split_whitespace().collect();
    if f.len() != 6 { return None; }

    Some(DiskUsageRecord {
        device:    f[0].to_string(),
        size:      f[1].parse().ok()?,
        used:      f[2].parse().ok()?,
        available: f[3].parse().ok()?,
        use_pct:   f[4].to_string(),
        mount:     f[5].to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collectors::runner::testing::{FailingRunner, StaticRunner};

    const TWO_LINE: &str = "\
Filesystem     512-blocks      Used Available Capacity  Mounted on
/dev/disk1s1   500000000  200000000 300000000    40%    /
";

    #[test]
    fn parses_the_canonical_fixture() {
        let records = parse_output(TWO_LINE);
        assert_eq!(records.len(), 1);
        assert_eq!(
            serde_json::to_string(&records).unwrap(),
            r#"[{"device":"/dev/disk1s1","size":500000000,"used":200000000,"available":300000000,"use":"40%","mount":"/"}]"#
        );
    }

    #[test]
    fn preserves_source_order() {
        let text = "\
Filesystem 1024-blocks Used Available Capacity Mounted on
/dev/sdb1 100 10 90 10% /data
/dev/sda1 200 20 180 10% /
/dev/sda2 300 30 270 10% /home
";
        let records = parse_output(text);
        let mounts: Vec<&str> = records.iter().map(|r| r.mount.as_str()).collect();
        assert_eq!(mounts, ["/data", "/", "/home"]);
    }

    #[test]
    fn header_only_yields_nothing() {
        let text = "Filesystem 1024-blocks Used Available Capacity Mounted on\n";
        assert!(parse_output(text).is_empty());
        assert_eq!(serde_json::to_string(&parse_output(text)).unwrap(), "[]");
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert!(parse_output("").is_empty());
    }

    #[test]
    fn short_and_long_lines_are_skipped() {
        let text = "\
Filesystem 1024-blocks Used Available Capacity Mounted on
/dev/sda1 200 20 180 10%
/dev/sda2 300 30 270 10% /home extra
/dev/sda3 400 40 360 10% /var
";
        let records = parse_output(text);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].mount, "/var");
    }

    #[test]
    fn non_numeric_capacity_is_skipped() {
        let text = "\
Filesystem 1024-blocks Used Available Capacity Mounted on
/dev/sda1 none 20 180 10% /
/dev/sda2 300 30 270 10% /home
";
        let records = parse_output(text);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].device, "/dev/sda2");
        // Whatever df emits, the serialized array must stay strict JSON.
        let json = serde_json::to_string(&records).unwrap();
        serde_json::from_str::<serde_json::Value>(&json).unwrap();
    }

    #[test]
    fn collect_prepends_portable_flag() {
        struct ArgSpy;
        impl crate::collectors::runner::CommandRunner for ArgSpy {
            fn run(&self, program: &str, args: &[String]) -> anyhow::Result<String> {
                assert_eq!(program, "df");
                assert_eq!(args, ["-P", "-k"]);
                Ok(String::new())
            }
        }
        let records = collect(&ArgSpy, "df", &["-k".to_string()]).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn collect_is_idempotent_for_fixed_output() {
        let runner = StaticRunner(TWO_LINE);
        let a = collect(&runner, "df", &[]).unwrap();
        let b = collect(&runner, "df", &[]).unwrap();
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn collect_surfaces_invocation_failure() {
        assert!(collect(&FailingRunner, "df", &[]).is_err());
    }
}
