use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub command: CommandConfig,

    #[serde(default)]
    pub filters: FiltersConfig,

    #[serde(default)]
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandConfig {
    /// Disk-free binary to invoke. "-P" is always prepended.
    pub df_path: String,
    /// Extra arguments passed after "-P" (e.g. ["-k"] to force 1K blocks).
    #[serde(default)]
    pub extra_args: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FiltersConfig {
    /// Glob-suffix patterns of devices to drop (e.g. "tmpfs", "/dev/loop*").
    /// Empty = report everything df reports.
    #[serde(default)]
    pub exclude_devices: Vec<String>,
    /// Mount-point prefixes to drop (e.g. "/snap", "/run/user").
    #[serde(default)]
    pub exclude_mounts: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Bytes per df block, used only when rendering the --table view.
    pub block_size: u64,
}

impl FiltersConfig {
    pub fn excludes(&self, device: &str, mount: &str) -> bool {
        let device_hit = self.exclude_devices.iter().any(|pat| {
            if let Some(p) = pat.strip_suffix('*') { device.starts_with(p) }
            else { pat == device }
        });
        device_hit || self.exclude_mounts.iter().any(|p| mount.starts_with(p.as_str()))
    }
}

// ── Defaults ─────────────────────────────────────────────────────────

impl Default for Config {
    fn default() -> Self {
        Self {
            command: CommandConfig::default(),
            filters: FiltersConfig::default(),
            report:  ReportConfig::default(),
        }
    }
}

impl Default for CommandConfig {
    fn default() -> Self {
        Self { df_path: "df".into(), extra_args: Vec::new() }
    }
}

impl Default for FiltersConfig {
    fn default() -> Self {
        Self { exclude_devices: Vec::new(), exclude_mounts: Vec::new() }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self { block_size: 1024 }
    }
}

// ── Load / Save ───────────────────────────────────────────────────────

impl Config {
    pub fn load() -> Self {
        match try_load() {
            Ok(c)  => c,
            Err(_) => {
                // Write defaults on first run (best-effort)
                let _ = try_write_defaults();
                Config::default()
            }
        }
    }

    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("dfjson").join("dfjson.toml"))
    }
}

fn try_load() -> Result<Config> {
    let path = Config::config_path().ok_or_else(|| anyhow::anyhow!("no config dir"))?;
    let text = fs::read_to_string(path)?;
    let cfg: Config = toml::from_str(&text)?;
    Ok(cfg)
}

fn try_write_defaults() -> Result<()> {
    let path = Config::config_path().ok_or_else(|| anyhow::anyhow!("no config dir"))?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let text = toml::to_string_pretty(&Config::default())?;
    fs::write(path, format!("# dfjson configuration\n# Generated on first run — edit freely\n\n{}", text))?;
    Ok(())
}
