use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// TCP keepalive settings (optional `[keepalive]` section in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeepaliveConfig {
    /// Turn `SO_KEEPALIVE` on or off.
    pub enabled: bool,
    /// Seconds of idle time before the first probe.
    #[serde(default)]
    pub idle_secs: Option<i32>,
    /// Seconds between probes.
    #[serde(default)]
    pub interval_secs: Option<i32>,
    /// Unanswered probes before the peer is considered dead.
    #[serde(default)]
    pub probe_count: Option<i32>,
}

impl Default for KeepaliveConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            idle_secs: Some(60),
            interval_secs: Some(10),
            probe_count: Some(5),
        }
    }
}

#[cfg(unix)]
impl KeepaliveConfig {
    /// Apply these settings to `sock`. OS errors are returned unchanged.
    pub fn apply<S: crate::keepalive::SetSockOpt + ?Sized>(&self, sock: &S) -> std::io::Result<()> {
        crate::keepalive::set_tcp_keepalive(
            sock,
            self.enabled,
            self.idle_secs,
            self.interval_secs,
            self.probe_count,
        )
    }
}

/// Global configuration loaded from `~/.config/netaddr/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetConfig {
    /// Port assumed when an authority string carries none.
    #[serde(default)]
    pub default_port: Option<u16>,
    /// Keepalive settings for long-lived connections.
    #[serde(default)]
    pub keepalive: KeepaliveConfig,
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("netaddr")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<NetConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = NetConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit file.
pub fn load_from(path: &Path) -> Result<NetConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    let cfg: NetConfig =
        toml::from_str(&data).with_context(|| format!("invalid config: {}", path.display()))?;
    Ok(cfg)
}
