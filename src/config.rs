use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer};

use crate::mac::{MacAddress, MacError};
use crate::sender::{TargetEndpoint, DEFAULT_TARGET_IP, DEFAULT_WOL_PORT};

pub const DEFAULT_CONFIG_PATH: &str = "~/.config/wol-send/targets.yml";

/// Shown when the target list is empty.
pub const EXAMPLE_CONFIG: &str = "\
targets:
  - name: My Computer
    mac: \"AA:BB:CC:DD:EE:FF\"
    ip: 192.168.1.255
    port: 9
";

/// Deserializes an explicit null the same way as an absent field: as T::default.
pub fn deserialize_null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    T: Default + Deserialize<'de>,
    D: Deserializer<'de>,
{
    Ok(Option::deserialize(deserializer)?.unwrap_or_default())
}

fn default_ip() -> String {
    DEFAULT_TARGET_IP.to_string()
}

fn default_port() -> u16 {
    DEFAULT_WOL_PORT
}

/// A named machine that can be woken.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Target {
    pub name: String,
    pub mac: String,

    #[serde(default = "default_ip")]
    pub ip: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

impl Target {
    pub fn mac(&self) -> Result<MacAddress, MacError> {
        MacAddress::normalize(&self.mac)
    }

    pub fn endpoint(&self) -> TargetEndpoint {
        TargetEndpoint::new(self.ip.clone(), self.port)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub targets: Vec<Target>,
}

impl Config {
    pub fn from_yaml(s: &str) -> Result<Self> {
        Ok(serde_yml::from_str(s)?)
    }

    /// Loads the target list. A missing file is an empty list, not an error.
    pub fn load(path: &Path) -> Result<Self> {
        let content = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("no config at '{}', using empty target list", path.display());
                return Ok(Self::default());
            },
            Err(e) => {
                return Err(e).with_context(|| format!("unable to read config '{}'", path.display()));
            },
        };

        let cfg = Self::from_yaml(&content)
            .with_context(|| format!("unable to parse config '{}'", path.display()))?;
        log::debug!("loaded {} target(s) from '{}'", cfg.targets.len(), path.display());
        Ok(cfg)
    }

    pub fn find(&self, name: &str) -> Option<&Target> {
        self.targets.iter().find(|t| t.name.eq_ignore_ascii_case(name))
    }
}

/// Expands a leading `~` in a config path.
pub fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).into_owned())
}
