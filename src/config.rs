// HWSHELL
// Written in 2026 by
//   The hwshell developers
//
// To the extent possible under law, the author(s) have dedicated all
// copyright and related and neighboring rights to this software to
// the public domain worldwide. This software is distributed without
// any warranty.
//
// You should have received a copy of the CC0 Public Domain Dedication
// along with this software.
// If not, see <http://creativecommons.org/publicdomain/zero/1.0/>.
//

//! Configuration
//!
//! Optional JSON file, read from `$HWSHELL_CONFIG` or `~/.hwshell.json`
//!

use anyhow::{self, Context};
use hwshell::constants;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::{env, fs, io};

/// Environment variable overriding the config file location
pub const CONFIG_ENV: &str = "HWSHELL_CONFIG";
/// Config file name, relative to the home directory
pub const CONFIG_FILE: &str = ".hwshell.json";

/// A USB device the console is willing to talk to
#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeviceId {
    pub vendor_id: u16,
    pub product_id: u16,
}

/// Console configuration
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Prompt shown before each line
    pub prompt: String,
    /// Devices to look for, in order of preference
    pub devices: Vec<DeviceId>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            prompt: ">".to_owned(),
            devices: vec![DeviceId {
                vendor_id: constants::hid::trezor_one::VENDOR_ID,
                product_id: constants::hid::trezor_one::PRODUCT_ID,
            }],
        }
    }
}

impl Config {
    /// Read the config file, falling back to defaults if there is none
    pub fn load() -> anyhow::Result<Config> {
        let path = match env::var_os(CONFIG_ENV) {
            Some(path) => PathBuf::from(path),
            None => match home::home_dir() {
                Some(home) => home.join(CONFIG_FILE),
                None => {
                    log::debug!("no home directory, using default config");
                    return Ok(Config::default());
                }
            },
        };
        Config::from_file(&path)
    }

    /// Read a specific config file, falling back to defaults if it does not exist
    pub fn from_file(path: &Path) -> anyhow::Result<Config> {
        let json = match fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("no config at {}, using defaults", path.display());
                return Ok(Config::default());
            }
            Err(e) => {
                return Err(e).with_context(|| format!("reading config {}", path.display()))
            }
        };
        let config = serde_json::from_str(&json)
            .with_context(|| format!("parsing config {}", path.display()))?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// The devices to look for as `(vendor ID, product ID)` pairs
    pub fn device_ids(&self) -> Vec<(u16, u16)> {
        self.devices
            .iter()
            .map(|dev| (dev.vendor_id, dev.product_id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.prompt, ">");
        assert_eq!(config.device_ids(), vec![(0x534c, 0x0001)]);
    }

    #[test]
    fn partial() {
        let config: Config = serde_json::from_str(
            r#"{ "devices": [ { "vendor_id": 11044, "product_id": 1 } ] }"#,
        )
        .unwrap();
        assert_eq!(config.prompt, ">");
        assert_eq!(
            config.device_ids(),
            vec![(
                constants::hid::keepkey::VENDOR_ID,
                constants::hid::keepkey::PRODUCT_ID,
            )],
        );
    }

    #[test]
    fn unknown_fields() {
        assert!(serde_json::from_str::<Config>(r#"{ "promt": "$" }"#).is_err());
    }

    #[test]
    fn missing_file() {
        let config = Config::from_file(Path::new("/nonexistent/hwshell/config.json")).unwrap();
        assert_eq!(config, Config::default());
    }
}
