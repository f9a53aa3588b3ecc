#![allow(clippy::module_name_repetitions)]

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    pub runit: RunitConfig,
}

/// Locations of the runit control tree. These differ across distributions
/// (`/var/service` on Void, `/run/runit/service` on Artix, `/etc/service`
/// on Debian-style installs), so they can be overridden.
#[derive(Debug, Serialize, Deserialize)]
pub struct RunitConfig {
    /// Runtime service tree scanned by `runsvdir`.
    pub service_dir: PathBuf,

    /// Service definition directories.
    pub sv_dir: PathBuf,

    /// Control file whose owner-execute bit marks a shutdown in progress.
    pub stopit_path: PathBuf,
}

impl Default for RunitConfig {
    fn default() -> Self {
        Self {
            service_dir: PathBuf::from("/var/service"),
            sv_dir: PathBuf::from("/etc/sv"),
            stopit_path: PathBuf::from("/etc/runit/stopit"),
        }
    }
}

impl Config {
    pub fn default_path() -> PathBuf {
        PathBuf::from("/etc/svcmgr/config.yml")
    }
}
