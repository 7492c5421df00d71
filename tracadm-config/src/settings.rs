//! Operator settings for the tracadm CLI.
//!
//! Settings live in `~/.tracadm/settings.yaml` (overridable with
//! `--config`) and carry the host table, the collateral-fragment
//! directory, and the temp directory used for config round trips:
//!
//! ```yaml
//! hosts:
//!   prod: trac-appliance
//! collateral_dir: ~/.tracadm/collateral
//! tmp_dir: /tmp
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use tracadm_core::error::{Result, TracError};

pub const DEFAULT_SETTINGS_PATH: &str = "~/.tracadm/settings.yaml";

/// The host key used when the operator does not pick one.
pub const DEFAULT_HOST: &str = "prod";

/// Root structure for the tracadm settings file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Logical host name -> ssh destination (a `.ssh/config` alias or
    /// `user@host` string).
    pub hosts: IndexMap<String, String>,

    /// Directory holding the collateral fragment files.
    pub collateral_dir: PathBuf,

    /// Directory for local working copies of remote config files.
    #[serde(default = "default_tmp_dir")]
    pub tmp_dir: PathBuf,
}

fn default_tmp_dir() -> PathBuf {
    PathBuf::from("/tmp")
}

impl Settings {
    /// Loads settings from `path`, or from the default location when no
    /// path is given. A missing or unreadable file is a typed error, not
    /// a process abort.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => PathBuf::from(shellexpand::tilde(DEFAULT_SETTINGS_PATH).into_owned()),
        };
        debug!("Loading settings from {}", path.display());

        let raw = fs::read_to_string(&path).map_err(|e| {
            TracError::Config(format!(
                "Unable to load settings file {} ({}). Have you created one?",
                path.display(),
                e
            ))
        })?;

        let mut settings: Settings = serde_yaml_ng::from_str(&raw)?;
        settings.collateral_dir = expand_path(&settings.collateral_dir);
        settings.tmp_dir = expand_path(&settings.tmp_dir);

        if settings.hosts.is_empty() {
            return Err(TracError::Config(
                "Settings file defines no hosts.".to_string(),
            ));
        }

        Ok(settings)
    }

    /// Resolves a logical host name to its ssh destination. Defaults to
    /// the `prod` entry.
    pub fn resolve_host(&self, name: Option<&str>) -> Result<&str> {
        let key = name.unwrap_or(DEFAULT_HOST);
        self.hosts
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| TracError::Config(format!("Unknown host `{}` in settings.", key)))
    }

    /// Path of a collateral fragment file.
    pub fn collateral_path(&self, file_name: &str) -> PathBuf {
        self.collateral_dir.join(file_name)
    }
}

fn expand_path(path: &Path) -> PathBuf {
    PathBuf::from(shellexpand::tilde(&path.to_string_lossy().into_owned()).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_settings(yaml: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(yaml.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_and_resolve_host() {
        let file = write_settings(
            "hosts:\n  prod: trac-appliance\n  staging: admin@10.0.0.2\ncollateral_dir: /srv/collateral\n",
        );
        let settings = Settings::load(Some(file.path())).unwrap();

        assert_eq!(settings.resolve_host(None).unwrap(), "trac-appliance");
        assert_eq!(
            settings.resolve_host(Some("staging")).unwrap(),
            "admin@10.0.0.2"
        );
        assert_eq!(settings.tmp_dir, PathBuf::from("/tmp"));
        assert_eq!(
            settings.collateral_path("trac.ini.components-chunk.txt"),
            PathBuf::from("/srv/collateral/trac.ini.components-chunk.txt")
        );
    }

    #[test]
    fn test_unknown_host_is_config_error() {
        let file = write_settings("hosts:\n  prod: appliance\ncollateral_dir: /c\n");
        let settings = Settings::load(Some(file.path())).unwrap();
        assert!(matches!(
            settings.resolve_host(Some("qa")),
            Err(TracError::Config(_))
        ));
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = Settings::load(Some(Path::new("/nonexistent/settings.yaml"))).unwrap_err();
        assert!(matches!(err, TracError::Config(_)));
        assert!(err.to_string().contains("Have you created one?"));
    }

    #[test]
    fn test_empty_hosts_rejected() {
        let file = write_settings("hosts: {}\ncollateral_dir: /c\n");
        assert!(Settings::load(Some(file.path())).is_err());
    }
}
