use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{
    errors::{HeraldError, HeraldErrorKind},
    herald_err,
    pipeline::PipelineDefaults,
    protocol::SocketData,
};

pub const CONFIG_FILE: &str = "config.json";

fn get_xdg_dirs() -> xdg::BaseDirectories {
    xdg::BaseDirectories::with_prefix("herald")
}

/// Returns `$XDG_CONFIG_HOME/herald`. The directory is not created.
pub fn get_config_dir() -> Result<PathBuf, HeraldError> {
    get_xdg_dirs()
        .get_config_home()
        .ok_or_else(|| herald_err!(HeraldErrorKind::DirRead, "Could not find config directory"))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct DaemonConfig {
    pub socket_path: PathBuf,
    /// How many dismissed events stay queryable.
    pub history_capacity: usize,
    /// Seconds, used when a sender leaves the expiry to the server.
    pub default_hide_timeout: i32,
    pub default_delete_timeout: i32,
    pub server_name: String,
    pub vendor: String,
}
impl Default for DaemonConfig {
    fn default() -> Self {
        Self {
            socket_path: PathBuf::from(SocketData::SOCKET_ADDR),
            history_capacity: 64,
            default_hide_timeout: 5,
            default_delete_timeout: 0,
            server_name: "herald-daemon".into(),
            vendor: "herald".into(),
        }
    }
}
impl DaemonConfig {
    /// Loads the user config, falling back to defaults when no file exists.
    pub fn load() -> Result<Self, HeraldError> {
        let path = get_config_dir()?.join(CONFIG_FILE);
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self, HeraldError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let file =
            File::open(path).map_err(|e| herald_err!(HeraldErrorKind::FileOpen, e.to_string()))?;
        let reader = BufReader::new(file);

        serde_json::from_reader::<_, Self>(reader)
            .map_err(|e| herald_err!(HeraldErrorKind::Deserialize, e.to_string()))
    }

    pub fn pipeline_defaults(&self) -> PipelineDefaults {
        PipelineDefaults {
            hide_timeout: self.default_hide_timeout,
            delete_timeout: self.default_delete_timeout,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("herald-{}-{}", std::process::id(), name));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn missing_file_yields_defaults() {
        let path = std::env::temp_dir().join("herald-definitely-missing.json");
        assert_eq!(DaemonConfig::load_from(&path).unwrap(), DaemonConfig::default());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let path = scratch_file("partial.json", r#"{ "default_hide_timeout": 12 }"#);
        let config = DaemonConfig::load_from(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.default_hide_timeout, 12);
        assert_eq!(config.history_capacity, 64);
        assert_eq!(
            config.pipeline_defaults(),
            PipelineDefaults {
                hide_timeout: 12,
                delete_timeout: 0
            }
        );
    }

    #[test]
    fn malformed_file_is_an_error() {
        let path = scratch_file("broken.json", "{ not json");
        let err = DaemonConfig::load_from(&path).unwrap_err();
        std::fs::remove_file(&path).ok();

        assert_eq!(err.kind, HeraldErrorKind::Deserialize);
    }
}
