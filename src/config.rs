use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub bind: String,
    pub port: u16,
    /// Directory served as static assets; `index.html` inside it answers `GET /`.
    pub public_dir: PathBuf,
    /// Directory holding the submission log, created on first write.
    pub data_dir: PathBuf,
    pub submissions_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            bind: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            public_dir: PathBuf::from("public"),
            data_dir: PathBuf::from("data"),
            submissions_file: "submissions.log".to_string(),
        }
    }
}

impl Config {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }

    pub fn submissions_path(&self) -> PathBuf {
        self.data_dir.join(&self.submissions_file)
    }

    pub fn index_path(&self) -> PathBuf {
        self.public_dir.join("index.html")
    }
}

pub fn load_config() -> Config {
    load_config_from(Path::new("config.toml"))
}

pub fn load_config_from(path: &Path) -> Config {
    match fs::read_to_string(path) {
        Ok(content) => toml::from_str(&content).unwrap_or_else(|e| {
            tracing::warn!("Failed to parse {}: {e}, using defaults", path.display());
            Config::default()
        }),
        Err(_) => {
            tracing::info!("No {} found, using defaults", path.display());
            Config::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load_config_from(&dir.path().join("nope.toml"));
        assert_eq!(cfg.port, DEFAULT_PORT);
        assert_eq!(cfg.submissions_path(), PathBuf::from("data/submissions.log"));
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "data_dir = \"/var/lib/tunnelcheck\"\n").unwrap();

        let cfg = load_config_from(&path);
        assert_eq!(cfg.port, DEFAULT_PORT);
        assert_eq!(cfg.bind, "0.0.0.0");
        assert_eq!(
            cfg.submissions_path(),
            PathBuf::from("/var/lib/tunnelcheck/submissions.log")
        );
    }

    #[test]
    fn malformed_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "port = \"not a number\"").unwrap();

        assert_eq!(load_config_from(&path).port, DEFAULT_PORT);
    }
}
