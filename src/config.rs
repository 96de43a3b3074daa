use std::path::PathBuf;

/// Dataset location used when `CAMERA_DATASET` is unset.
pub const DEFAULT_DATASET_PATH: &str = "camera_dataset.csv";

/// Environment variable overriding the dataset location.
pub const DATASET_ENV: &str = "CAMERA_DATASET";

/// Startup settings.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// CSV file loaded at startup, relative to the working directory unless
    /// absolute.
    pub dataset_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let dataset_path = lookup(DATASET_ENV)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DATASET_PATH.to_string());
        Config {
            dataset_path: PathBuf::from(dataset_path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_relative_csv() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config.dataset_path, PathBuf::from("camera_dataset.csv"));
    }

    #[test]
    fn env_overrides_path() {
        let config = Config::from_lookup(|key| {
            (key == DATASET_ENV).then(|| "/data/cams.csv".to_string())
        });
        assert_eq!(config.dataset_path, PathBuf::from("/data/cams.csv"));
    }

    #[test]
    fn blank_env_falls_back() {
        let config = Config::from_lookup(|_| Some("  ".to_string()));
        assert_eq!(config.dataset_path, PathBuf::from(DEFAULT_DATASET_PATH));
    }
}
