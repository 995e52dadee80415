use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_RETENTION_HOURS: u64 = 24;

/// Service configuration, resolved once at startup.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Directory for generated files.
    pub files_dir: PathBuf,
    /// Directory for uploaded assets (logos, images, templates).
    pub assets_dir: PathBuf,
    /// How long generated files are kept before the sweep removes them.
    pub retention: Duration,
    /// How often the retention sweep runs.
    pub sweep_interval: Duration,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            files_dir: PathBuf::from("generated_files"),
            assets_dir: PathBuf::from("assets"),
            retention: Duration::from_secs(DEFAULT_RETENTION_HOURS * 3600),
            sweep_interval: Duration::from_secs(3600),
        }
    }
}

impl ServiceConfig {
    /// Read configuration from the environment, falling back to defaults.
    /// Recognized variables: `FILES_DIR`, `ASSETS_DIR`,
    /// `FILE_RETENTION_HOURS`.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(dir) = std::env::var("FILES_DIR") {
            if !dir.trim().is_empty() {
                config.files_dir = PathBuf::from(dir);
            }
        }
        if let Ok(dir) = std::env::var("ASSETS_DIR") {
            if !dir.trim().is_empty() {
                config.assets_dir = PathBuf::from(dir);
            }
        }
        if let Ok(hours) = std::env::var("FILE_RETENTION_HOURS") {
            match hours.trim().parse::<u64>() {
                Ok(hours) if hours > 0 => {
                    config.retention = Duration::from_secs(hours * 3600);
                }
                _ => log::warn!("ignoring invalid FILE_RETENTION_HOURS value {hours:?}"),
            }
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_keep_files_for_a_day() {
        let config = ServiceConfig::default();
        assert_eq!(config.retention, Duration::from_secs(24 * 3600));
        assert_eq!(config.files_dir, PathBuf::from("generated_files"));
    }
}
