use config::{Config, ConfigError, Environment, File as ConfigFile};
use serde::Deserialize;
use std::path::Path;

/// Base name of the optional settings file (`SampleShifter.toml`, `.json`, ...).
pub const SETTINGS_FILE: &str = "SampleShifter";
pub const ENV_PREFIX: &str = "SAMPLE_SHIFTER";

/// Run defaults. Command-line flags take precedence over every field.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Category configuration used when `--config` is not given.
    pub category_config: Option<String>,
    /// Target directory used when `--target` is not given.
    pub default_target: Option<String>,
    pub normalize: bool,
    /// Exit non-zero when any copy fails during apply.
    pub fail_on_copy_error: bool,
    pub log_level: Option<String>,
    pub log_file: Option<String>,
}

pub fn load_configuration() -> Result<AppConfig, ConfigError> {
    load_configuration_from(Path::new(SETTINGS_FILE))
}

/// Layer `SAMPLE_SHIFTER_*` environment variables over the settings file at
/// `base` (extension optional, file optional).
pub fn load_configuration_from(base: &Path) -> Result<AppConfig, ConfigError> {
    let builder = Config::builder()
        .add_source(ConfigFile::with_name(&base.to_string_lossy()).required(false))
        .add_source(Environment::with_prefix(ENV_PREFIX))
        .build()?;
    builder.try_deserialize::<AppConfig>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let tmp = tempdir().unwrap();
        let config = load_configuration_from(&tmp.path().join(SETTINGS_FILE)).unwrap();
        assert!(config.category_config.is_none());
        assert!(config.default_target.is_none());
        assert!(!config.fail_on_copy_error);
    }

    #[test]
    fn test_reads_toml_file() {
        let tmp = tempdir().unwrap();
        fs::write(
            tmp.path().join("SampleShifter.toml"),
            "default_target = \"/music/sorted\"\nnormalize = true\nfail_on_copy_error = true\n",
        )
        .unwrap();

        let config = load_configuration_from(&tmp.path().join(SETTINGS_FILE)).unwrap();
        assert_eq!(config.default_target.as_deref(), Some("/music/sorted"));
        assert!(config.normalize);
        assert!(config.fail_on_copy_error);
    }
}
