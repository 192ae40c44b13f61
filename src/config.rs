use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Result, SubtransError};
use crate::language::{DEFAULT_DIRECTION, LanguagePair};

/// Configuration file looked up in the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "subtrans.toml";

fn default_binary_path() -> String {
    "trans".to_string()
}

fn default_warn_fanout_above() -> usize {
    256
}

fn default_direction() -> String {
    DEFAULT_DIRECTION.to_string()
}

fn default_log_directory() -> PathBuf {
    PathBuf::from(".subtrans").join("log")
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub translator: TranslatorConfig,
    pub defaults: DefaultsConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslatorConfig {
    /// Path to the translator binary (translate-shell's `trans`)
    pub binary_path: String,
    /// Arguments placed before the standard flags, e.g. `["-e", "bing"]`
    pub extra_args: Vec<String>,
    /// Run the translator through `sh -c` instead of executing it directly
    pub use_shell: bool,
    /// Maximum translator processes in flight; 0 means unbounded
    pub max_concurrent: usize,
    /// Unbounded runs dispatching more lines than this log a warning
    pub warn_fanout_above: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Direction used when none is given on the command line
    pub direction: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Also write logs to a daily-rotated file
    pub file: bool,
    pub directory: PathBuf,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            binary_path: default_binary_path(),
            extra_args: Vec::new(),
            use_shell: false,
            max_concurrent: 0,
            warn_fanout_above: default_warn_fanout_above(),
        }
    }
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            direction: default_direction(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: false,
            directory: default_log_directory(),
        }
    }
}

impl TranslatorConfig {
    /// Concurrency limit, `None` when unbounded
    pub fn concurrency_limit(&self) -> Option<usize> {
        (self.max_concurrent > 0).then_some(self.max_concurrent)
    }
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| SubtransError::Config(format!("Failed to read config file: {}", e)))?;

        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load `path` if given, else `subtrans.toml` from the working directory
    /// if it exists, else defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::from_file(DEFAULT_CONFIG_FILE),
            None => Ok(Self::default()),
        }
    }

    /// Default direction from the configuration
    pub fn default_language_pair(&self) -> Result<LanguagePair> {
        self.defaults.direction.parse().map_err(|_| {
            SubtransError::Config(format!(
                "Invalid default direction '{}' in configuration",
                self.defaults.direction
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.translator.binary_path, "trans");
        assert!(config.translator.extra_args.is_empty());
        assert!(!config.translator.use_shell);
        assert_eq!(config.translator.concurrency_limit(), None);
        assert_eq!(config.default_language_pair().unwrap(), LanguagePair::default());
        assert!(!config.logging.file);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config = Config::from_toml(
            r#"
            [translator]
            binary_path = "/usr/local/bin/trans"
            max_concurrent = 8

            [defaults]
            direction = "de:en"
            "#,
        )
        .unwrap();

        assert_eq!(config.translator.binary_path, "/usr/local/bin/trans");
        assert_eq!(config.translator.concurrency_limit(), Some(8));
        assert_eq!(config.translator.warn_fanout_above, 256);
        assert_eq!(config.default_language_pair().unwrap(), LanguagePair::new("de", "en"));
        assert_eq!(config.logging.directory, PathBuf::from(".subtrans").join("log"));
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config.translator.binary_path, "trans");
        assert_eq!(config.defaults.direction, "en:ru");
    }

    #[test]
    fn test_invalid_toml_is_toml_error() {
        let err = Config::from_toml("[translator\nbinary_path = 1").unwrap_err();
        assert!(matches!(err, SubtransError::Toml(_)));
    }

    #[test]
    fn test_invalid_default_direction() {
        let config = Config::from_toml("[defaults]\ndirection = \"EN:RU\"").unwrap();
        assert!(matches!(
            config.default_language_pair(),
            Err(SubtransError::Config(_))
        ));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[translator]\nextra_args = [\"-e\", \"bing\"]\nuse_shell = true").unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.translator.extra_args, vec!["-e", "bing"]);
        assert!(config.translator.use_shell);
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::from_file(dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, SubtransError::Config(_)));
    }
}
