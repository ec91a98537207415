//! Configuration loading from disk.

use std::path::Path;
use std::fs;
use serde::de::DeserializeOwned;
use crate::config::schema::LoaderConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 { write!(f, ", ")?; }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Validation(_) => None,
        }
    }
}

/// Load and validate loader options from a TOML file.
pub fn load_config<O>(path: &Path) -> Result<LoaderConfig<O>, ConfigError>
where
    O: DeserializeOwned + Default,
{
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: LoaderConfig<O> = toml::from_str(&content).map_err(ConfigError::Parse)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    tracing::debug!(
        path = %path.display(),
        white_list = ?config.directory_white_list,
        black_list = ?config.directory_black_list,
        "Loader configuration loaded"
    );

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_valid_config() {
        let file = write_config(
            r#"
            directory_white_list = ["auth", "account"]
            routes_file_name_pattern = 'api\.rs'
            "#,
        );

        let config: LoaderConfig = load_config(file.path()).unwrap();
        assert_eq!(config.directory_white_list, vec!["auth", "account"]);
        assert_eq!(config.routes_file_name_pattern, r"api\.rs");
    }

    #[test]
    fn test_missing_file() {
        let result = load_config::<toml::Table>(Path::new("/definitely/not/here.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_parse_error() {
        let file = write_config("directory_white_list = \"auth\"");
        let result = load_config::<toml::Table>(file.path());
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_validation_error() {
        let file = write_config(r#"directory_white_list = ["../etc"]"#);
        let err = load_config::<toml::Table>(file.path()).unwrap_err();

        assert!(matches!(err, ConfigError::Validation(ref errors) if errors.len() == 1));
        assert!(err.to_string().starts_with("Validation failed: "));
    }
}
