//! Error types for mhswitch.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a switch style.
#[derive(Debug, Error)]
pub enum StyleError {
    /// The style file could not be read.
    #[error("failed to read style file {}: {source}", path.display())]
    Io {
        /// File that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// YAML syntax error, unknown field, or invalid value.
    #[error("invalid YAML style: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// TOML syntax error, unknown field, or invalid value.
    #[error("invalid TOML style: {0}")]
    Toml(#[from] toml::de::Error),

    /// The file extension does not name a supported format.
    #[error("unsupported style format {extension:?} (expected yaml, yml or toml)")]
    UnsupportedFormat {
        /// Extension as found on the path, if any.
        extension: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_error_io_display() {
        let err = StyleError::Io {
            path: PathBuf::from("/tmp/missing.yaml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/tmp/missing.yaml"));
        assert!(msg.contains("file not found"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_style_error_unsupported_display() {
        let err = StyleError::UnsupportedFormat {
            extension: Some("json".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "unsupported style format Some(\"json\") (expected yaml, yml or toml)"
        );
    }

    #[test]
    fn test_style_error_from_yaml() {
        let yaml_err = serde_yaml_ng::from_str::<u32>("not a number").unwrap_err();
        let err: StyleError = yaml_err.into();
        assert!(matches!(err, StyleError::Yaml(_)));
        assert!(err.to_string().starts_with("invalid YAML style"));
    }

    #[test]
    fn test_style_error_from_toml() {
        let toml_err = toml::from_str::<toml::Table>("= broken").unwrap_err();
        let err: StyleError = toml_err.into();
        assert!(matches!(err, StyleError::Toml(_)));
        assert!(err.to_string().starts_with("invalid TOML style"));
    }
}
