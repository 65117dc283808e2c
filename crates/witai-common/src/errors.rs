use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("path error: {0}")]
    PathError(String),
}

/// Failures of the persistent key-value store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store read error: {0}")]
    Read(String),

    #[error("store write error: {0}")]
    Write(String),

    #[error("store is corrupt: {0}")]
    Corrupt(String),
}

/// Why a CSS submission was rejected.
///
/// The two kinds are mutually exclusive and both recoverable by submitting
/// different CSS. The `Display` text is the message shown to the user; the
/// fields carry the detail for logs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("CSS contains potentially dangerous content and cannot be applied.")]
    DangerousContent { pattern: String },

    #[error("Invalid CSS syntax. Please check your code.")]
    InvalidSyntax { detail: String },
}

#[derive(Debug, thiserror::Error)]
pub enum StyleError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl StyleError {
    /// The validation failure, if this is one.
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            StyleError::Validation(e) => Some(e),
            StyleError::Store(_) => None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum WitaiError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error(transparent)]
    Style(#[from] StyleError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

impl From<StoreError> for WitaiError {
    fn from(e: StoreError) -> Self {
        WitaiError::Style(StyleError::Store(e))
    }
}

impl From<ValidationError> for WitaiError {
    fn from(e: ValidationError) -> Self {
        WitaiError::Style(StyleError::Validation(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("style.element_id is empty".into());
        assert_eq!(
            err.to_string(),
            "config validation error: style.element_id is empty"
        );
    }

    #[test]
    fn validation_error_display_is_user_message() {
        let err = ValidationError::DangerousContent {
            pattern: "javascript:".into(),
        };
        assert_eq!(
            err.to_string(),
            "CSS contains potentially dangerous content and cannot be applied."
        );

        let err = ValidationError::InvalidSyntax {
            detail: "unmatched '}' at byte 3".into(),
        };
        assert_eq!(err.to_string(), "Invalid CSS syntax. Please check your code.");
    }

    #[test]
    fn store_error_display() {
        let err = StoreError::Write("disk full".into());
        assert_eq!(err.to_string(), "store write error: disk full");

        let err = StoreError::Corrupt("expected object".into());
        assert_eq!(err.to_string(), "store is corrupt: expected object");
    }

    #[test]
    fn style_error_wraps_validation_transparently() {
        let err: StyleError = ValidationError::InvalidSyntax {
            detail: "x".into(),
        }
        .into();
        assert!(err.as_validation().is_some());
        assert_eq!(err.to_string(), "Invalid CSS syntax. Please check your code.");

        let err: StyleError = StoreError::Read("denied".into()).into();
        assert!(err.as_validation().is_none());
    }

    #[test]
    fn witai_error_from_store_nests_under_style() {
        let err: WitaiError = StoreError::Write("readonly".into()).into();
        assert!(matches!(err, WitaiError::Style(StyleError::Store(_))));
        assert!(err.to_string().contains("readonly"));
    }

    #[test]
    fn witai_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: WitaiError = io_err.into();
        assert!(matches!(err, WitaiError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn witai_error_from_config() {
        let err: WitaiError = ConfigError::ParseError("bad toml".into()).into();
        assert!(matches!(err, WitaiError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }
}
