//! Error types for synthesis and encoding.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for synthesis operations.
pub type SynthResult<T> = Result<T, SynthError>;

/// Errors that can occur while synthesizing or encoding a sound.
#[derive(Debug, Error)]
pub enum SynthError {
    /// Malformed synthesis or encoding request.
    #[error("invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Parameter name.
        name: String,
        /// Error message.
        message: String,
    },

    /// Destination could not be written.
    #[error("failed to write {}: {source}", path.display())]
    Io {
        /// Destination path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Variant name not present in the preset table.
    #[error("unknown sound variant '{name}'")]
    UnknownVariant {
        /// The unrecognised name.
        name: String,
    },
}

impl SynthError {
    /// Creates an invalid parameter error.
    pub fn invalid_param(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Creates an I/O error bound to a destination path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Stable error code for reporting.
    pub fn code(&self) -> &'static str {
        match self {
            SynthError::InvalidParameter { .. } => "SYNTH_001",
            SynthError::Io { .. } => "SYNTH_002",
            SynthError::UnknownVariant { .. } => "SYNTH_003",
        }
    }

    /// Error category for grouping related errors.
    pub fn category(&self) -> &'static str {
        "synth"
    }
}

/// Fails with `InvalidParameter` unless `value` is finite and strictly positive.
pub(crate) fn require_positive(name: &str, value: f64) -> SynthResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SynthError::invalid_param(
            name,
            format!("must be a finite value > 0, got {}", value),
        ))
    }
}

/// Fails with `InvalidParameter` unless `value` is finite and not negative.
pub(crate) fn require_non_negative(name: &str, value: f64) -> SynthResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(SynthError::invalid_param(
            name,
            format!("must be a finite value >= 0, got {}", value),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_param_helper() {
        let err = SynthError::invalid_param("volume", "must be between 0 and 1");
        assert!(err.to_string().contains("volume"));
        assert!(err.to_string().contains("between 0 and 1"));
        assert_eq!(err.code(), "SYNTH_001");
    }

    #[test]
    fn test_io_error_mentions_path() {
        let err = SynthError::io(
            "/nowhere/thock.wav",
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        );
        assert!(err.to_string().contains("thock.wav"));
        assert_eq!(err.code(), "SYNTH_002");
        assert_eq!(err.category(), "synth");
    }

    #[test]
    fn test_require_positive() {
        assert!(require_positive("decay_rate", 35.0).is_ok());
        assert!(require_positive("decay_rate", 0.0).is_err());
        assert!(require_positive("decay_rate", -1.0).is_err());
        assert!(require_positive("decay_rate", f64::NAN).is_err());
        assert!(require_positive("decay_rate", f64::INFINITY).is_err());
    }

    #[test]
    fn test_require_non_negative() {
        assert!(require_non_negative("weight", 0.0).is_ok());
        assert!(require_non_negative("weight", 0.5).is_ok());
        assert!(require_non_negative("weight", -0.1).is_err());
    }
}
