//! Error types and exit codes for zonenet
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (unknown zone, unreachable destination)

mod macros;

use thiserror::Error;

/// Exit codes for the zonenet CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - unknown zone, no route (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during zonenet operations
#[derive(Error, Debug)]
pub enum ZoneNetError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("unknown zone: {zone}")]
    UnknownZone { zone: String },

    #[error("no route from {from} to {to}")]
    Unreachable { from: String, to: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl ZoneNetError {
    /// Create an error for a zone missing from the graph
    pub fn unknown_zone(zone: impl std::fmt::Display) -> Self {
        ZoneNetError::UnknownZone {
            zone: zone.to_string(),
        }
    }

    /// Create an error for a destination that no route reaches
    pub fn unreachable(from: impl std::fmt::Display, to: impl std::fmt::Display) -> Self {
        ZoneNetError::Unreachable {
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        ZoneNetError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            ZoneNetError::UnknownFormat(_)
            | ZoneNetError::UsageError(_)
            | ZoneNetError::InvalidValue { .. } => ExitCode::Usage,

            ZoneNetError::UnknownZone { .. } | ZoneNetError::Unreachable { .. } => ExitCode::Data,

            ZoneNetError::Io(_)
            | ZoneNetError::Toml(_)
            | ZoneNetError::Json(_)
            | ZoneNetError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            ZoneNetError::UnknownFormat(_) => "unknown_format",
            ZoneNetError::UsageError(_) => "usage_error",
            ZoneNetError::InvalidValue { .. } => "invalid_value",
            ZoneNetError::UnknownZone { .. } => "unknown_zone",
            ZoneNetError::Unreachable { .. } => "unreachable",
            ZoneNetError::Io(_) => "io_error",
            ZoneNetError::Toml(_) => "toml_error",
            ZoneNetError::Json(_) => "json_error",
            ZoneNetError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for zonenet operations
pub type Result<T> = std::result::Result<T, ZoneNetError>;
