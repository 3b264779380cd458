use thiserror::Error;

#[derive(Error, Debug)]
pub enum KioskError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid argument for '{field}' ({value}): {reason}")]
    InvalidArgument {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Subscriber '{subscriber}' failed to handle notification: {message}")]
    SubscriberFailed { subscriber: String, message: String },

    #[error("Output sink error: {message}")]
    SinkError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Notification,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl KioskError {
    pub fn invalid_argument(
        field: impl Into<String>,
        value: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidArgument {
            field: field.into(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidArgument { .. } => ErrorCategory::Input,
            Self::ConfigError { .. } | Self::ConfigValidationError { .. } => {
                ErrorCategory::Configuration
            }
            Self::SubscriberFailed { .. } => ErrorCategory::Notification,
            Self::IoError(_) | Self::SerializationError(_) | Self::SinkError { .. } => {
                ErrorCategory::Output
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::SubscriberFailed { .. } => ErrorSeverity::Medium,
            Self::InvalidArgument { .. }
            | Self::ConfigError { .. }
            | Self::ConfigValidationError { .. } => ErrorSeverity::High,
            Self::IoError(_) | Self::SerializationError(_) | Self::SinkError { .. } => {
                ErrorSeverity::Critical
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::InvalidArgument { .. } => {
                "Check base costs are finite and non-negative and modifier deltas are finite"
            }
            Self::ConfigError { .. } | Self::ConfigValidationError { .. } => {
                "Check the menu file exists and follows the [base] / [[modifiers]] layout"
            }
            Self::SubscriberFailed { .. } => {
                "Inspect the failing subscriber; later subscribers were not notified"
            }
            Self::IoError(_) | Self::SinkError { .. } => {
                "Make sure standard output is writable"
            }
            Self::SerializationError(_) => "Report this as a bug",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::InvalidArgument { field, reason, .. } => {
                format!("Invalid value for {}: {}", field, reason)
            }
            Self::ConfigError { message } => format!("Could not load configuration: {}", message),
            Self::ConfigValidationError { field, message } => {
                format!("Configuration field {} is invalid: {}", field, message)
            }
            Self::SubscriberFailed { subscriber, .. } => {
                format!("{} could not process the product update", subscriber)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, KioskError>;
