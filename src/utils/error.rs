use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("Integer overflow: {a} + {b} does not fit in i32")]
    Overflow { a: i32, b: i32 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("External tool '{program}' failed: {message}")]
    ToolError { program: String, message: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Arithmetic,
    Io,
    Data,
    Configuration,
    ExternalTool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl DemoError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DemoError::Overflow { .. } => ErrorCategory::Arithmetic,
            DemoError::IoError(_) => ErrorCategory::Io,
            DemoError::SerializationError(_) | DemoError::ValidationError { .. } => {
                ErrorCategory::Data
            }
            DemoError::ConfigValidationError { .. }
            | DemoError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            DemoError::ToolError { .. } => ErrorCategory::ExternalTool,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            DemoError::Overflow { .. } => ErrorSeverity::Medium,
            DemoError::ToolError { .. } => ErrorSeverity::Medium,
            DemoError::SerializationError(_) | DemoError::ValidationError { .. } => {
                ErrorSeverity::High
            }
            DemoError::ConfigValidationError { .. }
            | DemoError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            DemoError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            DemoError::Overflow { .. } => {
                "Use the wrapping 'add' or smaller operands".to_string()
            }
            DemoError::IoError(_) => {
                "Check that the file exists and that you have read/write permission".to_string()
            }
            DemoError::SerializationError(_) => {
                "Make sure the template is valid JSON".to_string()
            }
            DemoError::ConfigValidationError { field, .. }
            | DemoError::InvalidConfigValueError { field, .. } => {
                format!("Fix the '{}' setting in the config file or command line", field)
            }
            DemoError::ToolError { program, .. } => format!(
                "Make sure '{}' is installed and on PATH, or pass --size-tool",
                program
            ),
            DemoError::ValidationError { .. } => "Check the input data".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            DemoError::Overflow { a, b } => format!("{} + {} overflows a 32-bit integer", a, b),
            DemoError::IoError(e) => format!("File operation failed: {}", e),
            DemoError::SerializationError(e) => format!("Invalid JSON: {}", e),
            DemoError::ToolError { program, message } => {
                format!("Could not run '{}': {}", program, message)
            }
            other => other.to_string(),
        }
    }

    /// 依嚴重程度決定程式結束碼
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, DemoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overflow_classification() {
        let err = DemoError::Overflow { a: i32::MAX, b: 1 };
        assert_eq!(err.category(), ErrorCategory::Arithmetic);
        assert_eq!(err.exit_code(), 2);
        assert!(err.user_friendly_message().contains("2147483647 + 1"));
    }

    #[test]
    fn test_io_error_is_critical() {
        let err: DemoError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn test_config_error_suggestion_names_field() {
        let err = DemoError::InvalidConfigValueError {
            field: "presets.generator".to_string(),
            value: " ".to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert!(err.recovery_suggestion().contains("presets.generator"));
    }
}
