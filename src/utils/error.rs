use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("Division by zero: cannot divide {dividend} by 0")]
    DivisionByZero { dividend: f64 },

    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Invalid date '{value}': {reason}")]
    InvalidDate { value: String, reason: String },

    #[error("Invalid argument '{name}': {reason}")]
    InvalidArgument { name: String, reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    System,
    Processing,
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
            DemoError::DivisionByZero { .. }
            | DemoError::InvalidUrl { .. }
            | DemoError::InvalidDate { .. }
            | DemoError::InvalidArgument { .. } => ErrorCategory::Input,
            DemoError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            DemoError::IoError(_) => ErrorCategory::System,
            DemoError::SerializationError(_) | DemoError::ProcessingError { .. } => {
                ErrorCategory::Processing
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Configuration | ErrorCategory::Processing => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            DemoError::DivisionByZero { .. } => "Check the divisor before calling divide",
            DemoError::InvalidUrl { .. } => "Include a scheme, e.g. https://example.com",
            DemoError::InvalidDate { .. } => "Use the YYYY-MM-DD format, e.g. 2024-01-31",
            DemoError::InvalidArgument { .. } => "Check the argument range and try again",
            DemoError::IoError(_) => "Check that the path exists and is accessible",
            DemoError::SerializationError(_) => "Make sure the input is valid JSON",
            DemoError::InvalidConfigValueError { .. } => "Review the command line arguments",
            DemoError::ProcessingError { .. } => "Inspect the input file contents",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Input => format!("Invalid input: {}", self),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
            ErrorCategory::Processing => format!("Processing failed: {}", self),
        }
    }

    /// 依嚴重程度決定程式結束碼，永遠非零
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, DemoError>;
