use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum CommandError {
    #[error("{message}")]
    Validation { code: String, message: String },

    #[error("{message}")]
    Infrastructure { code: String, message: String },
}

impl CommandError {
    pub fn validation(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn infrastructure(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Infrastructure {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn code(&self) -> &str {
        match self {
            Self::Validation { code, .. } | Self::Infrastructure { code, .. } => code,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Validation { message, .. } | Self::Infrastructure { message, .. } => message,
        }
    }
}
