use std::fmt::Display;

use thiserror::Error;

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    path: String,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, path: String) -> Self {
        Error {
            internal_error: error_impl,
            path,
        }
    }

    pub fn get_path(&self) -> &str {
        &self.path
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::FileNotFound { .. } => "FileNotFound",
            ErrorImpl::FileUnreadable { .. } => "FileUnreadable",
            ErrorImpl::InvalidEncoding { .. } => "InvalidEncoding",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::FileNotFound { path } => ErrorTip::Suggestion(format!(
                "No file found at `{}`, is the path relative to the current directory?",
                path
            )),
            ErrorImpl::FileUnreadable { reason, .. } => {
                ErrorTip::Suggestion(format!("Failed to read file: {}", reason))
            }
            ErrorImpl::InvalidEncoding { .. } => ErrorTip::Suggestion(String::from(
                "Only UTF-8 encoded source files can be scanned",
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone)]
pub enum ErrorImpl {
    #[error("file not found: {path:?}")]
    FileNotFound { path: String },
    #[error("file unreadable ({reason}): {path:?}")]
    FileUnreadable { path: String, reason: String },
    #[error("file is not valid UTF-8: {path:?}")]
    InvalidEncoding { path: String },
}
