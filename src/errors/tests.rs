//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::FileNotFound {
            path: "missing.jsx".to_string(),
        },
        "missing.jsx".to_string(),
    );

    assert_eq!(error.get_error_name(), "FileNotFound");
}

#[test]
fn test_error_path() {
    let error = Error::new(
        ErrorImpl::FileUnreadable {
            path: "locked.jsx".to_string(),
            reason: "permission denied".to_string(),
        },
        "locked.jsx".to_string(),
    );

    assert_eq!(error.get_path(), "locked.jsx");
}

#[test]
fn test_file_unreadable_error() {
    let error = Error::new(
        ErrorImpl::FileUnreadable {
            path: "locked.jsx".to_string(),
            reason: "permission denied".to_string(),
        },
        "locked.jsx".to_string(),
    );

    assert_eq!(error.get_error_name(), "FileUnreadable");
}

#[test]
fn test_invalid_encoding_error() {
    let error = Error::new(
        ErrorImpl::InvalidEncoding {
            path: "binary.jsx".to_string(),
        },
        "binary.jsx".to_string(),
    );

    assert_eq!(error.get_error_name(), "InvalidEncoding");
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::FileNotFound {
            path: "missing.jsx".to_string(),
        },
        "missing.jsx".to_string(),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(_) => (),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_error_impl_display() {
    let inner = ErrorImpl::InvalidEncoding {
        path: "binary.jsx".to_string(),
    };

    assert_eq!(inner.to_string(), "file is not valid UTF-8: \"binary.jsx\"");
}
