//! Error types and error handling for the scanner.
//!
//! This module defines the error types used when loading a source file.
//! It includes:
//!
//! - An error structure carrying the offending file path
//! - Specific error variants for missing, unreadable and non-UTF-8 files
//! - Error formatting and display functionality
//! - Helpful error messages and suggestions
//!
//! Tag mismatches are deliberately not errors: they are findings, reported
//! as part of the scan output while scanning continues.

pub mod errors;

#[cfg(test)]
mod tests;
