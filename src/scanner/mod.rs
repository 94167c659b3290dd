//! Scanning module for the balance checker.
//!
//! This module contains the single-pass scanner that walks a source file
//! character by character and tracks syntax balance. It handles:
//!
//! - Bracket counting for braces, parentheses and square brackets
//! - Open/close tracking for JSX-style tags, including self-closing tags
//! - String literals and comments, inside which nothing is counted
//! - Mismatch diagnostics when a closing tag does not match the open one

pub mod result;
pub mod scanner;
