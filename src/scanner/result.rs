use std::fmt::Display;

/// A structural finding reported during the scan. Not an error: scanning
/// continues uninterrupted and every finding ends up in the report.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Diagnostic {
    Mismatch {
        expected: Option<String>,
        found: String,
    },
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Diagnostic::Mismatch { expected, found } => write!(
                f,
                "Mismatched tag: expected closing for {}, found {}",
                expected.as_deref().unwrap_or("none"),
                found
            ),
        }
    }
}

/// Final snapshot of a scan. Counts may be negative: an excess of closers is
/// a legitimate imbalance signal. `open_tags` holds the tags still open at
/// end of input, innermost last.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct ScanResult {
    pub braces: i32,
    pub parens: i32,
    pub brackets: i32,
    pub open_tags: Vec<String>,
    pub diagnostics: Vec<Diagnostic>,
}

impl ScanResult {
    pub fn is_balanced(&self) -> bool {
        self.braces == 0
            && self.parens == 0
            && self.brackets == 0
            && self.open_tags.is_empty()
            && self.diagnostics.is_empty()
    }
}
