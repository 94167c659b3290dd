#![allow(clippy::module_inception)]

use std::{fs, io, path::Path};

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};

pub mod errors;
pub mod report;
pub mod scanner;

/// Reads the full UTF-8 text of the file to scan. Any failure here is fatal
/// to the run: there is no partial report without source text.
pub fn read_source(path: &Path) -> Result<String, Error> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(content),
        Err(err) => {
            let path_string = path.to_string_lossy().to_string();

            let internal = match err.kind() {
                io::ErrorKind::NotFound => ErrorImpl::FileNotFound {
                    path: path_string.clone(),
                },
                io::ErrorKind::InvalidData => ErrorImpl::InvalidEncoding {
                    path: path_string.clone(),
                },
                _ => ErrorImpl::FileUnreadable {
                    path: path_string.clone(),
                    reason: err.to_string(),
                },
            };

            Err(Error::new(internal, path_string))
        }
    }
}

pub fn display_error(error: Error) {
    /*
        Error: FileNotFound (tip)
        -> missing.jsx
    */

    if let ErrorTip::None = error.get_tip() {
        println!("Error: {}", error.get_error_name());
    } else {
        println!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    println!("-> {}", error.get_path());
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    #[test]
    fn test_read_source_fixture() {
        let source = super::read_source(Path::new("tests/fixture.jsx")).unwrap();

        assert!(source.starts_with("export function Greeting"));
    }

    #[test]
    fn test_read_source_missing_file() {
        let error = super::read_source(Path::new("tests/does_not_exist.jsx")).unwrap_err();

        assert_eq!(error.get_error_name(), "FileNotFound");
        assert_eq!(error.get_path(), "tests/does_not_exist.jsx");
    }
}
