//! Error types for the courtdocx library.

use std::io;
use thiserror::Error;

/// Result type alias for courtdocx operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or inspecting a document.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The requested document template is not one of the known kinds.
    #[error("Invalid document type: {0}")]
    InvalidDocumentType(String),

    /// A table whose rows do not share one shape.
    #[error("Malformed table: {0}")]
    MalformedTable(String),

    /// The submitted record could not be read.
    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    /// Error writing or reading the ZIP container.
    #[error("ZIP archive error: {0}")]
    ZipArchive(String),

    /// Error writing or parsing XML content.
    #[error("XML error: {0}")]
    XmlParse(String),

    /// A required package part is missing.
    #[error("Missing component: {0}")]
    MissingComponent(String),

    /// The package parts are present but wired incorrectly.
    #[error("Invalid package: {0}")]
    InvalidPackage(String),
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        Error::ZipArchive(err.to_string())
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::XmlParse(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::InvalidRecord(err.to_string())
    }
}

impl From<tempfile::PersistError> for Error {
    fn from(err: tempfile::PersistError) -> Self {
        Error::Io(err.error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidDocumentType("affidavit".to_string());
        assert_eq!(err.to_string(), "Invalid document type: affidavit");

        let err = Error::MalformedTable("row 2 has 1 cells, expected 2".to_string());
        assert_eq!(
            err.to_string(),
            "Malformed table: row 2 has 1 cells, expected 2"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::InvalidRecord(_)));
    }
}
