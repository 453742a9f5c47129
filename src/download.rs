//! Download Trigger: hand a finished package to the user as a named file.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use log::info;
use tempfile::NamedTempFile;

use crate::error::{Error, Result};
use crate::generate::GeneratedDocument;

/// Somewhere a generated package can be saved.
pub trait DownloadTarget {
    /// Save `data` as `filename`, returning where it landed.
    fn save(&self, filename: &str, data: &[u8]) -> Result<PathBuf>;
}

/// Saves into a directory.
///
/// The bytes are written to a temporary file in the same directory and
/// renamed into place, so a failed save never leaves a partial document.
#[derive(Debug, Clone)]
pub struct DirectoryTarget {
    dir: PathBuf,
}

impl DirectoryTarget {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl DownloadTarget for DirectoryTarget {
    fn save(&self, filename: &str, data: &[u8]) -> Result<PathBuf> {
        let name = Path::new(filename)
            .file_name()
            .filter(|name| name.len() == filename.len())
            .ok_or_else(|| {
                Error::Io(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("not a plain file name: {:?}", filename),
                ))
            })?;
        let dest = self.dir.join(name);

        // dropped (and deleted) on any early return
        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(data)?;
        tmp.as_file().sync_all()?;
        tmp.persist(&dest)?;

        info!("saved {} ({} bytes)", dest.display(), data.len());
        Ok(dest)
    }
}

/// Save a generated document under its conventional file name.
pub fn download(doc: &GeneratedDocument, target: &impl DownloadTarget) -> Result<PathBuf> {
    target.save(&doc.filename, &doc.data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::DocumentKind;

    fn sample() -> GeneratedDocument {
        GeneratedDocument {
            kind: DocumentKind::Vakalatnama,
            filename: "Vakalatnama_Rita_Dias.docx".to_string(),
            data: b"PK\x03\x04 test".to_vec(),
        }
    }

    #[test]
    fn test_save_into_directory() {
        let dir = tempfile::tempdir().unwrap();
        let target = DirectoryTarget::new(dir.path());
        let path = download(&sample(), &target).unwrap();

        assert_eq!(path, dir.path().join("Vakalatnama_Rita_Dias.docx"));
        assert_eq!(std::fs::read(&path).unwrap(), sample().data);
        // only the final file remains
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_overwrites_previous_download() {
        let dir = tempfile::tempdir().unwrap();
        let target = DirectoryTarget::new(dir.path());
        target.save("a.docx", b"old").unwrap();
        target.save("a.docx", b"new").unwrap();
        assert_eq!(std::fs::read(dir.path().join("a.docx")).unwrap(), b"new");
    }

    #[test]
    fn test_rejects_paths() {
        let dir = tempfile::tempdir().unwrap();
        let target = DirectoryTarget::new(dir.path());
        assert!(target.save("../escape.docx", b"x").is_err());
        assert!(target.save("", b"x").is_err());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let target = DirectoryTarget::new(dir.path().join("missing"));
        let err = target.save("a.docx", b"x").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
