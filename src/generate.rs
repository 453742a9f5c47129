//! Record to `.docx` in one call.

use chrono::NaiveDate;
use log::debug;

use crate::clock::Clock;
use crate::docx::{assemble, body_fragments, Compression};
use crate::error::Result;
use crate::record::{DocumentKind, DocumentRecord};
use crate::render::Template;

/// Options for document generation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Source of today's date for blank dates and file-name stamps
    pub clock: Clock,

    /// ZIP compression for the package parts
    pub compression: Compression,
}

impl GenerateOptions {
    /// Create options with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin today's date.
    pub fn with_today(mut self, date: NaiveDate) -> Self {
        self.clock = Clock::fixed(date);
        self
    }

    /// Use the given clock.
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Set the ZIP compression method.
    pub fn with_compression(mut self, compression: Compression) -> Self {
        self.compression = compression;
        self
    }
}

/// A finished package, ready for download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedDocument {
    pub kind: DocumentKind,
    pub filename: String,
    pub data: Vec<u8>,
}

impl GeneratedDocument {
    /// Package size in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Render and package a resolved record.
///
/// Builder and packaging errors are returned as-is; nothing is produced on
/// failure.
///
/// # Example
///
/// ```
/// use courtdocx::{generate, CertifiedCopyForm, GenerateOptions};
///
/// let options = GenerateOptions::new();
/// let form = CertifiedCopyForm {
///     court: Some("Civil Court".into()),
///     applicant: Some("Ravi Naik".into()),
///     ..Default::default()
/// };
/// let doc = generate(&form.resolve(&options.clock).into(), &options)?;
/// assert_eq!(doc.filename, "Certified_Copy_Ravi_Naik.docx");
/// assert!(doc.data.starts_with(b"PK"));
/// # Ok::<(), courtdocx::Error>(())
/// ```
pub fn generate(record: &DocumentRecord, options: &GenerateOptions) -> Result<GeneratedDocument> {
    let kind = record.kind();
    let geometry = record.geometry();
    let blocks = record.blocks(&options.clock);
    debug!("rendering {}: {} blocks", kind, blocks.len());

    let fragments = body_fragments(&blocks, &geometry)?;
    let data = assemble(fragments, geometry, options.compression)?;

    Ok(GeneratedDocument {
        kind,
        filename: record.filename(&options.clock),
        data,
    })
}

/// Parse the document-type tag and a form submitted as JSON, then generate.
pub fn generate_from_json(
    kind_tag: &str,
    json: &str,
    options: &GenerateOptions,
) -> Result<GeneratedDocument> {
    let kind: DocumentKind = kind_tag.parse()?;
    let record = DocumentRecord::from_json(kind, json, &options.clock)?;
    generate(&record, options)
}

/// Generate on the blocking pool so the calling task stays responsive.
#[cfg(feature = "async")]
pub async fn generate_async(
    record: DocumentRecord,
    options: GenerateOptions,
) -> Result<GeneratedDocument> {
    tokio::task::spawn_blocking(move || generate(&record, &options))
        .await
        .map_err(|e| crate::error::Error::Io(std::io::Error::other(e)))?
}
