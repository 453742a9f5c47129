//! Minimal OOXML package assembly.
//!
//! A WordprocessingML package needs exactly three parts to open cleanly in
//! Word, LibreOffice and Google Docs: the content-type declaration, the root
//! relationships pointing at the main document, and the main document itself.

use std::io::{Cursor, Write};

use log::debug;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

use super::writer::Fragment;
use crate::error::Result;
use crate::model::{PageGeometry, PAGE_SIZE_LETTER};
use crate::units::cm_to_twips;

/// Content-types part name.
pub const CONTENT_TYPES_PART: &str = "[Content_Types].xml";

/// Root relationships part name.
pub const ROOT_RELS_PART: &str = "_rels/.rels";

/// Main document part name.
pub const DOCUMENT_PART: &str = "word/document.xml";

/// WordprocessingML main namespace.
pub const WML_NAMESPACE: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// Content type of the main document part.
pub const DOCUMENT_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml";

/// Content type of relationship parts.
pub const RELS_CONTENT_TYPE: &str = "application/vnd.openxmlformats-package.relationships+xml";

/// Relationship type of the main document.
pub const OFFICE_DOCUMENT_REL: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

/// Header and footer distance written into `w:pgMar`, in twips.
const HEADER_FOOTER_TWIPS: u32 = 720;

/// ZIP compression for package parts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Compression {
    #[default]
    Deflated,
    Stored,
}

impl From<Compression> for CompressionMethod {
    fn from(c: Compression) -> Self {
        match c {
            Compression::Deflated => CompressionMethod::Deflated,
            Compression::Stored => CompressionMethod::Stored,
        }
    }
}

/// Builds a `.docx` package from body fragments.
///
/// # Example
///
/// ```
/// use courtdocx::docx::{paragraph_fragment, PackageBuilder};
/// use courtdocx::{PageGeometry, Paragraph};
///
/// let mut builder = PackageBuilder::new(PageGeometry::default());
/// builder.push(paragraph_fragment(&Paragraph::with_text("Hello"))?);
/// let bytes = builder.build()?;
/// assert!(bytes.starts_with(b"PK"));
/// # Ok::<(), courtdocx::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct PackageBuilder {
    geometry: PageGeometry,
    compression: Compression,
    fragments: Vec<Fragment>,
}

impl PackageBuilder {
    /// Create an empty package with the given page margins.
    pub fn new(geometry: PageGeometry) -> Self {
        Self {
            geometry,
            compression: Compression::default(),
            fragments: Vec::new(),
        }
    }

    /// Set the ZIP compression method.
    pub fn with_compression(mut self, compression: Compression) -> Self {
        self.compression = compression;
        self
    }

    /// Append one body fragment.
    pub fn push(&mut self, fragment: Fragment) {
        self.fragments.push(fragment);
    }

    /// Append several body fragments.
    pub fn extend(&mut self, fragments: impl IntoIterator<Item = Fragment>) {
        self.fragments.extend(fragments);
    }

    /// The `word/document.xml` part.
    pub fn document_xml(&self) -> String {
        let body_len: usize = self.fragments.iter().map(|f| f.as_str().len()).sum();
        let mut xml = String::with_capacity(body_len + 512);

        xml.push_str(XML_DECLARATION);
        xml.push_str(&format!(r#"<w:document xmlns:w="{}"><w:body>"#, WML_NAMESPACE));
        for fragment in &self.fragments {
            xml.push_str(fragment.as_str());
        }
        xml.push_str(&section_properties(&self.geometry));
        xml.push_str("</w:body></w:document>");
        xml
    }

    /// Zip the three parts into a package.
    pub fn build(&self) -> Result<Vec<u8>> {
        let document = self.document_xml();
        debug!(
            "assembling package: {} fragments, document.xml {} bytes",
            self.fragments.len(),
            document.len()
        );

        let options = SimpleFileOptions::default()
            .compression_method(self.compression.into())
            .last_modified_time(DateTime::default());

        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        for (name, content) in [
            (CONTENT_TYPES_PART, content_types_xml()),
            (ROOT_RELS_PART, root_relationships_xml()),
            (DOCUMENT_PART, document),
        ] {
            zip.start_file(name, options)?;
            zip.write_all(content.as_bytes())?;
        }

        let bytes = zip.finish()?.into_inner();
        debug!("package size: {} bytes", bytes.len());
        Ok(bytes)
    }
}

/// Assemble fragments into a package in one call.
pub fn assemble(
    fragments: Vec<Fragment>,
    geometry: PageGeometry,
    compression: Compression,
) -> Result<Vec<u8>> {
    let mut builder = PackageBuilder::new(geometry).with_compression(compression);
    builder.extend(fragments);
    builder.build()
}

/// The `[Content_Types].xml` part.
pub fn content_types_xml() -> String {
    format!(
        concat!(
            "{decl}",
            r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#,
            r#"<Default Extension="rels" ContentType="{rels}"/>"#,
            r#"<Default Extension="xml" ContentType="application/xml"/>"#,
            r#"<Override PartName="/{doc_part}" ContentType="{doc}"/>"#,
            "</Types>"
        ),
        decl = XML_DECLARATION,
        rels = RELS_CONTENT_TYPE,
        doc_part = DOCUMENT_PART,
        doc = DOCUMENT_CONTENT_TYPE,
    )
}

/// The `_rels/.rels` part.
pub fn root_relationships_xml() -> String {
    format!(
        concat!(
            "{decl}",
            r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
            r#"<Relationship Id="rId1" Type="{rel}" Target="{doc_part}"/>"#,
            "</Relationships>"
        ),
        decl = XML_DECLARATION,
        rel = OFFICE_DOCUMENT_REL,
        doc_part = DOCUMENT_PART,
    )
}

/// The single `w:sectPr` carrying page size and margins.
fn section_properties(geometry: &PageGeometry) -> String {
    format!(
        concat!(
            "<w:sectPr>",
            r#"<w:pgSz w:w="{w}" w:h="{h}"/>"#,
            r#"<w:pgMar w:top="{top}" w:right="{right}" w:bottom="{bottom}" w:left="{left}" "#,
            r#"w:header="{hf}" w:footer="{hf}" w:gutter="0"/>"#,
            "</w:sectPr>"
        ),
        w = PAGE_SIZE_LETTER.width,
        h = PAGE_SIZE_LETTER.height,
        top = cm_to_twips(geometry.top),
        right = cm_to_twips(geometry.right),
        bottom = cm_to_twips(geometry.bottom),
        left = cm_to_twips(geometry.left),
        hf = HEADER_FOOTER_TWIPS,
    )
}
