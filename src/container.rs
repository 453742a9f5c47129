//! Read-back access to OOXML packages.
//!
//! Used to inspect a generated `.docx`: list its parts, check the manifest
//! wiring, and pull the paragraph text back out in reading order.

use crate::docx::package::{
    CONTENT_TYPES_PART, DOCUMENT_CONTENT_TYPE, OFFICE_DOCUMENT_REL, RELS_CONTENT_TYPE,
    ROOT_RELS_PART,
};
use crate::docx::writer::is_xml_char;
use crate::error::{Error, Result};
use quick_xml::events::{BytesStart, Event};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Cursor, Read};
use std::path::Path;

/// A relationship entry from a .rels file.
#[derive(Debug, Clone)]
pub struct Relationship {
    /// Relationship ID (e.g., "rId1")
    pub id: String,
    /// Relationship type URI
    pub rel_type: String,
    /// Target path (relative or absolute)
    pub target: String,
    /// Whether the target is external
    pub external: bool,
}

/// Collection of relationships parsed from a .rels file.
#[derive(Debug, Clone, Default)]
pub struct Relationships {
    /// Map from relationship ID to relationship data
    pub by_id: HashMap<String, Relationship>,
    /// Map from relationship type to list of relationships
    pub by_type: HashMap<String, Vec<Relationship>>,
}

impl Relationships {
    /// Create a new empty relationships collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a relationship by ID.
    pub fn get(&self, id: &str) -> Option<&Relationship> {
        self.by_id.get(id)
    }

    /// Get relationships by type.
    pub fn get_by_type(&self, rel_type: &str) -> Vec<&Relationship> {
        self.by_type
            .get(rel_type)
            .map(|v| v.iter().collect())
            .unwrap_or_default()
    }

    /// Add a relationship.
    pub fn add(&mut self, rel: Relationship) {
        self.by_type
            .entry(rel.rel_type.clone())
            .or_default()
            .push(rel.clone());
        self.by_id.insert(rel.id.clone(), rel);
    }
}

/// Declared content types from `[Content_Types].xml`.
#[derive(Debug, Clone, Default)]
pub struct ContentTypes {
    /// Extension (without dot) to content type
    pub defaults: HashMap<String, String>,
    /// Part name (with leading slash) to content type
    pub overrides: HashMap<String, String>,
}

impl ContentTypes {
    /// Resolve the content type of a part name (without leading slash).
    pub fn content_type_of(&self, part: &str) -> Option<&str> {
        let key = format!("/{}", part.trim_start_matches('/'));
        if let Some(ct) = self.overrides.get(&key) {
            return Some(ct);
        }
        let ext = Path::new(part).extension()?.to_str()?;
        self.defaults.get(ext).map(String::as_str)
    }
}

/// Summary of a verified package.
#[derive(Debug, Clone, Default)]
pub struct PackageReport {
    /// Parts in archive order
    pub parts: Vec<String>,
    /// The main document part the root relationship points at
    pub main_part: String,
    /// Number of `w:sectPr` elements
    pub sections: usize,
    /// Number of paragraphs, including those inside tables
    pub paragraphs: usize,
    /// Number of tables
    pub tables: usize,
    /// Number of page breaks
    pub page_breaks: usize,
}

/// OOXML container abstraction over a ZIP archive.
pub struct OoxmlContainer {
    archive: RefCell<zip::ZipArchive<Cursor<Vec<u8>>>>,
}

/// Decode XML bytes, dropping a UTF-8 byte-order mark.
fn decode_xml_bytes(bytes: Vec<u8>) -> Result<String> {
    let bytes = match bytes.strip_prefix(&[0xEF, 0xBB, 0xBF]) {
        Some(rest) => rest.to_vec(),
        None => bytes,
    };
    String::from_utf8(bytes).map_err(|e| Error::XmlParse(e.to_string()))
}

fn attr_value(e: &BytesStart, key: &[u8]) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|a| a.key.as_ref() == key)
        .and_then(|a| a.unescape_value().ok().map(|v| v.into_owned()))
}

impl OoxmlContainer {
    /// Open an OOXML container from a file path.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let mut reader = BufReader::new(file);
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes(data)
    }

    /// Create an OOXML container from a byte vector.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        let archive = zip::ZipArchive::new(Cursor::new(data))?;
        Ok(Self {
            archive: RefCell::new(archive),
        })
    }

    /// Read an XML part from the archive as a string.
    pub fn read_xml(&self, path: &str) -> Result<String> {
        let mut archive = self.archive.borrow_mut();
        let mut file = archive
            .by_name(path)
            .map_err(|_| Error::MissingComponent(path.to_string()))?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes)?;
        decode_xml_bytes(bytes)
    }

    /// Check if a part exists in the archive.
    pub fn exists(&self, path: &str) -> bool {
        let archive = self.archive.borrow();
        let result = archive.file_names().any(|n| n == path);
        result
    }

    /// List all parts in archive order.
    pub fn list_files(&self) -> Vec<String> {
        let mut archive = self.archive.borrow_mut();
        (0..archive.len())
            .filter_map(|i| archive.by_index(i).ok().map(|f| f.name().to_string()))
            .collect()
    }

    /// Read package-level relationships (`_rels/.rels`).
    pub fn read_package_relationships(&self) -> Result<Relationships> {
        let content = self.read_xml(ROOT_RELS_PART)?;
        let mut rels = Relationships::new();
        let mut reader = quick_xml::Reader::from_str(&content);

        let mut buf = Vec::new();
        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Empty(ref e)) | Ok(Event::Start(ref e))
                    if e.name().as_ref() == b"Relationship" =>
                {
                    let id = attr_value(e, b"Id").unwrap_or_default();
                    if id.is_empty() {
                        continue;
                    }
                    rels.add(Relationship {
                        id,
                        rel_type: attr_value(e, b"Type").unwrap_or_default(),
                        target: attr_value(e, b"Target").unwrap_or_default(),
                        external: attr_value(e, b"TargetMode")
                            .map(|m| m.eq_ignore_ascii_case("external"))
                            .unwrap_or(false),
                    });
                }
                Ok(Event::Eof) => break,
                Err(e) => return Err(Error::XmlParse(e.to_string())),
                _ => {}
            }
            buf.clear();
        }

        Ok(rels)
    }

    /// Read `[Content_Types].xml`.
    pub fn read_content_types(&self) -> Result<ContentTypes> {
        let content = self.read_xml(CONTENT_TYPES_PART)?;
        let mut types = ContentTypes::default();
        let mut reader = quick_xml::Reader::from_str(&content);

        let mut buf = Vec::new();
        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Empty(ref e)) | Ok(Event::Start(ref e)) => {
                    let content_type = attr_value(e, b"ContentType");
                    match (e.name().as_ref(), content_type) {
                        (b"Default", Some(ct)) => {
                            if let Some(ext) = attr_value(e, b"Extension") {
                                types.defaults.insert(ext.to_ascii_lowercase(), ct);
                            }
                        }
                        (b"Override", Some(ct)) => {
                            if let Some(part) = attr_value(e, b"PartName") {
                                types.overrides.insert(part, ct);
                            }
                        }
                        _ => {}
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => return Err(Error::XmlParse(e.to_string())),
                _ => {}
            }
            buf.clear();
        }

        Ok(types)
    }

    /// Locate the main document part through the root relationships.
    pub fn main_document_part(&self) -> Result<String> {
        let rels = self.read_package_relationships()?;
        let rel = rels
            .get_by_type(OFFICE_DOCUMENT_REL)
            .into_iter()
            .find(|r| !r.external)
            .ok_or_else(|| Error::InvalidPackage("no officeDocument relationship".to_string()))?;
        Ok(Self::resolve_path("", &rel.target))
    }

    /// Paragraph texts of the main document in reading order.
    ///
    /// Table cell paragraphs are included; `w:br` becomes `\n` and `w:tab`
    /// becomes `\t`. Page-break paragraphs yield an empty string.
    pub fn paragraph_texts(&self) -> Result<Vec<String>> {
        let part = self.main_document_part()?;
        let xml = self.read_xml(&part)?;
        Ok(scan_document(&xml)?.paragraphs)
    }

    /// Check the three-part manifest wiring and summarize the body.
    pub fn verify(&self) -> Result<PackageReport> {
        for part in [CONTENT_TYPES_PART, ROOT_RELS_PART] {
            if !self.exists(part) {
                return Err(Error::MissingComponent(part.to_string()));
            }
        }

        let types = self.read_content_types()?;
        if types.defaults.get("rels").map(String::as_str) != Some(RELS_CONTENT_TYPE) {
            return Err(Error::InvalidPackage(
                "relationship parts have no declared content type".to_string(),
            ));
        }

        let main_part = self.main_document_part()?;
        if !self.exists(&main_part) {
            return Err(Error::MissingComponent(main_part));
        }
        if types.content_type_of(&main_part) != Some(DOCUMENT_CONTENT_TYPE) {
            return Err(Error::InvalidPackage(format!(
                "{} is not declared as a WordprocessingML main document",
                main_part
            )));
        }

        let scan = scan_document(&self.read_xml(&main_part)?)?;
        Ok(PackageReport {
            parts: self.list_files(),
            main_part,
            sections: scan.sections,
            paragraphs: scan.paragraphs.len(),
            tables: scan.tables,
            page_breaks: scan.page_breaks,
        })
    }

    /// Resolve a relative path from a base path.
    pub fn resolve_path(base: &str, relative: &str) -> String {
        if let Some(stripped) = relative.strip_prefix('/') {
            return stripped.to_string();
        }

        let base_path = Path::new(base);
        let base_dir = base_path.parent().unwrap_or(Path::new(""));

        let mut result = base_dir.to_path_buf();
        for component in Path::new(relative).components() {
            match component {
                std::path::Component::ParentDir => {
                    result.pop();
                }
                std::path::Component::Normal(c) => {
                    result.push(c);
                }
                _ => {}
            }
        }

        result.to_string_lossy().replace('\\', "/")
    }
}

impl std::fmt::Debug for OoxmlContainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OoxmlContainer")
            .field("files", &self.archive.borrow().len())
            .finish()
    }
}

#[derive(Debug, Default)]
struct DocumentScan {
    paragraphs: Vec<String>,
    sections: usize,
    tables: usize,
    page_breaks: usize,
}

fn scan_document(xml: &str) -> Result<DocumentScan> {
    let mut scan = DocumentScan::default();
    let mut reader = quick_xml::Reader::from_str(xml);

    let mut buf = Vec::new();
    let mut stack: Vec<String> = Vec::new();
    let mut in_text = false;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => match e.name().as_ref() {
                b"w:p" => stack.push(String::new()),
                b"w:t" => in_text = true,
                b"w:tbl" => scan.tables += 1,
                b"w:sectPr" => scan.sections += 1,
                _ => {}
            },
            Ok(Event::Empty(ref e)) => match e.name().as_ref() {
                b"w:p" => scan.paragraphs.push(String::new()),
                b"w:br" => {
                    if attr_value(e, b"w:type").as_deref() == Some("page") {
                        scan.page_breaks += 1;
                    } else if let Some(current) = stack.last_mut() {
                        current.push('\n');
                    }
                }
                b"w:tab" => {
                    if let Some(current) = stack.last_mut() {
                        current.push('\t');
                    }
                }
                b"w:sectPr" => scan.sections += 1,
                _ => {}
            },
            Ok(Event::Text(ref e)) if in_text => {
                let text = e.unescape().map_err(|e| Error::XmlParse(e.to_string()))?;
                if let Some(c) = text.chars().find(|&c| !is_xml_char(c)) {
                    return Err(Error::XmlParse(format!(
                        "character U+{:04X} is not allowed in XML 1.0",
                        c as u32
                    )));
                }
                if let Some(current) = stack.last_mut() {
                    current.push_str(&text);
                }
            }
            Ok(Event::End(ref e)) => match e.name().as_ref() {
                b"w:p" => {
                    if let Some(text) = stack.pop() {
                        scan.paragraphs.push(text);
                    }
                }
                b"w:t" => in_text = false,
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(Error::XmlParse(e.to_string())),
            _ => {}
        }
        buf.clear();
    }

    Ok(scan)
}
