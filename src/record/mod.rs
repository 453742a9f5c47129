//! Structured records for the three court documents.
//!
//! Each document type has a *form* (what was submitted: every field optional,
//! raw date input) and a *record* (what renderers consume: every field
//! present, trimmed, defaulted, dates in display form). The step between them
//! is [`CertifiedCopyForm::resolve`] and its siblings, run exactly once.

mod certified_copy;
mod form_data;
mod petition;
mod vakalatnama;

pub use certified_copy::{CertifiedCopyForm, CertifiedCopyRecord};
pub use form_data::{collect_certified_copy, collect_new_petition, collect_vakalatnama, FormData};
pub use petition::{Party, PartyForm, PetitionForm, PetitionRecord};
pub use vakalatnama::{VakalatnamaForm, VakalatnamaRecord, MAX_EXTRA_EXECUTANTS};

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

use crate::clock::{Clock, DISPLAY_DATE_FORMAT};
use crate::error::{Error, Result};

/// The closed set of document templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentKind {
    CertifiedCopy,
    Vakalatnama,
    NewPetition,
}

impl DocumentKind {
    /// Every kind, in menu order.
    pub const ALL: [DocumentKind; 3] = [
        DocumentKind::CertifiedCopy,
        DocumentKind::Vakalatnama,
        DocumentKind::NewPetition,
    ];

    /// The dispatch tag, e.g. `"certified-copy"`.
    pub fn tag(&self) -> &'static str {
        match self {
            DocumentKind::CertifiedCopy => "certified-copy",
            DocumentKind::Vakalatnama => "vakalatnama",
            DocumentKind::NewPetition => "new-petition",
        }
    }

    /// Human-readable title.
    pub fn label(&self) -> &'static str {
        match self {
            DocumentKind::CertifiedCopy => "Certified Copy Application",
            DocumentKind::Vakalatnama => "Vakalatnama",
            DocumentKind::NewPetition => "New Petition",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for DocumentKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let tag = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.tag() == tag)
            .ok_or_else(|| Error::InvalidDocumentType(tag.to_string()))
    }
}

/// A resolved record of any document type.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "record", rename_all = "kebab-case")]
pub enum DocumentRecord {
    CertifiedCopy(CertifiedCopyRecord),
    Vakalatnama(VakalatnamaRecord),
    NewPetition(PetitionRecord),
}

impl DocumentRecord {
    /// Which template this record is for.
    pub fn kind(&self) -> DocumentKind {
        match self {
            DocumentRecord::CertifiedCopy(_) => DocumentKind::CertifiedCopy,
            DocumentRecord::Vakalatnama(_) => DocumentKind::Vakalatnama,
            DocumentRecord::NewPetition(_) => DocumentKind::NewPetition,
        }
    }

    /// Parse a submitted form as JSON and resolve it.
    pub fn from_json(kind: DocumentKind, json: &str, clock: &Clock) -> Result<Self> {
        let record = match kind {
            DocumentKind::CertifiedCopy => {
                let form: CertifiedCopyForm = serde_json::from_str(json)?;
                DocumentRecord::CertifiedCopy(form.resolve(clock))
            }
            DocumentKind::Vakalatnama => {
                let form: VakalatnamaForm = serde_json::from_str(json)?;
                DocumentRecord::Vakalatnama(form.resolve(clock))
            }
            DocumentKind::NewPetition => {
                let form: PetitionForm = serde_json::from_str(json)?;
                DocumentRecord::NewPetition(form.resolve(clock))
            }
        };
        Ok(record)
    }
}

impl From<CertifiedCopyRecord> for DocumentRecord {
    fn from(record: CertifiedCopyRecord) -> Self {
        DocumentRecord::CertifiedCopy(record)
    }
}

impl From<VakalatnamaRecord> for DocumentRecord {
    fn from(record: VakalatnamaRecord) -> Self {
        DocumentRecord::Vakalatnama(record)
    }
}

impl From<PetitionRecord> for DocumentRecord {
    fn from(record: PetitionRecord) -> Self {
        DocumentRecord::NewPetition(record)
    }
}

/// Trim and NFC-normalize a submitted value; absent becomes empty.
pub(crate) fn clean(value: Option<&str>) -> String {
    value.map(|v| v.trim().nfc().collect()).unwrap_or_default()
}

/// Like [`clean`], falling back to `default` when the result is empty.
pub(crate) fn clean_or(value: Option<&str>, default: &str) -> String {
    let cleaned = clean(value);
    if cleaned.is_empty() {
        default.to_string()
    } else {
        cleaned
    }
}

/// Clean each entry of a list, dropping the ones left empty.
pub(crate) fn clean_list(values: &[String]) -> Vec<String> {
    values
        .iter()
        .map(|v| clean(Some(v)))
        .filter(|v| !v.is_empty())
        .collect()
}

/// Format a submitted date for display.
///
/// ISO `YYYY-MM-DD` becomes `DD/MM/YYYY`, a blank value becomes today, and
/// anything else is kept as typed.
pub fn format_date(value: Option<&str>, clock: &Clock) -> String {
    let cleaned = clean(value);
    if cleaned.is_empty() {
        return clock.today_display();
    }
    match NaiveDate::parse_from_str(&cleaned, "%Y-%m-%d") {
        Ok(date) => date.format(DISPLAY_DATE_FORMAT).to_string(),
        Err(_) => cleaned,
    }
}
