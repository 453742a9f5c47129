//! Document renderers.
//!
//! Each resolved record knows its page margins, its ordered body blocks and
//! its download file name. [`DocumentRecord`] dispatches to the record it
//! carries.
//!
//! # Example
//!
//! ```
//! use courtdocx::render::Template;
//! use courtdocx::{Clock, DocumentKind, DocumentRecord};
//!
//! let clock = Clock::system();
//! let record = DocumentRecord::from_json(
//!     DocumentKind::CertifiedCopy,
//!     r#"{"Court":"Civil Court","Applicant":"Ravi Naik"}"#,
//!     &clock,
//! )?;
//! assert_eq!(record.filename(&clock), "Certified_Copy_Ravi_Naik.docx");
//! assert!(!record.blocks(&clock).is_empty());
//! # Ok::<(), courtdocx::Error>(())
//! ```

pub mod common;
mod certified_copy;
mod petition;
mod vakalatnama;

pub use petition::{ordinal_suffix, verification_phrase};

use crate::clock::Clock;
use crate::model::{Block, PageGeometry};
use crate::record::DocumentRecord;

/// A fixed legal layout.
pub trait Template {
    /// Margins of the single section.
    fn geometry(&self) -> PageGeometry;

    /// Body blocks in reading order.
    fn blocks(&self, clock: &Clock) -> Vec<Block>;

    /// Conventional download file name.
    fn filename(&self, clock: &Clock) -> String;
}

impl Template for DocumentRecord {
    fn geometry(&self) -> PageGeometry {
        match self {
            DocumentRecord::CertifiedCopy(r) => r.geometry(),
            DocumentRecord::Vakalatnama(r) => r.geometry(),
            DocumentRecord::NewPetition(r) => r.geometry(),
        }
    }

    fn blocks(&self, clock: &Clock) -> Vec<Block> {
        match self {
            DocumentRecord::CertifiedCopy(r) => r.blocks(clock),
            DocumentRecord::Vakalatnama(r) => r.blocks(clock),
            DocumentRecord::NewPetition(r) => r.blocks(clock),
        }
    }

    fn filename(&self, clock: &Clock) -> String {
        match self {
            DocumentRecord::CertifiedCopy(r) => r.filename(clock),
            DocumentRecord::Vakalatnama(r) => r.filename(clock),
            DocumentRecord::NewPetition(r) => r.filename(clock),
        }
    }
}

/// The record's date, or today when it was left blank.
pub(crate) fn date_or_today(date: &str, clock: &Clock) -> String {
    if date.is_empty() {
        clock.today_display()
    } else {
        date.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{CertifiedCopyRecord, PetitionRecord, VakalatnamaRecord};
    use crate::units::cm_to_twips;
    use chrono::NaiveDate;

    fn clock() -> Clock {
        Clock::fixed(NaiveDate::from_ymd_opt(2026, 10, 14).unwrap())
    }

    #[test]
    fn test_template_margins() {
        let cases = [
            (DocumentRecord::from(CertifiedCopyRecord::default()), [1728, 1440, 2880, 1440]),
            (DocumentRecord::from(VakalatnamaRecord::default()), [1440, 1440, 2160, 1440]),
            (DocumentRecord::from(PetitionRecord::default()), [1728, 1440, 2880, 1440]),
        ];
        for (record, [top, bottom, left, right]) in cases {
            let g = record.geometry();
            assert_eq!(cm_to_twips(g.top), top);
            assert_eq!(cm_to_twips(g.bottom), bottom);
            assert_eq!(cm_to_twips(g.left), left);
            assert_eq!(cm_to_twips(g.right), right);
        }
    }

    #[test]
    fn test_dispatch_filenames() {
        let record = DocumentRecord::from(VakalatnamaRecord::default());
        assert_eq!(record.filename(&clock()), "Vakalatnama_Document.docx");
        let record = DocumentRecord::from(CertifiedCopyRecord::default());
        assert_eq!(record.filename(&clock()), "Certified_Copy_Application.docx");
    }

    #[test]
    fn test_date_or_today() {
        assert_eq!(date_or_today("", &clock()), "14/10/2026");
        assert_eq!(date_or_today("01/01/2024", &clock()), "01/01/2024");
    }
}
