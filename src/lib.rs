//! # courtdocx
//!
//! Offline generation of court filing documents as `.docx` packages.
//!
//! Three fixed layouts are supported: an application for certified copies,
//! a vakalatnama, and a new petition with its verification and affidavit.
//! A submitted form is resolved once into a record, the record is rendered
//! into body blocks, and the blocks are written as WordprocessingML and
//! zipped into a minimal three-part package.
//!
//! ## Quick Start
//!
//! ```
//! use courtdocx::{generate_from_json, GenerateOptions};
//!
//! let doc = generate_from_json(
//!     "certified-copy",
//!     r#"{"Court":"X Court","CaseNo":"12/2024","Applicant":"A","Docs":["Plaint"]}"#,
//!     &GenerateOptions::default(),
//! )?;
//! assert_eq!(doc.filename, "Certified_Copy_A.docx");
//! # Ok::<(), courtdocx::Error>(())
//! ```
//!
//! ## Building blocks
//!
//! ```
//! use courtdocx::docx::{assemble, body_fragments, Compression};
//! use courtdocx::{Alignment, Block, PageGeometry, Paragraph};
//!
//! let geometry = PageGeometry::from_inches(1.0, 1.0, 1.5, 1.0);
//! let blocks = vec![
//!     Block::from(Paragraph::with_text("VERSUS").aligned(Alignment::Center)),
//!     Block::PageBreak,
//! ];
//! let bytes = assemble(body_fragments(&blocks, &geometry)?, geometry, Compression::Deflated)?;
//! assert!(bytes.starts_with(b"PK"));
//! # Ok::<(), courtdocx::Error>(())
//! ```
//!
//! ## Features
//!
//! - `async`: [`generate_async`] on the Tokio blocking pool

pub mod clock;
pub mod container;
pub mod docx;
pub mod download;
pub mod error;
pub mod generate;
pub mod model;
pub mod record;
pub mod render;
pub mod session;
pub mod units;

// Re-exports
pub use clock::Clock;
pub use container::{OoxmlContainer, PackageReport, Relationship, Relationships};
pub use docx::Compression;
pub use download::{download, DirectoryTarget, DownloadTarget};
pub use error::{Error, Result};
pub use generate::{generate, generate_from_json, GenerateOptions, GeneratedDocument};
pub use model::{
    Alignment, Block, BorderMode, Cell, PageGeometry, Paragraph, Row, RunStyle, Table, TextRun,
};
pub use record::{
    CertifiedCopyForm, CertifiedCopyRecord, DocumentKind, DocumentRecord, FormData, Party,
    PartyForm, PetitionForm, PetitionRecord, VakalatnamaForm, VakalatnamaRecord,
};
pub use render::Template;
pub use session::{PartySide, PetitionSession, SubmitControl, SubmitGuard};

#[cfg(feature = "async")]
pub use generate::generate_async;
