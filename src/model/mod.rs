//! Semantic document model.
//!
//! Renderers describe a document as an ordered list of [`Block`]s built from
//! these value types; the writer turns them into WordprocessingML. Lengths are
//! points (or centimetres for page margins), never the format's internal units.

mod document;
mod paragraph;
mod table;

pub use document::*;
pub use paragraph::*;
pub use table::*;
