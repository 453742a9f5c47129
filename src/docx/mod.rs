//! DOCX (WordprocessingML) output.
//!
//! [`writer`] turns model blocks into escaped body fragments and
//! [`package`] wraps them, with the page geometry, into a `.docx` container.

pub mod package;
pub mod writer;

pub use package::{assemble, Compression, PackageBuilder};
pub use writer::{
    block_fragment, body_fragments, page_break_fragment, paragraph_fragment, table_fragment,
    Fragment,
};
