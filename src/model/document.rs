//! Document-level structures: body blocks and page geometry.

use super::{Paragraph, Table};
use crate::units;
use serde::{Deserialize, Serialize};

/// A content block in the document body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Block {
    /// A paragraph of text
    Paragraph(Paragraph),
    /// A table
    Table(Table),
    /// A page break
    PageBreak,
}

impl Block {
    /// Get plain text representation.
    pub fn plain_text(&self) -> String {
        match self {
            Block::Paragraph(p) => p.plain_text(),
            Block::Table(t) => t.plain_text(),
            Block::PageBreak => String::new(),
        }
    }
}

impl From<Paragraph> for Block {
    fn from(para: Paragraph) -> Self {
        Block::Paragraph(para)
    }
}

impl From<Table> for Block {
    fn from(table: Table) -> Self {
        Block::Table(table)
    }
}

/// Fixed page size, in twips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSize {
    pub width: u32,
    pub height: u32,
}

/// US Letter, the only page size the templates use.
pub const PAGE_SIZE_LETTER: PageSize = PageSize {
    width: units::LETTER_WIDTH_TWIPS,
    height: units::LETTER_HEIGHT_TWIPS,
};

/// Page margins for the single document section, in centimetres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageGeometry {
    pub top: f32,
    pub bottom: f32,
    pub left: f32,
    pub right: f32,
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::from_inches(1.0, 1.0, 1.0, 1.0)
    }
}

impl PageGeometry {
    /// Create geometry from margins in centimetres.
    pub fn new(top: f32, bottom: f32, left: f32, right: f32) -> Self {
        Self {
            top,
            bottom,
            left,
            right,
        }
    }

    /// Create geometry from margins in inches.
    pub fn from_inches(top: f32, bottom: f32, left: f32, right: f32) -> Self {
        Self {
            top: units::inches_to_cm(top),
            bottom: units::inches_to_cm(bottom),
            left: units::inches_to_cm(left),
            right: units::inches_to_cm(right),
        }
    }

    /// Usable text width of a Letter page, in twips.
    pub fn text_width_twips(&self) -> u32 {
        PAGE_SIZE_LETTER
            .width
            .saturating_sub(units::cm_to_twips(self.left))
            .saturating_sub(units::cm_to_twips(self.right))
    }
}
