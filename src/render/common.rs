//! Layout pieces shared by the court document templates.

use crate::model::{Alignment, Block, BorderMode, Cell, Paragraph, Row, RunStyle, Table};

/// Body text size, in points.
pub const BODY_SIZE: f32 = 12.0;
/// Court caption size, in points.
pub const CAPTION_SIZE: f32 = 14.0;
/// Size of the small "(Advocate)" style captions under signatures.
pub const NOTE_SIZE: f32 = 10.0;

fn body_style() -> RunStyle {
    RunStyle::new().with_size(BODY_SIZE)
}

/// Ordered body blocks.
///
/// Word merges two tables that touch, so a blank paragraph is slipped in
/// between consecutive tables.
#[derive(Debug, Default)]
pub struct Body {
    blocks: Vec<Block>,
}

impl Body {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, block: impl Into<Block>) {
        let block = block.into();
        if matches!(block, Block::Table(_)) && matches!(self.blocks.last(), Some(Block::Table(_))) {
            self.blocks.push(Block::Paragraph(Paragraph::new()));
        }
        self.blocks.push(block);
    }

    pub fn extend<B: Into<Block>>(&mut self, blocks: impl IntoIterator<Item = B>) {
        for block in blocks {
            self.push(block);
        }
    }

    pub fn page_break(&mut self) {
        self.blocks.push(Block::PageBreak);
    }

    pub fn into_blocks(self) -> Vec<Block> {
        self.blocks
    }
}

/// Body-size text.
pub fn body(text: impl Into<String>) -> Paragraph {
    Paragraph::styled(text, body_style())
}

/// Body-size text, justified.
pub fn justified(text: impl Into<String>) -> Paragraph {
    body(text).aligned(Alignment::Justify)
}

/// Court name: uppercased, bold, centred.
pub fn court_caption(court: &str) -> Paragraph {
    Paragraph::styled(
        court.to_uppercase(),
        RunStyle::bold().with_size(CAPTION_SIZE),
    )
    .aligned(Alignment::Center)
    .spaced(0.0, 10.0)
}

/// Centred bold underlined title.
pub fn heading(text: &str, size: f32) -> Paragraph {
    Paragraph::styled(text, RunStyle::bold().underlined().with_size(size))
        .aligned(Alignment::Center)
        .spaced(15.0, 15.0)
}

/// Right-aligned `Case No. ...` line.
pub fn case_number(case_no: &str) -> Paragraph {
    body(format!("Case No. {}", case_no))
        .aligned(Alignment::Right)
        .spaced(0.0, 10.0)
}

/// Centred divider between the two sides of a cause title.
pub fn versus(text: &str) -> Paragraph {
    body(text).aligned(Alignment::Center).spaced(5.0, 5.0)
}

/// `"Mr. Name"`; empty when the name is empty.
pub fn titled_name(title: &str, name: &str) -> String {
    if name.is_empty() {
        String::new()
    } else if title.is_empty() {
        name.to_string()
    } else {
        format!("{} {}", title, name)
    }
}

/// Name on the left, `…Role` on the right, without visible borders.
pub fn party_line(name: &str, role: &str) -> Table {
    Table::with_borders(BorderMode::Hidden).row(Row::from_cells(vec![
        Cell::from_paragraphs(vec![body(name)]),
        Cell::from_paragraphs(vec![body(format!("\u{2026}{}", role))]).aligned(Alignment::Right),
    ]))
}

/// `N.\ttext`, justified.
pub fn recital(number: usize, text: &str) -> Paragraph {
    justified(format!("{}.\t{}", number, text)).spaced(0.0, 7.5)
}

/// `\t• text`.
pub fn bullet(text: &str) -> Paragraph {
    body(format!("\t\u{2022} {}", text)).spaced(0.0, 2.5)
}

/// `Label: value` line.
pub fn labelled(label: &str, value: &str) -> Paragraph {
    body(format!("{}: {}", label, value)).spaced(0.0, 2.5)
}

/// Right-aligned signature name with an optional small caption beneath.
pub fn signature(name: &str, caption: Option<&str>) -> Vec<Paragraph> {
    let mut lines = vec![body(name).aligned(Alignment::Right).spaced(0.0, 2.5)];
    if let Some(caption) = caption {
        lines.push(
            Paragraph::styled(caption, RunStyle::new().with_size(NOTE_SIZE))
                .aligned(Alignment::Right),
        );
    }
    lines
}

/// Blank line.
pub fn spacer() -> Paragraph {
    Paragraph::new()
}

/// File-name segment: whitespace and path separators become `_`.
pub fn sanitize_filename(value: &str, fallback: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return fallback.to_string();
    }
    trimmed
        .chars()
        .map(|c| match c {
            '/' | '\\' => '_',
            c if c.is_whitespace() => '_',
            c => c,
        })
        .collect()
}
