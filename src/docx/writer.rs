//! WordprocessingML fragment writer.
//!
//! Serializes model blocks into `w:body` children. All text and attribute
//! values go through `quick_xml`, which escapes `&`, `<`, `>`, `"` and `'`,
//! so a [`Fragment`] can be concatenated into `document.xml` as-is.

use std::borrow::Cow;
use std::fmt;

use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::error::{Error, Result};
use crate::model::{Alignment, Block, BorderMode, Cell, PageGeometry, Paragraph, Table, TextRun};
use crate::units::{points_to_eighths, points_to_half_points, points_to_twips};

/// Visible border width, in points (serialized as `w:sz="4"`).
pub const VISIBLE_BORDER_POINTS: f32 = 0.5;

/// Table edges, in schema order.
const BORDER_EDGES: [&str; 6] = [
    "w:top",
    "w:left",
    "w:bottom",
    "w:right",
    "w:insideH",
    "w:insideV",
];

/// Single-line spacing in 240ths of a line.
const LINE_UNIT: f32 = 240.0;

/// An escaped WordprocessingML body fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment(String);

impl Fragment {
    /// The fragment XML.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the fragment and return its XML.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Fragment {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Render a paragraph.
pub fn paragraph_fragment(para: &Paragraph) -> Result<Fragment> {
    let mut w = WmlWriter::new();
    w.paragraph(para, None)?;
    w.finish()
}

/// Render a table. Fails if the rows do not share one shape.
pub fn table_fragment(table: &Table, geometry: &PageGeometry) -> Result<Fragment> {
    let mut w = WmlWriter::new();
    w.table(table, geometry.text_width_twips())?;
    w.finish()
}

/// Render a standalone page-break paragraph.
pub fn page_break_fragment() -> Result<Fragment> {
    let mut w = WmlWriter::new();
    w.page_break()?;
    w.finish()
}

/// Render any block.
pub fn block_fragment(block: &Block, geometry: &PageGeometry) -> Result<Fragment> {
    match block {
        Block::Paragraph(p) => paragraph_fragment(p),
        Block::Table(t) => table_fragment(t, geometry),
        Block::PageBreak => page_break_fragment(),
    }
}

/// Render a sequence of blocks, stopping at the first malformed one.
pub fn body_fragments(blocks: &[Block], geometry: &PageGeometry) -> Result<Vec<Fragment>> {
    blocks.iter().map(|b| block_fragment(b, geometry)).collect()
}

/// Whether XML 1.0 allows `c` in character data.
pub fn is_xml_char(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\r' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..='\u{10FFFF}'
    )
}

/// Normalize run text so it splits on `\n` alone and is legal XML.
///
/// `\r\n`, `\r` and vertical tab (Word's manual line break) become `\n`;
/// every other character XML 1.0 forbids is dropped.
fn normalize_text(text: &str) -> Cow<'_, str> {
    if text.chars().all(|c| c != '\r' && is_xml_char(c)) {
        return Cow::Borrowed(text);
    }
    text.replace("\r\n", "\n")
        .chars()
        .filter_map(|c| match c {
            '\r' | '\u{B}' => Some('\n'),
            c if is_xml_char(c) => Some(c),
            _ => None,
        })
        .collect::<String>()
        .into()
}

/// Drop characters XML 1.0 forbids from an attribute value.
fn attribute_text(value: &str) -> Cow<'_, str> {
    if value.chars().all(is_xml_char) {
        Cow::Borrowed(value)
    } else {
        value.chars().filter(|&c| is_xml_char(c)).collect::<String>().into()
    }
}

/// Split a column span into widths, the last column taking the remainder.
fn even_widths(total: u32, columns: usize) -> Vec<u32> {
    let columns = columns.max(1) as u32;
    let each = total / columns;
    let mut widths = vec![each; columns as usize];
    if let Some(last) = widths.last_mut() {
        *last += total - each * columns;
    }
    widths
}

struct WmlWriter {
    inner: Writer<Vec<u8>>,
}

impl WmlWriter {
    fn new() -> Self {
        Self {
            inner: Writer::new(Vec::new()),
        }
    }

    fn finish(self) -> Result<Fragment> {
        let bytes = self.inner.into_inner();
        String::from_utf8(bytes)
            .map(Fragment)
            .map_err(|e| Error::XmlParse(e.to_string()))
    }

    fn start(&mut self, name: &str, attrs: &[(&str, &str)]) -> Result<()> {
        let mut elem = BytesStart::new(name);
        for &(key, value) in attrs {
            elem.push_attribute((key, &*attribute_text(value)));
        }
        self.inner.write_event(Event::Start(elem))?;
        Ok(())
    }

    fn empty(&mut self, name: &str, attrs: &[(&str, &str)]) -> Result<()> {
        let mut elem = BytesStart::new(name);
        for &(key, value) in attrs {
            elem.push_attribute((key, &*attribute_text(value)));
        }
        self.inner.write_event(Event::Empty(elem))?;
        Ok(())
    }

    fn end(&mut self, name: &str) -> Result<()> {
        self.inner.write_event(Event::End(BytesEnd::new(name)))?;
        Ok(())
    }

    fn text_node(&mut self, text: &str) -> Result<()> {
        self.start("w:t", &[("xml:space", "preserve")])?;
        self.inner.write_event(Event::Text(BytesText::new(text)))?;
        self.end("w:t")
    }

    fn paragraph(&mut self, para: &Paragraph, inherited: Option<Alignment>) -> Result<()> {
        self.start("w:p", &[])?;
        self.paragraph_properties(para, para.alignment.or(inherited))?;
        for run in &para.runs {
            self.run(run)?;
        }
        self.end("w:p")
    }

    fn paragraph_properties(&mut self, para: &Paragraph, alignment: Option<Alignment>) -> Result<()> {
        let has_spacing =
            para.spacing_before.is_some() || para.spacing_after.is_some() || para.line_spacing.is_some();
        if !has_spacing && para.indent_left.is_none() && alignment.is_none() {
            return Ok(());
        }

        self.start("w:pPr", &[])?;

        if has_spacing {
            let before = para.spacing_before.map(|pt| points_to_twips(pt).to_string());
            let after = para.spacing_after.map(|pt| points_to_twips(pt).to_string());
            let line = para
                .line_spacing
                .map(|m| ((m.max(0.0) * LINE_UNIT).round() as u32).to_string());

            let mut attrs: Vec<(&str, &str)> = Vec::new();
            if let Some(ref v) = before {
                attrs.push(("w:before", v.as_str()));
            }
            if let Some(ref v) = after {
                attrs.push(("w:after", v.as_str()));
            }
            if let Some(ref v) = line {
                attrs.push(("w:line", v.as_str()));
                attrs.push(("w:lineRule", "auto"));
            }
            self.empty("w:spacing", &attrs)?;
        }

        if let Some(indent) = para.indent_left {
            let left = points_to_twips(indent).to_string();
            self.empty("w:ind", &[("w:left", left.as_str())])?;
        }

        if let Some(alignment) = alignment {
            self.empty("w:jc", &[("w:val", alignment.as_wml())])?;
        }

        self.end("w:pPr")
    }

    fn run(&mut self, run: &TextRun) -> Result<()> {
        self.start("w:r", &[])?;
        self.run_properties(run)?;

        let text = normalize_text(&run.text);
        for (i, line) in text.split('\n').enumerate() {
            if i > 0 {
                self.empty("w:br", &[])?;
            }
            for (j, segment) in line.split('\t').enumerate() {
                if j > 0 {
                    self.empty("w:tab", &[])?;
                }
                if !segment.is_empty() {
                    self.text_node(segment)?;
                }
            }
        }

        self.end("w:r")
    }

    fn run_properties(&mut self, run: &TextRun) -> Result<()> {
        let style = &run.style;
        if !style.has_formatting() {
            return Ok(());
        }

        self.start("w:rPr", &[])?;
        if let Some(ref font) = style.font {
            self.empty(
                "w:rFonts",
                &[
                    ("w:ascii", font.as_str()),
                    ("w:hAnsi", font.as_str()),
                    ("w:cs", font.as_str()),
                ],
            )?;
        }
        if style.bold {
            self.empty("w:b", &[])?;
            self.empty("w:bCs", &[])?;
        }
        if style.italic {
            self.empty("w:i", &[])?;
            self.empty("w:iCs", &[])?;
        }
        if let Some(size) = style.size {
            let half_points = points_to_half_points(size).to_string();
            self.empty("w:sz", &[("w:val", half_points.as_str())])?;
            self.empty("w:szCs", &[("w:val", half_points.as_str())])?;
        }
        if style.underline {
            self.empty("w:u", &[("w:val", "single")])?;
        }
        self.end("w:rPr")
    }

    fn table(&mut self, table: &Table, text_width: u32) -> Result<()> {
        table.validate()?;

        let widths = match table.column_widths {
            Some(ref points) => points.iter().map(|&pt| points_to_twips(pt)).collect(),
            None => even_widths(text_width, table.column_count()),
        };

        self.start("w:tbl", &[])?;

        self.start("w:tblPr", &[])?;
        self.empty("w:tblW", &[("w:w", "5000"), ("w:type", "pct")])?;
        self.borders(table.borders)?;
        self.empty("w:tblLayout", &[("w:type", "fixed")])?;
        self.end("w:tblPr")?;

        self.start("w:tblGrid", &[])?;
        for width in &widths {
            let w = width.to_string();
            self.empty("w:gridCol", &[("w:w", w.as_str())])?;
        }
        self.end("w:tblGrid")?;

        for row in &table.rows {
            self.start("w:tr", &[])?;
            for (cell, width) in row.cells.iter().zip(&widths) {
                self.cell(cell, *width)?;
            }
            self.end("w:tr")?;
        }

        self.end("w:tbl")
    }

    fn borders(&mut self, mode: BorderMode) -> Result<()> {
        let size = points_to_eighths(VISIBLE_BORDER_POINTS).to_string();
        let attrs: [(&str, &str); 4] = match mode {
            BorderMode::Single => [
                ("w:val", "single"),
                ("w:sz", size.as_str()),
                ("w:space", "0"),
                ("w:color", "000000"),
            ],
            BorderMode::Hidden => [
                ("w:val", "none"),
                ("w:sz", "0"),
                ("w:space", "0"),
                ("w:color", "auto"),
            ],
        };

        self.start("w:tblBorders", &[])?;
        for edge in BORDER_EDGES {
            self.empty(edge, &attrs)?;
        }
        self.end("w:tblBorders")
    }

    fn cell(&mut self, cell: &Cell, width: u32) -> Result<()> {
        self.start("w:tc", &[])?;
        self.start("w:tcPr", &[])?;
        let w = width.to_string();
        self.empty("w:tcW", &[("w:w", w.as_str()), ("w:type", "dxa")])?;
        self.end("w:tcPr")?;

        // a cell must end with a paragraph
        if cell.paragraphs.is_empty() {
            self.empty("w:p", &[])?;
        }
        for para in &cell.paragraphs {
            self.paragraph(para, cell.alignment)?;
        }
        self.end("w:tc")
    }

    fn page_break(&mut self) -> Result<()> {
        self.start("w:p", &[])?;
        self.start("w:r", &[])?;
        self.empty("w:br", &[("w:type", "page")])?;
        self.end("w:r")?;
        self.end("w:p")
    }
}
