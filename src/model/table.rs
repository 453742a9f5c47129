//! Table model structures.

use super::{Alignment, Paragraph};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Border style applied uniformly to every edge of a table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderMode {
    /// Zero-width borders; lays out side-by-side text without a grid
    #[default]
    Hidden,
    /// Single solid black lines on outer and inner edges
    Single,
}

impl BorderMode {
    /// Border mode from a visibility flag.
    pub fn from_visible(visible: bool) -> Self {
        if visible {
            BorderMode::Single
        } else {
            BorderMode::Hidden
        }
    }

    /// Whether borders are drawn.
    pub fn is_visible(&self) -> bool {
        matches!(self, BorderMode::Single)
    }
}

/// A cell in a table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    /// Cell content (paragraphs)
    #[serde(default)]
    pub paragraphs: Vec<Paragraph>,

    /// Alignment inherited by paragraphs that carry none
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alignment: Option<Alignment>,
}

impl Cell {
    /// Create a new empty cell.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a cell with text content.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            paragraphs: vec![Paragraph::with_text(text)],
            alignment: None,
        }
    }

    /// Create a cell from paragraphs.
    pub fn from_paragraphs(paragraphs: Vec<Paragraph>) -> Self {
        Self {
            paragraphs,
            alignment: None,
        }
    }

    /// Set the cell alignment.
    pub fn aligned(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    /// Get the plain text content.
    pub fn plain_text(&self) -> String {
        self.paragraphs
            .iter()
            .map(|p| p.plain_text())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Check if this cell is empty.
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty() || self.paragraphs.iter().all(|p| p.is_empty())
    }
}

/// A row in a table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Row {
    /// Cells in this row
    #[serde(default)]
    pub cells: Vec<Cell>,
}

impl Row {
    /// Create a new empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a row from cells.
    pub fn from_cells(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    /// Add a cell to this row.
    pub fn add_cell(&mut self, cell: Cell) {
        self.cells.push(cell);
    }

    /// Get the number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if the row is empty.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// A table. Cells never span rows or columns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    /// Rows in this table
    #[serde(default)]
    pub rows: Vec<Row>,

    /// Border mode
    #[serde(default)]
    pub borders: BorderMode,

    /// Column widths in points (optional; split evenly when absent)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column_widths: Option<Vec<f32>>,
}

impl Table {
    /// Create a new empty table with hidden borders.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty table with the given border mode.
    pub fn with_borders(borders: BorderMode) -> Self {
        Self {
            borders,
            ..Default::default()
        }
    }

    /// Set explicit column widths, in points.
    pub fn with_column_widths(mut self, widths: Vec<f32>) -> Self {
        self.column_widths = Some(widths);
        self
    }

    /// Add a row to this table.
    pub fn add_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    /// Append a row, builder style.
    pub fn row(mut self, row: Row) -> Self {
        self.rows.push(row);
        self
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get the number of columns (from the first row).
    pub fn column_count(&self) -> usize {
        self.rows.first().map(|r| r.len()).unwrap_or(0)
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Check that every row has the same, non-zero number of cells.
    pub fn validate(&self) -> Result<()> {
        let expected = match self.rows.first() {
            Some(first) => first.len(),
            None => return Err(Error::MalformedTable("table has no rows".to_string())),
        };
        if expected == 0 {
            return Err(Error::MalformedTable("row 1 has no cells".to_string()));
        }

        for (i, row) in self.rows.iter().enumerate().skip(1) {
            if row.len() != expected {
                return Err(Error::MalformedTable(format!(
                    "row {} has {} cells, expected {}",
                    i + 1,
                    row.len(),
                    expected
                )));
            }
        }

        if let Some(ref widths) = self.column_widths {
            if widths.len() != expected {
                return Err(Error::MalformedTable(format!(
                    "{} column widths given for {} columns",
                    widths.len(),
                    expected
                )));
            }
        }

        Ok(())
    }

    /// Get plain text representation.
    pub fn plain_text(&self) -> String {
        let mut text = String::new();
        for row in &self.rows {
            let cells: Vec<String> = row.cells.iter().map(|c| c.plain_text()).collect();
            text.push_str(&cells.join("\t"));
            text.push('\n');
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_by_two() -> Table {
        Table::new()
            .row(Row::from_cells(vec![Cell::with_text("A1"), Cell::with_text("B1")]))
            .row(Row::from_cells(vec![Cell::with_text("A2"), Cell::with_text("B2")]))
    }

    #[test]
    fn test_cell_creation() {
        let cell = Cell::with_text("Hello").aligned(Alignment::Right);
        assert_eq!(cell.plain_text(), "Hello");
        assert_eq!(cell.alignment, Some(Alignment::Right));
        assert!(!cell.is_empty());
        assert!(Cell::new().is_empty());
    }

    #[test]
    fn test_border_mode() {
        assert_eq!(BorderMode::from_visible(true), BorderMode::Single);
        assert_eq!(BorderMode::from_visible(false), BorderMode::Hidden);
        assert!(BorderMode::Single.is_visible());
    }

    #[test]
    fn test_table_shape() {
        let table = two_by_two();
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.column_count(), 2);
        assert!(table.validate().is_ok());
        assert!(table.plain_text().contains("A1\tB1"));
    }

    #[test]
    fn test_validate_mismatched_rows() {
        let mut table = two_by_two();
        table.add_row(Row::from_cells(vec![Cell::with_text("A3")]));
        let err = table.validate().unwrap_err();
        assert!(matches!(err, Error::MalformedTable(_)));
        assert!(err.to_string().contains("row 3 has 1 cells, expected 2"));
    }

    #[test]
    fn test_validate_empty_shapes() {
        assert!(Table::new().validate().is_err());
        let table = Table::new().row(Row::new());
        assert!(table.validate().is_err());
    }

    #[test]
    fn test_validate_column_widths() {
        let table = two_by_two().with_column_widths(vec![100.0]);
        assert!(table.validate().is_err());
        let table = two_by_two().with_column_widths(vec![100.0, 200.0]);
        assert!(table.validate().is_ok());
    }
}
