//! Paragraph and text run models.

use serde::{Deserialize, Serialize};

/// Paragraph alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

impl Alignment {
    /// The `w:jc` value for this alignment.
    pub fn as_wml(&self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
            Alignment::Justify => "both",
        }
    }
}

/// Character formatting for a run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunStyle {
    /// Bold text
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub bold: bool,

    /// Italic text
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub italic: bool,

    /// Single underline
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub underline: bool,

    /// Font size in points
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<f32>,

    /// Font family
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<String>,
}

impl RunStyle {
    /// Create a new default style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a bold style.
    pub fn bold() -> Self {
        Self {
            bold: true,
            ..Default::default()
        }
    }

    /// Create an italic style.
    pub fn italic() -> Self {
        Self {
            italic: true,
            ..Default::default()
        }
    }

    /// Add an underline.
    pub fn underlined(mut self) -> Self {
        self.underline = true;
        self
    }

    /// Set the font size in points.
    pub fn with_size(mut self, points: f32) -> Self {
        self.size = Some(points);
        self
    }

    /// Set the font family.
    pub fn with_font(mut self, font: impl Into<String>) -> Self {
        self.font = Some(font.into());
        self
    }

    /// Check if the style carries any run property.
    pub fn has_formatting(&self) -> bool {
        self.bold || self.italic || self.underline || self.size.is_some() || self.font.is_some()
    }
}

/// A run of text with consistent styling.
///
/// The text may contain `\n` (rendered as line breaks) and `\t`
/// (rendered as tab characters).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextRun {
    /// The text content
    pub text: String,

    /// Run styling
    #[serde(default, skip_serializing_if = "is_default_style")]
    pub style: RunStyle,
}

fn is_default_style(style: &RunStyle) -> bool {
    *style == RunStyle::default()
}

impl TextRun {
    /// Create a plain text run with no styling.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: RunStyle::default(),
        }
    }

    /// Create a styled text run.
    pub fn styled(text: impl Into<String>, style: RunStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    /// Check if this run is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// A paragraph of text.
///
/// A paragraph without runs is valid and renders as a blank line.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Text runs in this paragraph
    #[serde(default)]
    pub runs: Vec<TextRun>,

    /// Alignment; `None` inherits from the enclosing cell or the default
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alignment: Option<Alignment>,

    /// Space before the paragraph, in points
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spacing_before: Option<f32>,

    /// Space after the paragraph, in points
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spacing_after: Option<f32>,

    /// Left indent, in points
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indent_left: Option<f32>,

    /// Line spacing multiplier (1.0 = single)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_spacing: Option<f32>,
}

impl Paragraph {
    /// Create a new empty paragraph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a paragraph with the given text.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            runs: vec![TextRun::plain(text)],
            ..Default::default()
        }
    }

    /// Create a paragraph holding one styled run.
    pub fn styled(text: impl Into<String>, style: RunStyle) -> Self {
        Self {
            runs: vec![TextRun::styled(text, style)],
            ..Default::default()
        }
    }

    /// Set the alignment.
    pub fn aligned(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    /// Set spacing before and after, in points.
    pub fn spaced(mut self, before: f32, after: f32) -> Self {
        self.spacing_before = Some(before);
        self.spacing_after = Some(after);
        self
    }

    /// Set the left indent, in points.
    pub fn indented(mut self, points: f32) -> Self {
        self.indent_left = Some(points);
        self
    }

    /// Set the line spacing multiplier.
    pub fn with_line_spacing(mut self, multiplier: f32) -> Self {
        self.line_spacing = Some(multiplier);
        self
    }

    /// Add a text run to this paragraph.
    pub fn add_run(&mut self, run: TextRun) {
        self.runs.push(run);
    }

    /// Append a run, builder style.
    pub fn run(mut self, run: TextRun) -> Self {
        self.runs.push(run);
        self
    }

    /// Get the plain text content.
    pub fn plain_text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }

    /// Check if this paragraph is empty.
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty() || self.runs.iter().all(|r| r.is_empty())
    }

    /// Check if any paragraph property is set.
    pub fn has_properties(&self) -> bool {
        self.alignment.is_some()
            || self.spacing_before.is_some()
            || self.spacing_after.is_some()
            || self.indent_left.is_some()
            || self.line_spacing.is_some()
    }
}
