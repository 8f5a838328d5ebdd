//! In-memory document tree.
//!
//! A [`ReportDocument`] is an ordered list of [`Block`]s built with
//! [`DocumentBuilder`]. It carries no layout beyond what a word processor
//! needs: heading levels, alignment, paragraph spacing and styled runs.

use chrono::NaiveDateTime;

/// Heading level, rendered with the `Heading1`..`Heading3` styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
}

impl HeadingLevel {
    pub const fn style_id(&self) -> &'static str {
        match self {
            Self::H1 => "Heading1",
            Self::H2 => "Heading2",
            Self::H3 => "Heading3",
        }
    }

    pub const fn depth(&self) -> usize {
        match self {
            Self::H1 => 1,
            Self::H2 => 2,
            Self::H3 => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Default,
    Center,
}

/// Space before and after a paragraph, in twentieths of a point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Spacing {
    pub before: Option<u32>,
    pub after: Option<u32>,
}

impl Spacing {
    pub const fn after(after: u32) -> Self {
        Self {
            before: None,
            after: Some(after),
        }
    }

    pub const fn around(before: u32, after: u32) -> Self {
        Self {
            before: Some(before),
            after: Some(after),
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.before.is_none() && self.after.is_none()
    }
}

/// A run of text sharing one set of character properties.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextRun {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
    /// Font size in half-points.
    pub size: Option<u32>,
    /// Hex RGB colour without `#`.
    pub color: Option<String>,
}

impl TextRun {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    #[must_use]
    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    #[must_use]
    pub fn size(mut self, half_points: u32) -> Self {
        self.size = Some(half_points);
        self
    }

    #[must_use]
    pub fn color(mut self, hex: impl Into<String>) -> Self {
        self.color = Some(hex.into());
        self
    }

    pub fn has_properties(&self) -> bool {
        self.bold || self.italic || self.size.is_some() || self.color.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading {
        level: HeadingLevel,
        text: String,
        alignment: Alignment,
        spacing: Spacing,
    },
    Paragraph {
        runs: Vec<TextRun>,
        alignment: Alignment,
        spacing: Spacing,
    },
}

impl Block {
    /// Concatenated text of the block.
    pub fn text(&self) -> String {
        match self {
            Self::Heading { text, .. } => text.clone(),
            Self::Paragraph { runs, .. } => runs.iter().map(|run| run.text.as_str()).collect(),
        }
    }
}

/// Package-level metadata written to `docProps/core.xml`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentProperties {
    pub title: String,
    pub creator: String,
    pub created: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportDocument {
    pub properties: DocumentProperties,
    pub blocks: Vec<Block>,
}

impl ReportDocument {
    /// Plain-text outline: one line per block, headings prefixed with `#`
    /// per level.
    pub fn outline(&self) -> String {
        self.blocks
            .iter()
            .map(|block| match block {
                Block::Heading { level, text, .. } => {
                    format!("{} {text}", "#".repeat(level.depth()))
                }
                Block::Paragraph { .. } => block.text(),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Every run of text in document order, headings included.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.blocks.iter().flat_map(|block| match block {
            Block::Heading { text, .. } => vec![text.as_str()],
            Block::Paragraph { runs, .. } => runs.iter().map(|run| run.text.as_str()).collect(),
        })
    }
}

/// Builder collecting blocks in order.
#[derive(Debug)]
pub struct DocumentBuilder {
    properties: DocumentProperties,
    blocks: Vec<Block>,
}

impl DocumentBuilder {
    pub fn new(properties: DocumentProperties) -> Self {
        Self {
            properties,
            blocks: Vec::new(),
        }
    }

    #[must_use]
    pub fn heading(
        mut self,
        level: HeadingLevel,
        text: impl Into<String>,
        alignment: Alignment,
        spacing: Spacing,
    ) -> Self {
        self.blocks.push(Block::Heading {
            level,
            text: text.into(),
            alignment,
            spacing,
        });
        self
    }

    #[must_use]
    pub fn paragraph(mut self, runs: Vec<TextRun>, alignment: Alignment, spacing: Spacing) -> Self {
        self.blocks.push(Block::Paragraph {
            runs,
            alignment,
            spacing,
        });
        self
    }

    /// Label/value row: a bold label followed by a value run.
    #[must_use]
    pub fn labeled(self, label: impl Into<String>, value: TextRun, spacing: Spacing) -> Self {
        self.paragraph(
            vec![TextRun::new(label).bold(), value],
            Alignment::Default,
            spacing,
        )
    }

    pub fn build(self) -> ReportDocument {
        ReportDocument {
            properties: self.properties,
            blocks: self.blocks,
        }
    }
}
