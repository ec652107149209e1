use crate::views::resource::Resource;
use crate::views::route::ViewKind;

/// Semantic color of a cell, badge or card. Each surface maps tones to its
/// own palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Plain,
    Primary,
    Secondary,
    Success,
    Danger,
    Warning,
    Info,
    Light,
    Dark,
    Muted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellStyle {
    Text,
    Strong,
    Badge,
    Code,
    Link,
    /// Inert action buttons
    Actions,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CellValue {
    pub text: String,
    pub tone: Tone,
    pub style: CellStyle,
}

impl CellValue {
    pub fn new(text: impl Into<String>, tone: Tone, style: CellStyle) -> Self {
        Self { text: text.into(), tone, style }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::new(text, Tone::Plain, CellStyle::Text)
    }

    pub fn strong(text: impl Into<String>, tone: Tone) -> Self {
        Self::new(text, tone, CellStyle::Strong)
    }

    pub fn badge(text: impl Into<String>, tone: Tone) -> Self {
        Self::new(text, tone, CellStyle::Badge)
    }

    pub fn code(text: impl Into<String>) -> Self {
        Self::new(text, Tone::Muted, CellStyle::Code)
    }

    pub fn link(text: impl Into<String>) -> Self {
        Self::new(text, Tone::Primary, CellStyle::Link)
    }

    pub fn actions(labels: &[&str]) -> Self {
        let text = labels
            .iter()
            .map(|label| format!("[{}]", label))
            .collect::<Vec<_>>()
            .join(" ");
        Self::new(text, Tone::Muted, CellStyle::Actions)
    }
}

/// Column descriptor: header, preferred width and a cell renderer that gets
/// the record and its display position.
pub struct Column<R> {
    pub header: &'static str,
    pub width: u16,
    pub render: fn(&R, usize) -> CellValue,
}

impl<R> Column<R> {
    pub fn new(header: &'static str, width: u16, render: fn(&R, usize) -> CellValue) -> Self {
        Self { header, width, render }
    }

    /// The `#` column, numbered from 1.
    pub fn position() -> Self {
        Self::new("#", 4, |_, index| CellValue::strong((index + 1).to_string(), Tone::Plain))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub key: String,
    pub title: String,
    pub tone: Tone,
    pub badge: Option<CellValue>,
    pub lines: Vec<String>,
    pub actions: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    /// Display key: record id or position
    pub key: String,
    pub cells: Vec<CellValue>,
    pub highlight: Option<Tone>,
}

/// Type-erased render model of a loaded collection, drawn by both the
/// printed and the interactive surface.
#[derive(Debug, Clone, PartialEq)]
pub struct TableModel {
    pub kind: ViewKind,
    pub headers: Vec<&'static str>,
    pub widths: Vec<u16>,
    pub rows: Vec<TableRow>,
    pub cards: Vec<Card>,
}

impl TableModel {
    pub fn from_records<R: Resource>(records: &[R]) -> Self {
        let columns = R::columns();

        let rows = records
            .iter()
            .enumerate()
            .map(|(index, record)| TableRow {
                key: record.display_key(index),
                cells: columns.iter().map(|column| (column.render)(record, index)).collect(),
                highlight: record.highlight(index),
            })
            .collect();

        let cards = records
            .iter()
            .enumerate()
            .filter_map(|(index, record)| record.card(index))
            .collect();

        Self {
            kind: R::KIND,
            headers: columns.iter().map(|column| column.header).collect(),
            widths: columns.iter().map(|column| column.width).collect(),
            rows,
            cards,
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn caption(&self) -> String {
        self.kind.spec().caption(self.len())
    }

    pub fn column_index(&self, header: &str) -> Option<usize> {
        self.headers.iter().position(|h| *h == header)
    }

    /// Texts of one column, top to bottom.
    pub fn column_texts(&self, header: &str) -> Vec<&str> {
        match self.column_index(header) {
            Some(index) => self
                .rows
                .iter()
                .filter_map(|row| row.cells.get(index))
                .map(|cell| cell.text.as_str())
                .collect(),
            None => Vec::new(),
        }
    }
}
