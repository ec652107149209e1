use std::fmt::Write;

use colored::*;
use serde::Serialize;
use serde_json::json;

use super::theme::ThemedColorize;
use super::utils::{display_width, pad_to_width};
use crate::error::{OctofitError, OctofitResult};
use crate::views::{Card, CellStyle, CellValue, TableModel, Tone, ViewKind, ViewState};

const MAX_COLUMN_WIDTH: usize = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Title block, table and cards
    Full,
    Table,
    Cards,
    Json,
}

impl OutputFormat {
    pub fn parse(value: &str) -> OctofitResult<Self> {
        match value {
            "full" => Ok(OutputFormat::Full),
            "table" => Ok(OutputFormat::Table),
            "cards" => Ok(OutputFormat::Cards),
            "json" => Ok(OutputFormat::Json),
            other => Err(OctofitError::InvalidInput(format!("unknown output format '{}'", other))),
        }
    }
}

/// Render one view state for the terminal. Exactly one of loading, error
/// or collection is produced.
pub fn render_view(state: &ViewState<TableModel>, kind: ViewKind, format: OutputFormat) -> String {
    match state {
        ViewState::Loading => format!("{}\n", "⟳ Loading...".with_tone(Tone::Muted)),
        ViewState::Failed(message) => render_error(message),
        ViewState::Loaded(model) => {
            let mut out = String::new();
            if format == OutputFormat::Full {
                out.push_str(&render_title(kind));
                out.push('\n');
            }

            if model.is_empty() {
                out.push_str(&render_placeholder(kind));
                return out;
            }

            match format {
                OutputFormat::Cards if !model.cards.is_empty() => out.push_str(&render_cards(model)),
                OutputFormat::Full if !model.cards.is_empty() => {
                    out.push_str(&render_table(model));
                    out.push('\n');
                    out.push_str(&render_cards(model));
                }
                _ => out.push_str(&render_table(model)),
            }
            out
        }
    }
}

pub fn render_error(message: &str) -> String {
    format!("{} {}\n", "Error:".red().bold(), message.red())
}

fn render_title(kind: ViewKind) -> String {
    let spec = kind.spec();
    let mut out = String::new();
    let _ = writeln!(out, "{}", spec.title.with_tone(spec.accent).bold());
    let _ = writeln!(out, "{}", spec.subtitle.with_tone(Tone::Muted));
    if let Some(action) = spec.primary_action {
        let _ = writeln!(out, "{}", format!("[{}]", action).dimmed());
    }
    out
}

fn render_placeholder(kind: ViewKind) -> String {
    let spec = kind.spec();
    format!(
        "{} {}\n  {}\n",
        "ℹ".with_tone(Tone::Info),
        spec.empty_heading.with_tone(Tone::Info).bold(),
        spec.empty_body
    )
}

fn cell_width(cell: &CellValue) -> usize {
    match cell.style {
        CellStyle::Badge => display_width(&cell.text) + 2,
        _ => display_width(&cell.text),
    }
}

fn column_widths(model: &TableModel) -> Vec<usize> {
    model
        .headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            let widest = model
                .rows
                .iter()
                .filter_map(|row| row.cells.get(i))
                .map(cell_width)
                .max()
                .unwrap_or(0);
            widest.max(display_width(header)).min(MAX_COLUMN_WIDTH)
        })
        .collect()
}

fn styled_cell(cell: &CellValue, width: usize) -> String {
    match cell.style {
        CellStyle::Badge => {
            let inner = pad_to_width(&cell.text, width.saturating_sub(2));
            let trimmed = inner.trim_end();
            let badge = format!(" {} ", trimmed);
            let pad = width.saturating_sub(display_width(&badge));
            format!("{}{}", badge.as_badge(cell.tone), " ".repeat(pad))
        }
        _ => {
            let text = pad_to_width(&cell.text, width);
            let styled = text.with_tone(cell.tone);
            let styled = match cell.style {
                CellStyle::Strong => styled.bold(),
                CellStyle::Code => styled.italic(),
                CellStyle::Link => styled.underline(),
                CellStyle::Actions => styled.dimmed(),
                _ => styled,
            };
            styled.to_string()
        }
    }
}

pub fn render_table(model: &TableModel) -> String {
    let spec = model.kind.spec();
    let widths = column_widths(model);
    let total: usize = widths.iter().sum::<usize>() + widths.len() * 2 + 2;
    let rule = "─".repeat(total).dimmed();

    let mut out = String::new();
    let _ = writeln!(out, "{}", model.caption().with_tone(spec.accent).bold());
    let _ = writeln!(out, "{}", rule);

    let header = model
        .headers
        .iter()
        .zip(&widths)
        .map(|(h, w)| pad_to_width(h, *w).bold().to_string())
        .collect::<Vec<_>>()
        .join("  ");
    let _ = writeln!(out, "  {}", header);
    let _ = writeln!(out, "{}", rule);

    for row in &model.rows {
        let marker = match row.highlight {
            Some(tone) => "▌".with_tone(tone).to_string(),
            None => " ".to_string(),
        };
        let cells = row
            .cells
            .iter()
            .zip(&widths)
            .map(|(cell, w)| styled_cell(cell, *w))
            .collect::<Vec<_>>()
            .join("  ");
        let _ = writeln!(out, "{} {}", marker, cells.trim_end());
    }
    let _ = writeln!(out, "{}", rule);
    out
}

fn render_card(card: &Card) -> String {
    let mut out = String::new();
    let edge = |s: &str| s.with_tone(card.tone).to_string();

    let mut heading = format!("{} {}", edge("╭"), card.title.with_tone(card.tone).bold());
    if let Some(badge) = &card.badge {
        heading.push_str(&format!("  {}", format!(" {} ", badge.text).as_badge(badge.tone)));
    }
    let _ = writeln!(out, "{}", heading);

    for line in &card.lines {
        let _ = writeln!(out, "{} {}", edge("│"), line.with_tone(Tone::Muted));
    }

    let actions = card
        .actions
        .iter()
        .map(|action| format!("[{}]", action))
        .collect::<Vec<_>>()
        .join(" ");
    let _ = writeln!(out, "{} {}", edge("╰"), actions.dimmed());
    out
}

pub fn render_cards(model: &TableModel) -> String {
    model
        .cards
        .iter()
        .map(render_card)
        .collect::<Vec<_>>()
        .join("\n")
}

/// JSON form of a settled view: the records in display order, or an
/// `{"error": ...}` object.
pub fn render_json<T: Serialize>(state: &ViewState<T>) -> String {
    let value = match state {
        ViewState::Loading => json!({ "loading": true }),
        ViewState::Failed(message) => json!({ "error": message }),
        ViewState::Loaded(data) => match serde_json::to_value(data) {
            Ok(value) => value,
            Err(e) => json!({ "error": e.to_string() }),
        },
    };
    serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string())
}
