use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, List, ListItem, Paragraph, Row, Table, TableState, Wrap},
    Frame,
};

use super::{badge_style, cell_span, tone_color};
use crate::interactive::app::DashboardApp;
use crate::interactive::layout::{panel_layout, view_layout};
use crate::views::{TableModel, Tone, ViewKind, ViewState};

/// Draw a mounted collection view. Exactly one of loading, error or the
/// collection is shown.
pub fn draw_collection(frame: &mut Frame, area: Rect, app: &DashboardApp, kind: ViewKind) {
    let spec = kind.spec();

    match &app.view {
        ViewState::Loading => {
            let loading = Paragraph::new("⟳ Loading...")
                .style(Style::default().fg(Color::Yellow))
                .block(Block::default().borders(Borders::ALL).title(format!(" {} ", spec.title)));
            frame.render_widget(loading, area);
        }
        ViewState::Failed(message) => {
            let error = Paragraph::new(Line::from(vec![
                Span::styled("Error: ", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
                Span::styled(message.clone(), Style::default().fg(Color::Red)),
            ]))
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Red)),
            );
            frame.render_widget(error, area);
        }
        ViewState::Loaded(model) => {
            let layout = view_layout(area);
            draw_title(frame, layout.title, kind);

            if model.is_empty() {
                draw_placeholder(frame, layout.body, kind);
            } else if app.show_cards && !model.cards.is_empty() {
                let panels = panel_layout(layout.body);
                draw_table(frame, panels.left, model, app.selected_index);
                draw_cards(frame, panels.right, model, app.selected_index);
            } else {
                draw_table(frame, layout.body, model, app.selected_index);
            }
        }
    }
}

fn draw_title(frame: &mut Frame, area: Rect, kind: ViewKind) {
    let spec = kind.spec();
    let mut heading = vec![Span::styled(
        spec.title,
        Style::default()
            .fg(tone_color(spec.accent))
            .add_modifier(Modifier::BOLD),
    )];
    if let Some(action) = spec.primary_action {
        heading.push(Span::raw("  "));
        heading.push(Span::styled(format!(" {} ", action), badge_style(Tone::Primary)));
    }

    let lines = vec![
        Line::from(heading),
        Line::from(Span::styled(spec.subtitle, Style::default().fg(Color::Gray))),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn draw_placeholder(frame: &mut Frame, area: Rect, kind: ViewKind) {
    let spec = kind.spec();
    let info = Style::default().fg(tone_color(Tone::Info));
    let placeholder = Paragraph::new(vec![
        Line::from(Span::styled(
            format!("ℹ {}", spec.empty_heading),
            info.add_modifier(Modifier::BOLD),
        )),
        Line::from(spec.empty_body),
    ])
    .block(Block::default().borders(Borders::ALL).border_style(info));
    frame.render_widget(placeholder, area);
}

fn draw_table(frame: &mut Frame, area: Rect, model: &TableModel, selected: usize) {
    let spec = model.kind.spec();

    let header = Row::new(
        model
            .headers
            .iter()
            .map(|h| Cell::from(*h).style(Style::default().add_modifier(Modifier::BOLD))),
    )
    .style(Style::default().fg(Color::White).bg(Color::Rgb(33, 37, 41)));

    let rows: Vec<Row> = model
        .rows
        .iter()
        .map(|row| {
            let cells = row.cells.iter().map(|cell| Cell::from(cell_span(cell)));
            let style = match row.highlight {
                Some(tone) => Style::default().fg(tone_color(tone)),
                None => Style::default(),
            };
            Row::new(cells).style(style)
        })
        .collect();

    let widths: Vec<Constraint> = model.widths.iter().map(|w| Constraint::Min(*w)).collect();

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", model.caption()))
                .border_style(Style::default().fg(tone_color(spec.accent))),
        )
        .highlight_style(Style::default().bg(Color::Rgb(30, 35, 50)).add_modifier(Modifier::BOLD))
        .highlight_symbol("► ");

    let mut state = TableState::default();
    state.select(Some(selected));
    frame.render_stateful_widget(table, area, &mut state);
}

fn draw_cards(frame: &mut Frame, area: Rect, model: &TableModel, selected: usize) {
    let selected_key = model.rows.get(selected).map(|row| row.key.as_str());

    let items: Vec<ListItem> = model
        .cards
        .iter()
        .map(|card| {
            let mut title = vec![Span::styled(
                card.title.clone(),
                Style::default()
                    .fg(tone_color(card.tone))
                    .add_modifier(Modifier::BOLD),
            )];
            if let Some(badge) = &card.badge {
                title.push(Span::raw(" "));
                title.push(cell_span(badge));
            }

            let mut lines = vec![Line::from(title)];
            lines.extend(card.lines.iter().map(|line| {
                Line::from(Span::styled(format!("  {}", line), Style::default().fg(Color::Gray)))
            }));
            let actions = card
                .actions
                .iter()
                .map(|action| format!("[{}]", action))
                .collect::<Vec<_>>()
                .join(" ");
            lines.push(Line::from(Span::styled(
                format!("  {}", actions),
                Style::default().fg(Color::DarkGray),
            )));
            lines.push(Line::from(""));

            let item = ListItem::new(lines);
            if Some(card.key.as_str()) == selected_key {
                item.style(Style::default().bg(Color::Rgb(30, 35, 50)))
            } else {
                item
            }
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Cards ")
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(list, area);
}
