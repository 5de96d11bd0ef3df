use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Tabs, Wrap},
};
use wayfarer_core::model::City;

use crate::app::{App, DetailModal, Phase, Row};

/// Narrowest terminal that still gets the map pane. Below this the schedule
/// takes the full width and the map is hidden entirely.
const MAP_MIN_TOTAL_WIDTH: u16 = 70;

pub(crate) fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();

    // Outer layout: tab bar, main content, status line
    let layout_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);

    let chunks = layout_chunks.as_ref();
    let [tabs_area, content_area, status_area] = chunks else {
        return;
    };

    draw_tabs(frame, app, *tabs_area);

    match &app.phase {
        Phase::Loading => {
            let paragraph = Paragraph::new("Loading itinerary…")
                .block(Block::default().borders(Borders::ALL))
                .wrap(Wrap { trim: true });
            frame.render_widget(paragraph, *content_area);
        }
        Phase::Failed(message) => {
            let paragraph = Paragraph::new(message.as_str())
                .block(Block::default().borders(Borders::ALL).title("Error"))
                .style(Style::default().fg(Color::Red))
                .wrap(Wrap { trim: true });
            frame.render_widget(paragraph, *content_area);
        }
        Phase::Ready => draw_city(frame, app, *content_area),
    }

    draw_status(frame, app, *status_area);

    if let Some(modal) = &app.modal {
        draw_modal(frame, modal, area);
    }
}

fn draw_tabs(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let names = app.city_names();

    if names.is_empty() {
        // Nothing loaded yet (or load failed): no tabs to populate.
        let header = Paragraph::new("wayfarer – travel itinerary viewer")
            .block(Block::default().borders(Borders::ALL).title("Wayfarer"));
        frame.render_widget(header, area);
        return;
    }

    let tabs = Tabs::new(names)
        .select(app.city_index)
        .block(Block::default().borders(Borders::ALL).title("Cities (←/→)"))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(tabs, area);
}

fn draw_city(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let Some(city) = app.selected_city() else {
        return;
    };

    // Map pane only when there is room for it; otherwise the schedule takes
    // the full width and the map is hidden.
    let schedule_area = if area.width >= MAP_MIN_TOTAL_WIDTH {
        let layout_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(40), Constraint::Percentage(42)])
            .split(area);

        let chunks = layout_chunks.as_ref();
        let [schedule_area, map_area] = chunks else {
            return;
        };

        app.map.render(frame, *map_area, app.highlighted_event());
        *schedule_area
    } else {
        area
    };

    let layout_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(0)])
        .split(schedule_area);

    let chunks = layout_chunks.as_ref();
    let [header_area, list_area] = chunks else {
        return;
    };

    let header = Paragraph::new(city.summary.as_str())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(city.name.clone()),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(header, *header_area);

    let rows = app.rows();
    let items: Vec<ListItem<'_>> = rows
        .iter()
        .map(|row| schedule_item(city, app, *row))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Schedule (↑/↓, Enter)"),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );

    let mut state = ListState::default();
    if !rows.is_empty() {
        state.select(Some(app.cursor));
    }
    frame.render_stateful_widget(list, *list_area, &mut state);
}

fn schedule_item<'a>(city: &'a City, app: &App, row: Row) -> ListItem<'a> {
    match row {
        Row::Day(day_index) => {
            let Some(day) = city.day_at(day_index) else {
                return ListItem::new("");
            };
            let expanded = app.expanded.contains(&day_index);
            let arrow = if expanded { "▾" } else { "▸" };

            let mut text = Text::from(Line::from(vec![
                Span::raw(format!("{arrow} ")),
                Span::styled(
                    format!("{} — {}", day.label, day.title),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ]));

            if expanded && !day.description.is_empty() {
                text.push_line(Line::styled(
                    format!("  {}", day.description),
                    Style::default().fg(Color::DarkGray),
                ));
            }

            ListItem::new(text)
        }
        Row::Event { day, event } => {
            let Some(entry) = city
                .day_at(day)
                .and_then(|schedule| schedule.events.get(event))
            else {
                return ListItem::new("");
            };

            let mut spans = vec![
                Span::styled(
                    format!("    {:<6}", entry.time),
                    Style::default().fg(Color::Cyan),
                ),
                Span::raw(entry.title.clone()),
            ];
            if entry.has_details() {
                spans.push(Span::styled(
                    "  [details]",
                    Style::default().fg(Color::DarkGray),
                ));
            }

            let mut text = Text::from(Line::from(spans));
            if !entry.description.is_empty() {
                text.push_line(Line::styled(
                    format!("          {}", entry.description),
                    Style::default().fg(Color::DarkGray),
                ));
            }

            ListItem::new(text)
        }
    }
}

fn draw_status(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let nav_hint = if app.modal.is_some() {
        "Esc close details · q/Ctrl-C quit"
    } else {
        match app.phase {
            Phase::Loading => "Loading… · q/Ctrl-C quit",
            Phase::Failed(_) => "Load failed · q/Ctrl-C quit",
            Phase::Ready => {
                "←/→ switch city · ↑/↓ move · Enter/Space expand or open details · q/Ctrl-C quit"
            }
        }
    };

    let status_style = match app.phase {
        Phase::Failed(_) => Style::default().fg(Color::Red),
        Phase::Loading => Style::default().fg(Color::Yellow),
        Phase::Ready => Style::default(),
    };

    let status = Paragraph::new(nav_hint)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(status_style)
        .wrap(Wrap { trim: true });
    frame.render_widget(status, area);
}

fn draw_modal(frame: &mut Frame<'_>, modal: &DetailModal, area: Rect) {
    let popup_area = centered_rect(60, 50, area);
    frame.render_widget(Clear, popup_area);

    let mut lines: Vec<Line<'_>> = modal
        .entries
        .iter()
        .map(|entry| {
            let value_style = if entry.is_link {
                Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::UNDERLINED)
            } else {
                Style::default()
            };
            Line::from(vec![
                Span::styled(
                    format!("{}: ", entry.title),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(entry.text.clone(), value_style),
            ])
        })
        .collect();

    lines.push(Line::raw(""));
    lines.push(Line::styled(
        "Esc to close",
        Style::default().fg(Color::DarkGray),
    ));

    let popup = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(modal.title.clone()),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(popup, popup_area);
}

/// Rectangle centered in `area`, sized as percentages of it.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let Some(middle) = vertical.get(1).copied() else {
        return area;
    };

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(middle);

    horizontal.get(1).copied().unwrap_or(area)
}
