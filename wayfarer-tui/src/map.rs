//! Map pane: per-city marker set rendered on a ratatui canvas.

use ratatui::{
    prelude::*,
    widgets::{
        Block, Borders, Paragraph,
        canvas::{Canvas, Line as CanvasLine},
    },
};
use wayfarer_core::model::{City, Coordinate};

/// Marker derived from a located event.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Marker {
    /// Day position within the city, declared order.
    pub day: usize,
    /// Event position within the day.
    pub event: usize,
    pub position: Coordinate,
    pub title: String,
    pub time: String,
}

impl Marker {
    /// Popup text bound to the marker: title plus time label.
    pub(crate) fn popup_label(&self) -> String {
        format!("{} ({})", self.title, self.time)
    }
}

/// View state for the map pane of the currently selected city.
///
/// Rebuilt from scratch on every city switch, so the previous city's markers
/// are gone before the new ones appear.
#[derive(Debug, Clone)]
pub(crate) struct MapPane {
    center: Coordinate,
    zoom: u8,
    markers: Vec<Marker>,
}

impl MapPane {
    /// Pane with nothing to show, used before the document is loaded.
    pub(crate) fn empty() -> Self {
        Self {
            center: Coordinate(0.0, 0.0),
            zoom: 1,
            markers: Vec::new(),
        }
    }

    /// Build the pane for a city: center/zoom from the city, one marker per
    /// event that has a coordinate, in declared day and event order.
    pub(crate) fn for_city(city: &City) -> Self {
        let markers = city
            .days
            .values()
            .enumerate()
            .flat_map(|(day_index, day)| {
                day.events
                    .iter()
                    .enumerate()
                    .filter_map(move |(event_index, event)| {
                        event.coords.map(|position| Marker {
                            day: day_index,
                            event: event_index,
                            position,
                            title: event.title.clone(),
                            time: event.time.clone(),
                        })
                    })
            })
            .collect();

        Self {
            center: city.center,
            zoom: city.zoom,
            markers,
        }
    }

    pub(crate) fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// Degree span of the viewport, halving per zoom level.
    fn span(&self) -> f64 {
        360.0 / f64::from(1_u32 << u32::from(self.zoom.min(24)))
    }

    /// Longitude bounds of the viewport.
    pub(crate) fn x_bounds(&self) -> [f64; 2] {
        let span = self.span();
        [self.center.lon() - span, self.center.lon() + span]
    }

    /// Latitude bounds of the viewport. Half the longitude span, since the
    /// canvas cell grid is roughly twice as wide as tall.
    pub(crate) fn y_bounds(&self) -> [f64; 2] {
        let half = self.span() / 2.0;
        [self.center.lat() - half, self.center.lat() + half]
    }

    /// Draw the pane: canvas with markers plus a footer line carrying the
    /// highlighted marker's popup text.
    pub(crate) fn render(&self, frame: &mut Frame<'_>, area: Rect, highlight: Option<(usize, usize)>) {
        let layout_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(area);

        let chunks = layout_chunks.as_ref();
        let [canvas_area, footer_area] = chunks else {
            return;
        };

        let x_bounds = self.x_bounds();
        let y_bounds = self.y_bounds();

        let canvas = Canvas::default()
            .block(Block::default().borders(Borders::ALL).title("Map"))
            .x_bounds(x_bounds)
            .y_bounds(y_bounds)
            .paint(|ctx| {
                // Faint crosshair through the city center for orientation.
                let grid_color = Color::DarkGray;
                ctx.draw(&CanvasLine {
                    x1: x_bounds[0],
                    y1: self.center.lat(),
                    x2: x_bounds[1],
                    y2: self.center.lat(),
                    color: grid_color,
                });
                ctx.draw(&CanvasLine {
                    x1: self.center.lon(),
                    y1: y_bounds[0],
                    x2: self.center.lon(),
                    y2: y_bounds[1],
                    color: grid_color,
                });

                ctx.layer();

                for marker in &self.markers {
                    let selected = highlight == Some((marker.day, marker.event));
                    let style = if selected {
                        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(Color::Red)
                    };
                    ctx.print(
                        marker.position.lon(),
                        marker.position.lat(),
                        Line::styled("◆", style),
                    );
                }
            });

        frame.render_widget(canvas, *canvas_area);

        let footer_text = self
            .markers
            .iter()
            .find(|marker| highlight == Some((marker.day, marker.event)))
            .map_or_else(
                || match self.markers.len() {
                    0 => "No located events".to_owned(),
                    1 => "1 marker".to_owned(),
                    count => format!("{count} markers"),
                },
                Marker::popup_label,
            );

        let footer = Paragraph::new(footer_text).style(Style::default().fg(Color::DarkGray));
        frame.render_widget(footer, *footer_area);
    }
}
