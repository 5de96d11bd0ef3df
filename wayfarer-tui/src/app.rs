use std::collections::HashSet;

use wayfarer_core::{
    model::{City, Event, Itinerary, detail_text, detail_title, is_link},
    source::LoadError,
};

use crate::map::MapPane;

/// Lifecycle of the viewer: one load at startup, then city browsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Phase {
    Loading,
    Failed(String),
    Ready,
}

/// A selectable row in the schedule list: a day header, or an event of an
/// expanded day. Flattened in declared order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Row {
    Day(usize),
    Event { day: usize, event: usize },
}

/// One formatted entry of the detail modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DetailEntry {
    pub title: String,
    pub text: String,
    pub is_link: bool,
}

/// Modal content for a single event's detail payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DetailModal {
    pub title: String,
    pub entries: Vec<DetailEntry>,
}

impl DetailModal {
    fn for_event(event: &Event) -> Option<Self> {
        let details = event.details.as_ref().filter(|map| !map.is_empty())?;

        let entries = details
            .iter()
            .map(|(key, value)| DetailEntry {
                title: detail_title(key),
                text: detail_text(value),
                is_link: is_link(value),
            })
            .collect();

        Some(Self {
            title: event.title.clone(),
            entries,
        })
    }
}

pub(crate) struct App {
    pub phase: Phase,
    itinerary: Itinerary,

    pub city_index: usize,
    pub expanded: HashSet<usize>,
    pub cursor: usize,
    pub modal: Option<DetailModal>,
    pub map: MapPane,
}

impl App {
    pub(crate) fn new() -> Self {
        Self {
            phase: Phase::Loading,
            itinerary: Itinerary::default(),
            city_index: 0,
            expanded: HashSet::new(),
            cursor: 0,
            modal: None,
            map: MapPane::empty(),
        }
    }

    /// Apply the result of the single startup load. On failure the app stays
    /// up showing the message, naming the document origin; no tabs are
    /// populated and no retry happens.
    pub(crate) fn apply_load(&mut self, origin: &str, result: Result<Itinerary, LoadError>) {
        match result {
            Ok(itinerary) => {
                self.itinerary = itinerary;
                self.phase = Phase::Ready;
                self.select_city(0);
            }
            Err(err) => {
                self.phase = Phase::Failed(format!(
                    "Could not load itinerary from {origin}: {err}"
                ));
            }
        }
    }

    /// City names for the tab bar, in declared order. Empty unless loaded.
    pub(crate) fn city_names(&self) -> Vec<&str> {
        if self.phase == Phase::Ready {
            self.itinerary
                .cities()
                .map(|(_, city)| city.name.as_str())
                .collect()
        } else {
            Vec::new()
        }
    }

    pub(crate) fn selected_city(&self) -> Option<&City> {
        if self.phase != Phase::Ready {
            return None;
        }
        self.itinerary.city_at(self.city_index).map(|(_, city)| city)
    }

    /// Switch to the city at `index`, discarding all per-city view state and
    /// rebuilding the map markers from scratch.
    pub(crate) fn select_city(&mut self, index: usize) {
        if self.itinerary.is_empty() {
            self.city_index = 0;
            self.map = MapPane::empty();
            return;
        }

        self.city_index = index % self.itinerary.len();
        self.expanded.clear();
        self.cursor = 0;
        self.modal = None;
        self.map = self
            .itinerary
            .city_at(self.city_index)
            .map_or_else(MapPane::empty, |(_, city)| MapPane::for_city(city));
    }

    pub(crate) fn next_tab(&mut self) {
        if self.phase == Phase::Ready && !self.itinerary.is_empty() {
            self.select_city(self.city_index + 1);
        }
    }

    pub(crate) fn prev_tab(&mut self) {
        if self.phase == Phase::Ready && !self.itinerary.is_empty() {
            self.select_city(self.city_index + self.itinerary.len() - 1);
        }
    }

    /// Visible rows of the schedule: every day header, plus the events of
    /// days that are currently expanded.
    pub(crate) fn rows(&self) -> Vec<Row> {
        let Some(city) = self.selected_city() else {
            return Vec::new();
        };

        let mut rows = Vec::new();
        for (day_index, day) in city.days.values().enumerate() {
            rows.push(Row::Day(day_index));
            if self.expanded.contains(&day_index) {
                for event_index in 0..day.events.len() {
                    rows.push(Row::Event {
                        day: day_index,
                        event: event_index,
                    });
                }
            }
        }
        rows
    }

    pub(crate) fn cursor_row(&self) -> Option<Row> {
        self.rows().get(self.cursor).copied()
    }

    /// The event under the cursor, if any, for the map highlight.
    pub(crate) fn highlighted_event(&self) -> Option<(usize, usize)> {
        match self.cursor_row() {
            Some(Row::Event { day, event }) => Some((day, event)),
            _ => None,
        }
    }

    pub(crate) fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub(crate) fn move_down(&mut self) {
        let visible = self.rows().len();
        if self.cursor + 1 < visible {
            self.cursor += 1;
        }
    }

    /// Act on the cursor row: toggle a day section, or open the detail modal
    /// for an event that carries a payload.
    pub(crate) fn activate(&mut self) {
        match self.cursor_row() {
            Some(Row::Day(day_index)) => self.toggle_day(day_index),
            Some(Row::Event { day, event }) => self.open_details(day, event),
            None => {}
        }
    }

    /// Toggle one day's expanded state, independent of all other days.
    pub(crate) fn toggle_day(&mut self, day_index: usize) {
        if !self.expanded.remove(&day_index) {
            self.expanded.insert(day_index);
        }
        let visible = self.rows().len();
        if self.cursor >= visible {
            self.cursor = visible.saturating_sub(1);
        }
    }

    fn open_details(&mut self, day_index: usize, event_index: usize) {
        let modal = self
            .selected_city()
            .and_then(|city| city.day_at(day_index))
            .and_then(|day| day.events.get(event_index))
            .and_then(DetailModal::for_event);

        if modal.is_some() {
            self.modal = modal;
        }
    }

    pub(crate) fn close_modal(&mut self) {
        self.modal = None;
    }
}
