//! Domain data structures for itineraries, cities, days, and events.

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

/// Geographic coordinate stored as a `[latitude, longitude]` pair.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Coordinate(pub f64, pub f64);

impl Coordinate {
    /// Latitude in degrees.
    #[must_use]
    pub fn lat(self) -> f64 {
        self.0
    }

    /// Longitude in degrees.
    #[must_use]
    pub fn lon(self) -> f64 {
        self.1
    }
}

/// Complete itinerary document: ordered mapping from city key to city.
///
/// Declared order in the JSON document defines tab order, so the mapping is
/// an [`IndexMap`] rather than a hash map.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct Itinerary {
    cities: IndexMap<String, City>,
}

impl Itinerary {
    /// Number of cities in the document.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// Whether the document contains no cities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Cities in declared order, with their keys.
    pub fn cities(&self) -> impl Iterator<Item = (&str, &City)> {
        self.cities.iter().map(|(key, city)| (key.as_str(), city))
    }

    /// City at the given position in declared order.
    #[must_use]
    pub fn city_at(&self, index: usize) -> Option<(&str, &City)> {
        self.cities
            .get_index(index)
            .map(|(key, city)| (key.as_str(), city))
    }
}

/// A named travel destination with its own schedule and map view.
#[derive(Debug, Clone, Deserialize)]
pub struct City {
    /// Display name shown on the tab and header.
    pub name: String,
    /// Short prose summary shown under the name.
    pub summary: String,
    /// Map center for this city.
    pub center: Coordinate,
    /// Map zoom level (Leaflet-style; higher is closer).
    pub zoom: u8,
    /// Days in declared order, keyed by day identifier.
    pub days: IndexMap<String, Day>,
}

impl City {
    /// Day at the given position in declared order.
    #[must_use]
    pub fn day_at(&self, index: usize) -> Option<&Day> {
        self.days.get_index(index).map(|(_, day)| day)
    }
}

/// One day's sub-schedule within a city.
#[derive(Debug, Clone, Deserialize)]
pub struct Day {
    /// Short label, e.g. a date or "Day 1".
    pub label: String,
    /// Headline for the day.
    pub title: String,
    /// Prose description shown when the day is expanded.
    pub description: String,
    /// Scheduled events in display order.
    pub events: Vec<Event>,
}

/// A single scheduled activity with optional location and detail payload.
#[derive(Debug, Clone, Deserialize)]
pub struct Event {
    /// Free-form time label, e.g. "09:00" or "Morning".
    pub time: String,
    /// Event title.
    pub title: String,
    /// One-line description.
    pub description: String,
    /// Geographic position, when the event is tied to a place.
    #[serde(default)]
    pub coords: Option<Coordinate>,
    /// Free-form key/value payload shown in the detail view.
    #[serde(default)]
    pub details: Option<IndexMap<String, Value>>,
}

impl Event {
    /// Whether this event carries a detail payload worth opening.
    #[must_use]
    pub fn has_details(&self) -> bool {
        self.details.as_ref().is_some_and(|map| !map.is_empty())
    }
}

/// Turn a detail key into a display title, e.g. `website` into `Website`.
#[must_use]
pub fn detail_title(key: &str) -> String {
    let mut chars = key.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Whether a detail value should be rendered as a link.
#[must_use]
pub fn is_link(value: &Value) -> bool {
    value.as_str().is_some_and(|text| text.starts_with("http"))
}

/// Plain display text for a detail value.
///
/// Strings are shown as-is; other JSON values fall back to their compact
/// serialization.
#[must_use]
pub fn detail_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const DOC: &str = r#"{
        "paris": {
            "name": "Paris",
            "summary": "Three days in the French capital.",
            "center": [48.8566, 2.3522],
            "zoom": 13,
            "days": {
                "day2": {
                    "label": "Day 2",
                    "title": "Museums",
                    "description": "Louvre and Orsay.",
                    "events": [
                        {
                            "time": "09:00",
                            "title": "Louvre",
                            "description": "Pre-booked entry.",
                            "coords": [48.8606, 2.3376],
                            "details": {"cost": "20 EUR", "website": "http://example.com"}
                        },
                        {
                            "time": "19:00",
                            "title": "Dinner",
                            "description": "No reservation yet."
                        }
                    ]
                },
                "day1": {
                    "label": "Day 1",
                    "title": "Arrival",
                    "description": "Check in, walk the river.",
                    "events": []
                }
            }
        },
        "rome": {
            "name": "Rome",
            "summary": "Two days south.",
            "center": [41.9028, 12.4964],
            "zoom": 12,
            "days": {}
        }
    }"#;

    fn parse() -> Itinerary {
        serde_json::from_str(DOC).expect("fixture parses")
    }

    #[test]
    fn cities_keep_declared_order() {
        let itinerary = parse();
        let keys: Vec<&str> = itinerary.cities().map(|(key, _)| key).collect();
        assert_eq!(keys, ["paris", "rome"]);
        assert_eq!(itinerary.len(), 2);
    }

    #[test]
    fn days_follow_declared_iteration_not_key_order() {
        let itinerary = parse();
        let (_, paris) = itinerary.city_at(0).expect("paris present");
        // "day2" is declared before "day1" and must stay first.
        let labels: Vec<&str> = paris.days.values().map(|day| day.label.as_str()).collect();
        assert_eq!(labels, ["Day 2", "Day 1"]);
    }

    #[test]
    fn optional_fields_are_absent_not_defaulted() {
        let itinerary = parse();
        let (_, paris) = itinerary.city_at(0).expect("paris present");
        let day = paris.day_at(0).expect("first day");
        let louvre = day.events.first().expect("louvre event");
        let dinner = day.events.get(1).expect("dinner event");

        assert!(louvre.coords.is_some());
        assert!(louvre.has_details());
        assert!(dinner.coords.is_none());
        assert!(!dinner.has_details());
    }

    #[test]
    fn coordinate_deserializes_from_two_element_array() {
        let coord: Coordinate = serde_json::from_str("[48.85, 2.35]").expect("array parses");
        assert!((coord.lat() - 48.85).abs() < f64::EPSILON);
        assert!((coord.lon() - 2.35).abs() < f64::EPSILON);
    }

    #[test]
    fn link_detection_only_matches_http_strings() {
        assert!(is_link(&json!("http://example.com")));
        assert!(is_link(&json!("https://example.com")));
        assert!(!is_link(&json!("20 EUR")));
        assert!(!is_link(&json!(42)));
    }

    #[test]
    fn detail_helpers_format_keys_and_values() {
        assert_eq!(detail_title("website"), "Website");
        assert_eq!(detail_title(""), "");
        assert_eq!(detail_text(&json!("20 EUR")), "20 EUR");
        assert_eq!(detail_text(&json!(3)), "3");
    }
}
