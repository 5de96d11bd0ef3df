//! Loads the shipped sample document through the real file source.

use wayfarer_core::{FileSource, ItinerarySource, WayfarerService};

fn sample_path() -> String {
    concat!(env!("CARGO_MANIFEST_DIR"), "/../data/itinerary.json").to_owned()
}

#[tokio::test]
async fn sample_document_loads_and_keeps_order() {
    let source = FileSource::new(sample_path());
    let itinerary = source.fetch().await.expect("sample document loads");

    let keys: Vec<&str> = itinerary.cities().map(|(key, _)| key).collect();
    assert_eq!(keys, ["paris", "rome"]);

    let (_, paris) = itinerary.city_at(0).expect("paris present");
    assert_eq!(paris.name, "Paris");
    assert_eq!(paris.days.len(), 3);

    // Every event either has a two-element coordinate or none at all, and at
    // least one located event exists per city so the map pane has markers.
    for (_, city) in itinerary.cities() {
        let located = city
            .days
            .values()
            .flat_map(|day| &day.events)
            .filter(|event| event.coords.is_some())
            .count();
        assert!(located > 0, "{} has no located events", city.name);
    }
}

#[tokio::test]
async fn service_resolves_the_sample_path_as_a_file() {
    let client = reqwest::Client::new();
    let service = WayfarerService::from_spec(client, &sample_path());
    let itinerary = service.load().await.expect("service load succeeds");
    assert_eq!(itinerary.len(), 2);
}
