//! Core types and service wiring for the wayfarer itinerary viewer.

/// Domain models for itineraries, cities, days, and events.
pub mod model;
/// High-level service facade used by clients.
pub mod service;
/// Document sources and the errors they can produce.
pub mod source;

pub use model::*;
pub use service::*;
pub use source::*;
