//! HTML map rendering for normalized tracks
//!
//! Renders a finished, ordered [`crate::Track`] as a self-contained
//! interactive HTML page: a marker per point with start and end
//! distinguished, a trail polyline in sequence order, a popup per point,
//! and a stats banner. Tiles and the Leaflet runtime load from public CDNs,
//! so the page needs no API key.
//!
//! The generator consumes the track read-only; it expects callers to have
//! sorted chronologically first.

pub mod generator;
mod template;

pub use generator::MapGenerator;
