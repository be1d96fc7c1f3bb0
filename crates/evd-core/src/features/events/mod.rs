//! Events feature slice.
//!
//! - `model.rs`: `Event`, `NewEvent`, `EventPatch`, `RsvpStatus`, `EventStats`
//! - `seed.rs`: sample events and RSVPs the store starts with
//! - `state.rs`: `EventsStore` mutations and queries

pub mod model;
pub mod seed;
mod state;

pub use model::{EVENT_CREATOR, Event, EventPatch, EventStats, Location, NewEvent, RsvpStatus};
pub use state::EventsStore;
