//! Domain types for the station directory.
//!
//! A [`Station`] can only be written through a [`StationDraft`], and a draft
//! can only be obtained by validating raw input, so the required-field
//! invariant holds for everything the repository stores.

mod error;
mod station;

pub use error::{RequiredField, ValidationError};
pub use station::{InvalidStationId, Station, StationDraft, StationId};
