// Module exports for models

pub mod occurrence;
pub mod recurrence;
pub mod venue;

pub use occurrence::Occurrence;
pub use recurrence::RecurrenceRule;
pub use venue::{GeoPoint, Venue};
