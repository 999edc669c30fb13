// Venue module
// Read-only worship-place records as supplied by the persistence collaborator

use serde::{Deserialize, Serialize};

/// A WGS84 coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// A worship place with a position and a raw recurring-schedule string.
///
/// Venues are owned by the persistence layer and consumed read-only here;
/// the `raw_schedule` field uses the clause grammar
/// `"<Type> - <Weekday> <HH:MM>-<HH:MM>; ..."` and is parsed tolerantly
/// by the schedule service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    pub id: String,
    pub name: String,
    pub city: String,
    pub denomination: String,
    pub position: GeoPoint,
    pub raw_schedule: String,
}

impl Venue {
    /// Create a venue with required fields
    ///
    /// # Arguments
    /// * `id` - Stable record identifier from the data store
    /// * `name` - Venue display name (required, non-empty)
    /// * `position` - Venue coordinates
    ///
    /// # Returns
    /// Returns `Result<Venue, String>` with validation
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        position: GeoPoint,
    ) -> Result<Self, String> {
        let name = name.into();

        if name.trim().is_empty() {
            return Err("Venue name cannot be empty".to_string());
        }

        Ok(Self {
            id: id.into(),
            name,
            city: String::new(),
            denomination: String::new(),
            position,
            raw_schedule: String::new(),
        })
    }

    /// Create a builder for constructing venues with optional fields
    pub fn builder() -> VenueBuilder {
        VenueBuilder::new()
    }
}

/// Builder for creating venues with optional fields
pub struct VenueBuilder {
    id: Option<String>,
    name: Option<String>,
    city: Option<String>,
    denomination: Option<String>,
    position: Option<GeoPoint>,
    raw_schedule: Option<String>,
}

impl VenueBuilder {
    pub fn new() -> Self {
        Self {
            id: None,
            name: None,
            city: None,
            denomination: None,
            position: None,
            raw_schedule: None,
        }
    }

    /// Set the record identifier
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the venue name
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the city
    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    /// Set the denomination
    pub fn denomination(mut self, denomination: impl Into<String>) -> Self {
        self.denomination = Some(denomination.into());
        self
    }

    /// Set the coordinates
    pub fn position(mut self, position: GeoPoint) -> Self {
        self.position = Some(position);
        self
    }

    /// Set the raw schedule string
    pub fn raw_schedule(mut self, raw_schedule: impl Into<String>) -> Self {
        self.raw_schedule = Some(raw_schedule.into());
        self
    }

    /// Build the venue
    pub fn build(self) -> Result<Venue, String> {
        let id = self.id.ok_or("Venue id is required")?;
        let name = self.name.ok_or("Venue name is required")?;
        let position = self.position.ok_or("Venue position is required")?;

        if name.trim().is_empty() {
            return Err("Venue name cannot be empty".to_string());
        }

        Ok(Venue {
            id,
            name,
            city: self.city.unwrap_or_default(),
            denomination: self.denomination.unwrap_or_default(),
            position,
            raw_schedule: self.raw_schedule.unwrap_or_default(),
        })
    }
}

impl Default for VenueBuilder {
    fn default() -> Self {
        Self::new()
    }
}
