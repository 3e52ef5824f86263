//! Record types for the NeoWs close-approach feed.
//!
//! Field names match the wire format. Every field has a zero-valued
//! default so that a missing or `null` member decodes cleanly, while a member
//! that is present with the wrong JSON type is still rejected.

use serde::{Deserialize, Deserializer, Serialize};

/// One asteroid and its recorded close approaches.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NearEarthObject {
    /// Links back to the NeoWs API.
    #[serde(deserialize_with = "null_as_default")]
    pub links: Links,
    /// NeoWs identifier.
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    /// JPL small-body reference identifier.
    #[serde(deserialize_with = "null_as_default")]
    pub neo_reference_id: String,
    /// Display name, e.g. "(2023 AB1)".
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Reference page in the JPL small-body database.
    #[serde(deserialize_with = "null_as_default")]
    pub nasa_jpl_url: String,
    /// Absolute magnitude H.
    #[serde(deserialize_with = "null_as_default")]
    pub absolute_magnitude_h: f64,
    /// Estimated diameter range in several unit systems.
    #[serde(deserialize_with = "null_as_default")]
    pub estimated_diameter: EstimatedDiameter,
    /// Flagged by JPL as a potentially hazardous asteroid.
    #[serde(deserialize_with = "null_as_default")]
    pub is_potentially_hazardous_asteroid: bool,
    /// Present on the Sentry impact-monitoring list.
    #[serde(deserialize_with = "null_as_default")]
    pub is_sentry_object: bool,
    /// Close approaches, in feed order.
    #[serde(deserialize_with = "null_as_default")]
    pub close_approach_data: Vec<CloseApproachEvent>,
}

/// Hypermedia links attached to an object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Links {
    /// This object's own NeoWs lookup URL.
    #[serde(rename = "self", deserialize_with = "null_as_default")]
    pub self_link: String,
}

/// A value reported once per length unit system.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, bound(deserialize = "T: Deserialize<'de> + Default"))]
pub struct PerUnit<T> {
    /// Value in kilometers.
    #[serde(deserialize_with = "null_as_default")]
    pub kilometers: T,
    /// Value in meters.
    #[serde(deserialize_with = "null_as_default")]
    pub meters: T,
    /// Value in miles.
    #[serde(deserialize_with = "null_as_default")]
    pub miles: T,
    /// Value in feet.
    #[serde(deserialize_with = "null_as_default")]
    pub feet: T,
}

/// Lower and upper diameter estimate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiameterRange {
    /// Smaller estimate.
    #[serde(rename = "estimated_diameter_min", deserialize_with = "null_as_default")]
    pub min: f64,
    /// Larger estimate.
    #[serde(rename = "estimated_diameter_max", deserialize_with = "null_as_default")]
    pub max: f64,
}

/// Estimated diameter in kilometers, meters, miles and feet.
pub type EstimatedDiameter = PerUnit<DiameterRange>;

/// One pass of an object near a body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CloseApproachEvent {
    /// Calendar date, `YYYY-MM-DD`.
    #[serde(deserialize_with = "null_as_default")]
    pub close_approach_date: String,
    /// Date and time, e.g. `2023-Jan-01 04:19`.
    #[serde(deserialize_with = "null_as_default")]
    pub close_approach_date_full: String,
    /// Time of closest approach as a Unix epoch in milliseconds.
    #[serde(deserialize_with = "null_as_default")]
    pub epoch_date_close_approach: i64,
    /// Speed relative to the orbiting body.
    #[serde(deserialize_with = "null_as_default")]
    pub relative_velocity: RelativeVelocity,
    /// Distance from the orbiting body at closest approach.
    #[serde(deserialize_with = "null_as_default")]
    pub miss_distance: MissDistance,
    /// Body approached, usually "Earth".
    #[serde(deserialize_with = "null_as_default")]
    pub orbiting_body: String,
}

/// Relative velocity at closest approach.
///
/// The feed sends these numbers as strings; they are kept verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelativeVelocity {
    /// Kilometers per second.
    #[serde(deserialize_with = "null_as_default")]
    pub kilometers_per_second: String,
    /// Kilometers per hour.
    #[serde(deserialize_with = "null_as_default")]
    pub kilometers_per_hour: String,
    /// Miles per hour.
    #[serde(deserialize_with = "null_as_default")]
    pub miles_per_hour: String,
}

impl RelativeVelocity {
    /// Kilometers per second as a number, if the text parses.
    #[must_use]
    pub fn kilometers_per_second_f64(&self) -> Option<f64> {
        parse_measure(&self.kilometers_per_second)
    }

    /// Kilometers per hour as a number, if the text parses.
    #[must_use]
    pub fn kilometers_per_hour_f64(&self) -> Option<f64> {
        parse_measure(&self.kilometers_per_hour)
    }

    /// Miles per hour as a number, if the text parses.
    #[must_use]
    pub fn miles_per_hour_f64(&self) -> Option<f64> {
        parse_measure(&self.miles_per_hour)
    }
}

/// Miss distance at closest approach.
///
/// The feed sends these numbers as strings; they are kept verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MissDistance {
    /// Astronomical units.
    #[serde(deserialize_with = "null_as_default")]
    pub astronomical: String,
    /// Lunar distances.
    #[serde(deserialize_with = "null_as_default")]
    pub lunar: String,
    /// Kilometers.
    #[serde(deserialize_with = "null_as_default")]
    pub kilometers: String,
    /// Miles.
    #[serde(deserialize_with = "null_as_default")]
    pub miles: String,
}

impl MissDistance {
    /// Astronomical units as a number, if the text parses.
    #[must_use]
    pub fn astronomical_f64(&self) -> Option<f64> {
        parse_measure(&self.astronomical)
    }

    /// Lunar distances as a number, if the text parses.
    #[must_use]
    pub fn lunar_f64(&self) -> Option<f64> {
        parse_measure(&self.lunar)
    }

    /// Kilometers as a number, if the text parses.
    #[must_use]
    pub fn kilometers_f64(&self) -> Option<f64> {
        parse_measure(&self.kilometers)
    }

    /// Miles as a number, if the text parses.
    #[must_use]
    pub fn miles_f64(&self) -> Option<f64> {
        parse_measure(&self.miles)
    }
}

impl NearEarthObject {
    /// The close approach with the smallest miss distance, if any parse.
    #[must_use]
    pub fn closest_approach(&self) -> Option<&CloseApproachEvent> {
        self.close_approach_data
            .iter()
            .filter_map(|event| Some((event.miss_distance.kilometers_f64()?, event)))
            .min_by(|(a, _), (b, _)| a.total_cmp(b))
            .map(|(_, event)| event)
    }
}

fn parse_measure(text: &str) -> Option<f64> {
    text.trim().parse().ok()
}

/// Deserialize a field, treating an explicit `null` like an absent member.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
