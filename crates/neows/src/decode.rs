//! Feed response decoding.
//!
//! A feed body looks like:
//!
//! ```text
//! {
//!   "element_count": 2,
//!   "near_earth_objects": {
//!     "2023-01-01": [ { ...object... } ],
//!     "2023-01-02": [ { ...object... } ]
//!   }
//! }
//! ```
//!
//! The envelope is parsed first with the per-date mapping left as raw JSON,
//! then each date's array is decoded object by object. Any failure aborts the
//! whole decode, so callers never see a partial result.

use std::collections::{BTreeMap, HashMap};

use serde_json::value::RawValue;

use crate::error::{Error, Result};
use crate::types::NearEarthObject;

/// Decode a feed body into a flat list of objects.
///
/// Objects are returned grouped by ascending date key, in feed order within
/// each date. A body without `near_earth_objects` decodes to an empty list.
pub fn decode(body: &[u8]) -> Result<Vec<NearEarthObject>> {
    let by_date = decode_by_date(body)?;
    Ok(by_date.into_values().flatten().collect())
}

/// Decode a feed body held as a string.
pub fn decode_str(body: &str) -> Result<Vec<NearEarthObject>> {
    decode(body.as_bytes())
}

/// Decode a feed body, keeping objects grouped by their date key.
pub fn decode_by_date(body: &[u8]) -> Result<BTreeMap<String, Vec<NearEarthObject>>> {
    let envelope: HashMap<String, &RawValue> =
        serde_json::from_slice(body).map_err(|e| Error::MalformedEnvelope {
            detail: format!("feed document: {e}"),
        })?;

    let Some(raw) = envelope
        .get("near_earth_objects")
        .filter(|raw| raw.get() != "null")
    else {
        tracing::debug!("feed has no near_earth_objects");
        return Ok(BTreeMap::new());
    };

    let dates: BTreeMap<String, &RawValue> =
        serde_json::from_str(raw.get()).map_err(|e| Error::MalformedEnvelope {
            detail: format!("near_earth_objects: {e}"),
        })?;

    let mut by_date = BTreeMap::new();
    let mut total = 0usize;
    for (date, raw_objects) in dates {
        let elements: Vec<&RawValue> =
            serde_json::from_str(raw_objects.get()).map_err(|e| Error::MalformedEnvelope {
                detail: format!("near_earth_objects[{date:?}]: {e}"),
            })?;

        let objects = elements
            .into_iter()
            .enumerate()
            .map(|(index, element)| {
                serde_json::from_str::<NearEarthObject>(element.get()).map_err(|e| {
                    Error::FieldDecode {
                        date: date.clone(),
                        index,
                        message: e.to_string(),
                    }
                })
            })
            .collect::<Result<Vec<_>>>()?;

        total += objects.len();
        by_date.insert(date, objects);
    }

    let element_count = envelope
        .get("element_count")
        .and_then(|raw| serde_json::from_str::<usize>(raw.get()).ok());
    match element_count {
        Some(expected) if expected != total => {
            tracing::warn!(
                expected,
                decoded = total,
                "element_count does not match decoded objects"
            );
        }
        _ => tracing::debug!(dates = by_date.len(), decoded = total, "decoded feed"),
    }

    Ok(by_date)
}
