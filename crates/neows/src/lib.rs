//! Blocking client for the NASA NeoWs close-approach feed.
//!
//! The feed lists every near-Earth object with a close approach inside a
//! date window, grouped by date. This crate builds the request, performs a
//! single GET and flattens the response into [`NearEarthObject`] records.
//!
//! # Design principles
//!
//! - **Validate before sending**: an unparseable start date never reaches the network
//! - **All or nothing**: a decode failure anywhere discards the whole response
//! - **Stateless**: every call builds a fresh query and returns owned data
//!
//! # Example
//!
//! ```ignore
//! use neows::Client;
//!
//! let client = Client::new()?;
//!
//! // An empty end date lets the server pick a 7-day window; an empty key uses DEMO_KEY.
//! let neos = client.fetch("2023-01-01", "", "")?;
//! for neo in neos.iter().filter(|n| n.is_potentially_hazardous_asteroid) {
//!     println!("{} {}", neo.id, neo.name);
//! }
//! ```

mod client;
pub mod decode;
mod error;
pub mod query;
pub mod types;

pub use client::Client;
pub use decode::{decode, decode_by_date, decode_str};
pub use error::{Error, Result};
pub use query::{DEMO_KEY, FEED_URL, FeedQuery};
pub use types::{
    CloseApproachEvent, DiameterRange, EstimatedDiameter, Links, MissDistance, NearEarthObject,
    PerUnit, RelativeVelocity,
};
