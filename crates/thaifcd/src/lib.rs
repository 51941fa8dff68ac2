// ABOUTME: Main library entry point for the ThaiFCD nutrition-composition client.
// ABOUTME: Re-exports the public API: Client, ClientBuilder, record types, ClientError, ErrorCode.

//! ThaiFCD client - retrieves and normalizes nutrition data from the Thai
//! Food Composition Database through a proxying relay.
//!
//! Two operations are exposed: keyword search over the food index, and
//! extraction of one detail page into a structured nutrient record. The
//! extractors are also public as pure functions for callers that already
//! hold the markup.
//!
//! # Example
//!
//! ```no_run
//! use nutrition_thaifcd::{Client, ClientError};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), ClientError> {
//!     let client = Client::builder().build();
//!     let items = client.search("กล้วย").await?;
//!     if let Some(url) = items.first().and_then(|item| item.detail_url.as_deref()) {
//!         let record = client.fetch_detail(url).await?;
//!         println!("{}: {} nutrients", record.name, record.sections.len());
//!     }
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod dom;
pub mod error;
pub mod extractors;
pub mod options;
pub mod record;
pub mod resource;

pub use crate::client::Client;
pub use crate::error::{ClientError, ErrorCode};
pub use crate::extractors::detail::parse_detail_html;
pub use crate::extractors::nutrients::canonical_key;
pub use crate::extractors::search::{parse_search_html, UPSTREAM_ORIGIN};
pub use crate::options::{ClientBuilder, Options, DEFAULT_RELAY_BASE, DEFAULT_USER_AGENT};
pub use crate::record::{
    BasisUnit, DetailRecord, MeasurementBasis, NutrientEntry, NutrientSections, SearchResultItem,
    Section,
};
