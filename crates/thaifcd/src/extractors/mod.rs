// ABOUTME: Extraction module turning raw ThaiFCD markup into the crate's record types.
// ABOUTME: Search and detail pages have dedicated extractors; nutrients holds the label rules.

//! Pure HTML extractors.
//!
//! Everything here is synchronous and infallible: pages that do not look
//! as expected degrade to empty lists or default field values instead of
//! erroring. Transport concerns live in [`crate::client`].

pub mod detail;
pub mod nutrients;
pub mod search;
