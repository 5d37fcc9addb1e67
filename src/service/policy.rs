//! Listing cache policy.
//!
//! One cache entry holds the whole listing. It is populated on a read miss,
//! removed after every successful create or delete, and otherwise expires
//! after [`LISTING_TTL`], which bounds how stale a listing can be when an
//! invalidation is lost.

use std::time::Duration;

/// Key of the cached full product listing.
pub const LISTING_CACHE_KEY: &str = "products:all";

/// Lifetime of a cached listing.
pub const LISTING_TTL: Duration = Duration::from_secs(30);
