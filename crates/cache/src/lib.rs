//! Lookup cache for resolved catalog identifiers.
//!
//! The cache lives as long as the service instance that owns it: no TTL, no
//! eviction, no persistence. It stays small because it only ever holds one
//! entry per distinct series or episode queried during a run.
//!
//! # Scoping
//! Entries are scoped by resolving method. A [`Method`] names the method and
//! fixes its argument and value types, so two methods never see each other's
//! entries even when their argument tuples look alike.
//!
//! # Populating other keys
//! A single page fetch often answers many questions at once (a season page
//! lists every episode of the season). [`LookupCache::populate_many`] stores
//! all of them in one call, and the caller then performs a point lookup with
//! [`LookupCache::retrieve`].
//!
//! ```
//! use tvsub_cache::{LookupCache, Method};
//!
//! struct Square;
//! impl Method for Square {
//!     const NAME: &'static str = "square";
//!     type Args = u32;
//!     type Value = u32;
//! }
//!
//! let mut cache = LookupCache::new();
//! cache.populate_many::<Square>((1..=3).map(|n| (n, n * n)));
//! assert_eq!(cache.retrieve::<Square>(&2).unwrap(), 4);
//! assert!(cache.retrieve::<Square>(&4).is_err());
//! ```

pub mod error;
mod store;

pub use crate::store::{LookupCache, Method};
