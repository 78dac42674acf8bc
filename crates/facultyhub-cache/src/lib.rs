//! # FacultyHub Cache
//!
//! Read-through cache of the academic hierarchy (departments, years, levels,
//! specializations and the student/subject lists beneath them).
//!
//! Entries are keyed by `(entity kind, parent key)`, expressed as a [`Query`].
//! A cache lives exactly as long as the screen that owns it: there is no expiry,
//! no sharing between screens, and failed fetches are never stored.
//!
//! # Example
//!
//! ```ignore
//! use facultyhub_cache::{HierarchyCache, Query};
//!
//! let mut cache = HierarchyCache::new();
//! let levels = cache
//!     .get_or_fetch(&Query::Levels { department, year }, |q| async move { source.fetch(&q).await })
//!     .await?;
//! ```

pub mod hierarchy;
pub mod keys;
pub mod listing;

pub use hierarchy::{CacheStats, HierarchyCache, KindMismatch};
pub use keys::{EntityKind, Query};
pub use listing::Listing;
