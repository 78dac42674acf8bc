//! # FacultyHub
//!
//! Client core for the faculty-management backend: typed REST access, the academic
//! hierarchy drill-down, and the submission forms built on top of it.
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── api/              # REST client and the explicit session object
//! ├── cli/              # Interactive terminal flows (binary only)
//! ├── modules/          # Feature modules
//! │   ├── hierarchy/   # Specialization predicate, navigator, form selection
//! │   ├── assignments/ # Doctor-to-subject assignment form
//! │   ├── exam_grades/ # Grade sheet upload and approval
//! │   ├── grading_templates/ # Template editor with the weight-sum gate
//! │   └── students/    # Roster and password reset
//! └── logging.rs        # Subscriber setup
//! ```
//!
//! Feature modules follow the same split:
//!
//! - `model.rs`: form state and its rules, no I/O
//! - `service.rs`: backend calls, one unit struct per feature
//!
//! ## The hierarchy
//!
//! ```text
//! Department -> Academic year -> Level -> [Specialization] -> Students / Subjects
//! ```
//!
//! The specialization step applies only to departments split into tracks, and only
//! above the entry level. Which levels count as entry depends on the flow; see
//! [`modules::hierarchy::Flow::entry_levels`].
//!
//! ## Quick Start
//!
//! ```bash
//! FACULTYHUB_API_URL=http://localhost:8000
//! FACULTYHUB_API_TOKEN=...
//! cargo run -- browse
//! ```
//!
//! # Example
//!
//! ```ignore
//! use facultyhub::api::ApiClient;
//! use facultyhub::modules::hierarchy::{Explorer, Flow, Navigator, Target};
//!
//! let client = ApiClient::from_config(ApiConfig::from_env())?;
//! let navigator = Navigator::new(Target::Students, Flow::StudentRoster.entry_levels());
//! let mut explorer = Explorer::new(&client, navigator);
//! explorer.start().await;
//! ```

pub mod api;
pub mod logging;
pub mod modules;

// Re-export workspace crates for convenience
pub use facultyhub_cache;
pub use facultyhub_config;
pub use facultyhub_core;
pub use facultyhub_models;
