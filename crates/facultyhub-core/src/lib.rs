//! # FacultyHub Core
//!
//! Foundational types shared by every FacultyHub crate:
//!
//! - [`errors`]: the client error taxonomy and user-facing message resolution
//! - [`messages`]: localized (Arabic) fallback messages per operation
//! - [`serde`]: wire helpers, including normalization of list responses
//!
//! # Example
//!
//! ```ignore
//! use facultyhub_core::{ClientError, ListEnvelope, Operation};
//!
//! let body = r#"{"results": [1, 2, 3]}"#;
//! let list: ListEnvelope<u32> = serde_json::from_str(body)?;
//! assert_eq!(list.into_vec(), vec![1, 2, 3]);
//!
//! let err = ClientError::server(400, Some("already assigned".into()));
//! assert_eq!(err.user_message(Operation::AssignDoctor), "already assigned");
//! ```

pub mod errors;
pub mod messages;
pub mod serde;

pub use errors::ClientError;
pub use messages::Operation;
pub use serde::ListEnvelope;
