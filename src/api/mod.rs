pub mod client;
pub mod session;

pub use client::{ApiClient, Params};
pub use session::Session;
