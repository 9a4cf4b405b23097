//! clinic-core: Shared infrastructure for the clinic client libraries.

pub mod config;
pub mod error;
pub mod http;

pub use reqwest;
pub use serde;
pub use serde_json;
pub use tracing;
pub use validator;
