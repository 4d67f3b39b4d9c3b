//! Quiz Master API
//!
//! HTTP client and wire types for the login, registration and subject endpoints.

pub mod client;
pub mod types;

pub use client::{ApiClient, ApiResponse};
pub use types::{Chapter, Credentials, MessageResponse, Registration, Subject};
