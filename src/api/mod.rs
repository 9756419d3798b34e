//! HTTP transport.
//!
//! Thin axum adapters over `CoreState::process`: a JSON chat endpoint for the
//! web UI and a Twilio-style WhatsApp webhook. No routing logic lives here.

pub mod endpoints;
pub mod error;
pub mod router;
pub mod server;
pub mod types;

pub use router::api_router;
pub use server::{serve, ServerError};
pub use types::ApiContext;
