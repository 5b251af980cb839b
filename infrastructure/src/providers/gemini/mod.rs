//! Google Gemini adapter.

mod client;
mod gateway;
mod types;

pub use client::{DEFAULT_BASE_URL, GeminiClient};
pub use gateway::GeminiLlmGateway;
