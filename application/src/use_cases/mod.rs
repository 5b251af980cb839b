//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod classify_intent;
pub mod relevance_gate;
pub mod route_query;

#[cfg(test)]
mod testing;
