//! Routing domain: categories, the out-of-scope pre-filter, the state machine
//! and its result.

pub mod category;
pub mod keywords;
pub mod result;
pub mod state;
