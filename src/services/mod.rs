//! Services Layer
//!
//! Search history persistence and the search control state machine. Neither
//! knows about HTTP; page handlers drive them through a `KeyValueStore`.

pub mod search_control;
pub mod search_history;

pub use search_history::{KeyValueStore, SearchHistory};
