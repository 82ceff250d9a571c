//! Display formatting for items, collections, and operation results.
//!
//! Domain models implement [`std::fmt::Display`] directly (in [`models`]),
//! while wrapper types provide contextual formatting: collections with
//! empty-state handling ([`collections`]) and operation outcomes with
//! confirmation lines ([`results`]). All output is markdown, rendered by
//! the CLI's terminal renderer or printed as plain text.

pub mod collections;
pub mod models;
pub mod results;

pub use collections::{Agenda, Items};
pub use results::{AddResult, DeleteResult, ToggleResult, UpdateResult};
