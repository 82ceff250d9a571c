//! Core library for the Tempo goal and routine tracker.
//!
//! This crate provides the scheduling engine: validation of items and
//! collections, cross-attribute compatibility rules, date-membership
//! queries, and the mutation operators built on them, along with the
//! whole-document JSON persistence the CLI uses.
//!
//! # Architecture
//!
//! Data flows one direction through the engine:
//!
//! ```text
//! raw records ──▶ structural validation ──▶ compatibility checks
//!      (validate)          (validate)             (compat)
//!                                                    │
//!           membership queries ◀── typed items ◀─────┘
//!             (membership)          (models)
//! ```
//!
//! - [`calendar`]: date ordinals (weekday, day-of-month, day-of-year) and
//!   ISO date parsing
//! - [`validate`]: structural validation of raw records - key sets, tuple
//!   shapes, isolated field checks
//! - [`compat`]: cross-attribute rules - routine offsets against their
//!   frequency, goal entries against their date window
//! - [`models`]: typed items, schedules, collections, and the attribute
//!   edit dispatch
//! - [`membership`]: date-membership queries over schedules and collections
//! - [`storage`]: atomic whole-document persistence
//! - [`tracker`]: the load/operate/save facade interface layers call into
//!
//! Every mutation is validate-then-apply: a rejected operation leaves both
//! the in-memory collection and the data file untouched.
//!
//! # Quick Start
//!
//! ```rust
//! use jiff::civil::date;
//! use tempo_core::membership::items_on_date;
//! use tempo_core::models::{Collection, Frequency, Item, RoutineSpec};
//!
//! # fn main() -> Result<(), tempo_core::TrackerError> {
//! let mut collection = Collection::new();
//! collection.add_item(Item::routine(
//!     "morning run",
//!     true,
//!     Frequency::Week,
//!     vec![RoutineSpec(0, 30)], // Mondays, 30 minutes
//! ))?;
//!
//! // 2024-03-04 was a Monday.
//! let scheduled = items_on_date(&collection, date(2024, 3, 4), true)?;
//! assert_eq!(scheduled.len(), 1);
//!
//! let scheduled = items_on_date(&collection, date(2024, 3, 5), true)?;
//! assert!(scheduled.is_empty());
//! # Ok(())
//! # }
//! ```

pub mod calendar;
pub mod compat;
pub mod display;
pub mod error;
pub mod membership;
pub mod models;
pub mod params;
pub mod storage;
pub mod tracker;
pub mod validate;

// Re-export commonly used types
pub use display::{AddResult, Agenda, DeleteResult, Items, ToggleResult, UpdateResult};
pub use error::{Result, TrackerError};
pub use models::{
    Attribute, AttributeValue, Collection, Frequency, GoalSpec, Item, ItemKind, RoutineSpec,
    Schedule,
};
pub use storage::Store;
pub use tracker::{Tracker, TrackerBuilder};
