//! Entry aggregation pipeline and selection/deletion state machine.
//!
//! This crate backs the time-scoped entries list of a health-data UI. It
//! merges records from per-category source adapters into one ordered list,
//! publishes the list through a last-value-wins observable cell, and owns
//! the view/delete interaction state (selection map, select-all control,
//! synthetic head rows).
//!
//! The crate is an in-process library: it owns no storage, no wire format
//! and no rendering. Source adapters and the deletion collaborator are
//! supplied by the embedding application through the traits in [`loader`]
//! and [`deletion`].

pub mod deletion;
pub mod loader;
pub mod pipeline;
pub mod selection;

pub use deletion::{DeletionRequest, EntryDeleter};
pub use loader::{
    AggregationLoader, AggregationQuery, EntriesLoader, EntriesQuery, LoaderError, MedicalLoader,
    MedicalQuery, MultiDayLoader, MultiDayQuery,
};
pub use pipeline::{EntriesPipeline, ListState};
pub use selection::{ScreenMode, SelectionController};
