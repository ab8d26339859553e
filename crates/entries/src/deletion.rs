//! Hand-off types for the external deletion collaborator.

use std::collections::HashMap;
use std::future::Future;

use chrono::{DateTime, Utc};

use vitals_core::{FitnessCategory, Period};

/// Everything the deletion collaborator needs to delete the selected
/// entries: the id-to-category map, how many deletable entries the screen
/// was showing, and the window the screen had navigated to.
#[derive(Debug, Clone, PartialEq)]
pub struct DeletionRequest {
    pub selected: HashMap<String, FitnessCategory>,
    pub total_entries: usize,
    pub period: Period,
    pub reference_date: DateTime<Utc>,
}

impl DeletionRequest {
    /// A deletion of zero records; permitted, not an error.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Whether the selection covers every deletable entry on screen, which
    /// lets the collaborator issue a ranged delete instead of per-id ones.
    pub fn deletes_everything(&self) -> bool {
        self.total_entries > 0 && self.selected.len() == self.total_entries
    }
}

/// External collaborator that performs the deletion. After it completes the
/// owning screen reloads its data and leaves Delete mode.
pub trait EntryDeleter: Send + Sync {
    fn delete_entries(
        &self,
        request: DeletionRequest,
    ) -> impl Future<Output = anyhow::Result<()>> + Send;
}
