//! Orchestrates the per-category loads and publishes the resulting list.

use tokio::sync::watch;

use vitals_core::{Category, Entry, TimeWindow};

use crate::loader::{
    AggregationLoader, AggregationQuery, EntriesLoader, EntriesQuery, MedicalLoader, MedicalQuery,
    MultiDayLoader, MultiDayQuery,
};

/// Phase of the displayed list. Exactly one phase is active at a time; a new
/// load supersedes the previous one rather than merging with it.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ListState {
    #[default]
    Loading,
    Empty,
    LoadFailed,
    Ready(Vec<Entry>),
}

/// Fetches entries for one (category, window, app filter) request and
/// publishes the outcome through a last-value-wins watch cell.
///
/// Loads do not cache: every call re-fetches from the source adapters. The
/// caller is responsible for not issuing overlapping loads for the same
/// screen; the pipeline simply publishes whatever the latest completed call
/// produced.
pub struct EntriesPipeline<E, M, D, A> {
    entries_loader: E,
    multi_day_loader: M,
    medical_loader: D,
    aggregation_loader: A,
    state: watch::Sender<ListState>,
    window: watch::Sender<Option<TimeWindow>>,
}

impl<E, M, D, A> EntriesPipeline<E, M, D, A>
where
    E: EntriesLoader,
    M: MultiDayLoader,
    D: MedicalLoader,
    A: AggregationLoader,
{
    pub fn new(
        entries_loader: E,
        multi_day_loader: M,
        medical_loader: D,
        aggregation_loader: A,
    ) -> Self {
        let (state, _) = watch::channel(ListState::default());
        let (window, _) = watch::channel(None);
        Self {
            entries_loader,
            multi_day_loader,
            medical_loader,
            aggregation_loader,
            state,
            window,
        }
    }

    /// Observe the list state. A receiver attaching mid-flight immediately
    /// sees the last published phase.
    pub fn subscribe(&self) -> watch::Receiver<ListState> {
        self.state.subscribe()
    }

    pub fn current_state(&self) -> ListState {
        self.state.borrow().clone()
    }

    /// The window recorded at the start of the most recent load, for
    /// caller-side reconciliation (date navigation, deletion requests).
    pub fn window(&self) -> Option<TimeWindow> {
        *self.window.borrow()
    }

    pub fn subscribe_window(&self) -> watch::Receiver<Option<TimeWindow>> {
        self.window.subscribe()
    }

    /// Load the entries for `category` within `window`, optionally filtered
    /// to records owned by a single app.
    ///
    /// Publishes `Loading` immediately, then exactly one terminal phase.
    /// For aggregatable fitness categories a summary row is prepended to a
    /// non-empty payload; a failed summary fetch is logged and the payload
    /// shown without one.
    pub async fn load_entries(
        &self,
        category: Category,
        window: TimeWindow,
        app_filter: Option<String>,
    ) {
        self.state.send_replace(ListState::Loading);
        self.window.send_replace(Some(window));

        // The all-apps view labels each row with the app that wrote it; a
        // single-app view would repeat the same label on every row.
        let show_data_origin = app_filter.is_none();

        let outcome = match category {
            Category::Fitness(fitness) if fitness.spans_multiple_days() => {
                self.multi_day_loader
                    .load_multi_day(MultiDayQuery {
                        app_filter: app_filter.clone(),
                        window,
                        show_data_origin,
                    })
                    .await
            }
            Category::Fitness(fitness) => {
                self.entries_loader
                    .load_entries(EntriesQuery {
                        category: fitness,
                        app_filter: app_filter.clone(),
                        window,
                        show_data_origin,
                    })
                    .await
            }
            Category::Medical(medical) => {
                self.medical_loader
                    .load_medical(MedicalQuery {
                        category: medical,
                        app_filter: app_filter.clone(),
                        show_data_origin,
                    })
                    .await
            }
        };

        let mut entries = match outcome {
            Ok(entries) => entries,
            Err(err) => {
                tracing::error!("failed to load entries: {err}");
                self.state.send_replace(ListState::LoadFailed);
                return;
            }
        };

        if entries.is_empty() {
            self.state.send_replace(ListState::Empty);
            return;
        }

        if let Category::Fitness(fitness) = category {
            if fitness.is_aggregatable() {
                let query = AggregationQuery {
                    category: fitness,
                    app_filter,
                    window,
                    show_data_origin,
                };
                match self.aggregation_loader.load_aggregation(query).await {
                    Ok(row) => entries.insert(0, Entry::Aggregation(row)),
                    // The summary row is optional; the list is still useful
                    // without it.
                    Err(err) => tracing::error!("failed to load aggregation: {err}"),
                }
            }
        }

        self.state.send_replace(ListState::Ready(entries));
    }
}
