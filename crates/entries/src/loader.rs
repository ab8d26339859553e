//! Contracts for the per-category source adapters.
//!
//! The pipeline is generic over these traits; the embedding application
//! plugs in adapters backed by its actual record store, tests plug in
//! fakes.

use std::future::Future;

use vitals_core::{AggregationRow, Entry, FitnessCategory, MedicalCategory, TimeWindow};

#[derive(Debug, thiserror::Error)]
pub enum LoaderError {
    #[error("data source unavailable: {0}")]
    Unavailable(String),

    #[error("query failed: {0}")]
    Query(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, LoaderError>;

/// Query for a standard fitness category over one window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntriesQuery {
    pub category: FitnessCategory,
    /// Restrict results to records owned by this app, if set.
    pub app_filter: Option<String>,
    pub window: TimeWindow,
    /// Whether rows should carry the label of the app that wrote them.
    pub show_data_origin: bool,
}

/// Query for categories whose sessions can straddle the window boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiDayQuery {
    pub app_filter: Option<String>,
    pub window: TimeWindow,
    pub show_data_origin: bool,
}

/// Query for clinical records. Clinical loads ignore the window period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MedicalQuery {
    pub category: MedicalCategory,
    pub app_filter: Option<String>,
    pub show_data_origin: bool,
}

/// Query for the single summary row of an aggregatable category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregationQuery {
    pub category: FitnessCategory,
    pub app_filter: Option<String>,
    pub window: TimeWindow,
    pub show_data_origin: bool,
}

pub trait EntriesLoader: Send + Sync {
    fn load_entries(
        &self,
        query: EntriesQuery,
    ) -> impl Future<Output = Result<Vec<Entry>>> + Send;
}

pub trait MultiDayLoader: Send + Sync {
    fn load_multi_day(
        &self,
        query: MultiDayQuery,
    ) -> impl Future<Output = Result<Vec<Entry>>> + Send;
}

pub trait MedicalLoader: Send + Sync {
    fn load_medical(
        &self,
        query: MedicalQuery,
    ) -> impl Future<Output = Result<Vec<Entry>>> + Send;
}

pub trait AggregationLoader: Send + Sync {
    fn load_aggregation(
        &self,
        query: AggregationQuery,
    ) -> impl Future<Output = Result<AggregationRow>> + Send;
}
