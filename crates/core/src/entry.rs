use crate::category::FitnessCategory;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How a row participates in visual grouping (see [`crate::grouping`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayType {
    Header,
    Standalone,
    Group,
    Spacer,
    Unknown,
}

/// Identifies a clinical resource inside its source system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicalResourceId {
    pub data_source_id: String,
    pub fhir_resource_type: String,
    pub fhir_resource_id: String,
}

/// One GPS fix of an exercise route.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoutePoint {
    pub timestamp: DateTime<Utc>,
    pub latitude: f64,
    pub longitude: f64,
}

/// Optional route payload attached to exercise sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseRoute {
    pub points: Vec<RoutePoint>,
}

/// Payload of the synthetic summary row shown above aggregatable lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregationRow {
    /// Computed total across the window, e.g. "12,345 steps".
    pub total: String,
    /// Screen-reader counterpart of `total`.
    pub total_a11y: String,
    /// Apps that contributed records to the total.
    pub contributing_apps: String,
}

/// A displayable row of the entries list.
///
/// Closed set: data rows produced by the source adapters plus the synthetic
/// rows this library inserts itself (date headers, the aggregation summary,
/// the select-all control). Rows that are not user content carry an empty id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Entry {
    /// Generic timestamped record.
    Record {
        id: String,
        header: String,
        header_a11y: String,
        title: String,
        title_a11y: String,
        category: FitnessCategory,
        #[serde(skip_serializing_if = "Option::is_none")]
        start_time: Option<DateTime<Utc>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        end_time: Option<DateTime<Utc>>,
    },

    /// Clinical record. Carries no category: clinical data is never part of
    /// the bulk-selection deletion flow.
    Medical {
        header: String,
        header_a11y: String,
        title: String,
        title_a11y: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        time: Option<DateTime<Utc>>,
        resource_id: MedicalResourceId,
    },

    SleepSession {
        id: String,
        header: String,
        header_a11y: String,
        title: String,
        title_a11y: String,
        category: FitnessCategory,
        #[serde(skip_serializing_if = "Option::is_none")]
        notes: Option<String>,
    },

    ExerciseSession {
        id: String,
        header: String,
        header_a11y: String,
        title: String,
        title_a11y: String,
        category: FitnessCategory,
        #[serde(skip_serializing_if = "Option::is_none")]
        notes: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        route: Option<ExerciseRoute>,
        /// Route-less sessions rendered inside a detail screen are not
        /// clickable.
        clickable: bool,
    },

    PlannedExerciseSession {
        id: String,
        header: String,
        header_a11y: String,
        title: String,
        title_a11y: String,
        category: FitnessCategory,
        #[serde(skip_serializing_if = "Option::is_none")]
        notes: Option<String>,
    },

    /// Series/range sample, e.g. a heart-rate span.
    SeriesData {
        id: String,
        header: String,
        header_a11y: String,
        title: String,
        title_a11y: String,
        category: FitnessCategory,
    },

    /// Detail-screen sub-structure of a planned exercise session.
    PlannedExerciseBlock {
        title: String,
        title_a11y: String,
    },

    /// Section header showing the date a run of rows belongs to.
    DateHeader { date: String },

    /// Synthetic summary row (see [`AggregationRow`]).
    Aggregation(AggregationRow),

    /// Synthetic control row that selects every deletable entry at once.
    SelectAll,

    Separator,
}

impl Entry {
    /// Identifier of the underlying record; empty for rows that are not user
    /// content.
    pub fn id(&self) -> &str {
        match self {
            Entry::Record { id, .. }
            | Entry::SleepSession { id, .. }
            | Entry::ExerciseSession { id, .. }
            | Entry::PlannedExerciseSession { id, .. }
            | Entry::SeriesData { id, .. } => id,
            _ => "",
        }
    }

    pub fn display_type(&self) -> DisplayType {
        match self {
            Entry::Record { .. }
            | Entry::Medical { .. }
            | Entry::SleepSession { .. }
            | Entry::ExerciseSession { .. }
            | Entry::PlannedExerciseSession { .. }
            | Entry::SeriesData { .. } => DisplayType::Group,
            Entry::DateHeader { .. } => DisplayType::Header,
            Entry::Aggregation(_) | Entry::SelectAll => DisplayType::Standalone,
            Entry::Separator => DisplayType::Spacer,
            Entry::PlannedExerciseBlock { .. } => DisplayType::Unknown,
        }
    }

    /// The has-category capability: `Some` exactly for the variants that may
    /// be individually selected for deletion.
    pub fn category(&self) -> Option<FitnessCategory> {
        match self {
            Entry::Record { category, .. }
            | Entry::SleepSession { category, .. }
            | Entry::ExerciseSession { category, .. }
            | Entry::PlannedExerciseSession { category, .. }
            | Entry::SeriesData { category, .. } => Some(*category),
            _ => None,
        }
    }

    pub fn is_selectable(&self) -> bool {
        self.category().is_some()
    }
}
