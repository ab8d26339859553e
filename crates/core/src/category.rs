use serde::{Deserialize, Serialize};

/// Fitness record kinds. Used both for load routing and for deletion
/// bookkeeping (the selection map remembers which kind each id belongs to).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitnessCategory {
    Steps,
    Distance,
    TotalCaloriesBurned,
    ActiveCaloriesBurned,
    HeartRate,
    Sleep,
    Exercise,
    PlannedExercise,
    Menstruation,
}

impl FitnessCategory {
    /// Cumulative counters that get a summary row prepended to their list.
    pub fn is_aggregatable(self) -> bool {
        matches!(
            self,
            Self::Steps | Self::Distance | Self::TotalCaloriesBurned
        )
    }

    /// A single session of these kinds can straddle the window boundary, so
    /// they are fetched with the dedicated multi-day loader.
    pub fn spans_multiple_days(self) -> bool {
        matches!(self, Self::Menstruation)
    }
}

/// Clinical record kinds. Loaded through a separate path that ignores the
/// window period, and never eligible for bulk selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MedicalCategory {
    Immunization,
    AllergiesIntolerances,
    Conditions,
    LabResults,
    Medications,
    Procedures,
}

/// Load-routing key: which record family a screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "category", rename_all = "snake_case")]
pub enum Category {
    Fitness(FitnessCategory),
    Medical(MedicalCategory),
}
