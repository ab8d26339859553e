use crate::category::FitnessCategory;
use crate::entry::{AggregationRow, Entry, MedicalResourceId};

/// Generic record with the given id and category.
pub fn record(id: &str, category: FitnessCategory) -> Entry {
    Entry::Record {
        id: id.to_string(),
        header: format!("{id} header"),
        header_a11y: format!("{id} header a11y"),
        title: format!("{id} title"),
        title_a11y: format!("{id} title a11y"),
        category,
        start_time: None,
        end_time: None,
    }
}

pub fn sleep_session(id: &str) -> Entry {
    Entry::SleepSession {
        id: id.to_string(),
        header: "7h 30m".to_string(),
        header_a11y: "7 hours 30 minutes".to_string(),
        title: "Sleep session".to_string(),
        title_a11y: "Sleep session".to_string(),
        category: FitnessCategory::Sleep,
        notes: None,
    }
}

pub fn exercise_session(id: &str) -> Entry {
    Entry::ExerciseSession {
        id: id.to_string(),
        header: "45m".to_string(),
        header_a11y: "45 minutes".to_string(),
        title: "Running".to_string(),
        title_a11y: "Running".to_string(),
        category: FitnessCategory::Exercise,
        notes: None,
        route: None,
        clickable: true,
    }
}

/// Clinical record; carries no category on purpose.
pub fn medical_record(title: &str) -> Entry {
    Entry::Medical {
        header: "Health Clinic".to_string(),
        header_a11y: "Health Clinic".to_string(),
        title: title.to_string(),
        title_a11y: title.to_string(),
        time: None,
        resource_id: MedicalResourceId {
            data_source_id: format!("source-{}", next_id()),
            fhir_resource_type: "Immunization".to_string(),
            fhir_resource_id: format!("fhir-{}", next_id()),
        },
    }
}

pub fn date_header(date: &str) -> Entry {
    Entry::DateHeader {
        date: date.to_string(),
    }
}

pub fn aggregation(total: &str) -> Entry {
    Entry::Aggregation(aggregation_row(total))
}

pub fn aggregation_row(total: &str) -> AggregationRow {
    AggregationRow {
        total: total.to_string(),
        total_a11y: total.to_string(),
        contributing_apps: "Fit Tracker".to_string(),
    }
}

fn next_id() -> u32 {
    use std::sync::atomic::{AtomicU32, Ordering};
    static COUNTER: AtomicU32 = AtomicU32::new(0);
    COUNTER.fetch_add(1, Ordering::Relaxed)
}
