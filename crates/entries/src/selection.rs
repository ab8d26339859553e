//! View/delete interaction state for one entries screen.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use vitals_core::{AggregationRow, CornerStyle, Entry, FitnessCategory, Period, grouping};

use crate::deletion::DeletionRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScreenMode {
    #[default]
    View,
    Delete,
}

/// Owns the displayed list and the bulk-selection state of one logical
/// screen session.
///
/// Created empty when the screen is created and dropped when it is torn
/// down; nothing here is persisted. All operations are synchronous
/// single-threaded mutations driven by the UI event dispatch.
///
/// Two synthetic rows compete for the head of the list: the aggregation
/// summary (View mode) and the select-all control (Delete mode). They are
/// mutually exclusive; switching modes swaps one for the other and the
/// stashed aggregation row is restored when selection ends.
#[derive(Debug, Default)]
pub struct SelectionController {
    entries: Vec<Entry>,
    mode: ScreenMode,
    selected: HashMap<String, FitnessCategory>,
    select_all_checked: bool,
    date_label: Option<String>,
    stashed_aggregation: Option<AggregationRow>,
    corners: Vec<CornerStyle>,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn mode(&self) -> ScreenMode {
        self.mode
    }

    /// Ids currently marked for deletion, each mapped to its category so the
    /// deletion request knows how to interpret them.
    pub fn selected(&self) -> &HashMap<String, FitnessCategory> {
        &self.selected
    }

    pub fn is_select_all_checked(&self) -> bool {
        self.select_all_checked
    }

    /// Grouping metadata for the currently displayed list, index-aligned
    /// with [`Self::entries`]. Recomputed on every list change.
    pub fn corner_styles(&self) -> &[CornerStyle] {
        &self.corners
    }

    /// Install a freshly loaded list.
    ///
    /// If the list arrives while the screen is in Delete mode (deletion
    /// finished and the data reloaded), the delete-mode layout is re-applied
    /// so the select-all row stays at the head.
    pub fn set_entries(&mut self, entries: Vec<Entry>) {
        self.stashed_aggregation = match entries.first() {
            Some(Entry::Aggregation(row)) => Some(row.clone()),
            _ => None,
        };
        self.entries = entries;
        if self.mode == ScreenMode::Delete {
            self.remove_aggregation_row();
            self.insert_select_all_row();
        }
        self.refresh_corners();
    }

    pub fn enter_delete_mode(&mut self) {
        if self.mode == ScreenMode::Delete {
            return;
        }
        self.mode = ScreenMode::Delete;
        self.remove_aggregation_row();
        self.insert_select_all_row();
        self.refresh_corners();
    }

    /// Leave Delete mode. Always empties the selection and unchecks
    /// select-all, however deletion concluded.
    pub fn exit_delete_mode(&mut self) {
        if self.mode == ScreenMode::View {
            return;
        }
        self.mode = ScreenMode::View;
        self.remove_select_all_row();
        self.restore_aggregation_row();
        self.selected.clear();
        self.refresh_corners();
    }

    /// Cache the date-picker label so it can be restored across mode
    /// toggles. Remembered once, not recomputed on each toggle.
    pub fn remember_date_label(&mut self, label: &str) {
        if self.date_label.is_none() {
            self.date_label = Some(label.to_string());
        }
    }

    pub fn date_label(&self) -> Option<&str> {
        self.date_label.as_deref()
    }

    /// Flip the selection of one entry.
    ///
    /// # Panics
    ///
    /// Panics outside Delete mode; the caller has lost track of the screen
    /// mode and silently ignoring that would hide the bug.
    pub fn toggle_entry(&mut self, id: &str, category: FitnessCategory) {
        assert!(
            self.mode == ScreenMode::Delete,
            "toggle_entry called outside delete mode"
        );
        if self.selected.remove(id).is_none() {
            self.selected.insert(id.to_string(), category);
        }
    }

    /// Select or deselect every displayed entry that carries a category.
    /// Synthetic rows and clinical records are skipped.
    ///
    /// # Panics
    ///
    /// Panics outside Delete mode, same as [`Self::toggle_entry`].
    pub fn toggle_select_all(&mut self, checked: bool) {
        assert!(
            self.mode == ScreenMode::Delete,
            "toggle_select_all called outside delete mode"
        );
        self.select_all_checked = checked;
        for entry in &self.entries {
            let Some(category) = entry.category() else {
                continue;
            };
            if checked {
                self.selected.insert(entry.id().to_string(), category);
            } else {
                self.selected.remove(entry.id());
            }
        }
    }

    /// Snapshot the current selection for the deletion collaborator. An
    /// empty selection is permitted (a deletion of zero records). Does not
    /// mutate the selection; the screen calls [`Self::exit_delete_mode`]
    /// once the reload after deletion lands.
    pub fn deletion_request(
        &self,
        period: Period,
        reference_date: DateTime<Utc>,
    ) -> DeletionRequest {
        DeletionRequest {
            selected: self.selected.clone(),
            total_entries: self
                .entries
                .iter()
                .filter(|entry| entry.is_selectable())
                .count(),
            period,
            reference_date,
        }
    }

    fn insert_select_all_row(&mut self) {
        if !self.entries.is_empty() && !matches!(self.entries.first(), Some(Entry::SelectAll)) {
            self.entries.insert(0, Entry::SelectAll);
        }
    }

    fn remove_select_all_row(&mut self) {
        if matches!(self.entries.first(), Some(Entry::SelectAll)) {
            self.entries.remove(0);
        }
        // Next time selection starts, select-all begins unchecked.
        self.select_all_checked = false;
    }

    fn remove_aggregation_row(&mut self) {
        if matches!(self.entries.first(), Some(Entry::Aggregation(_))) {
            self.entries.remove(0);
        }
    }

    fn restore_aggregation_row(&mut self) {
        let Some(row) = &self.stashed_aggregation else {
            return;
        };
        if !self.entries.is_empty() && !matches!(self.entries.first(), Some(Entry::Aggregation(_)))
        {
            self.entries.insert(0, Entry::Aggregation(row.clone()));
        }
    }

    fn refresh_corners(&mut self) {
        self.corners = grouping::map_corners(&self.entries);
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use vitals_core::{CornerStyle, Entry, FitnessCategory, Period, testing};

    use super::{ScreenMode, SelectionController};

    fn steps_list() -> Vec<Entry> {
        vec![
            testing::aggregation("27"),
            testing::record("r1", FitnessCategory::Steps),
            testing::record("r2", FitnessCategory::Steps),
        ]
    }

    fn controller_with(entries: Vec<Entry>) -> SelectionController {
        let mut controller = SelectionController::new();
        controller.set_entries(entries);
        controller
    }

    #[test]
    fn starts_in_view_mode_with_nothing_selected() {
        let controller = SelectionController::new();
        assert_eq!(controller.mode(), ScreenMode::View);
        assert!(controller.selected().is_empty());
        assert!(!controller.is_select_all_checked());
    }

    #[test]
    fn entering_delete_mode_swaps_aggregation_for_select_all() {
        let mut controller = controller_with(steps_list());

        controller.enter_delete_mode();

        assert_eq!(controller.mode(), ScreenMode::Delete);
        assert_eq!(controller.entries()[0], Entry::SelectAll);
        assert!(
            !controller
                .entries()
                .iter()
                .any(|e| matches!(e, Entry::Aggregation(_))),
            "select-all and aggregation never co-occupy the head"
        );
    }

    #[test]
    fn mode_round_trip_restores_the_original_list() {
        let original = steps_list();
        let mut controller = controller_with(original.clone());

        controller.enter_delete_mode();
        controller.toggle_entry("r1", FitnessCategory::Steps);
        controller.toggle_select_all(true);
        controller.exit_delete_mode();

        assert_eq!(controller.entries(), original.as_slice());
        assert!(controller.selected().is_empty());
        assert!(!controller.is_select_all_checked());
    }

    #[test]
    fn mode_round_trip_without_aggregation_row() {
        let original = vec![
            testing::date_header("Today"),
            testing::sleep_session("s1"),
            testing::sleep_session("s2"),
        ];
        let mut controller = controller_with(original.clone());

        controller.enter_delete_mode();
        assert_eq!(controller.entries()[0], Entry::SelectAll);
        controller.exit_delete_mode();

        assert_eq!(controller.entries(), original.as_slice());
    }

    #[test]
    fn toggle_entry_twice_is_a_no_op() {
        let mut controller = controller_with(steps_list());
        controller.enter_delete_mode();

        controller.toggle_entry("r1", FitnessCategory::Steps);
        assert!(controller.selected().contains_key("r1"));

        controller.toggle_entry("r1", FitnessCategory::Steps);
        assert!(controller.selected().is_empty());

        controller.toggle_entry("r1", FitnessCategory::Steps);
        assert_eq!(
            controller.selected().get("r1"),
            Some(&FitnessCategory::Steps)
        );
    }

    #[test]
    fn select_all_covers_exactly_the_categorized_entries() {
        let mut controller = controller_with(vec![
            testing::aggregation("27"),
            testing::date_header("Today"),
            testing::record("r1", FitnessCategory::Steps),
            testing::sleep_session("s1"),
            testing::exercise_session("e1"),
            testing::medical_record("Immunization"),
            Entry::Separator,
        ]);
        controller.enter_delete_mode();

        controller.toggle_select_all(true);

        let selected = controller.selected();
        assert_eq!(selected.len(), 3);
        assert_eq!(selected.get("r1"), Some(&FitnessCategory::Steps));
        assert_eq!(selected.get("s1"), Some(&FitnessCategory::Sleep));
        assert_eq!(selected.get("e1"), Some(&FitnessCategory::Exercise));
        assert!(controller.is_select_all_checked());
    }

    #[test]
    fn unchecking_select_all_clears_the_selection() {
        let mut controller = controller_with(steps_list());
        controller.enter_delete_mode();

        controller.toggle_select_all(true);
        controller.toggle_select_all(false);

        assert!(controller.selected().is_empty());
        assert!(!controller.is_select_all_checked());
    }

    #[test]
    #[should_panic(expected = "toggle_entry called outside delete mode")]
    fn toggle_entry_in_view_mode_panics() {
        let mut controller = controller_with(steps_list());
        controller.toggle_entry("r1", FitnessCategory::Steps);
    }

    #[test]
    #[should_panic(expected = "toggle_select_all called outside delete mode")]
    fn toggle_select_all_in_view_mode_panics() {
        let mut controller = controller_with(steps_list());
        controller.toggle_select_all(true);
    }

    #[test]
    fn reload_while_selecting_keeps_the_delete_layout() {
        let mut controller = controller_with(steps_list());
        controller.enter_delete_mode();

        // Deletion finished, the screen reloaded with a fresh list.
        controller.set_entries(vec![
            testing::aggregation("12"),
            testing::record("r3", FitnessCategory::Steps),
        ]);

        assert_eq!(controller.entries()[0], Entry::SelectAll);
        assert!(
            !controller
                .entries()
                .iter()
                .any(|e| matches!(e, Entry::Aggregation(_)))
        );

        // Exiting restores the aggregation row of the *new* list.
        controller.exit_delete_mode();
        assert_eq!(controller.entries()[0], testing::aggregation("12"));
    }

    #[test]
    fn deletion_request_snapshots_selection_and_counts() {
        let mut controller = controller_with(steps_list());
        controller.enter_delete_mode();
        controller.toggle_entry("r1", FitnessCategory::Steps);

        let reference_date = Utc::now();
        let request = controller.deletion_request(Period::Week, reference_date);

        assert_eq!(request.selected.len(), 1);
        assert_eq!(request.total_entries, 2);
        assert_eq!(request.period, Period::Week);
        assert_eq!(request.reference_date, reference_date);
        assert!(!request.is_empty());

        // Snapshotting does not clear the live selection.
        assert_eq!(controller.selected().len(), 1);
    }

    #[test]
    fn empty_deletion_request_is_permitted() {
        let controller = controller_with(steps_list());
        let request = controller.deletion_request(Period::Day, Utc::now());
        assert!(request.is_empty());
    }

    #[test]
    fn date_label_is_remembered_once() {
        let mut controller = controller_with(steps_list());
        controller.remember_date_label("This week");
        controller.remember_date_label("Next week");
        assert_eq!(controller.date_label(), Some("This week"));
    }

    #[test]
    fn corner_styles_track_list_mutations() {
        let mut controller = controller_with(steps_list());
        assert_eq!(controller.corner_styles().len(), controller.entries().len());

        controller.enter_delete_mode();
        let all = CornerStyle::CENTER | CornerStyle::TOP | CornerStyle::BOTTOM;
        // Head select-all renders as its own card.
        assert_eq!(controller.corner_styles()[0], all);
        assert_eq!(
            controller.corner_styles()[1],
            CornerStyle::CENTER | CornerStyle::TOP
        );
        assert_eq!(
            controller.corner_styles()[2],
            CornerStyle::CENTER | CornerStyle::BOTTOM
        );
    }
}
