//! Mobile tab picker: a summary pill plus a bottom-sheet list of all tabs.
//!
//! The view is never stored; it is re-derived from the tab entries after
//! every selection change so pill and list cannot drift from the tabs.

use crate::tabs::{Accent, SelectionChange, TabEntry, TabGroup};

/// Smallest tab count worth a picker
pub const MIN_TABS: usize = 2;

/// Collapsed summary of the selected tab
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pill {
    pub id: String,
    pub label: String,
    pub icon: Option<String>,
    pub accent: Accent,
}

/// One row of the bottom sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerItem {
    pub id: String,
    pub label: String,
    pub subtitle: Option<String>,
    pub icon: Option<String>,
    pub accent: Accent,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerView {
    pub pill: Pill,
    /// Count shown on the "more" trigger
    pub remaining: usize,
    pub items: Vec<PickerItem>,
}

/// Derives pill and row flags from the tab entries.
///
/// Returns `None` for fewer than [`MIN_TABS`] entries or when no entry is
/// selected. If several entries claim selection the first one in order wins
/// and the others are shown unselected.
pub fn derive_picker_view(entries: &[TabEntry]) -> Option<PickerView> {
    if entries.len() < MIN_TABS {
        return None;
    }
    let winner = entries.iter().position(|e| e.selected)?;
    let current = &entries[winner];

    let items = entries
        .iter()
        .enumerate()
        .map(|(i, e)| PickerItem {
            id: e.id.clone(),
            label: e.label.clone(),
            subtitle: e.subtitle.clone(),
            icon: e.icon.clone(),
            accent: e.accent,
            selected: i == winner,
        })
        .collect();

    Some(PickerView {
        pill: Pill {
            id: current.id.clone(),
            label: current.label.clone(),
            icon: current.icon.clone(),
            accent: current.accent,
        },
        remaining: entries.len() - 1,
        items,
    })
}

/// Open/closed state of the bottom sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Popup {
    open: bool,
}

impl Popup {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Returns true when the state actually changed
    pub fn open(&mut self) -> bool {
        !std::mem::replace(&mut self.open, true)
    }

    /// Returns true when the state actually changed
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }
}

/// Outcome of activating a picker row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowSelection {
    /// No tab with that id; nothing was touched
    Unknown,
    /// The row's tab was already selected; only the popup closed
    Unchanged,
    Changed(SelectionChange),
}

/// Handles a click on the row for `id`: activates the tab through the
/// group, then closes the popup. An unknown id leaves group and popup as
/// they are.
pub fn select_row(group: &mut TabGroup, popup: &mut Popup, id: &str) -> RowSelection {
    if !group.contains(id) {
        return RowSelection::Unknown;
    }
    let outcome = match group.select(id) {
        Some(change) => RowSelection::Changed(change),
        None => RowSelection::Unchanged,
    };
    popup.close();
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tabs::tab;

    fn entry(id: &str, selected: bool) -> TabEntry {
        TabEntry {
            id: id.to_string(),
            label: id.to_uppercase(),
            subtitle: None,
            icon: Some(format!("icon-{id}")),
            accent: Accent::Blue,
            selected,
        }
    }

    #[test]
    fn test_pill_follows_selected_entry() {
        let view = derive_picker_view(&[entry("a", false), entry("b", true), entry("c", false)])
            .unwrap();
        assert_eq!(view.pill.label, "B");
        assert_eq!(view.pill.icon.as_deref(), Some("icon-b"));
        assert_eq!(view.remaining, 2);
        let flags: Vec<bool> = view.items.iter().map(|i| i.selected).collect();
        assert_eq!(flags, vec![false, true, false]);
    }

    #[test]
    fn test_too_few_tabs_yields_nothing() {
        assert_eq!(derive_picker_view(&[]), None);
        assert_eq!(derive_picker_view(&[entry("a", true)]), None);
    }

    #[test]
    fn test_no_selection_yields_nothing() {
        assert_eq!(derive_picker_view(&[entry("a", false), entry("b", false)]), None);
    }

    #[test]
    fn test_multiple_selected_first_wins() {
        let view = derive_picker_view(&[entry("a", false), entry("b", true), entry("c", true)])
            .unwrap();
        assert_eq!(view.pill.id, "b");
        assert!(!view.items[2].selected);
    }

    #[test]
    fn test_popup_is_idempotent() {
        let mut popup = Popup::default();
        assert!(popup.open());
        assert!(!popup.open());
        assert!(popup.is_open());
        assert!(popup.close());
        assert!(!popup.close());
        assert!(!popup.is_open());
    }

    #[test]
    fn test_pill_matches_group_for_every_selection() {
        let mut group = TabGroup::new(vec![tab("x", "X"), tab("y", "Y"), tab("z", "Z")], None);
        for id in ["z", "y", "x"] {
            group.select(id);
            let view = derive_picker_view(&group.entries()).unwrap();
            assert_eq!(Some(view.pill.label.as_str()), group.selected().map(|t| t.label.as_str()));
        }
    }

    fn three_tabs() -> TabGroup {
        TabGroup::new(vec![tab("a", "A"), tab("b", "B"), tab("c", "C")], None)
    }

    #[test]
    fn test_select_row_activates_then_closes() {
        let mut group = three_tabs();
        let mut popup = Popup::default();
        popup.open();

        let outcome = select_row(&mut group, &mut popup, "c");
        assert_eq!(
            outcome,
            RowSelection::Changed(SelectionChange {
                previous: "a".to_string(),
                current: "c".to_string(),
            })
        );
        assert!(group.is_selected("c"));
        assert!(!popup.is_open());
        let view = derive_picker_view(&group.entries()).unwrap();
        assert_eq!(view.pill.label, "C");
        assert_eq!(view.items.iter().filter(|i| i.selected).count(), 1);
    }

    #[test]
    fn test_select_row_current_tab_still_closes() {
        let mut group = three_tabs();
        let mut popup = Popup::default();
        popup.open();
        assert_eq!(select_row(&mut group, &mut popup, "a"), RowSelection::Unchanged);
        assert!(group.is_selected("a"));
        assert!(!popup.is_open());
    }

    #[test]
    fn test_select_row_unknown_id_touches_nothing() {
        let mut group = three_tabs();
        group.select("b");
        let mut popup = Popup::default();
        popup.open();

        assert_eq!(select_row(&mut group, &mut popup, "zzz"), RowSelection::Unknown);
        assert!(group.is_selected("b"));
        assert!(popup.is_open());
    }
}
