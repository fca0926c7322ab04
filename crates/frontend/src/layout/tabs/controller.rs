use contracts::picker::{derive_picker_view, select_row, PickerView, Popup, RowSelection};
use contracts::tabs::{TabDef, TabGroup};
use leptos::prelude::*;

/// Owner of the authoritative tab selection of one tabs section.
///
/// `select` is the only activation path: tab buttons, picker rows and header
/// shortcuts all go through it. Everything that displays the selection
/// (buttons, panels, the mobile picker) derives from `group`, so a change
/// from any origin reaches every subscriber.
#[derive(Clone, Copy)]
pub struct TabsController {
    group: RwSignal<TabGroup>,
}

impl TabsController {
    pub fn new(group: TabGroup) -> Self {
        Self {
            group: RwSignal::new(group),
        }
    }

    /// Selects `id`. Returns true when the selection changed; unknown ids and
    /// the already selected tab leave subscribers untouched.
    pub fn select(&self, id: &str) -> bool {
        let mut changed = false;
        self.group.maybe_update(|group| match group.select(id) {
            Some(change) => {
                log::debug!("tabs: '{}' -> '{}'", change.previous, change.current);
                changed = true;
                true
            }
            None => false,
        });
        changed
    }

    pub fn tab_count(&self) -> usize {
        self.group.with_untracked(|g| g.len())
    }

    /// Picker row click: activates `id` through the group first, so the
    /// picker memo resyncs, then closes `popup`. Unknown ids touch neither.
    pub fn select_row(&self, id: &str, popup: RwSignal<Popup>) -> RowSelection {
        let mut sheet = popup.get_untracked();
        let mut outcome = RowSelection::Unknown;
        self.group.maybe_update(|group| {
            outcome = select_row(group, &mut sheet, id);
            matches!(outcome, RowSelection::Changed(_))
        });
        if let RowSelection::Changed(change) = &outcome {
            log::debug!("tabs (picker): '{}' -> '{}'", change.previous, change.current);
        }
        popup.maybe_update(|current| {
            let changed = *current != sheet;
            *current = sheet;
            changed
        });
        outcome
    }

    pub fn tabs(&self) -> Vec<TabDef> {
        self.group.with_untracked(|g| g.tabs().to_vec())
    }

    /// Reactive: whether `id` is the selected tab
    pub fn is_selected(&self, id: &str) -> bool {
        self.group.with(|g| g.is_selected(id))
    }

    /// Reactive: picker projection of the current selection
    pub fn picker_view(&self) -> Option<PickerView> {
        self.group.with(|g| derive_picker_view(&g.entries()))
    }

    pub fn is_same(&self, other: &TabsController) -> bool {
        self.group == other.group
    }
}
