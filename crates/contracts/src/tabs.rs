use serde::{Deserialize, Serialize};

/// Accent color tag of a tab (drives pill and row coloring)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    #[default]
    Orange,
    Blue,
    Purple,
}

impl Accent {
    /// CSS modifier class for the accent
    pub fn class(&self) -> &'static str {
        match self {
            Accent::Orange => "accent-orange",
            Accent::Blue => "accent-blue",
            Accent::Purple => "accent-purple",
        }
    }
}

/// One selectable content section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabDef {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub accent: Accent,
    /// Panel body text
    #[serde(default)]
    pub body: String,
}

/// Flattened `{id, label, selected}` view of a tab, the input of the picker derivation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabEntry {
    pub id: String,
    pub label: String,
    pub subtitle: Option<String>,
    pub icon: Option<String>,
    pub accent: Accent,
    pub selected: bool,
}

/// Published whenever the selected tab actually changes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionChange {
    pub previous: String,
    pub current: String,
}

/// Authoritative ordered tab set with exactly one selected tab.
///
/// An empty group has no selection; every other group always has one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TabGroup {
    tabs: Vec<TabDef>,
    selected: usize,
}

impl TabGroup {
    /// Builds the group. An unknown or missing `initial` id falls back to the first tab.
    pub fn new(tabs: Vec<TabDef>, initial: Option<&str>) -> Self {
        let selected = initial
            .and_then(|id| tabs.iter().position(|t| t.id == id))
            .unwrap_or(0);
        Self { tabs, selected }
    }

    pub fn tabs(&self) -> &[TabDef] {
        &self.tabs
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.tabs.iter().any(|t| t.id == id)
    }

    pub fn selected(&self) -> Option<&TabDef> {
        self.tabs.get(self.selected)
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected().map(|t| t.id.as_str())
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected_id() == Some(id)
    }

    /// Selects `id`. Unknown ids leave the group untouched; re-selecting the
    /// current tab is not a change.
    pub fn select(&mut self, id: &str) -> Option<SelectionChange> {
        let index = self.tabs.iter().position(|t| t.id == id)?;
        if index == self.selected {
            return None;
        }
        let previous = self.tabs[self.selected].id.clone();
        self.selected = index;
        Some(SelectionChange {
            previous,
            current: id.to_string(),
        })
    }

    pub fn entries(&self) -> Vec<TabEntry> {
        self.tabs
            .iter()
            .enumerate()
            .map(|(i, t)| TabEntry {
                id: t.id.clone(),
                label: t.label.clone(),
                subtitle: t.subtitle.clone(),
                icon: t.icon.clone(),
                accent: t.accent,
                selected: i == self.selected,
            })
            .collect()
    }
}

#[cfg(test)]
pub(crate) fn tab(id: &str, label: &str) -> TabDef {
    TabDef {
        id: id.to_string(),
        label: label.to_string(),
        subtitle: None,
        icon: None,
        accent: Accent::default(),
        body: String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group() -> TabGroup {
        TabGroup::new(
            vec![
                tab("hilfesuchende", "Hilfesuchende"),
                tab("engagierte", "Engagierte"),
                tab("kommunen", "Kommunen"),
            ],
            Some("engagierte"),
        )
    }

    #[test]
    fn test_initial_selection() {
        assert_eq!(group().selected_id(), Some("engagierte"));
        let fallback = TabGroup::new(vec![tab("a", "A"), tab("b", "B")], Some("missing"));
        assert_eq!(fallback.selected_id(), Some("a"));
        assert_eq!(TabGroup::new(vec![], None).selected_id(), None);
    }

    #[test]
    fn test_select_reports_change() {
        let mut g = group();
        let change = g.select("kommunen").unwrap();
        assert_eq!(change.previous, "engagierte");
        assert_eq!(change.current, "kommunen");
        assert!(g.is_selected("kommunen"));
    }

    #[test]
    fn test_select_same_or_unknown_is_noop() {
        let mut g = group();
        assert_eq!(g.select("engagierte"), None);
        assert_eq!(g.select("nope"), None);
        assert!(g.is_selected("engagierte"));
    }

    #[test]
    fn test_exactly_one_entry_selected() {
        let mut g = group();
        for id in ["hilfesuchende", "kommunen", "engagierte"] {
            g.select(id);
            let entries = g.entries();
            assert_eq!(entries.iter().filter(|e| e.selected).count(), 1);
            assert!(entries.iter().any(|e| e.selected && e.id == id));
        }
    }
}
