use contracts::picker::{derive_picker_view, select_row, Popup, RowSelection};
use contracts::shortcuts::NavAction;
use contracts::site::SiteConfig;
use contracts::tabs::TabGroup;

fn home_group() -> TabGroup {
    let config = SiteConfig::embedded().expect("embedded catalog is valid");
    config.home().tab_group()
}

#[test]
fn embedded_catalog_is_valid() {
    let config = SiteConfig::embedded().unwrap();
    assert_eq!(config.home().slug, "home");
    assert!(config.home().hero);
    assert!(config.page("kontakt").map(|p| p.contact_form).unwrap_or(false));
    for shortcut in &config.shortcuts {
        let action = NavAction::from_action(&shortcut.action).unwrap();
        assert!(config.home().tab_group().contains(action.target_tab()));
    }
}

#[test]
fn initial_pill_matches_selected_tab() {
    let group = home_group();
    let view = derive_picker_view(&group.entries()).unwrap();
    assert_eq!(group.selected_id(), Some("hilfesuchende"));
    assert_eq!(view.pill.label, "Hilfesuchende");
    assert_eq!(view.remaining, group.len() - 1);
}

#[test]
fn picker_row_selects_then_resyncs_then_closes() {
    let mut group = home_group();
    let mut popup = Popup::default();
    popup.open();

    match select_row(&mut group, &mut popup, "kommunen") {
        RowSelection::Changed(change) => assert_eq!(change.previous, "hilfesuchende"),
        other => panic!("expected a selection change, got {other:?}"),
    }

    let view = derive_picker_view(&group.entries()).unwrap();
    assert_eq!(view.pill.id, "kommunen");
    assert_eq!(view.items.iter().filter(|i| i.selected).count(), 1);
    assert!(!popup.is_open());
}

#[test]
fn unknown_picker_row_is_noop() {
    let mut group = home_group();
    let mut popup = Popup::default();
    popup.open();
    let before = derive_picker_view(&group.entries());
    assert_eq!(select_row(&mut group, &mut popup, "does-not-exist"), RowSelection::Unknown);
    assert!(popup.is_open());
    assert_eq!(derive_picker_view(&group.entries()), before);
}

#[test]
fn shortcut_selection_updates_pill() {
    let mut group = home_group();
    let action = NavAction::from_action("engagieren").unwrap();
    group.select(action.target_tab());
    let view = derive_picker_view(&group.entries()).unwrap();
    assert_eq!(view.pill.label, "Engagierte");

    let back = NavAction::from_action("hilfesuchende").unwrap();
    group.select(back.target_tab());
    assert_eq!(derive_picker_view(&group.entries()).unwrap().pill.id, "hilfesuchende");
}

#[test]
fn shortcut_from_page_without_tabs_goes_home() {
    let config = SiteConfig::embedded().unwrap();
    let plan = config.plan_shortcut(NavAction::Hilfe, "kontakt").unwrap();
    assert_eq!(plan.navigate_to.as_deref(), Some("home"));

    let mut group = config.page("home").unwrap().tab_group();
    group.select(plan.tab);
    assert_eq!(derive_picker_view(&group.entries()).unwrap().pill.id, "hilfesuchende");

    let stay = config.plan_shortcut(NavAction::Engagieren, "home").unwrap();
    assert_eq!(stay.navigate_to, None);
}
