//! Site catalog: pages, menu, slides and timing settings.
//!
//! The catalog ships as JSON embedded into the binary and is validated once
//! at startup.

use crate::menu::DEFAULT_MENU_CLOSE_DELAY_MS;
use crate::shortcuts::{NavAction, DEFAULT_TAB_ACTIVATION_DELAY_MS};
use crate::slider::DEFAULT_SLIDE_DURATION_MS;
use crate::tabs::{TabDef, TabGroup};
use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

const EMBEDDED_CATALOG: &str = include_str!("../catalog/site.json");

/// Timing knobs of the interactive components
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSettings {
    pub slide_duration_ms: u32,
    pub menu_close_delay_ms: u32,
    pub tab_activation_delay_ms: u32,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            slide_duration_ms: DEFAULT_SLIDE_DURATION_MS,
            menu_close_delay_ms: DEFAULT_MENU_CLOSE_DELAY_MS,
            tab_activation_delay_ms: DEFAULT_TAB_ACTIVATION_DELAY_MS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuLink {
    pub label: String,
    /// Slug of the target page
    pub page: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuSection {
    pub title: String,
    pub links: Vec<MenuLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    pub title: String,
    pub text: String,
    #[serde(default)]
    pub image: Option<String>,
}

/// Header shortcut button
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shortcut {
    /// `data-action` value
    pub action: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageDef {
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub intro: String,
    /// Renders the hero slider on this page
    #[serde(default)]
    pub hero: bool,
    #[serde(default)]
    pub tabs: Vec<TabDef>,
    #[serde(default)]
    pub initial_tab: Option<String>,
    #[serde(default)]
    pub faq: Vec<FaqItem>,
    #[serde(default)]
    pub contact_form: bool,
}

impl PageDef {
    pub fn tab_group(&self) -> TabGroup {
        TabGroup::new(self.tabs.clone(), self.initial_tab.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub name: String,
    #[serde(default)]
    pub settings: SiteSettings,
    #[serde(default)]
    pub menu: Vec<MenuSection>,
    #[serde(default)]
    pub slides: Vec<Slide>,
    #[serde(default)]
    pub shortcuts: Vec<Shortcut>,
    pub pages: Vec<PageDef>,
}

impl SiteConfig {
    /// Catalog compiled into the binary
    pub fn embedded() -> Result<Self> {
        Self::from_json(EMBEDDED_CATALOG).context("embedded site catalog")
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: SiteConfig =
            serde_json::from_str(json).context("failed to parse site catalog")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(!self.pages.is_empty(), "site catalog declares no pages");

        let mut slugs = HashSet::new();
        for page in &self.pages {
            ensure!(slugs.insert(page.slug.as_str()), "duplicate page slug '{}'", page.slug);

            let mut tab_ids = HashSet::new();
            for tab in &page.tabs {
                ensure!(
                    tab_ids.insert(tab.id.as_str()),
                    "page '{}': duplicate tab id '{}'",
                    page.slug,
                    tab.id
                );
            }
            if let Some(initial) = &page.initial_tab {
                ensure!(
                    tab_ids.contains(initial.as_str()),
                    "page '{}': initial tab '{}' is not declared",
                    page.slug,
                    initial
                );
            }
            for item in &page.faq {
                ensure!(
                    !item.question.trim().is_empty(),
                    "page '{}': FAQ item without question",
                    page.slug
                );
            }
        }

        for section in &self.menu {
            for link in &section.links {
                ensure!(
                    slugs.contains(link.page.as_str()),
                    "menu '{}': link '{}' points to unknown page '{}'",
                    section.title,
                    link.label,
                    link.page
                );
            }
        }

        for shortcut in &self.shortcuts {
            ensure!(
                NavAction::from_action(&shortcut.action).is_some(),
                "unknown shortcut action '{}'",
                shortcut.action
            );
        }
        Ok(())
    }

    /// First declared page
    pub fn home(&self) -> &PageDef {
        &self.pages[0]
    }

    pub fn page(&self, slug: &str) -> Option<&PageDef> {
        self.pages.iter().find(|p| p.slug == slug)
    }

    /// Decides what a header shortcut does when clicked on page `current`:
    /// stay when the page declares the target tab, otherwise switch to the
    /// first page that does. `None` when no page declares it.
    pub fn plan_shortcut(&self, action: NavAction, current: &str) -> Option<ShortcutPlan> {
        let tab = action.target_tab();
        let declares = |page: &PageDef| page.tabs.iter().any(|t| t.id == tab);

        if self.page(current).is_some_and(|page| declares(page)) {
            return Some(ShortcutPlan {
                navigate_to: None,
                tab,
            });
        }
        let page = self.pages.iter().find(|page| declares(page))?;
        Some(ShortcutPlan {
            navigate_to: Some(page.slug.clone()),
            tab,
        })
    }
}

/// Steps of a header shortcut: optional page switch, then tab activation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortcutPlan {
    pub navigate_to: Option<String>,
    pub tab: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"{
        "name": "Test",
        "pages": [{ "slug": "home", "title": "Start" }]
    }"#;

    #[test]
    fn test_defaults_applied() {
        let config = SiteConfig::from_json(MINIMAL).unwrap();
        assert_eq!(config.settings.slide_duration_ms, 6000);
        assert_eq!(config.settings.menu_close_delay_ms, 100);
        assert_eq!(config.settings.tab_activation_delay_ms, 500);
        assert_eq!(config.home().slug, "home");
        assert!(config.page("kontakt").is_none());
    }

    #[test]
    fn test_rejects_duplicate_tab_ids() {
        let json = r#"{
            "name": "Test",
            "pages": [{
                "slug": "home",
                "title": "Start",
                "tabs": [
                    { "id": "a", "label": "A" },
                    { "id": "a", "label": "A again" }
                ]
            }]
        }"#;
        let err = SiteConfig::from_json(json).unwrap_err();
        assert!(format!("{err:#}").contains("duplicate tab id 'a'"));
    }

    #[test]
    fn test_rejects_dangling_menu_link() {
        let json = r#"{
            "name": "Test",
            "menu": [{ "title": "Mehr", "links": [{ "label": "Kontakt", "page": "kontakt" }] }],
            "pages": [{ "slug": "home", "title": "Start" }]
        }"#;
        assert!(SiteConfig::from_json(json).is_err());
    }

    #[test]
    fn test_rejects_unknown_shortcut() {
        let json = r#"{
            "name": "Test",
            "shortcuts": [{ "action": "spenden", "label": "Spenden" }],
            "pages": [{ "slug": "home", "title": "Start" }]
        }"#;
        assert!(SiteConfig::from_json(json).is_err());
    }

    const TWO_PAGES: &str = r#"{
        "name": "Test",
        "pages": [
            {
                "slug": "home",
                "title": "Start",
                "tabs": [
                    { "id": "hilfesuchende", "label": "Hilfesuchende" },
                    { "id": "engagierte", "label": "Engagierte" }
                ]
            },
            { "slug": "kontakt", "title": "Kontakt" },
            {
                "slug": "engagieren",
                "title": "Engagieren",
                "tabs": [{ "id": "engagierte", "label": "Engagierte" }]
            }
        ]
    }"#;

    #[test]
    fn test_shortcut_stays_on_page_with_tab() {
        let config = SiteConfig::from_json(TWO_PAGES).unwrap();
        let plan = config.plan_shortcut(NavAction::Engagieren, "engagieren").unwrap();
        assert_eq!(plan.navigate_to, None);
        assert_eq!(plan.tab, "engagierte");
    }

    #[test]
    fn test_shortcut_switches_to_declaring_page() {
        let config = SiteConfig::from_json(TWO_PAGES).unwrap();
        let plan = config.plan_shortcut(NavAction::Hilfe, "kontakt").unwrap();
        assert_eq!(plan.navigate_to.as_deref(), Some("home"));
        assert_eq!(plan.tab, "hilfesuchende");

        let plan = config.plan_shortcut(NavAction::Hilfe, "engagieren").unwrap();
        assert_eq!(plan.navigate_to.as_deref(), Some("home"));
    }

    #[test]
    fn test_shortcut_without_declaring_page() {
        let config = SiteConfig::from_json(MINIMAL).unwrap();
        assert_eq!(config.plan_shortcut(NavAction::Hilfe, "home"), None);
    }

    #[test]
    fn test_rejects_no_pages() {
        assert!(SiteConfig::from_json(r#"{ "name": "Test", "pages": [] }"#).is_err());
    }
}
