/// Delay between starting the scroll and activating the target tab
pub const DEFAULT_TAB_ACTIVATION_DELAY_MS: u32 = 500;

/// Header shortcut buttons (`.nav-btn[data-action]`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    Hilfe,
    Engagieren,
}

impl NavAction {
    /// Parses a `data-action` value; the tab ids are accepted as aliases
    pub fn from_action(action: &str) -> Option<Self> {
        match action {
            "hilfe" | "hilfesuchende" => Some(NavAction::Hilfe),
            "engagieren" | "engagierte" => Some(NavAction::Engagieren),
            _ => None,
        }
    }

    pub fn action(&self) -> &'static str {
        match self {
            NavAction::Hilfe => "hilfe",
            NavAction::Engagieren => "engagieren",
        }
    }

    /// Id of the tab this shortcut activates
    pub fn target_tab(&self) -> &'static str {
        match self {
            NavAction::Hilfe => "hilfesuchende",
            NavAction::Engagieren => "engagierte",
        }
    }
}

/// Id of an in-page anchor target, `None` for a bare `#` or external links
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_actions_and_aliases() {
        assert_eq!(NavAction::from_action("hilfe"), Some(NavAction::Hilfe));
        assert_eq!(NavAction::from_action("hilfesuchende").map(|a| a.target_tab()), Some("hilfesuchende"));
        assert_eq!(NavAction::from_action("engagieren").map(|a| a.target_tab()), Some("engagierte"));
        assert_eq!(NavAction::from_action("kontakt"), None);
    }

    #[test]
    fn test_anchor_target() {
        assert_eq!(anchor_target("#faq"), Some("faq"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("/kontakt"), None);
    }
}
