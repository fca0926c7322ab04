/// Delay before a menu closes after one of its links was clicked
pub const DEFAULT_MENU_CLOSE_DELAY_MS: u32 = 100;

/// Which overlay menu a [`MenuState`] belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuKind {
    Mega,
    Mobile,
}

impl MenuKind {
    /// Class put on `<body>` while the menu is open, if any
    pub fn body_class(&self) -> Option<&'static str> {
        match self {
            MenuKind::Mega => None,
            MenuKind::Mobile => Some("mobile-menu-open"),
        }
    }
}

/// Open/closed state of an overlay menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuState {
    kind: MenuKind,
    open: bool,
}

impl MenuState {
    pub fn new(kind: MenuKind) -> Self {
        Self { kind, open: false }
    }

    pub fn kind(&self) -> MenuKind {
        self.kind
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Escape closes the menu; returns whether there was anything to close
    pub fn escape(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_and_escape() {
        let mut m = MenuState::new(MenuKind::Mega);
        m.toggle();
        assert!(m.is_open());
        assert!(m.escape());
        assert!(!m.is_open());
        assert!(!m.escape());
    }

    #[test]
    fn test_body_class_only_for_mobile() {
        assert_eq!(MenuKind::Mobile.body_class(), Some("mobile-menu-open"));
        assert_eq!(MenuKind::Mega.body_class(), None);
    }
}
