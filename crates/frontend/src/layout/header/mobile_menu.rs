use leptos::prelude::*;

/// Open/closed state of the mobile navigation panel
#[derive(Clone, Copy)]
pub struct MobileMenu {
    pub open: RwSignal<bool>,
    /// Path the menu was last shown for
    path: StoredValue<Option<String>>,
}

impl MobileMenu {
    /// Starts closed
    pub fn new() -> Self {
        Self {
            open: RwSignal::new(false),
            path: StoredValue::new(None),
        }
    }

    pub fn is_open(&self) -> bool {
        self.open.get()
    }

    pub fn toggle(&self) {
        self.open.update(|val| *val = !*val);
    }

    /// Called whenever a link inside the menu is followed
    pub fn close(&self) {
        self.open.set(false);
    }

    /// Any navigation (logo, footer, in-page links, back/forward) closes the menu
    pub fn route_changed(&self, pathname: &str) {
        let changed = self
            .path
            .with_value(|last| last.as_deref().is_some_and(|last| last != pathname));
        self.path.set_value(Some(pathname.to_string()));
        if changed {
            self.close();
        }
    }
}

impl Default for MobileMenu {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_closed() {
        let menu = MobileMenu::new();
        assert!(!menu.open.get_untracked());
    }

    #[test]
    fn test_toggle_and_close() {
        let menu = MobileMenu::new();
        menu.toggle();
        assert!(menu.open.get_untracked());
        menu.toggle();
        assert!(!menu.open.get_untracked());

        menu.toggle();
        menu.close();
        assert!(!menu.open.get_untracked());

        // closing a closed menu keeps it closed
        menu.close();
        assert!(!menu.open.get_untracked());
    }

    #[test]
    fn test_route_change_closes_menu() {
        let menu = MobileMenu::new();
        menu.route_changed("/");
        menu.toggle();

        menu.route_changed("/");
        assert!(menu.open.get_untracked());

        menu.route_changed("/about");
        assert!(!menu.open.get_untracked());
    }

    #[test]
    fn test_back_navigation_closes_menu() {
        let menu = MobileMenu::new();
        menu.route_changed("/services");
        menu.route_changed("/contact");
        menu.toggle();

        menu.route_changed("/services");
        assert!(!menu.open.get_untracked());
    }
}
