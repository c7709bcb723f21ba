use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterLinks {
    pub company: Vec<NavItem>,
    pub resources: Vec<NavItem>,
    pub legal: Vec<NavItem>,
}

/// Header and footer link structure. Item order is display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Navigation {
    pub navigation: Vec<NavItem>,
    pub footer: FooterLinks,
}

/// Nav item paired with its active flag for the current path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub label: String,
    pub href: String,
    pub active: bool,
}

/// An item is active only when its href equals the current path exactly
pub fn is_active(current_path: &str, href: &str) -> bool {
    current_path == href
}

impl Navigation {
    /// Items shown in the desktop header.
    ///
    /// The first (home) and last (contact) entries are left out: the logo and
    /// the CTA buttons already link there.
    pub fn desktop_items(&self) -> &[NavItem] {
        match self.navigation.len() {
            0..=2 => &[],
            n => &self.navigation[1..n - 1],
        }
    }

    /// Items shown in the mobile menu (all of them)
    pub fn mobile_items(&self) -> &[NavItem] {
        &self.navigation
    }
}

pub fn nav_links(items: &[NavItem], current_path: &str) -> Vec<NavLink> {
    items
        .iter()
        .map(|item| NavLink {
            label: item.label.clone(),
            href: item.href.clone(),
            active: is_active(current_path, &item.href),
        })
        .collect()
}
