//! Sidebar navigation: fixed link groups and the single highlighted item.
//!
//! Links are visual only: selecting one changes the highlight and nothing
//! else. There is no routing.

/// Icon shown next to a navigation label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavIcon {
    LayoutGrid,
    Users,
    UserCircle,
    FileText,
    FileDigit,
    ShoppingCart,
    Mail,
    Archive,
    CalendarDays,
    HelpCircle,
    Settings,
}

/// Which block of the sidebar an item lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavGroup {
    Primary,
    Utility,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub name: &'static str,
    pub href: &'static str,
    pub icon: NavIcon,
    /// Marks the item highlighted on first render.
    pub is_active: bool,
}

const fn item(name: &'static str, icon: NavIcon) -> NavItem {
    NavItem {
        name,
        href: "#",
        icon,
        is_active: false,
    }
}

pub static MAIN_NAV_ITEMS: [NavItem; 9] = [
    NavItem {
        name: "Dashboard",
        href: "#",
        icon: NavIcon::LayoutGrid,
        is_active: true,
    },
    item("Leads", NavIcon::Users),
    item("Customers", NavIcon::UserCircle),
    item("Proposals", NavIcon::FileText),
    item("Invoices", NavIcon::FileDigit),
    item("Items", NavIcon::ShoppingCart),
    item("Mail", NavIcon::Mail),
    item("Shoebox", NavIcon::Archive),
    item("Calendar", NavIcon::CalendarDays),
];

pub static UTILITY_NAV_ITEMS: [NavItem; 2] = [
    item("Help", NavIcon::HelpCircle),
    item("Settings", NavIcon::Settings),
];

/// All items in sidebar order, tagged with their group.
pub fn nav_entries() -> impl Iterator<Item = (NavGroup, &'static NavItem)> {
    MAIN_NAV_ITEMS
        .iter()
        .map(|i| (NavGroup::Primary, i))
        .chain(UTILITY_NAV_ITEMS.iter().map(|i| (NavGroup::Utility, i)))
}

pub fn nav_len() -> usize {
    MAIN_NAV_ITEMS.len() + UTILITY_NAV_ITEMS.len()
}

/// Tracks the highlighted item by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    active: &'static str,
}

impl Default for NavigationState {
    fn default() -> Self {
        let active = nav_entries()
            .find(|(_, item)| item.is_active)
            .map(|(_, item)| item.name)
            .unwrap_or(MAIN_NAV_ITEMS[0].name);
        Self { active }
    }
}

impl NavigationState {
    pub fn highlighted(&self) -> &'static str {
        self.active
    }

    pub fn is_highlighted(&self, name: &str) -> bool {
        self.active == name
    }

    /// Highlight the named primary item. Utility items and unknown names
    /// leave the current highlight in place; returns whether the highlight
    /// now matches `name`.
    pub fn select(&mut self, name: &str) -> bool {
        match nav_entries().find(|(_, item)| item.name == name) {
            Some((NavGroup::Primary, item)) => {
                self.active = item.name;
                true
            }
            _ => false,
        }
    }

    /// Highlight the item at a flat sidebar position. Positions past the
    /// primary group are not selectable.
    pub fn select_index(&mut self, index: usize) -> Option<&'static str> {
        match nav_entries().nth(index)? {
            (NavGroup::Primary, item) => {
                self.active = item.name;
                Some(item.name)
            }
            (NavGroup::Utility, _) => None,
        }
    }

    /// Flat position of the highlighted item.
    pub fn highlighted_index(&self) -> usize {
        nav_entries()
            .position(|(_, item)| item.name == self.active)
            .unwrap_or(0)
    }
}
