//! Page shell: the Sales/Leads tab switch and what each tab mounts.

use serde::{Deserialize, Serialize};

/// Content tabs, in strip order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Tab {
    Sales,
    #[default]
    Leads,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Sales, Tab::Leads];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Sales => "Sales",
            Tab::Leads => "Leads",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Tab::Sales => 0,
            Tab::Leads => 1,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        Self::ALL.get(i).copied()
    }
}

/// Sections stacked on the Leads tab, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadsSection {
    /// Funnel count card beside the sources card.
    StatsGrid,
    TrackingChart,
    /// Lost reasons card beside the other-data card.
    SummaryCards,
}

pub static LEADS_SECTIONS: [LeadsSection; 3] = [
    LeadsSection::StatsGrid,
    LeadsSection::TrackingChart,
    LeadsSection::SummaryCards,
];

pub const SALES_PLACEHOLDER_TITLE: &str = "Sales Data Overview";
pub const SALES_PLACEHOLDER_BODY: &str = "Detailed sales analytics, performance metrics, and \
revenue reports would be displayed here. This section is currently under development.";

/// What the content area mounts for the active tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageContent {
    Leads(&'static [LeadsSection]),
    SalesPlaceholder { title: &'static str, body: &'static str },
}

/// Owns the active tab.
#[derive(Debug, Clone, Default)]
pub struct PageShell {
    active_tab: Tab,
}

impl PageShell {
    pub fn new(active_tab: Tab) -> Self {
        Self { active_tab }
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    /// Activate a tab. Returns true if the active tab changed.
    pub fn select(&mut self, tab: Tab) -> bool {
        let changed = self.active_tab != tab;
        self.active_tab = tab;
        changed
    }

    pub fn content(&self) -> PageContent {
        match self.active_tab {
            Tab::Leads => PageContent::Leads(&LEADS_SECTIONS),
            Tab::Sales => PageContent::SalesPlaceholder {
                title: SALES_PLACEHOLDER_TITLE,
                body: SALES_PLACEHOLDER_BODY,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_leads_with_three_sections() {
        let shell = PageShell::default();
        assert_eq!(shell.active_tab(), Tab::Leads);
        match shell.content() {
            PageContent::Leads(sections) => assert_eq!(sections.len(), 3),
            other => panic!("expected leads content, got {other:?}"),
        }
    }

    #[test]
    fn sales_swaps_in_placeholder() {
        let mut shell = PageShell::default();
        assert!(shell.select(Tab::Sales));
        assert_eq!(
            shell.content(),
            PageContent::SalesPlaceholder {
                title: SALES_PLACEHOLDER_TITLE,
                body: SALES_PLACEHOLDER_BODY,
            }
        );
        assert!(!shell.select(Tab::Sales));
        assert!(shell.select(Tab::Leads));
        assert!(matches!(shell.content(), PageContent::Leads(_)));
    }

    #[test]
    fn tab_index_roundtrip() {
        for tab in Tab::ALL {
            assert_eq!(Tab::from_index(tab.index()), Some(tab));
        }
        assert!(Tab::from_index(2).is_none());
    }
}
