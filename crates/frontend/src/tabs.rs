//! Tab selection state for the dashboard page.

use std::fmt;

/// The four dashboard tabs, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashboardTab {
    #[default]
    Services,
    Workflows,
    Analytics,
    Operations,
}

impl DashboardTab {
    /// All tabs in the order their triggers are shown.
    pub const ALL: [DashboardTab; 4] = [
        DashboardTab::Services,
        DashboardTab::Workflows,
        DashboardTab::Analytics,
        DashboardTab::Operations,
    ];

    /// Trigger value, also used in element ids.
    pub fn value(self) -> &'static str {
        match self {
            DashboardTab::Services => "services",
            DashboardTab::Workflows => "workflows",
            DashboardTab::Analytics => "analytics",
            DashboardTab::Operations => "operations",
        }
    }

    /// Trigger label.
    pub fn label(self) -> &'static str {
        match self {
            DashboardTab::Services => "Services",
            DashboardTab::Workflows => "Workflows",
            DashboardTab::Analytics => "Analytics",
            DashboardTab::Operations => "Operations",
        }
    }

    /// Parse a trigger value. Unknown values select the default tab.
    pub fn from_value(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|tab| tab.value() == value)
            .unwrap_or_default()
    }
}

impl fmt::Display for DashboardTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Single-select tab state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TabState {
    active: DashboardTab,
}

impl TabState {
    pub fn new(active: DashboardTab) -> Self {
        Self { active }
    }

    pub fn active(&self) -> DashboardTab {
        self.active
    }

    pub fn is_active(&self, tab: DashboardTab) -> bool {
        self.active == tab
    }

    /// Make `tab` the active tab. Returns `true` if the selection changed.
    pub fn select(&mut self, tab: DashboardTab) -> bool {
        let changed = self.active != tab;
        self.active = tab;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mock_data::load_builtin_dashboard;

    #[test]
    fn test_default_tab_is_services() {
        assert_eq!(TabState::default().active(), DashboardTab::Services);
        assert_eq!(DashboardTab::default(), DashboardTab::Services);
    }

    #[test]
    fn test_from_value() {
        assert_eq!(DashboardTab::from_value("workflows"), DashboardTab::Workflows);
        assert_eq!(DashboardTab::from_value("operations"), DashboardTab::Operations);
        assert_eq!(DashboardTab::from_value("Analytics"), DashboardTab::Services);
        assert_eq!(DashboardTab::from_value(""), DashboardTab::Services);
    }

    #[test]
    fn test_value_round_trips() {
        for tab in DashboardTab::ALL {
            assert_eq!(DashboardTab::from_value(tab.value()), tab);
        }
    }

    #[test]
    fn test_select_is_exclusive() {
        let mut state = TabState::default();

        assert!(state.select(DashboardTab::Analytics));
        assert!(state.is_active(DashboardTab::Analytics));

        let active: Vec<_> = DashboardTab::ALL
            .into_iter()
            .filter(|tab| state.is_active(*tab))
            .collect();
        assert_eq!(active, vec![DashboardTab::Analytics]);

        assert!(!state.select(DashboardTab::Analytics));
    }

    #[test]
    fn test_switching_tabs_leaves_data_untouched() {
        let dashboard = load_builtin_dashboard();
        let before = dashboard.clone();
        let mut state = TabState::default();

        for tab in DashboardTab::ALL.into_iter().chain(DashboardTab::ALL.into_iter().rev()) {
            state.select(tab);
        }

        assert_eq!(dashboard, before);
        assert_eq!(dashboard, load_builtin_dashboard());
    }
}
