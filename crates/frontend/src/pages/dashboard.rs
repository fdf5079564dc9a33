//! Dashboard page: header, metrics strip and tabbed sections.

use std::rc::Rc;

use core_types::Dashboard;
use yew::prelude::*;

use crate::components::{
    AnalyticsPanel, DashboardHeader, OperationsPanels, ServicesPanel, StatCard, TabBar,
    WorkflowsPanel,
};
use crate::metrics::metric_tiles;
use crate::tabs::{DashboardTab, TabState};

/// Properties for DashboardPage component.
#[derive(Properties, PartialEq)]
pub struct DashboardPageProps {
    pub dashboard: Rc<Dashboard>,
    #[prop_or_default]
    pub initial_tab: DashboardTab,
}

/// Dashboard page component.
///
/// The dataset is read-only; the selected tab is the only state.
#[function_component(DashboardPage)]
pub fn dashboard_page(props: &DashboardPageProps) -> Html {
    let initial_tab = props.initial_tab;
    let tabs = use_state(move || TabState::new(initial_tab));

    let on_select = {
        let tabs = tabs.clone();
        Callback::from(move |tab: DashboardTab| {
            let mut next = *tabs;
            if next.select(tab) {
                tabs.set(next);
            }
        })
    };

    let dashboard = &props.dashboard;
    let active = tabs.active();

    let content = match active {
        DashboardTab::Services => html! {
            <ServicesPanel services={dashboard.services.clone()} />
        },
        DashboardTab::Workflows => html! {
            <WorkflowsPanel workflows={dashboard.workflows.clone()} />
        },
        DashboardTab::Analytics => html! {
            <AnalyticsPanel highlights={dashboard.highlights.clone()} />
        },
        DashboardTab::Operations => html! {
            <OperationsPanels panels={dashboard.operations.clone()} />
        },
    };

    html! {
        <div class="page">
            <DashboardHeader />

            <main class="main-content">
                <div class="stats-grid">
                    { for metric_tiles(&dashboard.metrics).into_iter().map(|tile| html! {
                        <StatCard {tile} />
                    })}
                </div>

                <div class="tabs">
                    <TabBar state={*tabs} {on_select} />
                    <div
                        class="tabs-content"
                        role="tabpanel"
                        id={format!("panel-{}", active.value())}
                        aria-labelledby={format!("tab-{}", active.value())}
                    >
                        { content }
                    </div>
                </div>
            </main>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mock_data::load_builtin_dashboard;
    use yew::ServerRenderer;

    async fn render_page(initial_tab: DashboardTab) -> String {
        ServerRenderer::<DashboardPage>::with_props(move || DashboardPageProps {
            dashboard: Rc::new(load_builtin_dashboard()),
            initial_tab,
        })
        .hydratable(false)
        .render()
        .await
    }

    #[tokio::test]
    async fn test_defaults_to_services_tab() {
        let html = render_page(DashboardTab::default()).await;

        assert!(html.contains("ATE Management Dashboard"));
        assert!(html.contains("All Systems Operational"));
        assert!(html.contains("id=\"panel-services\""));
        assert!(html.contains("Service Registry"));
        assert_eq!(html.matches("class=\"service-item\"").count(), 7);
        assert!(!html.contains("Active Workflows"));
    }

    #[tokio::test]
    async fn test_metrics_strip_has_six_verbatim_values() {
        let html = render_page(DashboardTab::Services).await;

        assert_eq!(html.matches("class=\"stat-value\"").count(), 6);
        for value in ["156", "23", "89", "67", "285%", "6.2 weeks"] {
            assert!(
                html.contains(&format!("<div class=\"stat-value\">{value}</div>")),
                "missing metric {value}"
            );
        }
    }

    #[tokio::test]
    async fn test_each_tab_renders_its_panel() {
        let expected = [
            (DashboardTab::Services, "Service Registry"),
            (DashboardTab::Workflows, "Active Workflows"),
            (DashboardTab::Analytics, "Average Processing Time"),
            (DashboardTab::Operations, "Security Status"),
        ];

        for (tab, marker) in expected {
            let html = render_page(tab).await;
            assert!(html.contains(marker), "{tab} should show {marker}");
            assert_eq!(html.matches("role=\"tabpanel\"").count(), 1);
        }
    }

    #[tokio::test]
    async fn test_metrics_identical_across_tabs() {
        let strip = |html: &str| -> Vec<String> {
            html.match_indices("<div class=\"stat-value\">")
                .map(|(start, _)| {
                    let rest = &html[start..];
                    rest[..rest.find("</div>").unwrap_or(rest.len())].to_string()
                })
                .collect()
        };

        let baseline = strip(&render_page(DashboardTab::Services).await);
        for tab in DashboardTab::ALL {
            assert_eq!(strip(&render_page(tab).await), baseline, "{tab}");
        }
    }
}
