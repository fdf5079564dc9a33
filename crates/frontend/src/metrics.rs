//! Metric tiles shown in the strip above the tabs.

use core_types::MetricsSummary;

/// One card in the metrics strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricTile {
    pub label: &'static str,
    /// Summary field, shown verbatim
    pub value: String,
    pub caption: &'static str,
    /// Icon CSS class
    pub icon: &'static str,
}

/// Build the six metric tiles in display order.
pub fn metric_tiles(metrics: &MetricsSummary) -> [MetricTile; 6] {
    [
        MetricTile {
            label: "Total Projects",
            value: metrics.total_projects.to_string(),
            caption: "+12% from last month",
            icon: "icon-database",
        },
        MetricTile {
            label: "Active Transformations",
            value: metrics.active_transformations.to_string(),
            caption: "+5 new this week",
            icon: "icon-workflow",
        },
        MetricTile {
            label: "Completed Analyses",
            value: metrics.completed_analyses.to_string(),
            caption: "+18% completion rate",
            icon: "icon-chart",
        },
        MetricTile {
            label: "Business Cases",
            value: metrics.business_cases_generated.to_string(),
            caption: "Generated this quarter",
            icon: "icon-trending",
        },
        MetricTile {
            label: "Average ROI",
            value: metrics.average_roi.clone(),
            caption: "Across all projects",
            icon: "icon-trending",
        },
        MetricTile {
            label: "Time to Value",
            value: metrics.time_to_value.clone(),
            caption: "Average delivery time",
            icon: "icon-clock",
        },
    ]
}
