//! Core types for the ATE management dashboard.
//!
//! This crate defines the records shown on the dashboard and the
//! status classifier that turns a raw status string into the icon and
//! badge used to render it.

use serde::{Deserialize, Serialize};

/// A platform service listed in the service registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRecord {
    /// Unique service identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Service category (core, analysis, business, ...)
    #[serde(rename = "type")]
    pub kind: String,
    /// Raw status string, classified at render time
    pub status: String,
    /// Listening port
    pub port: u16,
    /// Uptime as a display percentage, e.g. "99.9%"
    pub uptime: String,
}

impl ServiceRecord {
    /// Create a new service record.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        kind: impl Into<String>,
        status: impl Into<String>,
        port: u16,
        uptime: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: kind.into(),
            status: status.into(),
            port,
            uptime: uptime.into(),
        }
    }

    /// Status indicator for this service.
    pub fn indicator(&self) -> StatusIndicator {
        classify_status(&self.status)
    }
}

/// A transformation workflow and its progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowRecord {
    /// Unique workflow identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Raw status string, classified at render time
    pub status: String,
    /// Completion percentage (0-100)
    pub progress: u8,
    /// Elapsed time as a display string, "-" when not started
    pub duration: String,
}

impl WorkflowRecord {
    /// Status value for which a progress bar is shown.
    pub const RUNNING: &'static str = "running";

    /// Create a new workflow record.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        status: impl Into<String>,
        progress: u8,
        duration: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            status: status.into(),
            progress,
            duration: duration.into(),
        }
    }

    /// Status indicator for this workflow.
    pub fn indicator(&self) -> StatusIndicator {
        classify_status(&self.status)
    }

    /// Progress to display, or `None` when the workflow is not running.
    ///
    /// The value is clamped to 100.
    pub fn visible_progress(&self) -> Option<u8> {
        (self.status == Self::RUNNING).then_some(self.progress.min(100))
    }
}

/// Headline numbers shown in the metrics strip.
///
/// Every field is displayed verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSummary {
    pub total_projects: u32,
    pub active_transformations: u32,
    pub completed_analyses: u32,
    pub business_cases_generated: u32,
    #[serde(rename = "averageROI")]
    pub average_roi: String,
    pub time_to_value: String,
}

/// Color tone of a highlight value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Green,
    Blue,
    Yellow,
    Red,
    Gray,
}

impl Tone {
    /// CSS class for text in this tone.
    pub fn text_class(self) -> &'static str {
        match self {
            Tone::Green => "text-green",
            Tone::Blue => "text-blue",
            Tone::Yellow => "text-yellow",
            Tone::Red => "text-red",
            Tone::Gray => "text-gray",
        }
    }
}

/// A large single-value card on the analytics tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Highlight {
    pub title: String,
    pub description: String,
    pub value: String,
    /// Change versus the previous period, e.g. "+2.1% from previous period"
    pub trend: String,
    pub tone: Tone,
}

/// How the values of an operations panel are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelKind {
    /// Values are shown as badges (Active, Enabled)
    Security,
    /// Values are shown as plain figures
    Usage,
}

/// A label/value line inside an operations panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelItem {
    pub label: String,
    pub value: String,
}

impl PanelItem {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// A card on the operations tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationsPanel {
    pub title: String,
    pub kind: PanelKind,
    pub items: Vec<PanelItem>,
}

/// Everything the dashboard displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub services: Vec<ServiceRecord>,
    pub workflows: Vec<WorkflowRecord>,
    pub metrics: MetricsSummary,
    pub highlights: Vec<Highlight>,
    pub operations: Vec<OperationsPanel>,
}

/// Icon shown next to a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusIcon {
    /// Check mark (healthy, completed)
    Success,
    /// Clock (running)
    InProgress,
    /// Exclamation (pending)
    Warning,
    /// Cross (unhealthy, failed)
    Error,
    /// Neutral exclamation for anything unrecognized
    Unknown,
}

impl StatusIcon {
    /// Color of the icon.
    pub fn tone(self) -> Tone {
        match self {
            StatusIcon::Success => Tone::Green,
            StatusIcon::InProgress => Tone::Blue,
            StatusIcon::Warning => Tone::Yellow,
            StatusIcon::Error => Tone::Red,
            StatusIcon::Unknown => Tone::Gray,
        }
    }

    /// Glyph used in markup.
    pub fn glyph(self) -> &'static str {
        match self {
            StatusIcon::Success => "\u{2714}",
            StatusIcon::InProgress => "\u{25F7}",
            StatusIcon::Warning | StatusIcon::Unknown => "!",
            StatusIcon::Error => "\u{2716}",
        }
    }

    /// Stable name, also used as a CSS modifier.
    pub fn as_str(self) -> &'static str {
        match self {
            StatusIcon::Success => "success",
            StatusIcon::InProgress => "in-progress",
            StatusIcon::Warning => "warning",
            StatusIcon::Error => "error",
            StatusIcon::Unknown => "unknown",
        }
    }
}

/// Visual emphasis of a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeVariant {
    #[default]
    Default,
    Secondary,
    Outline,
    Destructive,
}

impl BadgeVariant {
    pub fn as_str(self) -> &'static str {
        match self {
            BadgeVariant::Default => "default",
            BadgeVariant::Secondary => "secondary",
            BadgeVariant::Outline => "outline",
            BadgeVariant::Destructive => "destructive",
        }
    }

    /// CSS class for a badge of this variant.
    pub fn css_class(self) -> &'static str {
        match self {
            BadgeVariant::Default => "badge-default",
            BadgeVariant::Secondary => "badge-secondary",
            BadgeVariant::Outline => "badge-outline",
            BadgeVariant::Destructive => "badge-destructive",
        }
    }
}

/// Icon and badge pair for a status string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusIndicator {
    pub icon: StatusIcon,
    pub badge: BadgeVariant,
}

impl StatusIndicator {
    /// Indicator used for unrecognized statuses.
    pub const UNKNOWN: StatusIndicator = StatusIndicator {
        icon: StatusIcon::Unknown,
        badge: BadgeVariant::Outline,
    };
}

/// Classify a raw status string.
///
/// Matching is exact and case-sensitive; anything outside the known
/// vocabulary maps to [`StatusIndicator::UNKNOWN`].
pub fn classify_status(status: &str) -> StatusIndicator {
    let (icon, badge) = match status {
        "healthy" | "completed" => (StatusIcon::Success, BadgeVariant::Default),
        "running" => (StatusIcon::InProgress, BadgeVariant::Secondary),
        "pending" => (StatusIcon::Warning, BadgeVariant::Outline),
        "unhealthy" | "failed" => (StatusIcon::Error, BadgeVariant::Destructive),
        _ => return StatusIndicator::UNKNOWN,
    };

    StatusIndicator { icon, badge }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_known_statuses() {
        let cases = [
            ("healthy", StatusIcon::Success, BadgeVariant::Default),
            ("completed", StatusIcon::Success, BadgeVariant::Default),
            ("running", StatusIcon::InProgress, BadgeVariant::Secondary),
            ("pending", StatusIcon::Warning, BadgeVariant::Outline),
            ("unhealthy", StatusIcon::Error, BadgeVariant::Destructive),
            ("failed", StatusIcon::Error, BadgeVariant::Destructive),
        ];

        for (status, icon, badge) in cases {
            let indicator = classify_status(status);
            assert_eq!(indicator.icon, icon, "icon for {status}");
            assert_eq!(indicator.badge, badge, "badge for {status}");
        }
    }

    #[test]
    fn test_classify_falls_back_to_unknown() {
        for status in ["unknown", "", "degraded", "HEALTHY", "Running", " healthy"] {
            assert_eq!(
                classify_status(status),
                StatusIndicator::UNKNOWN,
                "status {status:?}"
            );
        }
    }

    #[test]
    fn test_icon_tones() {
        assert_eq!(StatusIcon::Success.tone(), Tone::Green);
        assert_eq!(StatusIcon::InProgress.tone(), Tone::Blue);
        assert_eq!(StatusIcon::Warning.tone(), Tone::Yellow);
        assert_eq!(StatusIcon::Error.tone(), Tone::Red);
        assert_eq!(StatusIcon::Unknown.tone(), Tone::Gray);
    }

    #[test]
    fn test_badge_css_class() {
        assert_eq!(BadgeVariant::Default.css_class(), "badge-default");
        assert_eq!(BadgeVariant::Destructive.css_class(), "badge-destructive");
        assert_eq!(BadgeVariant::default(), BadgeVariant::Default);
    }

    #[test]
    fn test_visible_progress_only_when_running() {
        let running = WorkflowRecord::new("4", "Architecture Design", "running", 30, "8m");
        let pending = WorkflowRecord::new("3", "Business Case Generation", "pending", 0, "-");
        let completed = WorkflowRecord::new("1", "Full Transformation", "completed", 100, "45m");

        assert_eq!(running.visible_progress(), Some(30));
        assert_eq!(pending.visible_progress(), None);
        assert_eq!(completed.visible_progress(), None);
    }

    #[test]
    fn test_visible_progress_is_clamped() {
        let overshoot = WorkflowRecord::new("9", "Overshoot", "running", 250, "1m");
        assert_eq!(overshoot.visible_progress(), Some(100));
    }

    #[test]
    fn test_service_indicator_uses_status() {
        let service = ServiceRecord::new("1", "Auth Service", "core", "unhealthy", 5001, "97.0%");
        assert_eq!(service.indicator().icon, StatusIcon::Error);
    }

    #[test]
    fn test_service_serializes_type_key() {
        let service = ServiceRecord::new("1", "Auth Service", "core", "healthy", 5001, "99.9%");

        let json = serde_json::to_value(&service).unwrap();

        assert_eq!(json["type"], "core");
        assert!(json.get("kind").is_none());
    }

    #[test]
    fn test_metrics_use_camel_case_keys() {
        let json = r#"{
            "totalProjects": 1,
            "activeTransformations": 2,
            "completedAnalyses": 3,
            "businessCasesGenerated": 4,
            "averageROI": "10%",
            "timeToValue": "1 week"
        }"#;

        let metrics: MetricsSummary = serde_json::from_str(json).unwrap();

        assert_eq!(metrics.business_cases_generated, 4);
        assert_eq!(metrics.average_roi, "10%");
    }
}
