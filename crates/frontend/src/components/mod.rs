//! Reusable UI components.

mod analytics_panel;
mod badge;
mod header;
mod operations_panel;
mod progress_bar;
mod service_item;
mod services_panel;
mod stat_card;
mod status_mark;
mod tab_bar;
mod workflow_item;
mod workflows_panel;

pub use analytics_panel::AnalyticsPanel;
pub use badge::{Badge, StatusBadge};
pub use header::DashboardHeader;
pub use operations_panel::OperationsPanels;
pub use progress_bar::ProgressBar;
pub use service_item::ServiceItem;
pub use services_panel::ServicesPanel;
pub use stat_card::StatCard;
pub use status_mark::StatusMark;
pub use tab_bar::TabBar;
pub use workflow_item::WorkflowItem;
pub use workflows_panel::WorkflowsPanel;
