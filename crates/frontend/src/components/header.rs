//! Page header with title and system status.

use core_types::BadgeVariant;
use yew::prelude::*;

use super::Badge;

/// Dashboard header.
#[function_component(DashboardHeader)]
pub fn dashboard_header() -> Html {
    html! {
        <header class="page-header">
            <div class="page-header-inner">
                <div class="brand">
                    <span class="icon icon-zap text-blue" aria-hidden="true"></span>
                    <h1>{"ATE Management Dashboard"}</h1>
                </div>
                <div class="header-actions">
                    <Badge variant={BadgeVariant::Outline} class="text-green">
                        <span class="icon icon-activity" aria-hidden="true"></span>
                        {"All Systems Operational"}
                    </Badge>
                    <button type="button" class="btn btn-outline btn-sm">
                        <span class="icon icon-settings" aria-hidden="true"></span>
                        {"Settings"}
                    </button>
                </div>
            </div>
        </header>
    }
}
