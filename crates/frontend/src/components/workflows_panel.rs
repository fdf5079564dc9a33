//! Workflows tab content.

use core_types::WorkflowRecord;
use yew::prelude::*;

use super::WorkflowItem;

/// Properties for WorkflowsPanel component.
#[derive(Properties, PartialEq)]
pub struct WorkflowsPanelProps {
    pub workflows: Vec<WorkflowRecord>,
}

/// Active workflows card.
#[function_component(WorkflowsPanel)]
pub fn workflows_panel(props: &WorkflowsPanelProps) -> Html {
    html! {
        <div class="card">
            <div class="card-header">
                <h2 class="card-title">
                    <span class="icon icon-workflow" aria-hidden="true"></span>
                    {"Active Workflows"}
                </h2>
                <p class="card-description">{"Track transformation workflows and their progress"}</p>
            </div>
            <div class="item-list">
                { for props.workflows.iter().map(|workflow| html! {
                    <WorkflowItem key={workflow.id.clone()} workflow={workflow.clone()} />
                })}
            </div>
        </div>
    }
}
