//! Workflow row component.

use core_types::WorkflowRecord;
use yew::prelude::*;

use super::{ProgressBar, StatusBadge, StatusMark};

/// Properties for WorkflowItem component.
#[derive(Properties, PartialEq)]
pub struct WorkflowItemProps {
    pub workflow: WorkflowRecord,
}

/// Workflow row. Running workflows also show their progress.
#[function_component(WorkflowItem)]
pub fn workflow_item(props: &WorkflowItemProps) -> Html {
    let workflow = &props.workflow;
    let status = AttrValue::from(workflow.status.clone());

    html! {
        <div class="workflow-item">
            <div class="workflow-row">
                <div class="workflow-info">
                    <StatusMark status={status.clone()} />
                    <h3 class="workflow-name">{ &workflow.name }</h3>
                </div>
                <div class="workflow-status">
                    <span class="workflow-duration">{ &workflow.duration }</span>
                    <StatusBadge {status} />
                </div>
            </div>
            if let Some(progress) = workflow.visible_progress() {
                <div class="workflow-progress">
                    <div class="workflow-progress-label">
                        <span>{"Progress"}</span>
                        <span>{ format!("{progress}%") }</span>
                    </div>
                    <ProgressBar value={progress} />
                </div>
            }
        </div>
    }
}
