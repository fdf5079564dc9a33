//! Operations tab content.

use core_types::{BadgeVariant, OperationsPanel, PanelKind};
use yew::prelude::*;

use super::Badge;

/// Properties for OperationsPanels component.
#[derive(Properties, PartialEq)]
pub struct OperationsPanelsProps {
    pub panels: Vec<OperationsPanel>,
}

#[function_component(OperationsPanels)]
pub fn operations_panels(props: &OperationsPanelsProps) -> Html {
    html! {
        <div class="panel-grid">
            { for props.panels.iter().map(render_panel) }
        </div>
    }
}

fn render_panel(panel: &OperationsPanel) -> Html {
    let icon = match panel.kind {
        PanelKind::Security => "icon-shield",
        PanelKind::Usage => "icon-users",
    };

    html! {
        <div class="card">
            <div class="card-header">
                <h2 class="card-title">
                    <span class={classes!("icon", icon)} aria-hidden="true"></span>
                    { &panel.title }
                </h2>
            </div>
            <div class="panel-items">
                { for panel.items.iter().map(|item| html! {
                    <div class="panel-item">
                        <span>{ &item.label }</span>
                        {
                            match panel.kind {
                                PanelKind::Security => html! {
                                    <Badge variant={BadgeVariant::Default}>{ &item.value }</Badge>
                                },
                                PanelKind::Usage => html! {
                                    <span class="panel-value">{ &item.value }</span>
                                },
                            }
                        }
                    </div>
                })}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::render;
    use mock_data::builtin_operations;

    #[tokio::test]
    async fn test_security_values_are_badges() {
        let html = render::<OperationsPanels>(|| OperationsPanelsProps {
            panels: builtin_operations(),
        })
        .await;

        assert_eq!(html.matches("badge-default").count(), 3);
        assert!(html.contains("SSL/TLS"));
        assert!(html.contains("Enabled"));
    }

    #[tokio::test]
    async fn test_usage_values_are_plain() {
        let html = render::<OperationsPanels>(|| OperationsPanelsProps {
            panels: builtin_operations(),
        })
        .await;

        assert_eq!(html.matches("panel-value").count(), 3);
        assert!(html.contains("1,234"));
        assert!(html.contains("2.3 TB"));
    }
}
