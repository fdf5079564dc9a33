//! Analytics tab content.

use core_types::Highlight;
use yew::prelude::*;

/// Properties for AnalyticsPanel component.
#[derive(Properties, PartialEq)]
pub struct AnalyticsPanelProps {
    pub highlights: Vec<Highlight>,
}

#[function_component(AnalyticsPanel)]
pub fn analytics_panel(props: &AnalyticsPanelProps) -> Html {
    html! {
        <div class="panel-grid">
            { for props.highlights.iter().map(|highlight| html! {
                <div class="card">
                    <div class="card-header">
                        <h2 class="card-title">{ &highlight.title }</h2>
                        <p class="card-description">{ &highlight.description }</p>
                    </div>
                    <div class={classes!("highlight-value", highlight.tone.text_class())}>
                        { &highlight.value }
                    </div>
                    <p class="highlight-trend">{ &highlight.trend }</p>
                </div>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::render;
    use mock_data::builtin_highlights;

    #[tokio::test]
    async fn test_renders_highlights() {
        let html = render::<AnalyticsPanel>(|| AnalyticsPanelProps {
            highlights: builtin_highlights(),
        })
        .await;

        assert!(html.contains("Transformation Success Rate"));
        assert!(html.contains("94.2%"));
        assert!(html.contains("text-green"));
        assert!(html.contains("2.3h"));
        assert!(html.contains("-15% improvement this month"));
    }
}
