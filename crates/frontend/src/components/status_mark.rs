//! Status icon component.

use core_types::classify_status;
use yew::prelude::*;

/// Properties for StatusMark component.
#[derive(Properties, PartialEq)]
pub struct StatusMarkProps {
    pub status: AttrValue,
}

/// Colored icon for a status string.
#[function_component(StatusMark)]
pub fn status_mark(props: &StatusMarkProps) -> Html {
    let icon = classify_status(&props.status).icon;

    html! {
        <span
            class={classes!(
                "status-icon",
                format!("status-icon-{}", icon.as_str()),
                icon.tone().text_class(),
            )}
            aria-hidden="true"
        >
            { icon.glyph() }
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::render;

    #[tokio::test]
    async fn test_icon_kind_and_tone() {
        let cases = [
            ("completed", "status-icon-success", "text-green"),
            ("running", "status-icon-in-progress", "text-blue"),
            ("pending", "status-icon-warning", "text-yellow"),
            ("unhealthy", "status-icon-error", "text-red"),
            ("degraded", "status-icon-unknown", "text-gray"),
        ];

        for (status, kind, tone) in cases {
            let html = render::<StatusMark>(move || StatusMarkProps {
                status: AttrValue::from(status),
            })
            .await;

            assert!(html.contains(kind), "{status}: {html}");
            assert!(html.contains(tone), "{status}: {html}");
        }
    }
}
