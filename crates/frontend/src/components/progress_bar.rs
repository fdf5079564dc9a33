//! Progress bar component.

use yew::prelude::*;

/// Properties for ProgressBar component.
#[derive(Properties, PartialEq)]
pub struct ProgressBarProps {
    /// Percentage, clamped to 100
    pub value: u8,
}

/// Horizontal progress bar.
#[function_component(ProgressBar)]
pub fn progress_bar(props: &ProgressBarProps) -> Html {
    let value = props.value.min(100);

    html! {
        <div
            class="progress-bar"
            role="progressbar"
            aria-valuemin="0"
            aria-valuemax="100"
            aria-valuenow={value.to_string()}
        >
            <div class="progress-bar-fill" style={format!("width: {value}%")} />
        </div>
    }
}
