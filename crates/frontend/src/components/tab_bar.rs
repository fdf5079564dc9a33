//! Tab trigger bar.

use yew::prelude::*;

use crate::tabs::{DashboardTab, TabState};

/// Properties for TabBar component.
#[derive(Properties, PartialEq)]
pub struct TabBarProps {
    pub state: TabState,
    pub on_select: Callback<DashboardTab>,
}

/// Row of tab triggers; exactly one is active.
#[function_component(TabBar)]
pub fn tab_bar(props: &TabBarProps) -> Html {
    html! {
        <div class="tabs-list" role="tablist">
            { for DashboardTab::ALL.into_iter().map(|tab| {
                let active = props.state.is_active(tab);
                let onclick = props.on_select.reform(move |_: MouseEvent| tab);

                html! {
                    <button
                        type="button"
                        role="tab"
                        id={format!("tab-{}", tab.value())}
                        class={classes!("tabs-trigger", active.then_some("active"))}
                        aria-selected={active.to_string()}
                        {onclick}
                    >
                        { tab.label() }
                    </button>
                }
            })}
        </div>
    }
}
