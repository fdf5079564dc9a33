//! Statistics card component.

use yew::prelude::*;

use crate::metrics::MetricTile;

/// Properties for StatCard component.
#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub tile: MetricTile,
}

/// Statistics card component.
#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    let tile = &props.tile;

    html! {
        <div class="card stat-card">
            <div class="stat-header">
                <span class="stat-label">{ tile.label }</span>
                <span class={classes!("icon", tile.icon)} aria-hidden="true"></span>
            </div>
            <div class="stat-value">{ &tile.value }</div>
            <p class="stat-caption">{ tile.caption }</p>
        </div>
    }
}
