//! Services tab content.

use core_types::ServiceRecord;
use yew::prelude::*;

use super::ServiceItem;

/// Properties for ServicesPanel component.
#[derive(Properties, PartialEq)]
pub struct ServicesPanelProps {
    pub services: Vec<ServiceRecord>,
}

/// Service registry card.
#[function_component(ServicesPanel)]
pub fn services_panel(props: &ServicesPanelProps) -> Html {
    html! {
        <div class="card">
            <div class="card-header">
                <h2 class="card-title">
                    <span class="icon icon-server" aria-hidden="true"></span>
                    {"Service Registry"}
                </h2>
                <p class="card-description">{"Monitor and manage all ATE platform services"}</p>
            </div>
            <div class="item-list">
                { for props.services.iter().map(|service| html! {
                    <ServiceItem key={service.id.clone()} service={service.clone()} />
                })}
            </div>
        </div>
    }
}
