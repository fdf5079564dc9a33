//! Service registry row component.

use core_types::ServiceRecord;
use yew::prelude::*;

use super::{StatusBadge, StatusMark};

/// Properties for ServiceItem component.
#[derive(Properties, PartialEq)]
pub struct ServiceItemProps {
    pub service: ServiceRecord,
}

/// Service registry row.
#[function_component(ServiceItem)]
pub fn service_item(props: &ServiceItemProps) -> Html {
    let service = &props.service;
    let status = AttrValue::from(service.status.clone());

    html! {
        <div class="service-item">
            <div class="service-info">
                <StatusMark status={status.clone()} />
                <div>
                    <h3 class="service-name">{ &service.name }</h3>
                    <p class="service-meta">
                        { format!("Port {} \u{2022} {}", service.port, service.kind) }
                    </p>
                </div>
            </div>
            <div class="service-status">
                <div class="service-uptime">
                    <p class="uptime-value">{ &service.uptime }</p>
                    <p class="uptime-label">{"Uptime"}</p>
                </div>
                <StatusBadge {status} />
            </div>
        </div>
    }
}
