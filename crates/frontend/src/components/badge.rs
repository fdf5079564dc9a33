//! Badge components.

use core_types::{BadgeVariant, classify_status};
use yew::prelude::*;

/// Properties for Badge component.
#[derive(Properties, PartialEq)]
pub struct BadgeProps {
    #[prop_or_default]
    pub variant: BadgeVariant,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Html,
}

/// Short emphasized label.
#[function_component(Badge)]
pub fn badge(props: &BadgeProps) -> Html {
    html! {
        <span class={classes!("badge", props.variant.css_class(), props.class.clone())}>
            { props.children.clone() }
        </span>
    }
}

/// Properties for StatusBadge component.
#[derive(Properties, PartialEq)]
pub struct StatusBadgeProps {
    pub status: AttrValue,
}

/// Badge labelled with the raw status and styled by its classification.
#[function_component(StatusBadge)]
pub fn status_badge(props: &StatusBadgeProps) -> Html {
    let variant = classify_status(&props.status).badge;

    html! {
        <Badge {variant}>{ props.status.as_str() }</Badge>
    }
}
