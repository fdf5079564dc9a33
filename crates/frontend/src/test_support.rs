//! Server-side rendering helper for component tests.

use yew::ServerRenderer;
use yew::html::BaseComponent;

/// Render a component to an HTML string without hydration markers.
pub(crate) async fn render<C>(props: impl FnOnce() -> C::Properties + Send + 'static) -> String
where
    C: BaseComponent,
{
    ServerRenderer::<C>::with_props(props)
        .hydratable(false)
        .render()
        .await
}
