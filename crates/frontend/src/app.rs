//! Main application component with routing.

use std::rc::Rc;

use core_types::Dashboard;
use mock_data::load_builtin_dashboard;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::DashboardPage;

/// Application routes.
#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Dashboard,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Resolve a pathname to its route. Unknown paths resolve to `NotFound`.
pub fn resolve(pathname: &str) -> Route {
    Route::recognize(pathname).unwrap_or(Route::NotFound)
}

/// Route switch function.
fn switch(route: Route, dashboard: Rc<Dashboard>) -> Html {
    match route {
        Route::Dashboard => html! { <DashboardPage {dashboard} /> },
        Route::NotFound => html! { <RedirectHome /> },
    }
}

/// Replaces the current history entry with the dashboard route.
#[function_component(RedirectHome)]
fn redirect_home() -> Html {
    let navigator = use_navigator();

    use_effect_with((), move |_| {
        if let Some(navigator) = navigator {
            navigator.replace(&Route::Dashboard);
        }
    });

    Html::default()
}

/// Main application component.
#[function_component(App)]
pub fn app() -> Html {
    let dashboard = use_memo((), |_| load_builtin_dashboard());

    html! {
        <BrowserRouter>
            <div class="app-container">
                <Switch<Route> render={move |route| switch(route, dashboard.clone())} />
            </div>
        </BrowserRouter>
    }
}
