//! Placeholder and not-found pages

use leptos::*;
use leptos_router::*;
use ragflow_admin_common::routes::AppRoute;

/// Stand-in for a module that has no view yet
#[component]
pub fn Placeholder(route: AppRoute) -> impl IntoView {
    view! {
        <div class="card placeholder-page">
            <div class="card-body empty-state">
                <h2>{route.title()}</h2>
                <p>{route.placeholder_message()}</p>
            </div>
        </div>
    }
}

/// Rendered for any path outside the route table
#[component]
pub fn NotFound() -> impl IntoView {
    let location = use_location();
    let path = location.pathname.get_untracked();
    log::warn!("404: no route for {}", path);

    view! {
        <div class="not-found-page">
            <h1 class="not-found-code">"404"</h1>
            <h2>"Page Not Found"</h2>
            <p class="not-found-path">{path}</p>
            <a href="/" class="btn btn-primary">"Return to Home"</a>
        </div>
    }
}
