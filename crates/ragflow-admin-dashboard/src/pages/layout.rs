//! Console layout and sidebar navigation

use leptos::*;
use leptos_router::*;
use ragflow_admin_common::routes::{is_active, AppRoute, NavGroup};
use crate::state::use_app_state;

/// Layout wrapping every routed page: sidebar, header and content outlet
#[component]
pub fn AdminLayout() -> impl IntoView {
    let location = use_location();

    let page_title = move || {
        AppRoute::resolve(&location.pathname.get())
            .map(|r| r.title())
            .unwrap_or("RAGFlow")
    };

    view! {
        <div class="dashboard-layout">
            <Sidebar />

            <main class="main-content">
                <header class="content-header">
                    <h1>{page_title}</h1>
                </header>

                <div class="page-content">
                    <Outlet />
                </div>
            </main>
        </div>
    }
}

/// Sidebar navigation component
#[component]
pub fn Sidebar() -> impl IntoView {
    let app_state = use_app_state();
    let branding = app_state.config().branding;

    view! {
        <aside class="sidebar">
            <div class="sidebar-header">
                <div class="sidebar-logo">"R"</div>
                <div class="sidebar-brand">
                    <span class="sidebar-title">{branding.title}</span>
                    <span class="sidebar-subtitle">{branding.subtitle}</span>
                </div>
            </div>

            <nav class="sidebar-nav">
                <NavSection group=NavGroup::Main open=None />
                <NavSection group=NavGroup::Management open=Some(app_state.management_open) />
                <NavSection group=NavGroup::DevTools open=Some(app_state.dev_tools_open) />
            </nav>
        </aside>
    }
}

/// One labelled group of links. Groups with an `open` signal collapse.
#[component]
fn NavSection(group: NavGroup, open: Option<RwSignal<bool>>) -> impl IntoView {
    let expanded = move || open.map(|o| o.get()).unwrap_or(true);

    let header = match open {
        Some(open) if group.collapsible() => view! {
            <button class="nav-group-toggle" on:click=move |_| open.update(|o| *o = !*o)>
                <span class="nav-group-title">{group.title()}</span>
                <span class="nav-group-chevron">{move || if open.get() { "▾" } else { "▸" }}</span>
            </button>
        }
        .into_view(),
        _ => view! { <div class="nav-group-title">{group.title()}</div> }.into_view(),
    };

    view! {
        <div class="nav-group">
            {header}
            <Show when=expanded>
                {group.routes().iter().map(|route| view! { <NavItem route=*route /> }).collect_view()}
            </Show>
        </div>
    }
}

/// Individual navigation item
#[component]
fn NavItem(route: AppRoute) -> impl IntoView {
    let location = use_location();
    let active = move || is_active(&location.pathname.get(), route.path());

    view! {
        <a
            href=route.path()
            class=move || if active() { "nav-item active" } else { "nav-item" }
        >
            <span class="nav-icon">{nav_icon(route)}</span>
            <span>{route.title()}</span>
        </a>
    }
}

fn nav_icon(route: AppRoute) -> &'static str {
    match route {
        AppRoute::Dashboard => "📊",
        AppRoute::Datasets => "🗄️",
        AppRoute::Files => "📁",
        AppRoute::Chatbots => "🤖",
        AppRoute::Agents => "🧩",
        AppRoute::Models => "🧠",
        AppRoute::Team => "👥",
        AppRoute::ChatLogs => "💬",
        AppRoute::SearchTester => "🔍",
        AppRoute::Monitoring => "📈",
        AppRoute::Tracing => "🧭",
    }
}
