//! RAGFlow Admin Dashboard - Leptos Web Interface
//!
//! Browser console for curating RAG datasets and configuring chatbots.
//! All records are held in memory and reset on reload.

pub mod pages;
pub mod state;

use leptos::*;
use leptos_router::*;

use pages::{AdminLayout, ChatbotsPage, DatasetsPage, NotFound, OverviewPage, Placeholder};
use ragflow_admin_common::config::ConsoleConfig;
use ragflow_admin_common::routes::AppRoute;
use state::{load_config, provide_app_state, CONFIG_ATTRIBUTE};

/// Main application component
#[component]
pub fn App(#[prop(optional)] config: Option<ConsoleConfig>) -> impl IntoView {
    provide_app_state(config.unwrap_or_default());

    view! {
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=AdminLayout>
                        <Route path=AppRoute::Dashboard.segment() view=OverviewPage />
                        <Route path=AppRoute::Datasets.segment() view=DatasetsPage />
                        <Route path=AppRoute::Chatbots.segment() view=ChatbotsPage />
                        <Route path=AppRoute::Files.segment() view=|| view! { <Placeholder route=AppRoute::Files /> } />
                        <Route path=AppRoute::Agents.segment() view=|| view! { <Placeholder route=AppRoute::Agents /> } />
                        <Route path=AppRoute::Models.segment() view=|| view! { <Placeholder route=AppRoute::Models /> } />
                        <Route path=AppRoute::Team.segment() view=|| view! { <Placeholder route=AppRoute::Team /> } />
                        <Route path=AppRoute::ChatLogs.segment() view=|| view! { <Placeholder route=AppRoute::ChatLogs /> } />
                        <Route path=AppRoute::SearchTester.segment() view=|| view! { <Placeholder route=AppRoute::SearchTester /> } />
                        <Route path=AppRoute::Monitoring.segment() view=|| view! { <Placeholder route=AppRoute::Monitoring /> } />
                        <Route path=AppRoute::Tracing.segment() view=|| view! { <Placeholder route=AppRoute::Tracing /> } />
                    </Route>
                    <Route path="/*any" view=NotFound />
                </Routes>
            </main>
        </Router>
    }
}

/// Mount the application to the DOM
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    let loaded = load_config();
    let config = loaded.as_ref().ok().cloned().unwrap_or_default();

    if let Err(e) = console_log::init_with_level(config.level()) {
        leptos::logging::warn!("logger init failed: {}", e);
    }
    if let Err(e) = loaded {
        log::warn!("ignoring {}: {}", CONFIG_ATTRIBUTE, e);
    }
    log::info!("starting {} {}", config.branding.title, config.branding.subtitle);

    mount_to_body(move || view! { <App config=config.clone() /> });
}
