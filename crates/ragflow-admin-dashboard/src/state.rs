//! Application state management for the RAGFlow admin console

use leptos::*;
use ragflow_admin_common::config::ConsoleConfig;
use web_sys::window;

/// Attribute on the document root carrying the console configuration.
pub const CONFIG_ATTRIBUTE: &str = "data-console-config";

/// Global application state
#[derive(Clone, Copy)]
pub struct AppState {
    pub config: StoredValue<ConsoleConfig>,
    pub management_open: RwSignal<bool>,
    pub dev_tools_open: RwSignal<bool>,
}

impl AppState {
    pub fn new(config: ConsoleConfig) -> Self {
        let management_open = create_rw_signal(config.navigation.management_open);
        let dev_tools_open = create_rw_signal(config.navigation.dev_tools_open);

        Self {
            config: store_value(config),
            management_open,
            dev_tools_open,
        }
    }

    pub fn config(&self) -> ConsoleConfig {
        self.config.get_value()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ConsoleConfig::default())
    }
}

/// Raw configuration JSON set by the host page, if any.
fn read_config_attribute() -> Option<String> {
    window()?
        .document()?
        .document_element()?
        .get_attribute(CONFIG_ATTRIBUTE)
}

/// Parse the configuration set on the document root. A missing attribute
/// yields the defaults.
pub fn load_config() -> ragflow_admin_common::Result<ConsoleConfig> {
    ConsoleConfig::from_embedded(read_config_attribute().as_deref())
}

/// Provide application state context
pub fn provide_app_state(config: ConsoleConfig) -> AppState {
    let state = AppState::new(config);
    provide_context(state);
    state
}

/// Use application state from context
pub fn use_app_state() -> AppState {
    expect_context::<AppState>()
}
