//! RAGFlow Admin Routes - Route Table and Sidebar Navigation
//!
//! Every page the console knows about, the sidebar groups that link to
//! them, and the rule deciding which sidebar entry is highlighted.
//!
//! @version 0.1.0
//! @author RAGFlow Admin Development Team

// =============================================================================
// Routes
// =============================================================================

/// A page of the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Dashboard,
    Datasets,
    Files,
    Chatbots,
    Agents,
    Models,
    Team,
    ChatLogs,
    SearchTester,
    Monitoring,
    Tracing,
}

impl AppRoute {
    pub const ALL: [AppRoute; 11] = [
        AppRoute::Dashboard,
        AppRoute::Datasets,
        AppRoute::Files,
        AppRoute::Chatbots,
        AppRoute::Agents,
        AppRoute::Models,
        AppRoute::Team,
        AppRoute::ChatLogs,
        AppRoute::SearchTester,
        AppRoute::Monitoring,
        AppRoute::Tracing,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            AppRoute::Dashboard => "/",
            AppRoute::Datasets => "/datasets",
            AppRoute::Files => "/files",
            AppRoute::Chatbots => "/chatbots",
            AppRoute::Agents => "/agents",
            AppRoute::Models => "/models",
            AppRoute::Team => "/team",
            AppRoute::ChatLogs => "/chat-logs",
            AppRoute::SearchTester => "/search-tester",
            AppRoute::Monitoring => "/monitoring",
            AppRoute::Tracing => "/tracing",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            AppRoute::Dashboard => "Dashboard",
            AppRoute::Datasets => "Datasets",
            AppRoute::Files => "Files",
            AppRoute::Chatbots => "Chatbots",
            AppRoute::Agents => "Agents",
            AppRoute::Models => "Models",
            AppRoute::Team => "Team",
            AppRoute::ChatLogs => "Chat Logs",
            AppRoute::SearchTester => "Search Tester",
            AppRoute::Monitoring => "Monitoring",
            AppRoute::Tracing => "Tracing",
        }
    }

    pub fn placeholder_message(&self) -> String {
        format!("{} module is under development...", self.title())
    }

    /// Path segment used when nesting under the layout route.
    pub fn segment(&self) -> &'static str {
        self.path().trim_start_matches('/')
    }

    /// Exact match of `path` against the table. A trailing slash is ignored.
    pub fn resolve(path: &str) -> Option<AppRoute> {
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };
        Self::ALL.into_iter().find(|r| r.path() == normalized)
    }
}

// =============================================================================
// Sidebar
// =============================================================================

/// Whether the sidebar entry for `path` is highlighted at `current`.
pub fn is_active(current: &str, path: &str) -> bool {
    current == path || (path != "/" && current.starts_with(path))
}

/// Sidebar sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavGroup {
    Main,
    Management,
    DevTools,
}

impl NavGroup {
    pub const ALL: [NavGroup; 3] = [NavGroup::Main, NavGroup::Management, NavGroup::DevTools];

    pub fn title(&self) -> &'static str {
        match self {
            NavGroup::Main => "Main",
            NavGroup::Management => "Management",
            NavGroup::DevTools => "Dev Tools",
        }
    }

    /// The main section is always expanded.
    pub fn collapsible(&self) -> bool {
        !matches!(self, NavGroup::Main)
    }

    pub fn routes(&self) -> &'static [AppRoute] {
        match self {
            NavGroup::Main => &[
                AppRoute::Dashboard,
                AppRoute::Datasets,
                AppRoute::Files,
                AppRoute::Chatbots,
                AppRoute::Agents,
                AppRoute::Models,
            ],
            NavGroup::Management => &[AppRoute::Team, AppRoute::ChatLogs],
            NavGroup::DevTools => &[AppRoute::SearchTester, AppRoute::Monitoring, AppRoute::Tracing],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_every_path() {
        for route in AppRoute::ALL {
            assert_eq!(AppRoute::resolve(route.path()), Some(route));
        }
        assert_eq!(AppRoute::resolve("/datasets/"), Some(AppRoute::Datasets));
        assert_eq!(AppRoute::resolve(""), Some(AppRoute::Dashboard));
        assert_eq!(AppRoute::resolve("/nope"), None);
    }

    #[test]
    fn test_is_active_prefix_rule() {
        assert!(is_active("/", "/"));
        assert!(!is_active("/datasets", "/"));
        assert!(is_active("/datasets", "/datasets"));
        assert!(is_active("/datasets/ds-001", "/datasets"));
        assert!(!is_active("/files", "/datasets"));
    }

    #[test]
    fn test_groups_cover_all_routes() {
        let total: usize = NavGroup::ALL.iter().map(|g| g.routes().len()).sum();
        assert_eq!(total, AppRoute::ALL.len());
        assert!(!NavGroup::Main.collapsible());
    }

    #[test]
    fn test_placeholder_message() {
        assert_eq!(
            AppRoute::Agents.placeholder_message(),
            "Agents module is under development..."
        );
        assert_eq!(AppRoute::ChatLogs.segment(), "chat-logs");
    }
}
