//! Page components

pub mod chatbots;
pub mod datasets;
pub mod layout;
pub mod overview;
pub mod placeholder;
pub mod shared;

pub use chatbots::ChatbotsPage;
pub use datasets::DatasetsPage;
pub use layout::AdminLayout;
pub use overview::OverviewPage;
pub use placeholder::{NotFound, Placeholder};
