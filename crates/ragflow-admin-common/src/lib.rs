//! RAGFlow Admin Common - Console Domain Model
//!
//! Records, state containers and configuration shared by the RAGFlow admin
//! console. Everything here is plain in-memory data so the view layer can
//! wrap it in signals and the behaviour can be tested off the browser.
//!
//! Key Features:
//! - Closed status enumerations for datasets, files, chatbots and services
//! - Dataset catalog with search, create, update, delete and re-index
//! - Chunk synthesis for the file chunk viewer
//! - Simulated retrieval probe with cancellation
//! - Chatbot roster, configuration drafts and chat-history browsing
//! - Route table and sidebar grouping for the navigation shell
//!
//! @version 0.1.0
//! @author RAGFlow Admin Development Team

pub mod chatbots;
pub mod chunks;
pub mod config;
pub mod datasets;
pub mod error;
pub mod history;
pub mod mock;
pub mod retrieval;
pub mod routes;
pub mod types;
pub mod utils;

pub use error::{ConsoleError, Result};
pub use types::*;
