//! State logic behind the Sahayak civic-issue reporting app.
//!
//! Everything here is framework-free: pages, forms, votes, mock submissions
//! and the chatbot are plain structs mutated by the UI crate's event
//! handlers. All data is sample data, rebuilt on every page mount.

pub mod campaigns;
pub mod chatbot;
pub mod config;
pub mod error;
pub mod filters;
pub mod forms;
pub mod map;
pub mod model;
pub mod page;
pub mod profile;
pub mod sample;
pub mod session;
pub mod stats;
pub mod submission;
pub mod voice;
pub mod votes;

pub use config::AppConfig;
pub use error::{Error, Result};
pub use page::Page;
pub use session::Session;
