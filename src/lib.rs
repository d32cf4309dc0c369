//! Minimal blocking client for the arXiv atom API.
//!
//! Builds query URLs, issues a single GET per search and parses the atom
//! feed into [`ArxivResult`] records.

pub mod client;
pub mod config;
pub mod error;
pub mod format;
pub mod model;
pub mod parser;
pub mod query;

pub use client::ArxivClient;
pub use config::ClientConfig;
pub use error::{ArxivError, Result};
pub use model::ArxivResult;
pub use parser::parse_feed;
pub use query::{SearchQuery, SortBy, SortOrder};
