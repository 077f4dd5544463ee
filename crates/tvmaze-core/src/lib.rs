//! TVMaze Browser Core Library
//!
//! Searches the TVMaze catalog by keyword and keeps a small document of the
//! results that can be rendered as widget markup or terminal text.
//!
//! # Features
//! - Search shows by term (`/search/shows`)
//! - Fetch the episode list of a show (`/shows/{id}/episodes`)
//! - Project responses to compact display records, with a default poster
//! - Event-driven widget over an in-memory view
//! - Rate-limited HTTP client

pub mod api;
pub mod client;
pub mod error;
pub mod parser;
pub mod render;
pub mod types;
pub mod view;
pub mod widget;

// Re-export main types for convenience
pub use api::TvmazeApi;
pub use client::{ClientConfig, RateLimiter, TvmazeClient};
pub use error::{Result, TvmazeError};
pub use types::{Episode, Show, MISSING_IMAGE_URL};
pub use view::{EpisodesArea, ShowsView};
pub use widget::{Event, Widget};
