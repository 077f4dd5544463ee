//! Display records and the TVMaze wire shapes they are projected from
//!
//! `Show` and `Episode` are the only shapes the view layer sees. The `Api*`
//! types mirror just the parts of TVMaze responses we read; everything else
//! in the payload is ignored by serde.

use serde::{Deserialize, Serialize};

/// Image shown for shows that TVMaze has no poster for
pub const MISSING_IMAGE_URL: &str = "https://tinyurl.com/tv-missing";

/// A show as displayed in the shows list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Show {
    /// TVMaze show ID
    pub id: u32,
    /// Display name
    pub name: String,
    /// HTML summary exactly as TVMaze returned it
    pub summary: Option<String>,
    /// Poster URL, never empty
    pub image: String,
}

/// An episode as displayed in the episodes area
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Episode {
    /// TVMaze episode ID
    pub id: u32,
    /// Episode title
    pub name: String,
    /// Season number
    pub season: u32,
    /// Number within the season; TVMaze leaves it null for specials
    pub number: Option<u32>,
}

/// One entry of `GET /search/shows`
#[derive(Debug, Clone, Deserialize)]
pub struct ApiSearchHit {
    pub show: ApiShow,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiShow {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub image: Option<ApiImage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiImage {
    #[serde(default)]
    pub medium: Option<String>,
}

/// One entry of `GET /shows/{id}/episodes`
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEpisode {
    pub id: u32,
    pub name: String,
    pub season: u32,
    #[serde(default)]
    pub number: Option<u32>,
}
