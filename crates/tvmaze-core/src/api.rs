//! High-level TVMaze API
//!
//! Combines the HTTP client with the parsers: one request per call, each
//! response projected to display records.

use crate::client::TvmazeClient;
use crate::error::{Result, TvmazeError};
use crate::parser::{parse_episodes, parse_search_results};
use crate::types::{Episode, Show};

/// The two TVMaze lookups the browser needs
///
/// # Example
/// ```no_run
/// use tvmaze_core::TvmazeApi;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let api = TvmazeApi::new()?;
///
///     let shows = api.get_shows_by_term("girls").await?;
///     println!("Found {} shows", shows.len());
///
///     Ok(())
/// }
/// ```
pub struct TvmazeApi {
    client: TvmazeClient,
}

impl TvmazeApi {
    /// Create an API handle talking to the public TVMaze endpoint.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new() -> Result<Self> {
        let client = TvmazeClient::new()?;
        Ok(Self { client })
    }

    /// Create an API handle over a pre-configured client.
    pub fn with_client(client: TvmazeClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &TvmazeClient {
        &self.client
    }

    /// Search for shows matching a term.
    ///
    /// # Returns
    /// * `Ok(Vec<Show>)` with every hit, best match first
    /// * `Err(TvmazeError::EmptyQuery)` if the term is empty or whitespace-only
    ///
    /// # Example
    /// ```no_run
    /// use tvmaze_core::TvmazeApi;
    ///
    /// # async fn example() -> Result<(), tvmaze_core::TvmazeError> {
    /// let api = TvmazeApi::new()?;
    /// for show in api.get_shows_by_term("bletchley").await? {
    ///     println!("{} ({})", show.name, show.id);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_shows_by_term(&self, term: &str) -> Result<Vec<Show>> {
        let trimmed = term.trim();
        if trimmed.is_empty() {
            return Err(TvmazeError::EmptyQuery);
        }

        let path = format!("/search/shows?q={}", urlencoding::encode(trimmed));
        let body = self.client.fetch(&path).await?;
        let shows = parse_search_results(&body)?;

        tracing::info!(term = trimmed, count = shows.len(), "show search complete");
        Ok(shows)
    }

    /// Get every episode of a show.
    ///
    /// # Returns
    /// * `Ok(Vec<Episode>)` in airing order
    /// * `Err(TvmazeError::InvalidId)` if `show_id` is 0
    /// * `Err(TvmazeError::NotFound)` if TVMaze has no such show
    pub async fn get_episodes_of_show(&self, show_id: u32) -> Result<Vec<Episode>> {
        if show_id == 0 {
            return Err(TvmazeError::InvalidId(show_id));
        }

        let path = format!("/shows/{}/episodes", show_id);
        let body = self.client.fetch(&path).await?;
        let episodes = parse_episodes(&body)?;

        tracing::info!(show_id, count = episodes.len(), "episode list loaded");
        Ok(episodes)
    }
}
