//! Episodes parser for TVMaze
//!
//! Projects `GET /shows/{id}/episodes` responses down to `Episode` records.

use crate::error::Result;
use crate::types::{ApiEpisode, Episode};

/// Parse the body of a `/shows/{id}/episodes` response.
///
/// # Returns
/// * `Ok(Vec<Episode>)` in airing order, as TVMaze lists them
/// * `Err(TvmazeError::DecodeError)` if the body is not a list of episodes
pub fn parse_episodes(body: &str) -> Result<Vec<Episode>> {
    let episodes: Vec<ApiEpisode> = serde_json::from_str(body)?;
    Ok(episodes.iter().map(project_episode).collect())
}

pub fn project_episode(episode: &ApiEpisode) -> Episode {
    Episode {
        id: episode.id,
        name: episode.name.clone(),
        season: episode.season,
        number: episode.number,
    }
}

/// Format season and number as an episode code (e.g., `S01E05`).
///
/// Specials have no number and get `S01 special`.
pub fn episode_code(episode: &Episode) -> String {
    match episode.number {
        Some(number) => format!("S{:02}E{:02}", episode.season, number),
        None => format!("S{:02} special", episode.season),
    }
}
