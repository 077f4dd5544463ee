//! JSON parsers for TVMaze responses
//!
//! - `search`: project `/search/shows` hits to shows
//! - `episodes`: project `/shows/{id}/episodes` entries to episodes

pub mod episodes;
pub mod search;

pub use episodes::{episode_code, parse_episodes, project_episode};
pub use search::{parse_search_results, project_show};
