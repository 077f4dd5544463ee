//! Search results parser for TVMaze
//!
//! Projects `GET /search/shows` responses down to `Show` records.

use crate::error::Result;
use crate::types::{ApiSearchHit, ApiShow, Show, MISSING_IMAGE_URL};

/// Parse the body of a `/search/shows` response.
///
/// Hits keep the order TVMaze returned them in (best score first); the score
/// is not decoded.
///
/// # Returns
/// * `Ok(Vec<Show>)` with one show per hit
/// * `Err(TvmazeError::DecodeError)` if the body is not a list of hits
pub fn parse_search_results(body: &str) -> Result<Vec<Show>> {
    let hits: Vec<ApiSearchHit> = serde_json::from_str(body)?;
    Ok(hits.iter().map(|hit| project_show(&hit.show)).collect())
}

/// Reduce an API show to the four displayed fields.
///
/// The poster is the medium-size image; when TVMaze has no image, or the
/// medium URL is missing or blank, `MISSING_IMAGE_URL` is used instead.
///
/// # Examples
/// ```
/// use tvmaze_core::parser::project_show;
/// use tvmaze_core::types::{ApiShow, MISSING_IMAGE_URL};
///
/// let api: ApiShow = serde_json::from_str(r#"{"id": 1, "name": "Girls", "image": null}"#).unwrap();
/// assert_eq!(project_show(&api).image, MISSING_IMAGE_URL);
/// ```
pub fn project_show(show: &ApiShow) -> Show {
    let image = show
        .image
        .as_ref()
        .and_then(|image| image.medium.as_deref())
        .filter(|url| !url.trim().is_empty())
        .unwrap_or(MISSING_IMAGE_URL)
        .to_string();

    Show {
        id: show.id,
        name: show.name.clone(),
        summary: show.summary.clone(),
        image,
    }
}
