//! In-memory document the browser renders from
//!
//! Two regions: the shows list, filled by a search, and the episodes area,
//! filled when a show's "Episodes" button is clicked. Renderers in
//! [`crate::render`] turn it into HTML or terminal text.

use serde::Serialize;

use crate::types::{Episode, Show};

/// Region listing the episodes of the selected show
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EpisodesArea {
    /// Hidden after every search, shown once episodes load
    pub visible: bool,
    pub episodes: Vec<Episode>,
}

/// The browser document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ShowsView {
    /// One card per show, in search order
    pub shows: Vec<Show>,
    pub episodes_area: EpisodesArea,
}

impl ShowsView {
    /// Empty document with the episodes area hidden
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the shows list with one card per show.
    pub fn populate_shows(&mut self, shows: Vec<Show>) {
        self.shows.clear();
        self.shows.extend(shows);
    }

    /// Replace the episodes area contents with one item per episode.
    ///
    /// Visibility is left alone.
    pub fn populate_episodes(&mut self, episodes: Vec<Episode>) {
        self.episodes_area.episodes.clear();
        self.episodes_area.episodes.extend(episodes);
    }

    pub fn hide_episodes_area(&mut self) {
        self.episodes_area.visible = false;
    }

    pub fn show_episodes_area(&mut self) {
        self.episodes_area.visible = true;
    }

    /// Resolve a click on a card's "Episodes" button to the card's show.
    ///
    /// Returns `None` when no card with that show ID is rendered.
    pub fn show_for_card(&self, show_id: u32) -> Option<&Show> {
        self.shows.iter().find(|show| show.id == show_id)
    }

    /// Show on the 1-based card position, as numbered in text output
    pub fn show_at(&self, position: usize) -> Option<&Show> {
        position.checked_sub(1).and_then(|index| self.shows.get(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MISSING_IMAGE_URL;

    fn show(id: u32, name: &str) -> Show {
        Show {
            id,
            name: name.to_string(),
            summary: None,
            image: MISSING_IMAGE_URL.to_string(),
        }
    }

    fn episode(id: u32, number: u32) -> Episode {
        Episode {
            id,
            name: format!("Episode {number}"),
            season: 1,
            number: Some(number),
        }
    }

    #[test]
    fn test_new_view_is_empty_and_hidden() {
        let view = ShowsView::new();
        assert!(view.shows.is_empty());
        assert!(view.episodes_area.episodes.is_empty());
        assert!(!view.episodes_area.visible);
    }

    #[test]
    fn test_populate_shows_replaces_previous_cards() {
        let mut view = ShowsView::new();
        view.populate_shows(vec![show(1, "Girls"), show(2, "Good Girls")]);
        view.populate_shows(vec![show(3, "Lost")]);

        assert_eq!(view.shows, vec![show(3, "Lost")]);
    }

    #[test]
    fn test_populate_episodes_replaces_and_keeps_visibility() {
        let mut view = ShowsView::new();
        view.show_episodes_area();
        view.populate_episodes(vec![episode(10, 1), episode(11, 2)]);
        view.populate_episodes(vec![episode(12, 3)]);

        assert!(view.episodes_area.visible);
        assert_eq!(view.episodes_area.episodes, vec![episode(12, 3)]);
    }

    #[test]
    fn test_hide_and_show_episodes_area() {
        let mut view = ShowsView::new();
        view.show_episodes_area();
        assert!(view.episodes_area.visible);
        view.hide_episodes_area();
        assert!(!view.episodes_area.visible);
    }

    #[test]
    fn test_show_for_card() {
        let mut view = ShowsView::new();
        view.populate_shows(vec![show(139, "Girls"), show(23542, "Good Girls")]);

        assert_eq!(view.show_for_card(23542).map(|s| s.name.as_str()), Some("Good Girls"));
        assert!(view.show_for_card(1).is_none());
    }

    #[test]
    fn test_show_at_is_one_based() {
        let mut view = ShowsView::new();
        view.populate_shows(vec![show(139, "Girls"), show(23542, "Good Girls")]);

        assert_eq!(view.show_at(1).map(|s| s.id), Some(139));
        assert_eq!(view.show_at(2).map(|s| s.id), Some(23542));
        assert!(view.show_at(0).is_none());
        assert!(view.show_at(3).is_none());
    }
}
