//! Search widget: turns user events into API calls and view updates

use crate::api::TvmazeApi;
use crate::error::Result;
use crate::view::ShowsView;

/// User interaction delivered by the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The search form was submitted with this term
    SearchSubmitted { term: String },
    /// The "Episodes" button on the card for this show was clicked
    EpisodesRequested { show_id: u32 },
}

/// Owns the document and updates it in response to events
///
/// A failed request leaves the document exactly as it was before the event.
pub struct Widget {
    api: TvmazeApi,
    view: ShowsView,
}

impl Widget {
    pub fn new(api: TvmazeApi) -> Self {
        Self {
            api,
            view: ShowsView::new(),
        }
    }

    pub fn view(&self) -> &ShowsView {
        &self.view
    }

    /// Apply one event to the document.
    ///
    /// # Errors
    /// Propagates API errors from the triggered request.
    pub async fn handle(&mut self, event: Event) -> Result<()> {
        match event {
            Event::SearchSubmitted { term } => self.search_and_display(&term).await,
            Event::EpisodesRequested { show_id } => self.episodes_and_display(show_id).await,
        }
    }

    /// Fetch shows for the term, hide the episodes area and list the shows.
    async fn search_and_display(&mut self, term: &str) -> Result<()> {
        let shows = self.api.get_shows_by_term(term).await?;

        self.view.hide_episodes_area();
        self.view.populate_shows(shows);
        Ok(())
    }

    /// Fetch a listed show's episodes, reveal the episodes area and list them.
    async fn episodes_and_display(&mut self, show_id: u32) -> Result<()> {
        if self.view.show_for_card(show_id).is_none() {
            tracing::warn!(show_id, "episodes requested for a show that is not listed");
            return Ok(());
        }

        let episodes = self.api.get_episodes_of_show(show_id).await?;

        self.view.show_episodes_area();
        self.view.populate_episodes(episodes);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TvmazeError;

    #[tokio::test]
    async fn test_empty_search_leaves_view_untouched() {
        let mut widget = Widget::new(TvmazeApi::new().unwrap());
        let result = widget
            .handle(Event::SearchSubmitted {
                term: "   ".to_string(),
            })
            .await;

        assert!(matches!(result, Err(TvmazeError::EmptyQuery)));
        assert_eq!(widget.view(), &ShowsView::new());
    }

    #[tokio::test]
    async fn test_episodes_for_unlisted_show_is_ignored() {
        let mut widget = Widget::new(TvmazeApi::new().unwrap());
        widget
            .handle(Event::EpisodesRequested { show_id: 139 })
            .await
            .unwrap();

        assert!(!widget.view().episodes_area.visible);
        assert!(widget.view().episodes_area.episodes.is_empty());
    }
}
