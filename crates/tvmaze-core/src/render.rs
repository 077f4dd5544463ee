//! Rendering of the browser document
//!
//! HTML output reproduces the widget markup (Bootstrap classes, `data-*`
//! attributes used for click delegation). Text output is for terminals.

use std::fmt::Write;

use scraper::Html;

use crate::parser::episode_code;
use crate::types::{Episode, Show};
use crate::view::{EpisodesArea, ShowsView};

/// Escape text for use in HTML content and quoted attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Markup for one show card.
///
/// Name and image URL are escaped. The summary is TVMaze-provided HTML and
/// is inserted as markup.
pub fn render_show_card_html(show: &Show) -> String {
    let name = escape_html(&show.name);
    let image = escape_html(&show.image);
    let summary = show.summary.as_deref().unwrap_or_default();

    format!(
        r#"<div data-show-id="{id}" class="Show col-md-12 col-lg-6 mb-4">
  <div class="media">
    <img src="{image}" alt="{name}" class="w-25 me-3">
    <div class="media-body">
      <h5 class="text-primary">{name}</h5>
      <div><small>{summary}</small></div>
      <button class="btn btn-outline-light btn-sm Show-getEpisodes">Episodes</button>
    </div>
  </div>
</div>"#,
        id = show.id,
    )
}

/// Markup for one episode list item.
pub fn render_episode_html(episode: &Episode) -> String {
    let number = episode
        .number
        .map(|n| n.to_string())
        .unwrap_or_else(|| "special".to_string());

    format!(
        r#"<li data-episode-id="{}">{} (season {}, episode {})</li>"#,
        episode.id,
        escape_html(&episode.name),
        episode.season,
        number
    )
}

/// Markup for the whole document: `#showsList` and `#episodesArea`.
pub fn render_html(view: &ShowsView) -> String {
    let mut html = String::from("<div id=\"showsList\" class=\"row\">\n");
    for show in &view.shows {
        html.push_str(&render_show_card_html(show));
        html.push('\n');
    }
    html.push_str("</div>\n");
    html.push_str(&render_episodes_area_html(&view.episodes_area));
    html
}

/// Markup for `#episodesArea`, hidden with inline style when not visible.
pub fn render_episodes_area_html(area: &EpisodesArea) -> String {
    let mut html = if area.visible {
        String::from("<ul id=\"episodesArea\">\n")
    } else {
        String::from("<ul id=\"episodesArea\" style=\"display: none\">\n")
    };
    for episode in &area.episodes {
        html.push_str("  ");
        html.push_str(&render_episode_html(episode));
        html.push('\n');
    }
    html.push_str("</ul>\n");
    html
}

/// Plain text of an HTML summary, whitespace collapsed.
///
/// # Examples
/// ```
/// use tvmaze_core::render::summary_text;
///
/// assert_eq!(summary_text("<p>A <b>bold</b>\n move.</p>"), "A bold move.");
/// ```
pub fn summary_text(summary: &str) -> String {
    let fragment = Html::parse_fragment(summary);
    let text = fragment.root_element().text().collect::<String>();
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Terminal rendering: numbered cards, then episodes when the area is shown.
pub fn render_text(view: &ShowsView) -> String {
    let mut out = String::new();

    if view.shows.is_empty() {
        out.push_str("No shows to display.\n");
    }
    for (i, show) in view.shows.iter().enumerate() {
        let _ = writeln!(out, "{:>3}. {} [id {}]", i + 1, show.name, show.id);
        if let Some(summary) = show.summary.as_deref() {
            let text = summary_text(summary);
            if !text.is_empty() {
                let _ = writeln!(out, "     {}", text);
            }
        }
        let _ = writeln!(out, "     {}", show.image);
    }

    if view.episodes_area.visible {
        out.push('\n');
        out.push_str(&render_episodes_text(&view.episodes_area.episodes));
    }

    out
}

/// Terminal rendering of an episode list, one `S01E01 Name` line each.
pub fn render_episodes_text(episodes: &[Episode]) -> String {
    let mut out = format!("Episodes ({}):\n", episodes.len());
    for episode in episodes {
        let _ = writeln!(out, "  {} {}", episode_code(episode), episode.name);
    }
    out
}
