use tvmaze_core::render::{render_episodes_text, summary_text};
use tvmaze_core::TvmazeApi;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api = TvmazeApi::new()?;
    let term = std::env::args().nth(1).unwrap_or_else(|| "bletchley circle".to_string());

    println!("Searching TVMaze for {:?}...\n", term);
    let shows = api.get_shows_by_term(&term).await?;

    println!("Found {} shows:", shows.len());
    for (i, show) in shows.iter().enumerate() {
        let summary = show.summary.as_deref().map(summary_text).unwrap_or_default();
        println!("  {}. {} (ID: {}) {}", i + 1, show.name, show.id, summary);
    }

    if let Some(show) = shows.first() {
        println!("\nEpisodes of {}:\n", show.name);
        let episodes = api.get_episodes_of_show(show.id).await?;
        print!("{}", render_episodes_text(&episodes));
    }

    Ok(())
}
