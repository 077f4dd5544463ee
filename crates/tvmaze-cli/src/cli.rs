use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};
use tvmaze_core::render::{self, render_episodes_area_html, render_episodes_text};
use tvmaze_core::{EpisodesArea, Event, ShowsView, TvmazeApi, TvmazeClient, Widget};

use crate::config::{self, AppConfig, OutputFormat};

/// Top-level CLI for the TVMaze browser.
#[derive(Debug, Parser)]
#[command(name = "tvmaze", version)]
#[command(about = "Search TVMaze shows and list their episodes", long_about = None)]
pub struct Cli {
    /// Config file (default: ~/.config/tvmaze/config.toml).
    #[arg(long, global = true, env = "TVMAZE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Override the API root from the config file.
    #[arg(long, global = true, env = "TVMAZE_BASE_URL")]
    pub base_url: Option<String>,

    /// Output format.
    #[arg(long, short = 'f', global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Search shows by keyword.
    Search {
        /// Search term; multiple words are joined with spaces.
        #[arg(required = true, num_args = 1..)]
        term: Vec<String>,
    },

    /// List the episodes of a show.
    Episodes {
        /// TVMaze show ID.
        show_id: u32,
    },

    /// Interactive browser: type a term to search (prefix `/` to search for
    /// a number), a list number to show that show's episodes, `q` to quit.
    Browse {
        /// Optional term to search immediately.
        term: Option<String>,
    },
}

/// A line typed into the interactive browser.
#[derive(Debug, PartialEq, Eq)]
pub enum BrowseInput {
    Search(String),
    Pick(usize),
    Quit,
    Nothing,
}

impl BrowseInput {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return BrowseInput::Nothing;
        }
        if line == "q" || line == "quit" {
            return BrowseInput::Quit;
        }
        if let Some(term) = line.strip_prefix('/') {
            return BrowseInput::Search(term.trim().to_string());
        }
        if let Ok(position) = line.parse::<usize>() {
            return BrowseInput::Pick(position);
        }
        BrowseInput::Search(line.to_string())
    }
}

/// Resolve config file, environment and flags into the effective settings.
fn effective_config(cli: &Cli) -> Result<AppConfig> {
    let mut cfg = config::load(cli.config.as_deref())?;
    if let Some(base_url) = &cli.base_url {
        cfg.client.base_url = base_url.clone();
    }
    if let Some(format) = cli.format {
        cfg.output = format;
    }
    tracing::debug!("effective config: {:?}", cfg);
    Ok(cfg)
}

pub async fn run(cli: Cli) -> Result<()> {
    let cfg = effective_config(&cli)?;
    let client = TvmazeClient::with_config(cfg.client.clone()).context("creating HTTP client")?;
    let api = TvmazeApi::with_client(client);

    match cli.command {
        Command::Search { term } => {
            let term = term.join(" ");
            let shows = api
                .get_shows_by_term(&term)
                .await
                .with_context(|| format!("searching for {:?}", term))?;

            let mut view = ShowsView::new();
            view.populate_shows(shows);
            match cfg.output {
                OutputFormat::Text => print!("{}", render::render_text(&view)),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&view.shows)?),
                OutputFormat::Html => print!("{}", render::render_html(&view)),
            }
        }
        Command::Episodes { show_id } => {
            let episodes = api
                .get_episodes_of_show(show_id)
                .await
                .with_context(|| format!("loading episodes of show {}", show_id))?;

            match cfg.output {
                OutputFormat::Text => print!("{}", render_episodes_text(&episodes)),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&episodes)?),
                OutputFormat::Html => {
                    let area = EpisodesArea {
                        visible: true,
                        episodes,
                    };
                    print!("{}", render_episodes_area_html(&area));
                }
            }
        }
        Command::Browse { term } => browse(Widget::new(api), term, cfg.output).await?,
    }

    Ok(())
}

fn print_view(view: &ShowsView, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print!("{}", render::render_text(view)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(view)?),
        OutputFormat::Html => print!("{}", render::render_html(view)),
    }
    Ok(())
}

/// Drive the widget from stdin lines until `q` or end of input.
///
/// Request failures are reported and the loop continues with the view
/// unchanged.
async fn browse(mut widget: Widget, term: Option<String>, format: OutputFormat) -> Result<()> {
    if let Some(term) = term {
        apply(&mut widget, Event::SearchSubmitted { term }, format).await?;
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    eprint!("> ");
    while let Some(line) = lines.next_line().await.context("reading stdin")? {
        let event = match BrowseInput::parse(&line) {
            BrowseInput::Quit => break,
            BrowseInput::Nothing => None,
            BrowseInput::Search(term) => Some(Event::SearchSubmitted { term }),
            BrowseInput::Pick(position) => match widget.view().show_at(position) {
                Some(show) => Some(Event::EpisodesRequested { show_id: show.id }),
                None => {
                    eprintln!("no show #{} in the list", position);
                    None
                }
            },
        };

        if let Some(event) = event {
            apply(&mut widget, event, format).await?;
        }
        eprint!("> ");
    }

    Ok(())
}

async fn apply(widget: &mut Widget, event: Event, format: OutputFormat) -> Result<()> {
    tracing::debug!(?event, "browse event");
    match widget.handle(event).await {
        Ok(()) => print_view(widget.view(), format),
        Err(err) => {
            eprintln!("error: {}", err);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_search_command() {
        let cli = Cli::try_parse_from(["tvmaze", "search", "the", "bletchley", "circle"]).unwrap();
        match cli.command {
            Command::Search { term } => assert_eq!(term.join(" "), "the bletchley circle"),
            other => panic!("unexpected command {:?}", other),
        }
        assert_eq!(cli.verbose, 0);
        assert!(cli.format.is_none());
    }

    #[test]
    fn parse_search_requires_term() {
        assert!(Cli::try_parse_from(["tvmaze", "search"]).is_err());
    }

    #[test]
    fn parse_episodes_command_with_global_flags() {
        let cli = Cli::try_parse_from([
            "tvmaze",
            "episodes",
            "1767",
            "--format",
            "json",
            "-vv",
            "--base-url",
            "http://localhost:8080",
        ])
        .unwrap();

        assert!(matches!(cli.command, Command::Episodes { show_id: 1767 }));
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.base_url.as_deref(), Some("http://localhost:8080"));
    }

    #[test]
    fn parse_episodes_rejects_non_numeric_id() {
        assert!(Cli::try_parse_from(["tvmaze", "episodes", "girls"]).is_err());
    }

    #[test]
    fn parse_browse_without_term() {
        let cli = Cli::try_parse_from(["tvmaze", "browse"]).unwrap();
        assert!(matches!(cli.command, Command::Browse { term: None }));
    }

    #[test]
    fn flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "output = \"html\"\n[client]\nbase_url = \"http://a.example\"\n").unwrap();

        let cli = Cli::try_parse_from([
            "tvmaze",
            "--config",
            path.to_str().unwrap(),
            "--base-url",
            "http://b.example",
            "search",
            "girls",
        ])
        .unwrap();
        let cfg = effective_config(&cli).unwrap();

        assert_eq!(cfg.client.base_url, "http://b.example");
        assert_eq!(cfg.output, OutputFormat::Html);
    }

    #[test]
    fn browse_input_parsing() {
        assert_eq!(BrowseInput::parse(""), BrowseInput::Nothing);
        assert_eq!(BrowseInput::parse("  q "), BrowseInput::Quit);
        assert_eq!(BrowseInput::parse("quit"), BrowseInput::Quit);
        assert_eq!(BrowseInput::parse("3"), BrowseInput::Pick(3));
        assert_eq!(BrowseInput::parse("/24"), BrowseInput::Search("24".to_string()));
        assert_eq!(
            BrowseInput::parse("bletchley circle"),
            BrowseInput::Search("bletchley circle".to_string())
        );
    }
}
