use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use leaderboard_engine::{
    load_rows_from_path, rank_to_display, LeaderboardConfig, LeaderboardEngine, LeaderboardEntry,
    LeaderboardRow, RankDisplay, ResultRow, ScoreExtractor, ViewMode,
};

#[derive(Parser)]
#[command(name = "leaderboard-cli")]
#[command(about = "Leaderboard ranking CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the leaderboard view
    Show {
        /// JSON array of result rows
        rows: PathBuf,

        /// Field to rank by
        #[arg(short, long)]
        rank_by: Option<String>,

        /// Username search query
        #[arg(short, long)]
        query: Option<String>,

        /// Current viewer's username
        #[arg(short, long)]
        user: Option<String>,

        /// Show numeric ranks for the podium
        #[arg(long)]
        no_medals: bool,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Print each row's rank in input order
    Ranks {
        /// JSON array of result rows
        rows: PathBuf,

        /// Field to rank by
        #[arg(short, long)]
        rank_by: Option<String>,
    },

    /// Print the display value of a rank
    Medal { rank: usize },
}

#[derive(Serialize)]
struct EntryDto<'a> {
    rank: usize,
    display: RankDisplay,
    username: &'a str,
    score: f64,
}

#[derive(Serialize)]
struct ViewDto<'a> {
    mode: ViewMode,
    sticky: Option<EntryDto<'a>>,
    entries: Vec<EntryDto<'a>>,
}

const RULE_WIDTH: usize = 43;

fn to_dto<'a>(
    entry: &LeaderboardEntry<'a, ResultRow>,
    extractor: &ScoreExtractor<'_, ResultRow>,
) -> EntryDto<'a> {
    EntryDto {
        rank: entry.rank,
        display: entry.display,
        username: entry.row.username(),
        score: extractor.extract(entry.row),
    }
}

fn build_dto(engine: &LeaderboardEngine<ResultRow>) -> anyhow::Result<ViewDto<'_>> {
    let view = engine.view()?;
    let extractor = engine.selector().extractor();

    Ok(ViewDto {
        mode: view.mode,
        sticky: view.sticky.as_ref().map(|e| to_dto(e, &extractor)),
        entries: view.entries.iter().map(|e| to_dto(e, &extractor)).collect(),
    })
}

fn format_entry(entry: &EntryDto<'_>, marker: &str) -> String {
    format!(
        "{:>4} {:<2} {:<24} {:>10}",
        entry.display, marker, entry.username, entry.score
    )
}

fn render_table(dto: &ViewDto<'_>, config: &LeaderboardConfig) -> String {
    let mut lines = Vec::with_capacity(dto.entries.len() + 3);

    match dto.mode {
        ViewMode::Search => lines.push(format!(
            "🔍 Search: '{}' ({} matches)",
            config.query.trim(),
            dto.entries.len()
        )),
        ViewMode::Standings => lines.push(format!("🏆 Standings by {}", config.rank_by)),
    }

    if let Some(sticky) = &dto.sticky {
        lines.push(format_entry(sticky, "*"));
        lines.push("-".repeat(RULE_WIDTH));
    }
    lines.extend(dto.entries.iter().map(|entry| format_entry(entry, "")));

    lines.join("\n")
}

fn render_ranks(engine: &LeaderboardEngine<ResultRow>) -> String {
    engine
        .rows()
        .iter()
        .zip(engine.ranks().as_slice())
        .map(|(row, rank)| format!("{} {}", row.username(), rank))
        .collect::<Vec<_>>()
        .join("\n")
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing (stderr keeps stdout clean for --json)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "leaderboard_cli=info,leaderboard_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let mut config = LeaderboardConfig::load(cli.config.as_deref())?;
    tracing::debug!("Config: {}", config);

    match cli.command {
        Commands::Show {
            rows,
            rank_by,
            query,
            user,
            no_medals,
            json,
        } => {
            if let Some(rank_by) = rank_by {
                config.rank_by = rank_by;
            }
            if let Some(query) = query {
                config.query = query;
            }
            if let Some(user) = user {
                config.current_username = user;
            }
            if no_medals {
                config.show_medals = false;
            }

            let rows = load_rows_from_path(&rows)?;
            let engine = LeaderboardEngine::from_config(&config).with_rows(rows);
            let dto = build_dto(&engine)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&dto)?);
            } else {
                println!("{}", render_table(&dto, &config));
            }
        }

        Commands::Ranks { rows, rank_by } => {
            if let Some(rank_by) = rank_by {
                config.rank_by = rank_by;
            }

            let rows = load_rows_from_path(&rows)?;
            let engine = LeaderboardEngine::from_config(&config).with_rows(rows);
            println!("{}", render_ranks(&engine));
        }

        Commands::Medal { rank } => {
            println!("{}", rank_to_display(rank));
        }
    }

    Ok(())
}
