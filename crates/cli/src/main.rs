//! learnpath CLI - personal learning-progress tracker.

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use learnpath_core::{Theme, TopicId, TopicStatus};
use learnpath_progress::{CompletionEstimator, SummaryScope, TopicFilter, DEFAULT_RECENT_LIMIT};
use learnpath_seed::SeedGenerator;
use learnpath_storage::JsonStorage;
use learnpath_store::{export_file_name, ProgressStore};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "learnpath")]
#[command(about = "Track progress through a learning roadmap", long_about = None)]
struct Cli {
    /// Directory holding the saved progress
    #[arg(long, env = "LEARNPATH_DATA_DIR", default_value = ".learnpath", global = true)]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show overall progress
    Status,
    /// List modules with their progress
    Modules {
        /// Include sub-modules
        #[arg(long)]
        all: bool,
        /// Only modules matching this text
        #[arg(long)]
        search: Option<String>,
    },
    /// List topics
    Topics {
        /// Filter by status (future, now, completed)
        #[arg(long)]
        status: Option<String>,
        /// Only topics matching this text
        #[arg(long)]
        search: Option<String>,
    },
    /// Show the most recently added topics
    Recent {
        /// Number of topics to show
        #[arg(long, default_value_t = DEFAULT_RECENT_LIMIT)]
        limit: usize,
    },
    /// Set a topic's status
    Set {
        /// Topic ID
        id: String,
        /// New status (future, now, completed)
        status: String,
    },
    /// Toggle hours-weighted progress
    Weighted,
    /// Set the theme, or cycle it when no theme is given
    Theme {
        /// light, dark or system
        theme: Option<String>,
    },
    /// Replace the roadmap with a fresh one, keeping settings
    Reset,
    /// Export the roadmap and progress as JSON
    Export {
        /// Output file (defaults to a dated file name)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Estimate when the roadmap will be finished
    Estimate {
        /// Study hours per week
        #[arg(long, default_value_t = 10)]
        hours_per_week: u32,
    },
    /// Discard everything and generate a new roadmap and user
    Regenerate,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Open storage
    let storage = JsonStorage::new(&cli.data_dir).await?;
    let mut store = ProgressStore::new(storage, SeedGenerator::from_entropy());
    store.initialize().await?;

    match cli.command {
        Commands::Status => {
            let stats = store.stats();
            let user = store.user().ok_or_else(|| anyhow!("store not ready"))?;
            let roadmap = store.roadmap().ok_or_else(|| anyhow!("store not ready"))?;
            let settings = store
                .user_progress()
                .map(|p| p.settings)
                .unwrap_or_default();

            println!("{} v{}", roadmap.title, roadmap.version);
            println!("  User: {} <{}> ({})", user.name, user.email, user.role);
            println!("  Progress: {}%", store.roadmap_progress());
            println!(
                "  Topics: {} completed, {} in progress, {} upcoming ({} total)",
                stats.completed_topics, stats.in_progress_topics, stats.future_topics, stats.total_topics
            );
            println!("  Hours: {} of {} done", stats.completed_hours, stats.total_hours);
            println!(
                "  Weighting: {}",
                if settings.use_weighted_progress { "hours" } else { "topics" }
            );
            println!("  Theme: {}", settings.theme);
        }
        Commands::Modules { all, search } => {
            let scope = if all || search.is_some() { SummaryScope::All } else { SummaryScope::TopLevel };
            let matching: Option<Vec<_>> = search
                .as_deref()
                .map(|q| store.search_modules(q).into_iter().map(|m| m.id.clone()).collect());

            for summary in store.module_summaries(scope) {
                if matching.as_ref().is_some_and(|ids| !ids.contains(&summary.id)) {
                    continue;
                }
                println!(
                    "{}{} | {:>3}% | {} topics, {}h | {}",
                    "  ".repeat(summary.depth),
                    summary.id,
                    summary.progress,
                    summary.topic_count,
                    summary.total_hours,
                    summary.title,
                );
            }
        }
        Commands::Topics { status, search } => {
            let filter = TopicFilter {
                status: status.map(|s| s.parse::<TopicStatus>()).transpose()?.map(|s| vec![s]),
                query: search,
            };
            let topics = store.search_topics(&filter);

            println!("Topics ({})", topics.len());
            for topic in topics {
                let status = store.effective_status(&topic.id).unwrap_or(topic.status);
                println!(
                    "  {} | {} | {}h - {}",
                    topic.id,
                    format_status(status),
                    topic.estimated_hours,
                    topic.title,
                );
            }
        }
        Commands::Recent { limit } => {
            for view in store.recent_topics(limit) {
                println!(
                    "  {} | {} | {} - {}",
                    view.topic.created_at.format("%Y-%m-%d"),
                    format_status(view.status),
                    view.topic.id,
                    view.topic.title,
                );
            }
        }
        Commands::Set { id, status } => {
            let topic_id: TopicId = id.parse()?;
            let status: TopicStatus = status.parse()?;
            store.set_topic_status(&topic_id, status).await?;
            println!("{} is now {}", topic_id, format_status(status));
            println!("Overall progress: {}%", store.roadmap_progress());
        }
        Commands::Weighted => {
            let enabled = store.toggle_weighted_progress().await?;
            println!(
                "Progress is now weighted by {}",
                if enabled { "estimated hours" } else { "topic count" }
            );
            println!("Overall progress: {}%", store.roadmap_progress());
        }
        Commands::Theme { theme } => {
            let theme = match theme {
                Some(theme) => {
                    let theme: Theme = theme.parse()?;
                    store.set_theme(theme).await?;
                    theme
                }
                None => store.cycle_theme().await?,
            };
            println!("Theme: {}", theme);
        }
        Commands::Reset => {
            store.reset_progress().await?;
            println!("Progress reset ({} topics)", store.all_topics().len());
        }
        Commands::Export { out } => {
            let json = store.export_snapshot()?;
            let path = out.unwrap_or_else(|| PathBuf::from(export_file_name(Utc::now().date_naive())));
            tokio::fs::write(&path, json).await?;
            println!("Exported to {}", path.display());
        }
        Commands::Estimate { hours_per_week } => {
            let stats = store.stats();
            let estimator = CompletionEstimator::new(hours_per_week);

            println!("Remaining: {}h", stats.remaining_hours);
            match (estimator.weeks_remaining(&stats), estimator.estimate(&stats, Utc::now())) {
                (Some(weeks), Some(date)) => {
                    println!("  About {} weeks at {}h/week", weeks, hours_per_week);
                    println!("  Finished around {}", date.format("%Y-%m-%d"));
                }
                _ => println!("  No estimate at {}h/week", hours_per_week),
            }
        }
        Commands::Regenerate => {
            store.regenerate().await?;
            info!("Regenerated roadmap");
            println!("New roadmap with {} topics", store.all_topics().len());
        }
    }

    Ok(())
}

fn format_status(status: TopicStatus) -> &'static str {
    match status {
        TopicStatus::Future => "FUTURE",
        TopicStatus::Now => "NOW",
        TopicStatus::Completed => "COMPLETED",
    }
}
