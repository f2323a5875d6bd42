use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use masal::banner::{BannerInfo, print_banner};
use masal::config::Settings;
use masal::consts::{LOG_ENV, default_db_path};
use masal::generator::StoryGenerator;
use masal::render::{render_score, render_story, render_summaries};
use masal::service::{ApiError, StoryService};
use masal::spinner::spin;
use masal::store::sqlite::SqliteStoryStore;

#[derive(Parser)]
#[command(name = "masal", version, about = "Short stories with comprehension questions, on demand.")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// SQLite database path (use :memory: for ephemeral)
    #[arg(short, long, global = true)]
    db: Option<String>,

    /// Generate stories offline from canned templates
    #[arg(long, global = true, default_value_t = false)]
    mock: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Generate and store a story about a topic
    Generate {
        /// Story topic (3-200 characters)
        topic: String,
    },
    /// List stored stories, newest first
    List,
    /// Show a stored story with its questions
    Show {
        id: i64,
        /// Mark the correct option of every question
        #[arg(long, default_value_t = false)]
        reveal: bool,
    },
    /// Grade answers to a story's questions
    Quiz {
        id: i64,
        /// Zero-based option index per question, comma separated (e.g. 0,1,1)
        #[arg(short, long, value_delimiter = ',', required = true)]
        answers: Vec<usize>,
    },
    /// Check that configuration and storage are usable
    Health,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut settings = Settings::from_env();
    if cli.mock {
        settings = settings.with_mock(true);
    }

    let db = match cli.db {
        Some(db) => db,
        None => {
            let path = default_db_path();
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("cannot create {}", parent.display()))?;
            }
            path.to_string_lossy().into_owned()
        }
    };

    let generator = StoryGenerator::new(settings)?;
    let store = SqliteStoryStore::open(&db)?;
    let service = StoryService::new(generator, Box::new(store));

    match run(&service, cli.command, &db).await {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            eprintln!("error ({}): {}", e.status(), e);
            Ok(ExitCode::FAILURE)
        }
    }
}

async fn run(service: &StoryService, command: Command, db: &str) -> Result<(), ApiError> {
    match command {
        Command::Generate { topic } => {
            let generator = service.generator();
            print_banner(&BannerInfo {
                mode: if generator.is_mock() { "mock" } else { "live" },
                model: generator.model_used(),
                database: if db == ":memory:" { "ephemeral" } else { db },
            });

            let (result, elapsed) = spin("writing story", service.generate(&topic)).await;
            let receipt = result?;
            println!(
                "{} (id {}, {:.1}s)",
                receipt.message,
                receipt.story_id,
                elapsed.as_secs_f32()
            );

            let story = service.get(receipt.story_id).await?;
            println!("\n{}", render_story(&story, false));
        }
        Command::List => {
            let stories = service.list().await?;
            println!("{}", render_summaries(&stories));
        }
        Command::Show { id, reveal } => {
            let story = service.get(id).await?;
            println!("{}", render_story(&story, reveal));
        }
        Command::Quiz { id, answers } => {
            let score = service.check_answers(id, &answers).await?;
            println!("{}", render_score(&score));
        }
        Command::Health => {
            service.list().await?;
            let status = serde_json::json!({
                "status": "healthy",
                "mode": if service.generator().is_mock() { "mock" } else { "live" },
                "model": service.generator().model_used(),
            });
            println!("{status}");
        }
    }
    Ok(())
}
