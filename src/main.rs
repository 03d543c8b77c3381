use std::io::{self, BufRead, IsTerminal, Write};
use std::sync::Arc;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

use emotional_hue::analysis::{request_analysis, AnalysisError};
use emotional_hue::api::{self, AppState};
use emotional_hue::config::Config;
use emotional_hue::models::{Language, MoodType};
use emotional_hue::reminder::{self, ConsoleNotifier, ReminderScheduler};
use emotional_hue::render::{self, Palette};
use emotional_hue::store::{LogStore, Preferences, DEFAULT_WINDOW_DAYS};
use emotional_hue::{journal, locale, views};

#[derive(Parser)]
#[command(name = "hue")]
#[command(about = "Record how you feel as a color, and see the pattern")]
struct Cli {
    /// Display language (ja or en); detected from HUE_LANG / LANG by default
    #[arg(long, global = true)]
    lang: Option<Language>,

    /// Disable colored output
    #[arg(long, global = true)]
    plain: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the local HTTP API
    Serve {
        /// Port for HTTP API
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Record a mood (focus, excitement, calm, joy, fatigue, anxiety, sadness, anger)
    Record {
        mood: MoodType,
        /// Note about what happened
        #[arg(short, long)]
        note: Option<String>,
    },
    /// Add or replace the note of a recorded mood
    Note { id: Uuid, text: String },
    /// Show the journal
    List {
        /// Only the last N days
        #[arg(short, long, default_value_t = DEFAULT_WINDOW_DAYS, conflicts_with = "all")]
        days: u32,
        /// Every entry ever recorded
        #[arg(short, long)]
        all: bool,
    },
    /// Mood frequency chart
    Chart {
        #[arg(short, long, default_value_t = DEFAULT_WINDOW_DAYS)]
        days: u32,
    },
    /// Recent timeline strip, oldest to newest
    Timeline {
        #[arg(short, long, default_value_t = views::DEFAULT_TIMELINE_LIMIT)]
        limit: usize,
        #[arg(short, long, default_value_t = DEFAULT_WINDOW_DAYS)]
        days: u32,
    },
    /// List the available moods
    Moods,
    /// Delete the whole history
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Ask the AI for a summary of recent moods
    Analyze {
        #[arg(short, long, default_value_t = DEFAULT_WINDOW_DAYS)]
        days: u32,
    },
    /// Turn the 12:00 / 19:00 reminders on or off
    Reminders {
        #[arg(value_enum)]
        action: ReminderAction,
    },
    /// Stay running and fire reminders
    Watch,
}

#[derive(Clone, Copy, ValueEnum)]
enum ReminderAction {
    On,
    Off,
    Status,
}

/// Initialize tracing with output to stderr (CLI commands) or stdout (server)
fn init_tracing(use_stderr: bool) {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG")
            .unwrap_or_else(|_| "emotional_hue=info,hue=info,tower_http=debug".into()),
    );

    if use_stderr {
        // Command output goes to stdout; keep logs out of it
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

fn confirm(prompt: &str) -> io::Result<bool> {
    print!("{} [y/N] ", prompt);
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let use_stderr = !matches!(cli.command, Commands::Serve { .. });
    init_tracing(use_stderr);

    let mut config = Config::from_env()?;
    if let Some(lang) = cli.lang {
        config.language = lang;
    }
    let language = config.language;
    let text = locale::text(language);
    let palette = if cli.plain || !io::stdout().is_terminal() {
        Palette::Plain
    } else {
        Palette::Ansi
    };

    let slots = config.open_slots()?;
    let store = LogStore::new(slots.clone());
    let preferences = Preferences::new(slots);

    match cli.command {
        Commands::Serve { port } => {
            if let Some(port) = port {
                config.port = port;
            }
            let state = AppState::new(store, preferences, Arc::new(config.gemini_client()))
                .with_language(language)
                .with_analysis_timeout(config.analysis_timeout);
            let app = api::create_router(state);

            let addr = config.listen_addr();
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            tracing::info!("Emotional Hue API listening on http://{}", addr);

            axum::serve(listener, app).await?;
        }
        Commands::Record { mood, note } => {
            let entry = journal::log_mood(&store, mood, note.as_deref())?;
            print!("{}", render::render_journal_local(&[entry.clone()], language, palette));
            if note.is_none() {
                println!("{}", text.note_prompt);
                println!("  hue note {} \"...\"", entry.id);
            }
        }
        Commands::Note { id, text: note } => match journal::save_note(&store, id, &note)? {
            Some(_) => println!("{}", text.note_saved),
            None => println!("{}", text.note_skipped),
        },
        Commands::List { days, all } => {
            let entries = if all {
                store.list_all()
            } else {
                store.list_recent(days)
            };
            println!("{}\n", text.journal_title);
            print!("{}", render::render_journal_local(&entries, language, palette));
        }
        Commands::Chart { days } => {
            let entries = store.list_recent(days);
            println!("{}\n", text.chart_title);
            print!(
                "{}",
                render::render_frequency_chart(
                    &views::frequency_by_mood(&entries, language),
                    language,
                    palette
                )
            );
        }
        Commands::Timeline { limit, days } => {
            let entries = store.list_recent(days);
            println!("{}\n", text.timeline_title);
            print!(
                "{}",
                render::render_timeline(
                    &views::recent_timeline_slice(&entries, limit),
                    language,
                    palette
                )
            );
        }
        Commands::Moods => print!("{}", render::render_catalog(language, palette)),
        Commands::Clear { yes } => {
            if yes || confirm(text.clear_confirm)? {
                store.clear_all()?;
                println!("{}", text.cleared);
            }
        }
        Commands::Analyze { days } => {
            let entries = store.list_recent(days);
            let analyzer = config.gemini_client();
            match request_analysis(&analyzer, &entries, config.analysis_timeout).await {
                Ok(result) => print!("{}", render::render_analysis(&result, language)),
                Err(AnalysisError::Validation { .. }) => println!("{}", text.analysis_too_few),
                Err(AnalysisError::Unavailable(_)) => println!("{}", text.analysis_unavailable),
            }
        }
        Commands::Reminders { action } => match action {
            ReminderAction::On => {
                preferences.set_notifications(true)?;
                println!("{}", text.reminders_enabled);
            }
            ReminderAction::Off => {
                preferences.set_notifications(false)?;
                println!("{}", text.reminders_disabled);
            }
            ReminderAction::Status => {
                if preferences.notifications_enabled() {
                    println!("{}", text.reminders_status_on);
                } else {
                    println!("{}", text.reminders_status_off);
                }
            }
        },
        Commands::Watch => {
            if !preferences.notifications_enabled() {
                println!("{}", text.reminders_off_hint);
            }
            let scheduler = ReminderScheduler::new(language);
            let notifier = ConsoleNotifier;
            tokio::select! {
                _ = reminder::run_reminders(scheduler, preferences, &notifier) => {}
                _ = tokio::signal::ctrl_c() => tracing::info!("Stopping reminders"),
            }
        }
    }

    Ok(())
}
