//! Shortcut redirect host (v1)
//!
//! Resolves `@keyword` shortcuts typed by the user into destination URLs and
//! redirects navigations that carry them.
//!
//! # Architecture Overview
//!
//! ```text
//!                     ┌──────────────────────────────────────────────────┐
//!                     │                 SHORTCUT HOST                     │
//!   Browser events    │  ┌─────────┐    ┌──────────┐    ┌─────────────┐  │
//!   ──────────────────┼─▶│ native  │───▶│ runtime  │───▶│   guard     │  │
//!   (stdin frames)    │  │  codec  │    │ dispatch │    │ (per tab)   │  │
//!                     │  └─────────┘    └────┬─────┘    └──────┬──────┘  │
//!                     │                      │                 ▼         │
//!                     │                      │          ┌─────────────┐  │
//!                     │                      ├─────────▶│  matching   │  │
//!                     │                      │          │   engine    │  │
//!                     │                      ▼          └──────┬──────┘  │
//!                     │               ┌────────────┐           ▼         │
//!   Directives        │  ┌─────────┐  │ suggest    │    ┌─────────────┐  │
//!   ◀─────────────────┼──│ native  │◀─┤            │◀───│  registry   │  │
//!   (stdout frames)   │  │  codec  │  └────────────┘    │ (immutable) │  │
//!                     │  └─────────┘                    └─────────────┘  │
//!                     └──────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use shortcut_redirect::host::native;
use shortcut_redirect::lifecycle::startup;
use shortcut_redirect::observability::init_logging;
use shortcut_redirect::MatchResult;

#[derive(Parser)]
#[command(name = "shortcut-redirect")]
#[command(about = "Resolve @keyword shortcuts and redirect navigations", long_about = None)]
struct Cli {
    /// Shortcut file (.json or .toml)
    #[arg(short, long, default_value = "shortcuts.json")]
    config: PathBuf,

    /// Override the configured log level
    #[arg(short, long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run as a native messaging host on stdin/stdout (default)
    Serve,
    /// Resolve typed text as the keyword input would
    Resolve { text: String },
    /// Check a URL the browser is about to load
    CheckUrl { url: String },
    /// List suggestions for partial input
    Suggest {
        #[arg(default_value = "")]
        partial: String,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let loaded = startup::read_config(&cli.config);
    let mut observability = loaded.config.observability.clone();
    if let Some(level) = cli.log_level {
        observability.log_level = level;
    }
    init_logging(&observability);

    tracing::info!(config = %cli.config.display(), "shortcut-redirect v0.1.0 starting");

    let mut runtime = startup::start(&loaded);

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => {
            native::serve(&mut runtime, tokio::io::stdin(), tokio::io::stdout()).await?;
        }
        Commands::Resolve { text } => print_result(&text, &runtime.engine().resolve_typed_text(&text)),
        Commands::CheckUrl { url } => print_result(&url, &runtime.engine().resolve_navigated_url(&url)),
        Commands::Suggest { partial } => {
            for suggestion in runtime.suggestions().provide_suggestions(&partial) {
                println!("{:<16} {}", suggestion.content, suggestion.description);
            }
        }
    }

    Ok(())
}

fn print_result(input: &str, result: &MatchResult) {
    match result {
        MatchResult::Matched(r) => println!("{input} -> {} ({} via {})", r.destination, r.keyword, r.rule),
        MatchResult::NoMatch => println!("{input} -> no match"),
    }
}
