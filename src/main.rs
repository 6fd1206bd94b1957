//! Cloud notepad server.
//!
//! `notepad` serves the web application; `notepad hash <password>` prints the
//! salted hash to put in `SCN_APP_PASSWORD`.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use notepad::{build_router, salted_hash, AppState, Config, NoteStore};

#[derive(Parser, Debug)]
#[command(name = "notepad")]
#[command(about = "Self-hosted cloud notepad")]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP server (default)
    Serve,
    /// Print the salted hash of a password, for SCN_APP_PASSWORD
    Hash { password: String },
}

// ============================================================================
// Main
// ============================================================================

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    if let Some(Command::Hash { password }) = args.command {
        println!("{}", salted_hash(&password, &Config::salt_from_env()));
        return Ok(());
    }

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "notepad=debug,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    tracing::info!(host = %config.host, port = config.port, "loaded configuration");

    let store = NoteStore::open(&config.db_path)?;
    tracing::info!(path = %config.db_path.display(), "opened note database");

    if config.app_password_enabled() {
        tracing::info!("app password: ENABLED (new notes require SCN_APP_PASSWORD)");
    } else {
        tracing::info!("app password: DISABLED (set SCN_APP_PASSWORD to gate new notes)");
    }

    let addr = format!("{}:{}", config.host, config.port);
    let app = build_router(AppState::new(config, store));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("notepad running at http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
