use anyhow::{Context, Result};
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::update_listeners::webhooks;
use teloxide::utils::command::BotCommands;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use seshat::bot;
use seshat::config::{BotConfig, LedgerBackend, LogFormat, TransportMode};
use seshat::db::PgLedgerStore;
use seshat::handlers::Handlers;
use seshat::ledger::{DiscountLedger, JsonFileStore, LedgerStore};
use seshat::router::{Command, Router};
use seshat::session::SessionTracker;

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt().with_env_filter(filter);
    match format {
        LogFormat::Json => subscriber.json().init(),
        LogFormat::Pretty => subscriber.init(),
    }
}

async fn open_ledger_store(backend: &LedgerBackend) -> Result<Arc<dyn LedgerStore>> {
    let store: Arc<dyn LedgerStore> = match backend {
        LedgerBackend::JsonFile(path) => {
            info!(path = %path.display(), "Using JSON ledger file");
            Arc::new(JsonFileStore::new(path.clone()))
        }
        LedgerBackend::Postgres(database_url) => {
            info!("Using PostgreSQL ledger");
            Arc::new(
                PgLedgerStore::connect(database_url)
                    .await
                    .context("Failed to connect to the ledger database")?,
            )
        }
    };
    Ok(store)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    let config = BotConfig::from_env().context("Invalid configuration")?;
    init_tracing(config.log_format);

    info!("Starting Seshat Assistant Telegram Bot");

    let ledger = Arc::new(DiscountLedger::new(open_ledger_store(&config.ledger).await?));
    // Load eagerly so a broken ledger shows up at startup rather than on first request
    match ledger.snapshot().await {
        Ok(records) => info!(records = records.len(), "Discount ledger ready"),
        Err(e) => warn!(error = %e, "Discount ledger could not be loaded, will retry on first use"),
    }

    let sessions = Arc::new(SessionTracker::new());
    let router = Arc::new(Router::new(Arc::new(Handlers::new(ledger, sessions))));

    let bot = Bot::new(&config.token);
    if let Err(e) = bot.set_my_commands(Command::bot_commands()).await {
        warn!(error = %e, "Failed to register bot commands");
    }

    info!("Bot initialized, starting dispatcher");

    let handler = dptree::entry()
        .branch(Update::filter_message().endpoint(bot::message_handler))
        .branch(Update::filter_callback_query().endpoint(bot::callback_handler));

    let mut dispatcher = Dispatcher::builder(bot.clone(), handler)
        .dependencies(dptree::deps![router])
        .default_handler(|update| async move {
            debug!(update_id = ?update.id, "Unhandled update kind");
        })
        .error_handler(LoggingErrorHandler::with_custom_text(
            "An error has occurred in the dispatcher",
        ))
        .enable_ctrlc_handler()
        .build();

    match config.transport {
        TransportMode::Polling => {
            info!("Starting bot in long polling mode");
            dispatcher.dispatch().await;
        }
        TransportMode::Webhook { url, address } => {
            info!(%address, "Starting bot in webhook mode");
            let listener = webhooks::axum(bot, webhooks::Options::new(address, url))
                .await
                .context("Failed to set up the webhook listener")?;
            dispatcher
                .dispatch_with_listener(
                    listener,
                    LoggingErrorHandler::with_custom_text("An error from the update listener"),
                )
                .await;
        }
    }

    info!("Bot stopped");
    Ok(())
}
