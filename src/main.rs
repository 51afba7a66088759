//! Telex Relay server binary.

use std::process::ExitCode;
use std::sync::Arc;

use thiserror::Error;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use telex_relay::adapters::ai::{GroqConfig, GroqProvider};
use telex_relay::adapters::http::{app_router, RelayAppState};
use telex_relay::adapters::storage::InMemoryConversationStore;
use telex_relay::adapters::telex::{TelexClient, TelexConfig};
use telex_relay::config::{AppConfig, ConfigError, ServerConfig, ValidationError};
use telex_relay::ports::{CompletionError, CompletionProvider, RelayError};

#[derive(Debug, Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("invalid configuration: {0}")]
    Validation(#[from] ValidationError),

    #[error("failed to build completion client: {0}")]
    Completion(#[from] CompletionError),

    #[error("failed to build messaging client: {0}")]
    Relay(#[from] RelayError),

    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "Telex relay stopped");
            eprintln!("telex-relay: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), StartupError> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config.server);

    let store = InMemoryConversationStore::with_capacity(config.store.max_conversations);

    let completion = &config.completion;
    let provider = GroqProvider::new(
        GroqConfig::from_secret(completion.api_key.clone())
            .with_base_url(&completion.base_url)
            .with_model(&completion.model)
            .with_temperature(completion.temperature)
            .with_max_tokens(completion.max_tokens)
            .with_timeout(completion.timeout()),
    )?;

    let messaging = &config.messaging;
    let relay = TelexClient::new(
        TelexConfig::from_secret(messaging.api_key.clone())
            .with_base_url(&messaging.base_url)
            .with_agent_id(&messaging.agent_id)
            .with_timeout(messaging.timeout()),
    )?;

    let info = provider.provider_info();
    let agent_id = relay.agent_id().to_string();
    let state = RelayAppState::new(
        Arc::new(store),
        Arc::new(provider),
        Arc::new(relay),
        agent_id.clone(),
        messaging.api_key.clone(),
    );

    let app = app_router(state, config.server.request_timeout());
    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(
        %addr,
        provider = %info.name,
        model = %info.model,
        agent_id = %agent_id,
        max_conversations = config.store.max_conversations,
        "Telex relay listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Telex relay shut down");
    Ok(())
}

/// JSON logs in production, human-readable otherwise. `RUST_LOG` wins over
/// the configured filter.
fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&server.log_level));

    let registry = tracing_subscriber::registry().with(filter);
    if server.is_production() {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer()).init();
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
