use rishta_saver_notify::{MessagingCredentials, ReqwestTransport, WhatsAppDispatcher};
use rishta_saver_server::config::ServerConfig;
use rishta_saver_server::orchestrator::AgentOrchestrator;
use rishta_saver_server::routes;
use rishta_saver_server::state::AppState;
use rishta_saver_ai::OpenAiCompatBackend;
use rishta_saver_tools::builtin_registry;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration from environment; the model credential is required.
    let config = ServerConfig::from_env().expect("failed to load configuration");
    tracing::info!("Loaded configuration");

    let http = reqwest::Client::new();

    let backend = Arc::new(
        OpenAiCompatBackend::new(http.clone(), config.gemini_api_key.clone())
            .with_base_url(config.model.base_url.clone())
            .with_model(config.model.name.clone()),
    );
    tracing::info!(model = %config.model.name, "chat backend ready");

    let credentials = MessagingCredentials::from_parts(config.instance_id, config.api_token);
    if credentials.is_none() {
        tracing::warn!(
            "WhatsApp credentials not configured; notification dispatch will report failure"
        );
    }
    let dispatcher = Arc::new(WhatsAppDispatcher::new(
        credentials,
        Arc::new(ReqwestTransport::new(http)),
    ));

    let registry = Arc::new(builtin_registry(dispatcher));
    tracing::info!(tools = registry.len(), "tool registry ready");

    let orchestrator = Arc::new(AgentOrchestrator::new(backend, registry));
    let state = Arc::new(AppState::new(orchestrator));

    let app = routes::router(state).layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .expect("failed to bind to address");

    tracing::info!("listening on http://{}", config.listen_addr);

    axum::serve(listener, app)
        .await
        .expect("server error");
}
