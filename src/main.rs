mod adapters;
mod commands;
mod config;
mod domain;
mod error;
mod pipeline;
mod ports;

use adapters::services::llm::OpenAIService;
use adapters::services::search::SerperService;
use adapters::storage::JsonFileLibrary;
use config::AppConfig;
use domain::models::PracticeExchange;
use ports::library::BriefLibraryPort;
use ports::llm::TextGenerationPort;
use ports::search::WebSearchPort;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Application state shared across HTTP handlers
pub struct AppState {
    pub config: AppConfig,
    pub llm: Arc<dyn TextGenerationPort>,
    pub search: Arc<dyn WebSearchPort>,
    pub library: Arc<dyn BriefLibraryPort>,
    /// Current practice session, in memory only
    pub practice_log: Mutex<Vec<PracticeExchange>>,
}

pub type SharedState = Arc<AppState>;

/// Initialize the application
///
/// Resolves configuration, opens the meeting library, and wires the
/// external service adapters. An unreadable library file is logged and
/// replaced with an empty in-memory library so the session stays usable.
fn initialize_app() -> anyhow::Result<AppState> {
    let config = AppConfig::from_env()?;

    if config.openai_api_key.is_empty() {
        log::warn!("OPENAI_API_KEY is not set; brief generation will fail until it is");
    }
    if config.serper_api_key.is_empty() {
        log::info!("SERPER_API_KEY is not set; live web updates are disabled");
    }

    let library = match JsonFileLibrary::open(config.library_path.clone(), config.library_capacity)
    {
        Ok(library) => library,
        Err(e) => {
            log::error!("{}; continuing with an empty library", e);
            JsonFileLibrary::empty(config.library_path.clone(), config.library_capacity)
        }
    };

    let llm = match config.openai_api_base.clone() {
        Some(base) => OpenAIService::with_api_base(config.openai_api_key.clone(), base),
        None => OpenAIService::new(config.openai_api_key.clone()),
    };
    let search = match config.serper_api_base.clone() {
        Some(base) => SerperService::with_api_base(config.serper_api_key.clone(), base),
        None => SerperService::new(config.serper_api_key.clone()),
    };

    Ok(AppState {
        config,
        llm: Arc::new(llm),
        search: Arc::new(search),
        library: Arc::new(library),
        practice_log: Mutex::new(Vec::new()),
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let state = Arc::new(initialize_app()?);
    let bind_addr = state.config.bind_addr.clone();

    let app = axum::Router::new().nest("/api/v1", commands::api_router(state));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    log::info!("meet-prep listening on http://{}", bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
