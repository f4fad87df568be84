use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use skill_link_algo::config::{LoggingSettings, Settings, StoreBackend, StoreSettings};
use skill_link_algo::core::Matcher;
use skill_link_algo::routes::{self, handle_json_payload_error, handle_query_payload_error, AppState};
use skill_link_algo::services::{InMemoryStore, PostgresClient, ProfileStore, StoreError};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Install the tracing subscriber; RUST_LOG overrides the configured level
fn init_logging(logging: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    match logging.format.as_str() {
        "pretty" => subscriber.pretty().init(),
        "json" => subscriber.json().init(),
        _ => subscriber.init(),
    }
}

async fn build_store(settings: &StoreSettings) -> Result<Arc<dyn ProfileStore>, StoreError> {
    match settings.backend {
        StoreBackend::Memory => {
            let store = if settings.seed_demo {
                InMemoryStore::with_demo_users()
            } else {
                InMemoryStore::new()
            };
            info!("Using in-memory profile store (demo seed: {})", settings.seed_demo);
            Ok(Arc::new(store))
        }
        StoreBackend::Postgres => {
            let url = settings.database_url.as_deref().ok_or_else(|| {
                StoreError::InvalidInput("store.database_url is required for the postgres backend".to_string())
            })?;
            let client = PostgresClient::from_settings(
                url,
                settings.max_connections,
                settings.min_connections,
                settings.acquire_timeout_secs,
            )
            .await?;
            info!(
                "PostgreSQL profile store initialized (max: {} connections)",
                settings.max_connections.unwrap_or(10)
            );
            Ok(Arc::new(client))
        }
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e));
        }
    };

    init_logging(&settings.logging);

    info!("Starting Skill-Link matching service...");

    let store = build_store(&settings.store).await.map_err(|e| {
        error!("Failed to initialize profile store: {}", e);
        std::io::Error::new(std::io::ErrorKind::Other, e)
    })?;

    let matcher = Matcher::new(settings.matching.min_score);

    info!("Matcher initialized (min score: {})", matcher.min_score());

    let app_state = AppState {
        store,
        matcher,
        matching: settings.matching.clone(),
    };

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
