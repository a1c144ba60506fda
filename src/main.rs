use actix_cors::Cors;
use actix_web::{web, App, HttpServer, middleware};
use neighborfit::config::{LoggingSettings, Settings};
use neighborfit::core::Matcher;
use neighborfit::routes::{self, AppState};
use neighborfit::services::NeighborhoodDataset;
use std::sync::Arc;
use tracing::{info, error};
use tracing_subscriber::EnvFilter;

/// Initialize logging; `RUST_LOG` wins over the configured level
fn init_tracing(logging: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.compact().init();
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = Settings::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;

    init_tracing(&settings.logging);

    info!("Starting NeighborFit matching service...");

    let dataset = match settings.dataset.path.as_deref() {
        Some(path) => {
            info!("Loading neighborhoods from {}", path);
            NeighborhoodDataset::from_path(path).await
        }
        None => NeighborhoodDataset::builtin(),
    }
    .map_err(|e| {
        error!("Failed to load neighborhood data: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidData, e)
    })?;

    info!("Loaded {} neighborhoods", dataset.len());

    let matcher = Matcher::new(settings.scoring);

    info!("Matcher initialized with params: {:?}", matcher.params());

    // Build application state
    let app_state = AppState {
        dataset: Arc::new(dataset),
        matcher,
        matching: settings.matching.clone(),
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
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
