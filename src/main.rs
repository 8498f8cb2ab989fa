use tracing::{error, info};

use pdfstash::file::UploadStorage;
use pdfstash::web::{AppState, WebServer};
use pdfstash::{Config, Database};

const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[tokio::main]
async fn main() {
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());

    // Load configuration
    let mut config = match Config::load(&config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load {config_path}: {e}");
            eprintln!("Using default configuration.");
            Config::default()
        }
    };
    config.apply_env_overrides();

    // Initialize logging
    if let Err(e) = pdfstash::logging::init(&config.logging) {
        eprintln!("Failed to initialize logging: {e}");
        // Fall back to console-only logging
        pdfstash::logging::init_console_only(&config.logging.level);
    }

    if let Err(e) = run(config).await {
        error!("Startup failed: {e}");
        std::process::exit(1);
    }
}

async fn run(config: Config) -> pdfstash::Result<()> {
    config.validate()?;

    let storage = UploadStorage::new(&config.uploads.dir);
    storage.ensure_directory()?;

    let db = Database::open(&config.database.path).await?;

    let app_state = AppState::new(db, storage, config.web.secret())?
        .with_timezone(&config.server.timezone)
        .with_max_upload_mb(config.uploads.max_upload_size_mb);

    let server = WebServer::new(
        &config.server,
        app_state,
        config.uploads.max_upload_bytes(),
    )?;

    info!("pdfstash - PDF upload host");
    info!("Database: {}", config.database.path);
    info!("Upload folder: {}", config.uploads.dir);
    info!("Server: http://{}", server.addr());

    server.run().await?;
    Ok(())
}
