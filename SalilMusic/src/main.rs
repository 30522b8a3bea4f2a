use salilconfig::get_config;
use salilplaylist::{seed, DocumentStore, PlaylistApiExt, PlaylistConfigExt, PlaylistService};
use salilserver::logs::{init_logging, LoggingOptions};
use salilserver::ServerBuilder;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ========== PHASE 1 : Configuration et store ==========

    let config = get_config();
    init_logging(&LoggingOptions::from_config(&config));

    info!("💾 Opening document store...");
    let store = Arc::new(DocumentStore::open(&config.database_path())?);

    // Peuplement unique au démarrage (jamais au fil des requêtes)
    seed::seed_store(&store).await?;
    info!("✅ Document store seeded with sample data");

    let service = PlaylistService::with_timeout(store, config.store_timeout());

    // ========== PHASE 2 : Serveur HTTP ==========

    let mut server = ServerBuilder::new_configured().build();
    server.enable_cors(&config.get_cors_origins());

    info!("🎵 Registering playlist API...");
    server.init_playlist_api(service).await?;

    // ========== PHASE 3 : Démarrage ==========

    info!("🌐 Starting HTTP server...");
    server.start().await;

    info!("✅ Salil Music API is ready!");
    info!("Press Ctrl+C to stop...");
    server.wait().await;

    Ok(())
}
