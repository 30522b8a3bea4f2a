//! Extension pour monter l'API playlists sur salilserver
//!
//! Ce module fournit le trait `PlaylistApiExt` qui enregistre le router REST
//! et sa documentation Swagger sur un serveur existant.

use crate::api::playlist_api_router;
use crate::openapi::ApiDoc;
use crate::service::PlaylistService;
use anyhow::Result;
use salilserver::Server;
use utoipa::OpenApi;

/// Trait d'extension pour ajouter l'API playlists à salilserver
pub trait PlaylistApiExt {
    /// Monte l'API playlists à la racine du serveur
    ///
    /// # Routes enregistrées
    ///
    /// - `GET /` - Métadonnées du service
    /// - `GET /current-playlist` - Playlist du bloc horaire courant
    /// - `GET /playlist/{id}` et `GET /playlist/{id}/songs`
    /// - `GET /playlists` et `GET /songs`
    /// - `GET /swagger-ui/playlists` - Documentation interactive Swagger
    async fn init_playlist_api(&mut self, service: PlaylistService) -> Result<()>;
}

impl PlaylistApiExt for Server {
    async fn init_playlist_api(&mut self, service: PlaylistService) -> Result<()> {
        let api_router = playlist_api_router(service);
        self.add_openapi("/", api_router, ApiDoc::openapi(), "playlists")
            .await;
        Ok(())
    }
}
