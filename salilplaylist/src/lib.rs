//! # salilplaylist - Sélection de playlists selon l'heure du jour
//!
//! Cette crate fournit le cœur métier de Salil Music :
//! - Résolution de l'heure courante vers l'un des six blocs horaires fixes
//!   (un seul bloc passe minuit)
//! - Store documentaire SQLite pour les collections `playlists` et `songs`
//! - Couche service normalisant les lectures (la clé interne de stockage
//!   n'est jamais exposée)
//! - API REST axum + documentation OpenAPI (feature `server`)
//!
//! # Architecture
//!
//! - **TimeBlock / resolve_hour** : partition fixe de la journée
//! - **DocumentStore** : connexion unique partagée, créée au démarrage et
//!   injectée explicitement (pas de singleton paresseux)
//! - **PlaylistService** : lectures par bloc, par identifiant ou complètes,
//!   bornées par un timeout
//!
//! # Exemple d'utilisation
//!
//! ```no_run
//! use salilplaylist::{seed, DocumentStore, PlaylistService};
//! use std::sync::Arc;
//!
//! # #[tokio::main]
//! # async fn main() -> salilplaylist::Result<()> {
//! // Ouvrir le store et le peupler une fois au démarrage
//! let store = Arc::new(DocumentStore::open_in_memory()?);
//! seed::seed_store(&store).await?;
//!
//! // Lire la playlist du moment
//! let service = PlaylistService::new(store);
//! let current = service.current_playlist().await?;
//! println!("Now playing: {}", current.playlist.name);
//! # Ok(())
//! # }
//! ```

mod error;
pub mod model;
pub mod seed;
pub mod service;
pub mod store;
pub mod timeblock;

#[cfg(feature = "salilconfig")]
mod config_ext;

#[cfg(feature = "server")]
pub mod api;
#[cfg(feature = "server")]
pub mod openapi;

#[cfg(feature = "salilserver")]
mod server_ext;

// Réexports publics
pub use error::{Error, Result};
pub use model::{Playlist, Song};
pub use service::{CurrentPlaylist, PlaylistService, PlaylistWithSongs};
pub use store::DocumentStore;
pub use timeblock::{resolve_hour, TimeBlock, FALLBACK_BLOCK_ID, TIME_BLOCKS};

#[cfg(feature = "salilconfig")]
pub use config_ext::PlaylistConfigExt;

#[cfg(feature = "salilserver")]
pub use server_ext::PlaylistApiExt;
