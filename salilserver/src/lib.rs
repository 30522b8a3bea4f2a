//! # salilserver - Serveur web haut niveau basé sur Axum
//!
//! Cette crate fournit une abstraction simple et ergonomique pour créer des
//! serveurs HTTP avec Axum pour Salil Music.
//!
//! ## Fonctionnalités
//!
//! - 🚀 **API de haut niveau** : montage de sous-routers avec `add_router()`
//! - 🔓 **CORS** : en-têtes cross-origin permissifs appliqués à toutes les réponses
//! - 📚 **Documentation OpenAPI** : génération automatique de Swagger UI
//! - ⚡ **Arrêt gracieux** : gestion propre de l'arrêt sur Ctrl+C
//!
//! ## Architecture
//!
//! - [`server`] : implémentation du serveur principal et du builder
//! - [`cors`] : couche d'en-têtes cross-origin
//! - [`logs`] : initialisation du logging console
//!
//! ## Exemple d'utilisation
//!
//! ```rust,no_run
//! use axum::{routing::get, Router};
//! use salilserver::{ServerBuilder, logs::{init_logging, LoggingOptions}};
//!
//! #[tokio::main]
//! async fn main() {
//!     init_logging(&LoggingOptions::default());
//!
//!     let mut server = ServerBuilder::new("MyServer", "http://localhost", 8080).build();
//!
//!     // Montage d'un sous-router
//!     let status = Router::new().route("/status", get(|| async { "ok" }));
//!     server.add_router("/", status).await;
//!
//!     // Démarrage
//!     server.start().await;
//!     server.wait().await;
//! }
//! ```

pub mod cors;
pub mod logs;
pub mod server;

pub use cors::CorsPolicy;
pub use logs::{init_logging, LoggingOptions};
pub use server::{Server, ServerBuilder};
