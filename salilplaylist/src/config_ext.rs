//! Extension de salilconfig pour le store des playlists

use std::path::PathBuf;
use std::time::Duration;

/// Trait d'extension pour salilconfig::Config
pub trait PlaylistConfigExt {
    /// Retourne le chemin de la base documentaire
    fn database_path(&self) -> PathBuf;

    /// Timeout appliqué aux appels vers le store
    fn store_timeout(&self) -> Duration;
}

impl PlaylistConfigExt for salilconfig::Config {
    fn database_path(&self) -> PathBuf {
        // get_managed_dir crée le répertoire database s'il n'existe pas
        let database_dir = self
            .get_managed_dir(&["database", "directory"], "database")
            .expect("Failed to get or create database directory");

        PathBuf::from(database_dir).join(format!("{}.db", self.get_database_name()))
    }

    fn store_timeout(&self) -> Duration {
        Duration::from_secs(self.get_store_timeout_secs())
    }
}
