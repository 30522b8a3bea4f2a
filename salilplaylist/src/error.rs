//! Types d'erreurs pour salilplaylist

/// Erreurs du service playlist
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Playlist not found: {0}")]
    PlaylistNotFound(String),

    #[error("Invalid hour: {0} (expected 0-23)")]
    InvalidHour(u32),

    #[error("Store error: {0}")]
    StoreError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Type Result spécialisé pour salilplaylist
pub type Result<T> = std::result::Result<T, Error>;
