//! Couche service : lectures normalisées au-dessus du [`DocumentStore`].
//!
//! Le service reçoit son store par injection explicite (pas de singleton
//! paresseux) et borne chaque appel par un timeout configurable.

use crate::model::{Playlist, Song};
use crate::store::DocumentStore;
use crate::timeblock::resolve_hour;
use crate::{Error, Result};
use chrono::{DateTime, Local, Timelike};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

const DEFAULT_STORE_TIMEOUT: Duration = Duration::from_secs(5);

/// Playlist active accompagnée du bloc horaire résolu
#[derive(Debug, Clone)]
pub struct CurrentPlaylist {
    pub playlist: Playlist,
    pub songs: Vec<Song>,
    pub current_time_block: String,
}

/// Playlist et ses morceaux
#[derive(Debug, Clone)]
pub struct PlaylistWithSongs {
    pub playlist: Playlist,
    pub songs: Vec<Song>,
}

/// Service de lecture des playlists
#[derive(Clone)]
pub struct PlaylistService {
    store: Arc<DocumentStore>,
    store_timeout: Duration,
}

impl PlaylistService {
    pub fn new(store: Arc<DocumentStore>) -> Self {
        Self::with_timeout(store, DEFAULT_STORE_TIMEOUT)
    }

    pub fn with_timeout(store: Arc<DocumentStore>, store_timeout: Duration) -> Self {
        Self {
            store,
            store_timeout,
        }
    }

    // Chaque appel vers le store est borné dans le temps
    async fn bounded<F, T>(&self, fut: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        tokio::time::timeout(self.store_timeout, fut)
            .await
            .map_err(|_| Error::StoreError("store call timed out".to_string()))?
    }

    /// Playlist du moment, selon l'heure locale du serveur
    pub async fn current_playlist(&self) -> Result<CurrentPlaylist> {
        self.current_playlist_at(Local::now()).await
    }

    /// Playlist active à l'instant donné
    pub async fn current_playlist_at(&self, now: DateTime<Local>) -> Result<CurrentPlaylist> {
        let block = resolve_hour(now.hour())?;
        debug!(hour = now.hour(), block = block.id, "Resolved time block");

        let playlist = self
            .bounded(self.store.find_playlist_by_time_block(block.id))
            .await?
            .ok_or_else(|| Error::PlaylistNotFound(block.id.to_string()))?;

        let songs = self
            .bounded(self.store.songs_by_playlist(&playlist.id))
            .await?;

        Ok(CurrentPlaylist {
            playlist,
            songs,
            current_time_block: block.id.to_string(),
        })
    }

    /// Lecture directe par clé publique
    pub async fn playlist_by_id(&self, id: &str) -> Result<PlaylistWithSongs> {
        let playlist = self
            .bounded(self.store.find_playlist_by_id(id))
            .await?
            .ok_or_else(|| Error::PlaylistNotFound(id.to_string()))?;

        let songs = self
            .bounded(self.store.songs_by_playlist(&playlist.id))
            .await?;

        Ok(PlaylistWithSongs { playlist, songs })
    }

    /// Morceaux d'une playlist ; séquence vide si aucun ne correspond
    pub async fn songs_by_playlist(&self, playlist_id: &str) -> Result<Vec<Song>> {
        self.bounded(self.store.songs_by_playlist(playlist_id)).await
    }

    pub async fn list_playlists(&self) -> Result<Vec<Playlist>> {
        self.bounded(self.store.all_playlists()).await
    }

    pub async fn list_songs(&self) -> Result<Vec<Song>> {
        self.bounded(self.store.all_songs()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;
    use chrono::TimeZone;

    async fn service() -> PlaylistService {
        let store = Arc::new(DocumentStore::open_in_memory().unwrap());
        seed::seed_store(&store).await.unwrap();
        PlaylistService::new(store)
    }

    fn local_at_hour(hour: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 6, 1, hour, 30, 0).unwrap()
    }

    #[tokio::test]
    async fn test_current_playlist_at_nine_is_morning() {
        let service = service().await;
        let current = service
            .current_playlist_at(local_at_hour(9))
            .await
            .unwrap();

        assert_eq!(current.current_time_block, "morning");
        assert_eq!(current.playlist.time_block, "morning");
        assert_eq!(current.songs.len(), 3);
    }

    #[tokio::test]
    async fn test_current_playlist_wraps_past_midnight() {
        let service = service().await;
        let current = service
            .current_playlist_at(local_at_hour(0))
            .await
            .unwrap();
        assert_eq!(current.current_time_block, "late-night");

        let current = service
            .current_playlist_at(local_at_hour(23))
            .await
            .unwrap();
        assert_eq!(current.current_time_block, "night");
    }

    #[tokio::test]
    async fn test_unknown_playlist_id_is_not_found() {
        let service = service().await;
        let err = service.playlist_by_id("no-such-id").await.unwrap_err();
        assert!(matches!(err, Error::PlaylistNotFound(_)));
    }

    #[tokio::test]
    async fn test_songs_for_unknown_playlist_is_empty_not_error() {
        let service = service().await;
        let songs = service.songs_by_playlist("no-such-id").await.unwrap();
        assert!(songs.is_empty());
    }

    #[tokio::test]
    async fn test_store_call_exceeding_timeout_is_a_store_error() {
        let store = Arc::new(DocumentStore::open_in_memory().unwrap());
        let service = PlaylistService::with_timeout(store, Duration::from_millis(10));

        let err = service
            .bounded(async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Ok::<_, Error>(())
            })
            .await
            .unwrap_err();

        match err {
            Error::StoreError(msg) => assert_eq!(msg, "store call timed out"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_every_song_references_exactly_one_playlist() {
        let service = service().await;
        let playlists = service.list_playlists().await.unwrap();
        let songs = service.list_songs().await.unwrap();

        assert_eq!(playlists.len(), 6);
        assert_eq!(songs.len(), 18);

        for song in &songs {
            let owner = song.playlist_id.as_ref().expect("seeded songs are linked");
            let owners = playlists.iter().filter(|p| &p.id == owner).count();
            assert_eq!(owners, 1);
        }
    }
}
