//! Store documentaire SQLite pour les playlists et les morceaux.
//!
//! Deux collections (`playlists` et `songs`), chaque ligne portant une clé
//! interne `doc_key` qui ne quitte jamais le store : les projections vers
//! [`Playlist`] et [`Song`] ne sélectionnent que les champs publics, `id`
//! reste donc le seul identifiant exposé.

use crate::model::{Playlist, Song};
use crate::{Error, Result};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing::info;

/// Colonnes publiques, sans la clé de stockage
const PLAYLIST_COLUMNS: &str = "id, name, time_block, start_time, end_time";
const SONG_COLUMNS: &str = "id, playlist_id, title, artist, url, time_block";

/// Accès partagé aux deux collections (une connexion pour tout le process)
pub struct DocumentStore {
    conn: Arc<Mutex<Connection>>,
}

impl DocumentStore {
    /// Ouvre (ou crée) la base au chemin donné
    pub fn open(db_path: &Path) -> Result<Self> {
        // Créer le répertoire parent si nécessaire
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| Error::StoreError(format!("Failed to create directory: {}", e)))?;
        }

        let conn = Connection::open(db_path)
            .map_err(|e| Error::StoreError(format!("Failed to open database: {}", e)))?;

        Self::init_schema(&conn)?;
        info!(path=%db_path.display(), "Document store opened");

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Base en mémoire, utilisée par les tests
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .map_err(|e| Error::StoreError(format!("Failed to open database: {}", e)))?;
        Self::init_schema(&conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    fn init_schema(conn: &Connection) -> Result<()> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS playlists (
                doc_key INTEGER PRIMARY KEY AUTOINCREMENT,
                id TEXT NOT NULL UNIQUE,
                name TEXT NOT NULL,
                time_block TEXT NOT NULL,
                start_time TEXT NOT NULL,
                end_time TEXT NOT NULL
            )",
            [],
        )
        .map_err(|e| Error::StoreError(format!("Failed to create playlists table: {}", e)))?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS songs (
                doc_key INTEGER PRIMARY KEY AUTOINCREMENT,
                id TEXT NOT NULL UNIQUE,
                playlist_id TEXT,
                title TEXT NOT NULL,
                artist TEXT NOT NULL,
                url TEXT NOT NULL,
                time_block TEXT NOT NULL
            )",
            [],
        )
        .map_err(|e| Error::StoreError(format!("Failed to create songs table: {}", e)))?;

        conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_playlists_time_block ON playlists(time_block)",
            [],
        )
        .map_err(|e| Error::StoreError(format!("Failed to create index: {}", e)))?;

        conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_songs_playlist ON songs(playlist_id)",
            [],
        )
        .map_err(|e| Error::StoreError(format!("Failed to create index: {}", e)))?;

        Ok(())
    }

    /// Vide les deux collections puis insère le jeu de données fourni
    ///
    /// Opération explicite : elle n'est appelée qu'au démarrage du process
    /// (ou à la demande), jamais au fil des requêtes.
    pub async fn reseed(&self, playlists: &[Playlist], songs: &[Song]) -> Result<()> {
        let mut conn = self.conn.lock().unwrap();
        let tx = conn
            .transaction()
            .map_err(|e| Error::StoreError(format!("Failed to start transaction: {}", e)))?;

        tx.execute("DELETE FROM songs", [])
            .map_err(|e| Error::StoreError(format!("Failed to clear songs: {}", e)))?;
        tx.execute("DELETE FROM playlists", [])
            .map_err(|e| Error::StoreError(format!("Failed to clear playlists: {}", e)))?;

        for playlist in playlists {
            tx.execute(
                "INSERT INTO playlists (id, name, time_block, start_time, end_time)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    playlist.id,
                    playlist.name,
                    playlist.time_block,
                    playlist.start_time,
                    playlist.end_time,
                ],
            )
            .map_err(|e| Error::StoreError(format!("Failed to insert playlist: {}", e)))?;
        }

        for song in songs {
            tx.execute(
                "INSERT INTO songs (id, playlist_id, title, artist, url, time_block)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    song.id,
                    song.playlist_id,
                    song.title,
                    song.artist,
                    song.url,
                    song.time_block,
                ],
            )
            .map_err(|e| Error::StoreError(format!("Failed to insert song: {}", e)))?;
        }

        tx.commit()
            .map_err(|e| Error::StoreError(format!("Failed to commit seed: {}", e)))?;

        info!(
            playlists = playlists.len(),
            songs = songs.len(),
            "Collections reseeded"
        );
        Ok(())
    }

    /// Cherche la playlist associée à un bloc horaire
    pub async fn find_playlist_by_time_block(&self, time_block: &str) -> Result<Option<Playlist>> {
        let conn = self.conn.lock().unwrap();
        conn.query_row(
            &format!("SELECT {PLAYLIST_COLUMNS} FROM playlists WHERE time_block = ?1"),
            params![time_block],
            playlist_from_row,
        )
        .optional()
        .map_err(|e| Error::StoreError(format!("Failed to query playlist: {}", e)))
    }

    /// Cherche une playlist par sa clé publique
    pub async fn find_playlist_by_id(&self, id: &str) -> Result<Option<Playlist>> {
        let conn = self.conn.lock().unwrap();
        conn.query_row(
            &format!("SELECT {PLAYLIST_COLUMNS} FROM playlists WHERE id = ?1"),
            params![id],
            playlist_from_row,
        )
        .optional()
        .map_err(|e| Error::StoreError(format!("Failed to query playlist: {}", e)))
    }

    /// Morceaux rattachés à une playlist (séquence vide si aucun)
    pub async fn songs_by_playlist(&self, playlist_id: &str) -> Result<Vec<Song>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn
            .prepare(&format!(
                "SELECT {SONG_COLUMNS} FROM songs WHERE playlist_id = ?1"
            ))
            .map_err(|e| Error::StoreError(format!("Failed to prepare query: {}", e)))?;

        let songs = stmt
            .query_map(params![playlist_id], song_from_row)
            .map_err(|e| Error::StoreError(format!("Failed to query songs: {}", e)))?
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(|e| Error::StoreError(format!("Failed to read songs: {}", e)))?;

        Ok(songs)
    }

    /// Toutes les playlists, sans filtre
    pub async fn all_playlists(&self) -> Result<Vec<Playlist>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn
            .prepare(&format!("SELECT {PLAYLIST_COLUMNS} FROM playlists"))
            .map_err(|e| Error::StoreError(format!("Failed to prepare query: {}", e)))?;

        let playlists = stmt
            .query_map([], playlist_from_row)
            .map_err(|e| Error::StoreError(format!("Failed to query playlists: {}", e)))?
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(|e| Error::StoreError(format!("Failed to read playlists: {}", e)))?;

        Ok(playlists)
    }

    /// Tous les morceaux, sans filtre
    pub async fn all_songs(&self) -> Result<Vec<Song>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn
            .prepare(&format!("SELECT {SONG_COLUMNS} FROM songs"))
            .map_err(|e| Error::StoreError(format!("Failed to prepare query: {}", e)))?;

        let songs = stmt
            .query_map([], song_from_row)
            .map_err(|e| Error::StoreError(format!("Failed to query songs: {}", e)))?
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(|e| Error::StoreError(format!("Failed to read songs: {}", e)))?;

        Ok(songs)
    }
}

#[cfg(test)]
impl DocumentStore {
    /// Supprime les deux tables pour simuler un store défaillant
    pub(crate) fn drop_collections(&self) {
        let conn = self.conn.lock().unwrap();
        conn.execute_batch("DROP TABLE songs; DROP TABLE playlists;")
            .unwrap();
    }
}

// Projections ligne -> modèle : doc_key n'est jamais lu
fn playlist_from_row(row: &Row<'_>) -> rusqlite::Result<Playlist> {
    Ok(Playlist {
        id: row.get("id")?,
        name: row.get("name")?,
        time_block: row.get("time_block")?,
        start_time: row.get("start_time")?,
        end_time: row.get("end_time")?,
    })
}

fn song_from_row(row: &Row<'_>) -> rusqlite::Result<Song> {
    Ok(Song {
        id: row.get("id")?,
        playlist_id: row.get("playlist_id")?,
        title: row.get("title")?,
        artist: row.get("artist")?,
        url: row.get("url")?,
        time_block: row.get("time_block")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    async fn seeded_store() -> DocumentStore {
        let store = DocumentStore::open_in_memory().unwrap();
        seed::seed_store(&store).await.unwrap();
        store
    }

    #[tokio::test]
    async fn test_seeded_collections() {
        let store = seeded_store().await;
        assert_eq!(store.all_playlists().await.unwrap().len(), 6);
        assert_eq!(store.all_songs().await.unwrap().len(), 18);
    }

    #[tokio::test]
    async fn test_find_by_time_block() {
        let store = seeded_store().await;
        let playlist = store
            .find_playlist_by_time_block("morning")
            .await
            .unwrap()
            .expect("morning playlist seeded");
        assert_eq!(playlist.name, "Coffee & Energy");
        assert!(store
            .find_playlist_by_time_block("brunch")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_songs_linked_to_playlist() {
        let store = seeded_store().await;
        let playlist = store
            .find_playlist_by_time_block("evening")
            .await
            .unwrap()
            .unwrap();
        let songs = store.songs_by_playlist(&playlist.id).await.unwrap();
        assert_eq!(songs.len(), 3);
        assert!(songs
            .iter()
            .all(|s| s.playlist_id.as_deref() == Some(playlist.id.as_str())));
    }

    #[tokio::test]
    async fn test_storage_key_never_serialized() {
        let store = seeded_store().await;
        let playlist = store.all_playlists().await.unwrap().remove(0);
        let json = serde_json::to_value(&playlist).unwrap();
        let keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
        assert!(!keys.iter().any(|k| k.contains("doc_key") || k == "_id"));
        assert!(keys.contains(&"id".to_string()));
    }

    #[tokio::test]
    async fn test_reseed_replaces_everything() {
        let store = seeded_store().await;
        let before = store.all_playlists().await.unwrap();

        seed::seed_store(&store).await.unwrap();
        let after = store.all_playlists().await.unwrap();

        // Mêmes collections, nouveaux identifiants
        assert_eq!(after.len(), before.len());
        assert!(after.iter().all(|p| !before.iter().any(|b| b.id == p.id)));
    }
}
