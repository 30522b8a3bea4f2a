//! Modèles de données exposés par l'API.
//!
//! Ces structures correspondent aux documents persistés, débarrassés de la
//! clé interne de stockage : `id` est le seul identifiant qui sorte du store.

use serde::{Deserialize, Serialize};

/// Une playlist associée à un bloc horaire (relation 1:1)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct Playlist {
    /// UUID visible côté client
    pub id: String,
    pub name: String,
    /// Identifiant du bloc horaire (`morning`, `late-night`, ...)
    pub time_block: String,
    /// Heure de début au format "HH:MM"
    pub start_time: String,
    /// Heure de fin au format "HH:MM"
    pub end_time: String,
}

/// Un morceau appartenant à une playlist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct Song {
    /// UUID visible côté client
    pub id: String,
    /// Playlist propriétaire ; null tant que le morceau n'est pas rattaché
    pub playlist_id: Option<String>,
    pub title: String,
    pub artist: String,
    /// URL de lecture servie au player
    pub url: String,
    pub time_block: String,
}
