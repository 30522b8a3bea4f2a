//! Jeu de données d'exemple : six playlists (une par bloc horaire) et leurs
//! morceaux, insérés une fois au démarrage du service.

use crate::model::{Playlist, Song};
use crate::store::DocumentStore;
use crate::Result;
use uuid::Uuid;

struct SeedPlaylist {
    name: &'static str,
    time_block: &'static str,
    start_time: &'static str,
    end_time: &'static str,
}

struct SeedSong {
    title: &'static str,
    artist: &'static str,
    url: &'static str,
    time_block: &'static str,
}

const SAMPLE_PLAYLISTS: [SeedPlaylist; 6] = [
    SeedPlaylist {
        name: "Dawn Serenity",
        time_block: "early-morning",
        start_time: "04:00",
        end_time: "08:00",
    },
    SeedPlaylist {
        name: "Coffee & Energy",
        time_block: "morning",
        start_time: "08:00",
        end_time: "12:00",
    },
    SeedPlaylist {
        name: "Afternoon Flow",
        time_block: "afternoon",
        start_time: "12:00",
        end_time: "16:00",
    },
    SeedPlaylist {
        name: "Golden Hour",
        time_block: "evening",
        start_time: "16:00",
        end_time: "20:00",
    },
    SeedPlaylist {
        name: "Night Vibes",
        time_block: "night",
        start_time: "20:00",
        end_time: "00:00",
    },
    SeedPlaylist {
        name: "Deep Sleep",
        time_block: "late-night",
        start_time: "00:00",
        end_time: "04:00",
    },
];

const SAMPLE_SONGS: [SeedSong; 18] = [
    // Early morning
    SeedSong {
        title: "Morning Mist",
        artist: "Nature Sounds",
        url: "/music/03.mp3",
        time_block: "early-morning",
    },
    SeedSong {
        title: "Gentle Sunrise",
        artist: "Ambient Dreams",
        url: "/music/05.mp3",
        time_block: "early-morning",
    },
    SeedSong {
        title: "Bird Song Symphony",
        artist: "Forest Echoes",
        url: "/music/06.mp3",
        time_block: "early-morning",
    },
    // Morning
    SeedSong {
        title: "Fresh Start",
        artist: "Positive Vibes",
        url: "/music/03.mp3",
        time_block: "morning",
    },
    SeedSong {
        title: "Morning Motivation",
        artist: "Upbeat Collective",
        url: "/music/05.mp3",
        time_block: "morning",
    },
    SeedSong {
        title: "New Day Rising",
        artist: "Energy Boost",
        url: "/music/06.mp3",
        time_block: "morning",
    },
    // Afternoon
    SeedSong {
        title: "Focus Mode",
        artist: "Productivity Mix",
        url: "/music/03.mp3",
        time_block: "afternoon",
    },
    SeedSong {
        title: "Steady Rhythm",
        artist: "Work Beats",
        url: "/music/05.mp3",
        time_block: "afternoon",
    },
    SeedSong {
        title: "Creative Energy",
        artist: "Flow State",
        url: "/music/06.mp3",
        time_block: "afternoon",
    },
    // Evening
    SeedSong {
        title: "Sunset Dreams",
        artist: "Chill Collective",
        url: "/music/07.mp3",
        time_block: "evening",
    },
    SeedSong {
        title: "Evening Breeze",
        artist: "Relaxed Vibes",
        url: "/music/08.mp3",
        time_block: "evening",
    },
    SeedSong {
        title: "Twilight Glow",
        artist: "Ambient Hour",
        url: "/music/09.mp3",
        time_block: "evening",
    },
    // Night
    SeedSong {
        title: "City Lights",
        artist: "Urban Nights",
        url: "/music/07.mp3",
        time_block: "night",
    },
    SeedSong {
        title: "Midnight Groove",
        artist: "Night Owls",
        url: "/music/08.mp3",
        time_block: "night",
    },
    SeedSong {
        title: "Starlit Sky",
        artist: "Evening Jazz",
        url: "/music/09.mp3",
        time_block: "night",
    },
    // Late night
    SeedSong {
        title: "Peaceful Slumber",
        artist: "Sleep Sounds",
        url: "/music/03.mp3",
        time_block: "late-night",
    },
    SeedSong {
        title: "Night Rain",
        artist: "Calm Waters",
        url: "/music/05.mp3",
        time_block: "late-night",
    },
    SeedSong {
        title: "Dream State",
        artist: "Soft Melodies",
        url: "/music/06.mp3",
        time_block: "late-night",
    },
];

/// Construit le jeu d'exemple avec des identifiants frais
///
/// Chaque morceau est rattaché à la playlist de son bloc horaire au moment
/// de la génération.
pub fn sample_data() -> (Vec<Playlist>, Vec<Song>) {
    let playlists: Vec<Playlist> = SAMPLE_PLAYLISTS
        .iter()
        .map(|p| Playlist {
            id: Uuid::new_v4().to_string(),
            name: p.name.to_string(),
            time_block: p.time_block.to_string(),
            start_time: p.start_time.to_string(),
            end_time: p.end_time.to_string(),
        })
        .collect();

    let songs = SAMPLE_SONGS
        .iter()
        .map(|s| {
            let playlist_id = playlists
                .iter()
                .find(|p| p.time_block == s.time_block)
                .map(|p| p.id.clone());
            Song {
                id: Uuid::new_v4().to_string(),
                playlist_id,
                title: s.title.to_string(),
                artist: s.artist.to_string(),
                url: s.url.to_string(),
                time_block: s.time_block.to_string(),
            }
        })
        .collect();

    (playlists, songs)
}

/// Réinitialise le store avec le jeu d'exemple
pub async fn seed_store(store: &DocumentStore) -> Result<()> {
    let (playlists, songs) = sample_data();
    store.reseed(&playlists, &songs).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_playlist_per_block_three_songs_each() {
        let (playlists, songs) = sample_data();
        assert_eq!(playlists.len(), 6);
        assert_eq!(songs.len(), 18);

        for playlist in &playlists {
            let count = songs
                .iter()
                .filter(|s| s.playlist_id.as_deref() == Some(playlist.id.as_str()))
                .count();
            assert_eq!(count, 3, "playlist {} should own 3 songs", playlist.name);
        }
    }

    #[test]
    fn test_every_song_linked() {
        let (playlists, songs) = sample_data();
        for song in &songs {
            let owner = song.playlist_id.as_ref().expect("song linked at seed time");
            assert!(playlists.iter().any(|p| &p.id == owner));
        }
    }
}
