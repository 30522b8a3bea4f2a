//! Documentation OpenAPI pour l'API playlists.

use utoipa::OpenApi;

/// Documentation OpenAPI de l'API de lecture des playlists.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::root_info,
        crate::api::current_playlist,
        crate::api::get_playlist,
        crate::api::playlist_songs,
        crate::api::list_playlists,
        crate::api::list_songs,
    ),
    components(
        schemas(
            crate::model::Playlist,
            crate::model::Song,
            crate::api::ApiInfoResponse,
            crate::api::CurrentPlaylistResponse,
            crate::api::PlaylistDetailResponse,
            crate::api::ErrorResponse,
        )
    ),
    tags(
        (name = "playlists", description = "Sélection de playlists selon l'heure du jour")
    ),
    info(
        title = "Salil Music Player API",
        version = "1.0.0",
        description = r#"
# API de playlists horaires

La journée est découpée en six blocs horaires fixes ; chaque bloc possède
une playlist et chaque playlist ses morceaux.

- `GET /current-playlist` : playlist du bloc courant
- `GET /playlist/{id}` : playlist et morceaux
- `GET /playlist/{id}/songs` : morceaux seuls
- `GET /playlists`, `GET /songs` : listes complètes
        "#,
    )
)]
pub struct ApiDoc;
