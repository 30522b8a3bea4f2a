//! API REST de lecture des playlists.

use axum::{
    extract::{OriginalUri, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::model::{Playlist, Song};
use crate::service::{CurrentPlaylist, PlaylistService, PlaylistWithSongs};
use crate::Error;

/// Nom du service annoncé par l'endpoint racine
const API_NAME: &str = "Salil Music Player API";
const API_VERSION: &str = "1.0.0";

/// Router de l'API playlists, monté à la racine du serveur.
///
/// L'ordre de priorité des routes est structurel : `/playlist/{id}/songs`
/// est un chemin plus spécifique que `/playlist/{id}`, jamais une question
/// de préfixe de chaîne. Les verbes non définis retombent sur le 404
/// générique, comme les chemins inconnus.
pub fn playlist_api_router(service: PlaylistService) -> Router {
    Router::new()
        .route("/", get(root_info))
        .route("/current-playlist", get(current_playlist))
        .route("/playlist/{playlist_id}", get(get_playlist))
        .route("/playlist/{playlist_id}/songs", get(playlist_songs))
        .route("/playlists", get(list_playlists))
        .route("/songs", get(list_songs))
        .fallback(route_not_found)
        .method_not_allowed_fallback(route_not_found)
        .with_state(service)
}

/// Métadonnées du service (endpoint racine)
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiInfoResponse {
    pub message: String,
    pub version: String,
    pub endpoints: Vec<String>,
}

/// Playlist active et bloc horaire résolu
#[derive(Debug, Serialize, ToSchema)]
pub struct CurrentPlaylistResponse {
    pub playlist: Playlist,
    pub songs: Vec<Song>,
    pub current_time_block: String,
}

/// Playlist détaillée (avec ses morceaux)
#[derive(Debug, Serialize, ToSchema)]
pub struct PlaylistDetailResponse {
    pub playlist: Playlist,
    pub songs: Vec<Song>,
}

/// Réponse d'erreur REST générique
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl From<CurrentPlaylist> for CurrentPlaylistResponse {
    fn from(value: CurrentPlaylist) -> Self {
        Self {
            playlist: value.playlist,
            songs: value.songs,
            current_time_block: value.current_time_block,
        }
    }
}

impl From<PlaylistWithSongs> for PlaylistDetailResponse {
    fn from(value: PlaylistWithSongs) -> Self {
        Self {
            playlist: value.playlist,
            songs: value.songs,
        }
    }
}

#[utoipa::path(
    get,
    path = "/",
    tag = "playlists",
    responses(
        (status = 200, description = "Métadonnées du service", body = ApiInfoResponse)
    )
)]
pub async fn root_info() -> Response {
    let info = ApiInfoResponse {
        message: API_NAME.to_string(),
        version: API_VERSION.to_string(),
        endpoints: vec![
            "GET /current-playlist".to_string(),
            "GET /playlist/:id".to_string(),
            "GET /playlist/:id/songs".to_string(),
            "GET /playlists".to_string(),
            "GET /songs".to_string(),
        ],
    };
    (StatusCode::OK, Json(info)).into_response()
}

#[utoipa::path(
    get,
    path = "/current-playlist",
    tag = "playlists",
    responses(
        (status = 200, description = "Playlist du bloc horaire courant", body = CurrentPlaylistResponse),
        (status = 404, description = "Aucune playlist pour le bloc courant", body = ErrorResponse)
    )
)]
pub async fn current_playlist(State(service): State<PlaylistService>) -> Response {
    match service.current_playlist().await {
        Ok(current) => (
            StatusCode::OK,
            Json(CurrentPlaylistResponse::from(current)),
        )
            .into_response(),
        Err(Error::PlaylistNotFound(_)) => {
            map_status(StatusCode::NOT_FOUND, "No playlist found for current time")
        }
        Err(err) => map_error(err),
    }
}

#[utoipa::path(
    get,
    path = "/playlist/{playlist_id}",
    tag = "playlists",
    params(
        ("playlist_id" = String, Path, description = "Identifiant de la playlist")
    ),
    responses(
        (status = 200, description = "Playlist détaillée", body = PlaylistDetailResponse),
        (status = 404, description = "Playlist introuvable", body = ErrorResponse)
    )
)]
pub async fn get_playlist(
    State(service): State<PlaylistService>,
    Path(playlist_id): Path<String>,
) -> Response {
    match service.playlist_by_id(&playlist_id).await {
        Ok(detail) => (StatusCode::OK, Json(PlaylistDetailResponse::from(detail))).into_response(),
        Err(err) => map_error(err),
    }
}

#[utoipa::path(
    get,
    path = "/playlist/{playlist_id}/songs",
    tag = "playlists",
    params(
        ("playlist_id" = String, Path, description = "Identifiant de la playlist")
    ),
    responses(
        (status = 200, description = "Morceaux de la playlist (liste vide si aucun)", body = [Song])
    )
)]
pub async fn playlist_songs(
    State(service): State<PlaylistService>,
    Path(playlist_id): Path<String>,
) -> Response {
    match service.songs_by_playlist(&playlist_id).await {
        Ok(songs) => (StatusCode::OK, Json(songs)).into_response(),
        Err(err) => map_error(err),
    }
}

#[utoipa::path(
    get,
    path = "/playlists",
    tag = "playlists",
    responses(
        (status = 200, description = "Toutes les playlists", body = [Playlist])
    )
)]
pub async fn list_playlists(State(service): State<PlaylistService>) -> Response {
    match service.list_playlists().await {
        Ok(playlists) => (StatusCode::OK, Json(playlists)).into_response(),
        Err(err) => map_error(err),
    }
}

#[utoipa::path(
    get,
    path = "/songs",
    tag = "playlists",
    responses(
        (status = 200, description = "Tous les morceaux", body = [Song])
    )
)]
pub async fn list_songs(State(service): State<PlaylistService>) -> Response {
    match service.list_songs().await {
        Ok(songs) => (StatusCode::OK, Json(songs)).into_response(),
        Err(err) => map_error(err),
    }
}

/// 404 générique : chemins inconnus et verbes non définis
pub async fn route_not_found(OriginalUri(uri): OriginalUri) -> Response {
    map_status(
        StatusCode::NOT_FOUND,
        &format!("Route {} not found", uri.path()),
    )
}

fn map_status<S: Into<String>>(status: StatusCode, message: S) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
            details: None,
        }),
    )
        .into_response()
}

/// Conversion des erreurs service vers la frontière HTTP.
///
/// Tout ce qui n'est pas classé devient un 500 générique avec le texte de
/// l'erreur en détail ; l'échec d'une requête ne remonte jamais plus haut.
fn map_error(error: Error) -> Response {
    match &error {
        Error::PlaylistNotFound(_) => map_status(StatusCode::NOT_FOUND, "Playlist not found"),
        Error::InvalidHour(_) => map_status(StatusCode::BAD_REQUEST, error.to_string()),
        Error::StoreError(_) | Error::Other(_) => {
            tracing::error!(error = %error, "Request failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Internal server error".to_string(),
                    details: Some(error.to_string()),
                }),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;
    use crate::store::DocumentStore;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use serde_json::Value;
    use std::sync::Arc;
    use tower::util::ServiceExt;

    async fn test_router() -> Router {
        let store = Arc::new(DocumentStore::open_in_memory().unwrap());
        seed::seed_store(&store).await.unwrap();
        playlist_api_router(PlaylistService::new(store))
    }

    async fn send(router: &Router, method: &str, path: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(path)
            .body(Body::empty())
            .unwrap();
        let response = router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    #[tokio::test]
    async fn test_root_metadata() {
        let router = test_router().await;
        let (status, body) = send(&router, "GET", "/").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Salil Music Player API");
        assert_eq!(body["version"], "1.0.0");
        assert!(body["endpoints"].as_array().unwrap().len() >= 4);
    }

    #[tokio::test]
    async fn test_current_playlist() {
        let router = test_router().await;
        let (status, body) = send(&router, "GET", "/current-playlist").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body["current_time_block"].is_string());
        assert_eq!(body["songs"].as_array().unwrap().len(), 3);
        assert_eq!(
            body["playlist"]["time_block"],
            body["current_time_block"]
        );
    }

    #[tokio::test]
    async fn test_playlist_by_id() {
        let router = test_router().await;
        let (_, playlists) = send(&router, "GET", "/playlists").await;
        let id = playlists[0]["id"].as_str().unwrap().to_string();

        let (status, body) = send(&router, "GET", &format!("/playlist/{}", id)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["playlist"]["id"], id.as_str());
        assert_eq!(body["songs"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_unknown_playlist_is_404() {
        let router = test_router().await;
        let (status, body) = send(&router, "GET", "/playlist/does-not-exist").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, serde_json::json!({"error": "Playlist not found"}));
    }

    #[tokio::test]
    async fn test_songs_subresource_wins_over_playlist_route() {
        // /playlist/abc/songs doit atteindre le handler des morceaux, pas
        // celui de la playlist : 200 avec une liste vide, jamais un 404.
        let router = test_router().await;
        let (status, body) = send(&router, "GET", "/playlist/abc/songs").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_listings() {
        let router = test_router().await;

        let (status, playlists) = send(&router, "GET", "/playlists").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(playlists.as_array().unwrap().len(), 6);

        let (status, songs) = send(&router, "GET", "/songs").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(songs.as_array().unwrap().len(), 18);
    }

    #[tokio::test]
    async fn test_unknown_route_message() {
        let router = test_router().await;
        let (status, body) = send(&router, "GET", "/foo/bar").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, serde_json::json!({"error": "Route /foo/bar not found"}));
    }

    #[tokio::test]
    async fn test_undefined_verb_falls_through_to_404() {
        let router = test_router().await;
        let (status, body) = send(&router, "POST", "/playlists").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            body,
            serde_json::json!({"error": "Route /playlists not found"})
        );
    }

    #[tokio::test]
    async fn test_store_failure_yields_internal_server_error_body() {
        let store = Arc::new(DocumentStore::open_in_memory().unwrap());
        store.drop_collections();
        let router = playlist_api_router(PlaylistService::new(store));

        let (status, body) = send(&router, "GET", "/playlists").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Internal server error");
        let details = body["details"].as_str().unwrap();
        assert!(details.starts_with("Store error:"), "details: {details}");
    }
}
