//! Couche CORS appliquée à toutes les réponses du serveur.
//!
//! L'origine autorisée vient de la configuration (`*` par défaut) ; les
//! requêtes préflight OPTIONS reçoivent un 200 vide portant les mêmes
//! en-têtes, quel que soit le chemin demandé.

use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, HeaderValue, Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

/// Origine autorisée, figée au démarrage du serveur
#[derive(Clone)]
pub struct CorsPolicy {
    allow_origin: HeaderValue,
}

impl CorsPolicy {
    /// Construit la politique ; une origine invalide retombe sur `*`
    pub fn new(origin: &str) -> Self {
        let allow_origin = HeaderValue::from_str(origin)
            .unwrap_or_else(|_| HeaderValue::from_static("*"));
        Self { allow_origin }
    }
}

impl Default for CorsPolicy {
    fn default() -> Self {
        Self::new("*")
    }
}

/// Middleware axum : court-circuite OPTIONS, décore toutes les autres réponses
pub async fn apply_cors(
    State(policy): State<CorsPolicy>,
    request: Request,
    next: Next,
) -> Response {
    if request.method() == Method::OPTIONS {
        let mut response = StatusCode::OK.into_response();
        set_cors_headers(response.headers_mut(), &policy);
        return response;
    }

    let mut response = next.run(request).await;
    set_cors_headers(response.headers_mut(), &policy);
    response
}

fn set_cors_headers(headers: &mut HeaderMap, policy: &CorsPolicy) {
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        policy.allow_origin.clone(),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, POST, PUT, DELETE, OPTIONS"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type, Authorization"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
        HeaderValue::from_static("true"),
    );
}
