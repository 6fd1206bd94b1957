use std::path::Path;

use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, COOKIE, SET_COOKIE};
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use notepad::{build_router, salted_hash, AppState, Config, NoteStore};

pub const SALT: &str = "test-salt";
pub const SECRET: &str = "test-secret";
#[allow(dead_code)]
pub const APP_PASSWORD: &str = "open-sesame";

/// Build a test `Config`. `app_password` is the plaintext; it is stored hashed.
pub fn test_config(app_password: Option<&str>) -> Config {
    Config {
        salt: SALT.to_string(),
        secret: SECRET.to_string(),
        app_password: app_password.map(|pw| salted_hash(pw, SALT)),
        db_path: "unused".into(),
        assets_dir: "static".into(),
        path_len: 6,
        host: "127.0.0.1".to_string(),
        port: 0,
    }
}

/// Full router over a temporary sled database. The store handle is returned
/// so tests can inspect what was persisted.
#[allow(dead_code)]
pub fn build_test_app(app_password: Option<&str>) -> (Router, NoteStore) {
    let store = NoteStore::temporary().unwrap();
    let state = AppState::new(test_config(app_password), store.clone());
    (build_router(state), store)
}

/// Router whose static services read from `assets_dir`.
#[allow(dead_code)]
pub fn build_test_app_with_assets(assets_dir: &Path) -> Router {
    let config = Config {
        assets_dir: assets_dir.to_path_buf(),
        ..test_config(None)
    };
    let store = NoteStore::temporary().unwrap();
    build_router(AppState::new(config, store))
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &Router, uri: &str, cookie: Option<&str>) -> Response<Body> {
    let mut builder = Request::builder().method(Method::GET).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }
    send(app, builder.body(Body::empty()).unwrap()).await
}

#[allow(dead_code)]
pub async fn get_with_lang(app: &Router, uri: &str, lang: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header("accept-language", lang)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

#[allow(dead_code)]
pub async fn post_json(
    app: &Router,
    uri: &str,
    body: serde_json::Value,
    cookie: Option<&str>,
) -> Response<Body> {
    post_raw_json(app, uri, body.to_string(), cookie).await
}

#[allow(dead_code)]
pub async fn post_raw_json(
    app: &Router,
    uri: &str,
    body: String,
    cookie: Option<&str>,
) -> Response<Body> {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json");
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }
    send(app, builder.body(Body::from(body)).unwrap()).await
}

/// Content save, as the editor sends it: urlencoded form field `t`.
#[allow(dead_code)]
pub async fn post_content(
    app: &Router,
    uri: &str,
    content: &str,
    cookie: Option<&str>,
) -> Response<Body> {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }
    let body = format!("t={}", urlencoding::encode(content));
    send(app, builder.body(Body::from(body)).unwrap()).await
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[allow(dead_code)]
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Full `Set-Cookie` header value, if any.
#[allow(dead_code)]
pub fn set_cookie(response: &Response<Body>) -> Option<String> {
    response
        .headers()
        .get(SET_COOKIE)
        .map(|v| v.to_str().unwrap().to_string())
}

/// The `name=value` pair of the `Set-Cookie` header, ready for a `Cookie` header.
#[allow(dead_code)]
pub fn cookie_pair(response: &Response<Body>) -> String {
    let header = set_cookie(response).expect("response has no Set-Cookie header");
    header.split(';').next().unwrap().to_string()
}
