//! HTTP route handlers.
//!
//! Page handlers render full HTML documents; the `POST` endpoints answer with
//! the `{err, data?, msg?}` JSON envelope, always with status 200.

use axum::{
    extract::{
        rejection::{FormRejection, JsonRejection},
        OriginalUri, Path, State,
    },
    http::{
        header::{LOCATION, SET_COOKIE},
        HeaderMap, StatusCode,
    },
    response::{Html, IntoResponse, Response},
    Form, Json,
};
use axum_extra::extract::CookieJar;
use chrono::Utc;
use serde_json::json;

use crate::auth::{
    app_cookie, check_app_auth, check_auth, clear_note_cookie, note_cookie, note_cookie_path,
    password_matches, salted_hash, sign, Claim,
};
use crate::error::{ApiError, ApiResult, ErrorCode};
use crate::i18n::Lang;
use crate::models::{
    ApiResponse, AppAuthRequest, NoteLookup, PasswordRequest, SaveForm, SettingRequest,
};
use crate::notes::random_path;
use crate::templates;
use crate::AppState;

fn now() -> i64 {
    Utc::now().timestamp()
}

/// Page 404 with the given status.
fn not_found_page(lang: Lang, status: StatusCode) -> Response {
    (status, Html(templates::page_404(lang, now()))).into_response()
}

/// Only site-relative paths are honored as redirect targets.
pub fn sanitize_return_url(url: Option<&str>) -> String {
    match url {
        Some(u) if u.starts_with('/') && !u.starts_with("//") && !u.starts_with("/\\") => {
            u.to_string()
        }
        _ => "/".to_string(),
    }
}

fn with_cookie(cookie: String, body: ApiResponse) -> Response {
    let mut headers = HeaderMap::new();
    match cookie.parse() {
        Ok(value) => {
            headers.insert(SET_COOKIE, value);
        }
        Err(e) => tracing::error!(error = %e, "invalid Set-Cookie header value"),
    }
    (headers, Json(body)).into_response()
}

// ============================================================================
// Auth Gate
// ============================================================================

/// Write access to a note: the caller must hold a token for a protected note,
/// and may only create a new note past the app gate.
fn authorize_write(
    state: &AppState,
    jar: &CookieJar,
    path: &str,
    lookup: &NoteLookup,
    denied: ApiError,
) -> ApiResult<()> {
    match lookup {
        NoteLookup::NotFound
            if state.config.app_password_enabled()
                && !check_app_auth(jar, &state.config.secret) =>
        {
            Err(ApiError::with_message(
                ErrorCode::AppPasswordMismatch,
                "App password required!",
            ))
        }
        NoteLookup::Protected(_) if !check_auth(jar, path, &state.config.secret) => Err(denied),
        _ => Ok(()),
    }
}

// ============================================================================
// Index Handler
// ============================================================================

pub async fn index(State(state): State<AppState>, headers: HeaderMap, jar: CookieJar) -> Response {
    let lang = Lang::from_headers(&headers);

    if state.config.app_password_enabled() && !check_app_auth(&jar, &state.config.secret) {
        return Html(templates::app_auth(lang, "Cloud Notepad", "/", now())).into_response();
    }

    let target = format!("/{}", random_path(state.config.path_len));
    (StatusCode::FOUND, [(LOCATION, target)]).into_response()
}

// ============================================================================
// Note Pages
// ============================================================================

pub async fn note_page(
    Path(path): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
    jar: CookieJar,
) -> Response {
    let lang = Lang::from_headers(&headers);

    let lookup = match state.store.query_note(&path) {
        Ok(lookup) => lookup,
        Err(e) => {
            tracing::error!(error = %e, path = %path, "failed to read note");
            return not_found_page(lang, StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    if !lookup.exists()
        && state.config.app_password_enabled()
        && !check_app_auth(&jar, &state.config.secret)
    {
        let return_url = format!("/{}", urlencoding::encode(&path));
        return Html(templates::app_auth(lang, &path, &return_url, now())).into_response();
    }

    if lookup.is_protected() && !check_auth(&jar, &path, &state.config.secret) {
        return Html(templates::need_passwd(lang, &path, now())).into_response();
    }

    let note = lookup.into_note();
    Html(templates::edit(lang, &path, &note, now())).into_response()
}

pub async fn share_page(
    Path(hash): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Response {
    let lang = Lang::from_headers(&headers);

    let found = state.store.lookup_share(&hash).and_then(|path| match path {
        Some(path) => state.store.query_note(&path).map(|lookup| Some((path, lookup))),
        None => Ok(None),
    });

    match found {
        Ok(Some((path, lookup))) if lookup.exists() => {
            let note = lookup.into_note();
            Html(templates::share(lang, &path, &note, now())).into_response()
        }
        Ok(_) => not_found_page(lang, StatusCode::NOT_FOUND),
        Err(e) => {
            tracing::error!(error = %e, hash = %hash, "failed to resolve share");
            not_found_page(lang, StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

pub async fn not_found(headers: HeaderMap) -> Response {
    not_found_page(Lang::from_headers(&headers), StatusCode::NOT_FOUND)
}

// ============================================================================
// Authentication Handlers
// ============================================================================

pub async fn app_auth(
    State(state): State<AppState>,
    body: Result<Json<AppAuthRequest>, JsonRejection>,
) -> Response {
    let denied = ApiError::new(ErrorCode::AppPasswordMismatch);

    let Ok(Json(body)) = body else {
        return denied.into_response();
    };
    let Some(expected) = state.config.app_password.as_deref() else {
        return denied.into_response();
    };

    if !password_matches(&body.passwd, &state.config.salt, expected) {
        tracing::warn!("failed app password attempt");
        return denied.into_response();
    }

    let redirect = sanitize_return_url(body.return_url.as_deref());
    let Some(token) = sign(&Claim::app(), &state.config.secret) else {
        return denied.into_response();
    };
    tracing::info!(redirect = %redirect, "app password accepted");
    with_cookie(
        app_cookie(&token),
        ApiResponse::with_data(json!({ "redirect": redirect })),
    )
}

pub async fn note_auth(
    Path(path): Path<String>,
    OriginalUri(uri): OriginalUri,
    State(state): State<AppState>,
    body: Result<Json<PasswordRequest>, JsonRejection>,
) -> Response {
    let denied = ApiError::new(ErrorCode::PasswordMismatch);

    let Ok(Json(body)) = body else {
        return denied.into_response();
    };

    let lookup = match state.store.query_note(&path) {
        Ok(lookup) => lookup,
        Err(e) => return ApiError::storage(ErrorCode::PasswordMismatch, e).into_response(),
    };

    let matched = match &lookup {
        NoteLookup::Protected(note) => note
            .metadata
            .pw
            .as_deref()
            .is_some_and(|stored| password_matches(&body.passwd, &state.config.salt, stored)),
        _ => false,
    };

    if !matched {
        tracing::warn!(path = %path, "failed note password attempt");
        return denied.into_response();
    }

    let Some(token) = sign(&Claim::note(&path), &state.config.secret) else {
        return denied.into_response();
    };
    with_cookie(
        note_cookie(&note_cookie_path(uri.path(), "/auth", &path), &token),
        ApiResponse::with_data(json!({ "refresh": true })),
    )
}

// ============================================================================
// Note Writes
// ============================================================================

pub async fn set_password(
    Path(path): Path<String>,
    OriginalUri(uri): OriginalUri,
    State(state): State<AppState>,
    jar: CookieJar,
    body: Result<Json<PasswordRequest>, JsonRejection>,
) -> Response {
    let code = ErrorCode::PasswordSetFailed;

    let Ok(Json(body)) = body else {
        return ApiError::new(code).into_response();
    };

    let lookup = match state.store.query_note(&path) {
        Ok(lookup) => lookup,
        Err(e) => return ApiError::storage(code, e).into_response(),
    };
    if let Err(e) = authorize_write(&state, &jar, &path, &lookup, ApiError::new(code)) {
        return e.into_response();
    }

    let pw_hash = if body.passwd.is_empty() {
        None
    } else {
        Some(salted_hash(&body.passwd, &state.config.salt))
    };
    let protected = pw_hash.is_some();

    if let Err(e) = state.store.set_password(&path, pw_hash) {
        return ApiError::storage(code, e).into_response();
    }

    tracing::info!(path = %path, protected, "note password updated");
    with_cookie(
        clear_note_cookie(&note_cookie_path(uri.path(), "/pw", &path)),
        ApiResponse::ok(),
    )
}

pub async fn update_setting(
    Path(path): Path<String>,
    State(state): State<AppState>,
    jar: CookieJar,
    body: Result<Json<SettingRequest>, JsonRejection>,
) -> ApiResult<Json<ApiResponse>> {
    let code = ErrorCode::SettingFailed;

    let Json(body) = body.map_err(|_| ApiError::new(code))?;

    let lookup = state
        .store
        .query_note(&path)
        .map_err(|e| ApiError::storage(code, e))?;
    authorize_write(&state, &jar, &path, &lookup, ApiError::new(code))?;

    let hash = state
        .store
        .update_settings(&path, body.mode, body.share)
        .map_err(|e| ApiError::storage(code, e))?;

    Ok(Json(match hash {
        Some(hash) => ApiResponse::with_data(json!(hash)),
        None => ApiResponse::ok(),
    }))
}

pub async fn save_note(
    Path(path): Path<String>,
    State(state): State<AppState>,
    jar: CookieJar,
    form: Result<Form<SaveForm>, FormRejection>,
) -> ApiResult<Json<ApiResponse>> {
    let Form(form) = form.map_err(|_| ApiError::new(ErrorCode::SaveFailed))?;

    let lookup = state
        .store
        .query_note(&path)
        .map_err(|e| ApiError::storage(ErrorCode::SaveFailed, e))?;

    authorize_write(
        &state,
        &jar,
        &path,
        &lookup,
        ApiError::with_message(
            ErrorCode::PasswordMismatch,
            "Password auth failed! Try refreshing this page if you had just set a password.",
        ),
    )?;

    state
        .store
        .put_content(&path, &form.t, now())
        .map_err(|e| ApiError::storage(ErrorCode::SaveFailed, e))?;

    Ok(Json(ApiResponse::ok()))
}
