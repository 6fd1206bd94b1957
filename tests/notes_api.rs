//! Integration tests for note pages, passwords, settings and sharing.

mod common;

use axum::http::{header::LOCATION, StatusCode};
use common::{
    body_json, body_string, build_test_app, cookie_pair, get, get_with_lang, post_content,
    post_json, post_raw_json, set_cookie,
};
use notepad::{share_hash, Mode};
use serde_json::json;

// ---------------------------------------------------------------------------
// Test: GET / redirects to a fresh random path
// ---------------------------------------------------------------------------

#[tokio::test]
async fn index_redirects_to_random_path() {
    let (app, _) = build_test_app(None);

    let response = get(&app, "/", None).await;
    assert_eq!(response.status(), StatusCode::FOUND);

    let location = response.headers()[LOCATION].to_str().unwrap().to_string();
    assert!(location.starts_with('/'));
    assert_eq!(location.len(), 7);
    assert!(location[1..]
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));

    // Any cookie state still redirects when no app password is configured.
    let response = get(&app, "/", Some("app_auth=garbage; auth=junk")).await;
    assert_eq!(response.status(), StatusCode::FOUND);
}

// ---------------------------------------------------------------------------
// Test: unprotected notes render editable content
// ---------------------------------------------------------------------------

#[tokio::test]
async fn new_path_renders_empty_editor() {
    let (app, store) = build_test_app(None);

    let response = get(&app, "/fresh", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_string(response).await;
    assert!(html.contains("<title>fresh - Cloud Notepad</title>"));
    assert!(html.contains(r#"class="opt-button opt-pw""#));
    assert!(!html.contains("passwdPrompt()</script>"));

    // Viewing does not create the note.
    assert!(!store.query_note("fresh").unwrap().exists());
}

#[tokio::test]
async fn saved_content_is_rendered_escaped() {
    let (app, _) = build_test_app(None);

    let json = body_json(post_content(&app, "/todo", "milk & <eggs>", None).await).await;
    assert_eq!(json, json!({ "err": 0 }));

    let html = body_string(get(&app, "/todo", None).await).await;
    assert!(html.contains("milk &amp; &lt;eggs&gt;</textarea>"));
}

#[tokio::test]
async fn percent_encoded_path_is_decoded() {
    let (app, store) = build_test_app(None);

    post_content(&app, "/my%20note", "hello", None).await;
    assert_eq!(store.query_note("my note").unwrap().into_note().value, "hello");

    let html = body_string(get(&app, "/my%20note", None).await).await;
    assert!(html.contains("<title>my note - Cloud Notepad</title>"));
}

#[tokio::test]
async fn repeated_save_only_refreshes_timestamp() {
    let (app, store) = build_test_app(None);

    post_content(&app, "/same", "same", None).await;
    let first = store.query_note("same").unwrap().into_note();

    post_content(&app, "/same", "same", None).await;
    let second = store.query_note("same").unwrap().into_note();

    assert_eq!(first.value, "same");
    assert_eq!(second.value, "same");
    assert!(second.metadata.update_at.is_some());
    assert!(second.metadata.update_at >= first.metadata.update_at);
    assert_eq!(first.metadata.pw, second.metadata.pw);
    assert_eq!(first.metadata.mode, second.metadata.mode);
}

#[tokio::test]
async fn empty_content_save_creates_note() {
    let (app, store) = build_test_app(None);

    post_content(&app, "/blank", "", None).await;
    assert!(store.query_note("blank").unwrap().exists());
}

// ---------------------------------------------------------------------------
// Test: password protection
// ---------------------------------------------------------------------------

#[tokio::test]
async fn protected_note_hides_content_without_token() {
    let (app, _) = build_test_app(None);

    post_content(&app, "/diary", "dear diary", None).await;
    let response = post_json(&app, "/diary/pw", json!({ "passwd": "x" }), None).await;
    assert_eq!(body_json(response).await["err"], 0);

    let response = get(&app, "/diary", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;
    assert!(html.contains("This Note has been encrypted"));
    assert!(html.contains("<script>passwdPrompt()</script>"));
    assert!(!html.contains("dear diary"));
}

#[tokio::test]
async fn password_round_trip_unlocks_note() {
    let (app, store) = build_test_app(None);

    post_content(&app, "/p", "secret body", None).await;

    let response = post_json(&app, "/p/pw", json!({ "passwd": "x" }), None).await;
    let cleared = set_cookie(&response).unwrap();
    assert!(cleared.starts_with("auth=; Path=/p;"));
    assert!(cleared.contains("Max-Age=0"));
    assert_eq!(body_json(response).await["err"], 0);

    // Content survives setting a password.
    let note = store.query_note("p").unwrap().into_note();
    assert_eq!(note.value, "secret body");
    assert!(note.metadata.pw.is_some());
    assert_ne!(note.metadata.pw.as_deref(), Some("x"));

    let wrong = post_json(&app, "/p/auth", json!({ "passwd": "y" }), None).await;
    assert!(set_cookie(&wrong).is_none());
    assert_eq!(body_json(wrong).await["err"], 10002);

    let response = post_json(&app, "/p/auth", json!({ "passwd": "x" }), None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let header = set_cookie(&response).unwrap();
    assert!(header.contains("Path=/p"));
    assert!(header.contains("HttpOnly"));
    assert!(header.contains("Max-Age=604800"));
    let cookie = cookie_pair(&response);
    assert_eq!(
        body_json(response).await,
        json!({ "err": 0, "data": { "refresh": true } })
    );

    let html = body_string(get(&app, "/p", Some(&cookie)).await).await;
    assert!(html.contains("secret body</textarea>"));
    assert!(html.contains("Change Password"));
}

#[tokio::test]
async fn punctuation_path_cookie_matches_request_path() {
    let (app, store) = build_test_app(None);

    post_content(&app, "/a(b):c'd", "punctuated", None).await;
    assert!(store.query_note("a(b):c'd").unwrap().exists());

    let response = post_json(&app, "/a(b):c'd/pw", json!({ "passwd": "x" }), None).await;
    assert!(set_cookie(&response)
        .unwrap()
        .starts_with("auth=; Path=/a(b):c'd;"));

    let response = post_json(&app, "/a(b):c'd/auth", json!({ "passwd": "x" }), None).await;
    let header = set_cookie(&response).unwrap();
    assert!(header.starts_with("auth="));
    assert!(header.contains("; Path=/a(b):c'd;"));
    let cookie = cookie_pair(&response);

    let html = body_string(get(&app, "/a(b):c'd", Some(&cookie)).await).await;
    assert!(html.contains("punctuated</textarea>"));
}

#[tokio::test]
async fn encoded_path_cookie_keeps_request_encoding() {
    let (app, _) = build_test_app(None);

    post_content(&app, "/my%20diary", "spaced", None).await;
    post_json(&app, "/my%20diary/pw", json!({ "passwd": "x" }), None).await;

    let response = post_json(&app, "/my%20diary/auth", json!({ "passwd": "x" }), None).await;
    assert!(set_cookie(&response)
        .unwrap()
        .contains("; Path=/my%20diary;"));
    let cookie = cookie_pair(&response);

    let html = body_string(get(&app, "/my%20diary", Some(&cookie)).await).await;
    assert!(html.contains("spaced</textarea>"));
}

#[tokio::test]
async fn empty_password_clears_protection() {
    let (app, _) = build_test_app(None);

    post_content(&app, "/p", "body", None).await;
    post_json(&app, "/p/pw", json!({ "passwd": "x" }), None).await;
    let auth = post_json(&app, "/p/auth", json!({ "passwd": "x" }), None).await;
    let cookie = cookie_pair(&auth);

    let response = post_json(&app, "/p/pw", json!({ "passwd": "" }), Some(&cookie)).await;
    assert_eq!(body_json(response).await["err"], 0);

    let html = body_string(get(&app, "/p", None).await).await;
    assert!(html.contains("body</textarea>"));
    assert!(html.contains("Set Password"));
}

#[tokio::test]
async fn protected_note_rejects_writes_without_token() {
    let (app, store) = build_test_app(None);

    post_content(&app, "/p", "original", None).await;
    post_json(&app, "/p/pw", json!({ "passwd": "x" }), None).await;

    let save = body_json(post_content(&app, "/p", "overwritten", None).await).await;
    assert_eq!(save["err"], 10002);
    assert!(save["msg"].as_str().unwrap().contains("Try refreshing"));

    let pw = body_json(post_json(&app, "/p/pw", json!({ "passwd": "" }), None).await).await;
    assert_eq!(pw["err"], 10003);

    let setting =
        body_json(post_json(&app, "/p/setting", json!({ "share": true }), None).await).await;
    assert_eq!(setting["err"], 10004);

    let note = store.query_note("p").unwrap().into_note();
    assert_eq!(note.value, "original");
    assert!(note.metadata.pw.is_some());
    assert_eq!(note.metadata.share, None);
}

#[tokio::test]
async fn token_for_one_note_does_not_unlock_another() {
    let (app, _) = build_test_app(None);

    for path in ["/a", "/b"] {
        post_content(&app, path, &format!("content of {}", path), None).await;
        post_json(&app, &format!("{}/pw", path), json!({ "passwd": "x" }), None).await;
    }

    let auth = post_json(&app, "/a/auth", json!({ "passwd": "x" }), None).await;
    let cookie = cookie_pair(&auth);

    let html = body_string(get(&app, "/b", Some(&cookie)).await).await;
    assert!(!html.contains("content of /b"));
    assert!(html.contains("<script>passwdPrompt()</script>"));

    let save = body_json(post_content(&app, "/b", "hijack", Some(&cookie)).await).await;
    assert_eq!(save["err"], 10002);
}

#[tokio::test]
async fn forged_token_is_rejected() {
    let (app, _) = build_test_app(None);

    post_content(&app, "/p", "body", None).await;
    post_json(&app, "/p/pw", json!({ "passwd": "x" }), None).await;

    let forged = format!(
        "auth={}",
        notepad::sign(&notepad::Claim::note("p"), "wrong-secret").unwrap()
    );
    let html = body_string(get(&app, "/p", Some(&forged)).await).await;
    assert!(!html.contains("body</textarea>"));
}

#[tokio::test]
async fn auth_on_unprotected_note_fails() {
    let (app, _) = build_test_app(None);

    post_content(&app, "/open", "body", None).await;
    let response = post_json(&app, "/open/auth", json!({ "passwd": "" }), None).await;
    assert!(set_cookie(&response).is_none());
    assert_eq!(body_json(response).await["err"], 10002);
}

// ---------------------------------------------------------------------------
// Test: settings and sharing
// ---------------------------------------------------------------------------

#[tokio::test]
async fn share_link_renders_note_without_cookies() {
    let (app, _) = build_test_app(None);

    post_content(&app, "/p", "shared text", None).await;
    let json = body_json(post_json(&app, "/p/setting", json!({ "share": true }), None).await).await;
    assert_eq!(json["err"], 0);

    let hash = json["data"].as_str().unwrap().to_string();
    assert_eq!(hash, share_hash("p"));

    let response = get(&app, &format!("/share/{}", hash), None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;
    assert!(html.contains("shared text"));
    assert!(html.contains(r#"class="contents hide""#));
    assert!(!html.contains(r#"class="opt-button opt-pw""#));

    // Disabling sharing removes the link.
    let json = body_json(post_json(&app, "/p/setting", json!({ "share": false }), None).await).await;
    assert_eq!(json, json!({ "err": 0 }));

    let response = get(&app, &format!("/share/{}", hash), None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_string(response).await.contains("404, Nothing here"));
}

#[tokio::test]
async fn share_link_bypasses_note_password() {
    let (app, _) = build_test_app(None);

    post_content(&app, "/p", "visible via link", None).await;
    let json = body_json(post_json(&app, "/p/setting", json!({ "share": true }), None).await).await;
    let hash = json["data"].as_str().unwrap().to_string();
    post_json(&app, "/p/pw", json!({ "passwd": "x" }), None).await;

    let html = body_string(get(&app, &format!("/share/{}", hash), None).await).await;
    assert!(html.contains("visible via link"));
}

#[tokio::test]
async fn unknown_share_hash_is_404() {
    let (app, _) = build_test_app(None);

    let response = get(&app, "/share/deadbeef", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn mode_and_share_update_independently() {
    let (app, store) = build_test_app(None);

    post_content(&app, "/p", "# Title", None).await;
    post_json(&app, "/p/setting", json!({ "share": true }), None).await;

    let json = body_json(post_json(&app, "/p/setting", json!({ "mode": "md" }), None).await).await;
    assert_eq!(json, json!({ "err": 0 }));

    let meta = store.query_note("p").unwrap().into_note().metadata;
    assert_eq!(meta.mode, Some(Mode::Md));
    assert_eq!(meta.share, Some(true));
    assert!(store.lookup_share(&share_hash("p")).unwrap().is_some());

    post_json(&app, "/p/setting", json!({ "share": false }), None).await;
    let meta = store.query_note("p").unwrap().into_note().metadata;
    assert_eq!(meta.mode, Some(Mode::Md));
    assert_eq!(meta.share, Some(false));

    // Markdown notes render a split preview.
    let html = body_string(get(&app, "/p", None).await).await;
    assert!(html.contains(r#"id="preview-md""#));
    assert!(html.contains("<h1>Title</h1>"));
}

#[tokio::test]
async fn malformed_json_maps_to_route_code() {
    let (app, _) = build_test_app(None);

    let setting = post_raw_json(&app, "/p/setting", "{not json".into(), None).await;
    assert_eq!(setting.status(), StatusCode::OK);
    assert_eq!(body_json(setting).await["err"], 10004);

    let pw = post_raw_json(&app, "/p/pw", "42".into(), None).await;
    assert_eq!(body_json(pw).await["err"], 10003);

    let auth = post_raw_json(&app, "/p/auth", "".into(), None).await;
    assert_eq!(body_json(auth).await["err"], 10002);
}

// ---------------------------------------------------------------------------
// Test: fallback and language
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_route_returns_404_page() {
    let (app, _) = build_test_app(None);

    let response = get(&app, "/a/b/c", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let html = body_string(response).await;
    assert!(html.contains("404, Nothing here"));
    assert!(html.contains("<title>404 - Cloud Notepad</title>"));
}

#[tokio::test]
async fn accept_language_selects_chinese() {
    let (app, _) = build_test_app(None);

    let html = body_string(get_with_lang(&app, "/a/b/c", "zh-CN,zh;q=0.9").await).await;
    assert!(html.contains(r#"<html lang="zh">"#));
    assert!(html.contains("404，你要找的东西并不存在"));
}
