//! Password hashing and signed auth tokens.
//!
//! Tokens are HMAC-signed claims carried in HTTP-only cookies: `auth` holds a
//! claim for one note path and is scoped to that path, `app_auth` holds the
//! application-wide claim and is scoped to `/`. Claims carry no expiry; the
//! cookie's `Max-Age` is the only lifetime.

use axum_extra::extract::CookieJar;
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;

/// Per-note token cookie name
pub const NOTE_COOKIE: &str = "auth";

/// Application token cookie name
pub const APP_COOKIE: &str = "app_auth";

/// Cookie lifetime in days
pub const COOKIE_TTL_DAYS: i64 = 7;

// ============================================================================
// Claims
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Claim {
    Note { path: String },
    App { app: bool },
}

impl Claim {
    pub fn note(path: &str) -> Self {
        Claim::Note {
            path: path.to_string(),
        }
    }

    pub fn app() -> Self {
        Claim::App { app: true }
    }
}

// ============================================================================
// Passwords
// ============================================================================

/// Deterministic hash of a password with the server-side salt.
pub fn salted_hash(password: &str, salt: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hasher.update(salt.as_bytes());
    hex_encode(&hasher.finalize())
}

/// Compare a submitted password against a stored salted hash.
pub fn password_matches(password: &str, salt: &str, stored_hash: &str) -> bool {
    constant_time_eq(salted_hash(password, salt).as_bytes(), stored_hash.as_bytes())
}

// ============================================================================
// Tokens
// ============================================================================

/// Sign a claim: `base64(json).hex(hmac)`.
pub fn sign(claim: &Claim, secret: &str) -> Option<String> {
    let claim_json = serde_json::to_string(claim).ok()?;
    let signature = mac_hex(claim_json.as_bytes(), secret);
    Some(format!(
        "{}.{}",
        URL_SAFE_NO_PAD.encode(claim_json.as_bytes()),
        signature
    ))
}

/// Verify a token's signature and return its claim.
pub fn verify(token: &str, secret: &str) -> Option<Claim> {
    let (payload, signature) = token.split_once('.')?;
    let claim_bytes = URL_SAFE_NO_PAD.decode(payload).ok()?;

    let expected_sig = mac_hex(&claim_bytes, secret);
    if !constant_time_eq(signature.as_bytes(), expected_sig.as_bytes()) {
        return None;
    }

    serde_json::from_slice(&claim_bytes).ok()
}

/// Does the `auth` cookie carry a valid token for exactly this note path?
pub fn check_auth(jar: &CookieJar, path: &str, secret: &str) -> bool {
    jar.get(NOTE_COOKIE)
        .and_then(|cookie| verify(cookie.value(), secret))
        .is_some_and(|claim| matches!(claim, Claim::Note { path: ref p } if p == path))
}

/// Does the `app_auth` cookie carry a valid application token?
pub fn check_app_auth(jar: &CookieJar, secret: &str) -> bool {
    jar.get(APP_COOKIE)
        .and_then(|cookie| verify(cookie.value(), secret))
        .is_some_and(|claim| claim == Claim::app())
}

// ============================================================================
// Cookies
// ============================================================================

/// Cookie path for a note: the note segment of `request_path` exactly as the
/// browser sent it, e.g. `/a(b` for a request to `/a(b/auth` with `suffix`
/// `/auth`. Browsers match cookie paths against the raw request path, so the
/// decoded `note_path` is only percent-encoded when the raw one is unusable.
pub fn note_cookie_path(request_path: &str, suffix: &str, note_path: &str) -> String {
    match request_path.strip_suffix(suffix) {
        Some(raw) if raw.len() > 1 && !raw[1..].contains(['/', ';']) => raw.to_string(),
        _ => format!("/{}", urlencoding::encode(note_path)),
    }
}

pub fn note_cookie(cookie_path: &str, token: &str) -> String {
    format!(
        "{}={}; Path={}; HttpOnly; SameSite=Lax; Max-Age={}",
        NOTE_COOKIE,
        token,
        cookie_path,
        COOKIE_TTL_DAYS * 24 * 3600
    )
}

pub fn clear_note_cookie(cookie_path: &str) -> String {
    format!(
        "{}=; Path={}; HttpOnly; SameSite=Lax; Max-Age=0",
        NOTE_COOKIE, cookie_path
    )
}

pub fn app_cookie(token: &str) -> String {
    format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
        APP_COOKIE,
        token,
        COOKIE_TTL_DAYS * 24 * 3600
    )
}

// ============================================================================
// Encoding Helpers
// ============================================================================

fn mac_hex(message: &[u8], secret: &str) -> String {
    // HMAC accepts keys of any length.
    let mut mac = match HmacSha256::new_from_slice(secret.as_bytes()) {
        Ok(m) => m,
        Err(_) => return String::new(),
    };
    mac.update(message);
    hex_encode(mac.finalize().into_bytes().as_slice())
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    a.len() == b.len() && a.ct_eq(b).unwrap_u8() == 1
}

/// Encode bytes as hexadecimal
pub fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}
