//! Session display name, kept in a single client cookie.
//!
//! The name is chosen once on the splash screen and never changed. It is a
//! label, not an identity: nothing stops two visitors picking the same one.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration;

pub const COOKIE_NAME: &str = "display_name";
pub const MAX_NAME_CHARS: usize = 40;

const COOKIE_MAX_AGE_DAYS: i64 = 365;

/// Trim and strip characters that would break the cookie header, then cap
/// the length. Returns `None` if nothing usable is left.
#[must_use]
pub fn normalize_display_name(raw: &str) -> Option<String> {
    let cleaned: String = raw
        .chars()
        .filter(|c| !c.is_control() && !matches!(c, ';' | ',' | '"' | '\\'))
        .collect();
    let trimmed: String = cleaned.trim().chars().take(MAX_NAME_CHARS).collect();
    let trimmed = trimmed.trim_end();
    if trimmed.is_empty() { None } else { Some(trimmed.to_owned()) }
}

/// The display name stored for this client, if any.
#[must_use]
pub fn display_name(jar: &CookieJar) -> Option<String> {
    jar.get(COOKIE_NAME)
        .and_then(|cookie| normalize_display_name(cookie.value()))
}

/// Cookie carrying `name`. Callers pass an already normalized name.
#[must_use]
pub fn display_name_cookie(name: String, secure: bool) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, name))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(Duration::days(COOKIE_MAX_AGE_DAYS))
        .build()
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
