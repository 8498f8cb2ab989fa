//! One-shot flash messages carried in a signed cookie.
//!
//! A redirecting handler stores a message with [`set_flash`]; the next page
//! that renders messages takes it with [`take_flash`], which also clears the
//! cookie. Cookies with a bad signature are treated as absent.

use axum_extra::extract::cookie::{Cookie, Key, SameSite, SignedCookieJar};
use sha2::{Digest, Sha512};

/// Name of the flash cookie.
pub const FLASH_COOKIE: &str = "flash";

/// Shown when the upload form had no `file` part.
pub const MSG_NO_FILE: &str = "No file selected";
/// Shown when the filename is empty or not a `.pdf`.
pub const MSG_INVALID_FILE: &str = "Please upload a valid PDF file only";
/// Shown after a successful upload.
pub const MSG_UPLOADED: &str = "File uploaded successfully!";
/// Shown when a detail page is requested for an unknown id.
pub const MSG_NOT_FOUND: &str = "PDF not found";

/// Derive the cookie signing key.
///
/// With a secret the key is the SHA-512 digest of it, so it is stable across
/// restarts. Without one a random key is generated.
pub fn signing_key(secret: Option<&str>) -> Key {
    match secret {
        Some(secret) => Key::from(Sha512::digest(secret.as_bytes()).as_slice()),
        None => {
            tracing::warn!("No secret key configured; flash messages will not survive a restart");
            Key::generate()
        }
    }
}

/// Store a flash message for the next page view.
pub fn set_flash(jar: SignedCookieJar, message: impl Into<String>) -> SignedCookieJar {
    let cookie = Cookie::build((FLASH_COOKIE, message.into()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax);
    jar.add(cookie)
}

/// Take the pending flash message, clearing the cookie if one was set.
pub fn take_flash(jar: SignedCookieJar) -> (SignedCookieJar, Option<String>) {
    match jar.get(FLASH_COOKIE) {
        Some(cookie) => {
            let message = cookie.value().to_string();
            let jar = jar.remove(Cookie::build(FLASH_COOKIE).path("/"));
            (jar, Some(message))
        }
        None => (jar, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_jar(key: &Key) -> SignedCookieJar {
        SignedCookieJar::new(key.clone())
    }

    #[test]
    fn test_signing_key_is_deterministic() {
        let a = signing_key(Some("secret"));
        let b = signing_key(Some("secret"));
        let c = signing_key(Some("other"));

        assert_eq!(a.master(), b.master());
        assert_ne!(a.master(), c.master());
    }

    #[test]
    fn test_signing_key_generated_without_secret() {
        let a = signing_key(None);
        let b = signing_key(None);
        assert_ne!(a.master(), b.master());
    }

    #[test]
    fn test_set_then_take() {
        let key = signing_key(Some("secret"));
        let jar = set_flash(empty_jar(&key), MSG_UPLOADED);

        let (jar, message) = take_flash(jar);
        assert_eq!(message.as_deref(), Some(MSG_UPLOADED));

        let (_jar, message) = take_flash(jar);
        assert!(message.is_none());
    }

    #[test]
    fn test_cookie_attributes() {
        let key = signing_key(Some("secret"));
        let jar = set_flash(empty_jar(&key), MSG_NO_FILE);

        let cookie = jar.get(FLASH_COOKIE).unwrap();
        assert_eq!(cookie.value(), MSG_NO_FILE);
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
    }

    #[test]
    fn test_take_from_empty_jar() {
        let key = signing_key(Some("secret"));
        let (_jar, message) = take_flash(empty_jar(&key));
        assert!(message.is_none());
    }
}
