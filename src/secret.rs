use crate::constants::SECRET_KEY_ENV;
use std::ffi::OsString;

/// Returns the application secret key from `SECRET_KEY`, or `None` if unset.
pub fn get_secret_key() -> Option<String> {
    secret_key_from(|name| std::env::var_os(name))
}

/// Looks up the secret key through `lookup` instead of the process environment.
///
/// A value that is not valid Unicode counts as absent.
pub fn secret_key_from<F>(lookup: F) -> Option<String>
where
    F: FnOnce(&str) -> Option<OsString>,
{
    match lookup(SECRET_KEY_ENV)?.into_string() {
        Ok(key) => Some(key),
        Err(_) => {
            tracing::warn!("{SECRET_KEY_ENV} is not valid unicode; ignoring it");
            None
        }
    }
}
