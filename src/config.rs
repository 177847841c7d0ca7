use crate::constants::{DEFAULT_APP_NAME, DEFAULT_PORT, DEFAULT_VERSION, VALIDATION_CODES};
use crate::secret;
use std::fmt;

/// Application settings. The secret key is never baked in; it comes from the environment.
#[derive(Clone, PartialEq, Eq)]
pub struct Settings {
    pub app_name: String,
    pub version: String,
    pub port: u16,
    pub secret_key: Option<String>,
    pub validation_codes: Vec<u32>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            app_name: DEFAULT_APP_NAME.to_string(),
            version: DEFAULT_VERSION.to_string(),
            port: DEFAULT_PORT,
            secret_key: None,
            validation_codes: VALIDATION_CODES.to_vec(),
        }
    }
}

impl Settings {
    /// Defaults plus the secret key from `SECRET_KEY`.
    pub fn from_env() -> Self {
        Settings {
            secret_key: secret::get_secret_key(),
            ..Settings::default()
        }
    }
}

// Hand-written so the secret never ends up in logs.
impl fmt::Debug for Settings {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.debug_struct("Settings")
            .field("app_name", &self.app_name)
            .field("version", &self.version)
            .field("port", &self.port)
            .field("secret_key", &self.secret_key.as_ref().map(|_| "***"))
            .field("validation_codes", &self.validation_codes)
            .finish()
    }
}

impl fmt::Display for Settings {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let codes = self
            .validation_codes
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(",");
        writeln!(f, "app-name = {}", self.app_name)?;
        writeln!(f, "version = {}", self.version)?;
        writeln!(f, "port = {}", self.port)?;
        writeln!(
            f,
            "secret-key = {}",
            if self.secret_key.is_some() { "***" } else { "<unset>" }
        )?;
        write!(f, "validation-codes = {codes}")
    }
}
