//! Shared configuration loader for the enml toolchain.
//!
//! `defaults/enml.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files and the
//! `EVERNOTE_*` environment variables on top of those defaults via [`Loader`] before
//! deserializing into [`EnmlConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use enml_babel::MarkdownOptions;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/enml.default.toml");

pub const ENV_AUTH_TOKEN: &str = "EVERNOTE_AUTH_TOKEN";
pub const ENV_BACKEND: &str = "EVERNOTE_BACKEND";
pub const ENV_RETRY_COUNT: &str = "EVERNOTE_RETRY_COUNT";
pub const ENV_USE_SYSTEM_SSL_CA: &str = "EVERNOTE_USE_SYSTEM_SSL_CA";

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Invalid value for {var}: {message}")]
    Env { var: &'static str, message: String },

    #[error("EVERNOTE_AUTH_TOKEN environment variable is required")]
    MissingCredentials,
}

/// Top-level configuration consumed by enml applications.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EnmlConfig {
    pub service: ServiceConfig,
    pub convert: ConvertConfig,
}

/// Connection settings for the note service.
#[derive(Clone, Deserialize, Serialize)]
pub struct ServiceConfig {
    #[serde(default, serialize_with = "serialize_secret")]
    pub auth_token: Option<String>,
    pub backend: Backend,
    pub network_retry_count: u32,
    pub use_system_ssl_ca: bool,
}

impl ServiceConfig {
    /// The auth token, or an error naming the variable to set.
    pub fn credentials(&self) -> Result<&str, LoadError> {
        match self.auth_token.as_deref() {
            Some(token) if !token.trim().is_empty() => Ok(token),
            _ => Err(LoadError::MissingCredentials),
        }
    }
}

impl fmt::Debug for ServiceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceConfig")
            .field("auth_token", &self.auth_token.as_ref().map(|_| "[REDACTED]"))
            .field("backend", &self.backend)
            .field("network_retry_count", &self.network_retry_count)
            .field("use_system_ssl_ca", &self.use_system_ssl_ca)
            .finish()
    }
}

fn serialize_secret<S: Serializer>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error> {
    match value {
        Some(_) => serializer.serialize_some("[REDACTED]"),
        None => serializer.serialize_none(),
    }
}

/// Which note service deployment to talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(try_from = "String", into = "String")]
pub enum Backend {
    Evernote,
    China,
    ChinaSandbox,
}

impl Backend {
    pub fn as_str(self) -> &'static str {
        match self {
            Backend::Evernote => "evernote",
            Backend::China => "china",
            Backend::ChinaSandbox => "china:sandbox",
        }
    }
}

impl TryFrom<String> for Backend {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "evernote" => Ok(Backend::Evernote),
            "china" => Ok(Backend::China),
            "china:sandbox" => Ok(Backend::ChinaSandbox),
            other => Err(format!("Invalid backend: {other}")),
        }
    }
}

impl From<Backend> for String {
    fn from(backend: Backend) -> Self {
        backend.as_str().to_string()
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Format-specific conversion knobs.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ConvertConfig {
    pub markdown: MarkdownConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MarkdownConfig {
    pub checked_todos: bool,
}

impl From<&MarkdownConfig> for MarkdownOptions {
    fn from(config: &MarkdownConfig) -> Self {
        MarkdownOptions {
            checked_todos: config.checked_todos,
        }
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Apply the `EVERNOTE_*` variables found in `vars`. Other variables are ignored.
    ///
    /// An empty value counts as unset. `EVERNOTE_USE_SYSTEM_SSL_CA` is true only when
    /// it reads `true` in any case.
    pub fn with_env_vars<I, K, V>(mut self, vars: I) -> Result<Self, LoadError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        for (key, value) in vars {
            let value = value.as_ref();
            if value.is_empty() {
                continue;
            }
            self = match key.as_ref() {
                ENV_AUTH_TOKEN => self.set_override("service.auth_token", value)?,
                ENV_BACKEND => self.set_override("service.backend", value)?,
                ENV_RETRY_COUNT => {
                    let count: u32 = value.trim().parse().map_err(|_| LoadError::Env {
                        var: ENV_RETRY_COUNT,
                        message: format!("expected a non-negative integer, got '{value}'"),
                    })?;
                    self.set_override("service.network_retry_count", i64::from(count))?
                }
                ENV_USE_SYSTEM_SSL_CA => self.set_override(
                    "service.use_system_ssl_ca",
                    value.trim().eq_ignore_ascii_case("true"),
                )?,
                _ => self,
            };
        }
        Ok(self)
    }

    /// Apply the `EVERNOTE_*` variables from the process environment.
    ///
    /// Variables whose name or value is not valid UTF-8 are skipped.
    pub fn with_env(self) -> Result<Self, LoadError> {
        self.with_env_vars(std::env::vars_os().filter_map(|(key, value)| {
            Some((key.into_string().ok()?, value.into_string().ok()?))
        }))
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<EnmlConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<EnmlConfig, ConfigError> {
    Loader::new().build()
}
