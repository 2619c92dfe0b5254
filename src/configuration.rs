use secrecy::{ExposeSecret, Secret};
use serde_aux::field_attributes::deserialize_number_from_string;

#[derive(serde::Deserialize, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub lead_store: LeadStoreSettings,
}

#[derive(serde::Deserialize, Clone)]
pub struct ApplicationSettings {
    // Environment variables are always strings: `serde-aux` lets `APP_APPLICATION__PORT` through.
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
    pub host: String,
}

/// Connection parameters of the hosted record store.
///
/// Both `base_url` and `api_key` are optional: leaving either of them out (or blank) keeps the
/// landing page up with registration disabled.
#[derive(serde::Deserialize, Clone)]
pub struct LeadStoreSettings {
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub api_key: Option<Secret<String>>,
    #[serde(default = "default_table")]
    pub table: String,
}

fn default_table() -> String {
    "etudiants".into()
}

impl LeadStoreSettings {
    /// Returns the endpoint and the key, if both are present and non-blank.
    pub fn credentials(&self) -> Option<(String, Secret<String>)> {
        let base_url = self.base_url.as_deref().map(str::trim).unwrap_or_default();
        let api_key = self.api_key.as_ref()?;
        if base_url.is_empty() || api_key.expose_secret().trim().is_empty() {
            None
        } else {
            Some((base_url.to_owned(), api_key.clone()))
        }
    }
}

/// The possible runtime environment for our application.
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{other} is not a supported environment. Use either `local` or `production`."
            )),
        }
    }
}

/// Layers `configuration/base.yaml`, the file of the current environment (`APP_ENVIRONMENT`,
/// `local` when unset) and finally `APP_*` environment variables, e.g.
/// `APP_LEAD_STORE__API_KEY=...` sets `Settings.lead_store.api_key`.
pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path =
        std::env::current_dir().map_err(|e| config::ConfigError::Foreign(Box::new(e)))?;
    let configuration_directory = base_path.join("configuration");

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(config::ConfigError::Message)?;
    let environment_filename = format!("{}.yaml", environment.as_str());

    let settings = config::Config::builder()
        .add_source(config::File::from(configuration_directory.join("base.yaml")))
        .add_source(config::File::from(
            configuration_directory.join(environment_filename),
        ))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}
