use serde_derive::Deserialize;
use config::{File, Config, ConfigError, Environment};

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    /// Collection URL of the users resource, e.g. `https://host/api/<token>/users`.
    pub base_url: String,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("base_url", "http://127.0.0.1:8000/users")?
            .add_source(File::with_name("users-api").required(false))
            .add_source(Environment::with_prefix("USERS_API"))
            .build()?
            .try_deserialize::<Self>()
    }

    pub fn with_base_url(url: &str) -> Self {
        Self { base_url: url.into() }
    }
}
