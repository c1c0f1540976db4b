use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub session: SessionConfig,
    pub auth: AuthConfig,
    pub projects: ProjectsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub static_dir: String,
    pub max_body_size: usize,  // in bytes
}

#[derive(Debug, Deserialize, Clone)]
pub struct SessionConfig {
    pub secure: bool,
    pub inactivity_minutes: i64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    pub bcrypt_cost: u32,
    pub min_password_length: usize,
    pub allow_guest: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ProjectsConfig {
    pub enforce_ownership: bool,
    pub min_description_length: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 5000,
                static_dir: "dist/public".to_string(),
                max_body_size: 1024 * 1024,
            },
            session: SessionConfig {
                secure: false,
                inactivity_minutes: 60 * 24,
            },
            auth: AuthConfig {
                bcrypt_cost: bcrypt::DEFAULT_COST,
                min_password_length: 6,
                allow_guest: true,
            },
            projects: ProjectsConfig {
                enforce_ownership: true,
                min_description_length: 50,
            },
        }
    }
}

impl Config {
    /// Layers built-in defaults, then `config/default.*` if present, then
    /// `APP__SECTION__KEY` environment variables.
    pub fn load() -> Result<Self, config::ConfigError> {
        let defaults = Self::default();

        let config = config::Config::builder()
            .set_default("server.host", defaults.server.host)?
            .set_default("server.port", i64::from(defaults.server.port))?
            .set_default("server.static_dir", defaults.server.static_dir)?
            .set_default("server.max_body_size", defaults.server.max_body_size as i64)?
            .set_default("session.secure", defaults.session.secure)?
            .set_default("session.inactivity_minutes", defaults.session.inactivity_minutes)?
            .set_default("auth.bcrypt_cost", i64::from(defaults.auth.bcrypt_cost))?
            .set_default("auth.min_password_length", defaults.auth.min_password_length as i64)?
            .set_default("auth.allow_guest", defaults.auth.allow_guest)?
            .set_default("projects.enforce_ownership", defaults.projects.enforce_ownership)?
            .set_default(
                "projects.min_description_length",
                defaults.projects.min_description_length as i64,
            )?
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let loaded: Self = config.try_deserialize()?;
        loaded.validate()?;
        Ok(loaded)
    }

    /// Rejects values the rest of the service cannot work with.
    pub fn validate(&self) -> Result<(), config::ConfigError> {
        // bcrypt accepts costs 4 through 31
        if !(4..=31).contains(&self.auth.bcrypt_cost) {
            return Err(config::ConfigError::Message(format!(
                "auth.bcrypt_cost must be between 4 and 31, got {}",
                self.auth.bcrypt_cost
            )));
        }
        Ok(())
    }
}
