use crate::server::{
    error::{config::ConfigError, AppError},
    query::params::{QueryOptions, DEFAULT_LIMIT, DEFAULT_MAX_LIMIT},
};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

pub struct Config {
    pub database_url: String,

    pub host: String,
    pub port: u16,

    /// Largest page size a list request may ask for.
    pub query_max_limit: u64,
}

impl Config {
    /// Reads the configuration from the process environment.
    ///
    /// Call `dotenvy::dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self::from_lookup(|name| std::env::var(name).ok())?)
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// # Returns
    /// - `Ok(Config)` - All variables present and well-formed
    /// - `Err(ConfigError::MissingEnvVar)` - `DATABASE_URL` is not set
    /// - `Err(ConfigError::InvalidEnvVar)` - `PORT` or `QUERY_MAX_LIMIT` does not parse
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("PORT") {
            Some(value) => value.parse::<u16>().map_err(|e| ConfigError::InvalidEnvVar {
                name: "PORT".to_string(),
                value: value.clone(),
                reason: e.to_string(),
            })?,
            None => DEFAULT_PORT,
        };

        let query_max_limit = match lookup("QUERY_MAX_LIMIT") {
            Some(value) => match value.parse::<u64>() {
                Ok(limit) if limit > 0 => limit,
                Ok(_) => {
                    return Err(ConfigError::InvalidEnvVar {
                        name: "QUERY_MAX_LIMIT".to_string(),
                        value,
                        reason: "must be greater than zero".to_string(),
                    })
                }
                Err(e) => {
                    return Err(ConfigError::InvalidEnvVar {
                        name: "QUERY_MAX_LIMIT".to_string(),
                        value: value.clone(),
                        reason: e.to_string(),
                    })
                }
            },
            None => DEFAULT_MAX_LIMIT,
        };

        Ok(Self {
            database_url,
            host,
            port,
            query_max_limit,
        })
    }

    /// Page-size bounds for list endpoints.
    pub fn query_options(&self) -> QueryOptions {
        QueryOptions {
            default_limit: DEFAULT_LIMIT.min(self.query_max_limit),
            max_limit: self.query_max_limit,
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
