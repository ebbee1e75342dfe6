/// Server configuration
use crate::error::{Result, ServerError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_server")]
    pub server: ServerSettings,

    #[serde(default = "default_api")]
    pub api: ApiSettings,

    #[serde(default = "default_cors")]
    pub cors: CorsSettings,

    #[serde(default = "default_storage")]
    pub storage: StorageSettings,

    #[serde(default = "default_auth")]
    pub auth: AuthSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiSettings {
    /// Versioned prefix every resource route is mounted under
    #[serde(default = "default_prefix")]
    pub prefix: String,

    #[serde(default = "default_project_name")]
    pub project_name: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CorsSettings {
    /// Allowed origins. `*` allows any origin.
    #[serde(default = "default_origins")]
    pub origins: Vec<String>,
}

/// Reserved for a future database backend; the store is in-memory only.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageSettings {
    #[serde(default = "default_database_url")]
    pub database_url: String,
}

/// Token settings. Loaded and validated but not enforced on any route.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthSettings {
    #[serde(default = "default_secret_key")]
    pub secret_key: String,

    #[serde(default = "default_algorithm")]
    pub algorithm: String,

    #[serde(default = "default_access_token_expire_minutes")]
    pub access_token_expire_minutes: u64,
}

impl ServerConfig {
    /// Load configuration from an explicit file (if given) and environment
    ///
    /// Without an explicit path, `config.toml` in the working directory is
    /// used when it exists. An explicit path must exist.
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let config_path = PathBuf::from("config.toml");
                if config_path.exists() {
                    settings = settings.add_source(config::File::from(config_path));
                }
            }
        }

        // Override with environment variables, e.g. PLAYGEN_SERVER__PORT=9000
        settings = settings.add_source(
            config::Environment::with_prefix("PLAYGEN")
                .prefix_separator("_")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("cors.origins")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| ServerError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let prefix = &self.api.prefix;
        if prefix.is_empty() || !prefix.starts_with('/') {
            return Err(ServerError::Config(format!(
                "API prefix must start with '/' (got {:?})",
                prefix
            )));
        }
        if prefix.len() > 1 && prefix.ends_with('/') {
            return Err(ServerError::Config(format!(
                "API prefix must not end with '/' (got {:?})",
                prefix
            )));
        }
        if prefix == "/" {
            return Err(ServerError::Config(
                "API prefix must name a path segment, not just '/'".to_string(),
            ));
        }

        if self.server.port == 0 {
            return Err(ServerError::Config("Port must be non-zero".to_string()));
        }

        if self.auth.secret_key == default_secret_key() {
            tracing::warn!("Using the default secret key; set PLAYGEN_AUTH__SECRET_KEY");
        }

        Ok(())
    }
}

// Default values
fn default_server() -> ServerSettings {
    ServerSettings {
        host: default_host(),
        port: default_port(),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_api() -> ApiSettings {
    ApiSettings {
        prefix: default_prefix(),
        project_name: default_project_name(),
    }
}

fn default_prefix() -> String {
    "/api/v1".to_string()
}

fn default_project_name() -> String {
    "Playlist Generator API".to_string()
}

fn default_cors() -> CorsSettings {
    CorsSettings {
        origins: default_origins(),
    }
}

fn default_origins() -> Vec<String> {
    [
        "http://localhost:3000",
        "http://localhost:5173",
        "http://localhost:8000",
        "http://127.0.0.1:3000",
        "http://127.0.0.1:5173",
        "http://127.0.0.1:8000",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_storage() -> StorageSettings {
    StorageSettings {
        database_url: default_database_url(),
    }
}

fn default_database_url() -> String {
    "sqlite:///./playlist_generator.db".to_string()
}

fn default_auth() -> AuthSettings {
    AuthSettings {
        secret_key: default_secret_key(),
        algorithm: default_algorithm(),
        access_token_expire_minutes: default_access_token_expire_minutes(),
    }
}

fn default_secret_key() -> String {
    "your-secret-key-change-in-production".to_string()
}

fn default_algorithm() -> String {
    "HS256".to_string()
}

fn default_access_token_expire_minutes() -> u64 {
    30
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            api: default_api(),
            cors: default_cors(),
            storage: default_storage(),
            auth: default_auth(),
        }
    }
}
