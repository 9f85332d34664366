use std::env;

/// Runtime configuration, read once at startup from the environment.
///
/// The vault and database identifiers are required; everything else falls
/// back to a sensible default.
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub cors_origin: String,
    pub vault_name: String,
    pub db_host: String,
    pub db_name: String,
    pub db_max_connections: u32,
    pub session_ttl_hours: i64,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .expect("SERVER_PORT must be a number"),
            cors_origin: env::var("CORS_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            vault_name: env::var("KEY_VAULT_NAME").expect("KEY_VAULT_NAME must be set"),
            db_host: env::var("DB_SERVER").expect("DB_SERVER must be set"),
            db_name: env::var("DB_NAME").expect("DB_NAME must be set"),
            db_max_connections: env::var("DB_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "5".to_string())
                .parse()
                .expect("DB_MAX_CONNECTIONS must be a number"),
            session_ttl_hours: env::var("SESSION_TTL_HOURS")
                .unwrap_or_else(|_| "60".to_string())
                .parse()
                .expect("SESSION_TTL_HOURS must be a number"),
        }
    }

    pub fn vault_url(&self) -> String {
        format!("https://{}.vault.azure.net", self.vault_name)
    }

    pub fn server_url(&self) -> String {
        format!("http://{}:{}", self.server_host, self.server_port)
    }
}
