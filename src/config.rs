use anyhow::Result;
use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub server_address: String,
    pub database_url: Option<String>,
    pub database_name: Option<String>,
}

impl Config {
    /// Reads configuration from the environment. Missing database settings
    /// are tolerated; the store then reports itself unavailable instead of
    /// aborting startup.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let port: u16 = env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(8000);

        Ok(Config {
            server_address: format!("0.0.0.0:{}", port),
            database_url: env::var("DATABASE_URL").ok(),
            database_name: env::var("DATABASE_NAME").ok(),
        })
    }
}
