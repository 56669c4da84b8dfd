use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub database_url: String,
    pub storage_key: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "club_db.sqlite".to_string()),
            storage_key: env::var("STORAGE_KEY").unwrap_or_else(|_| "club_db".to_string()),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: ":memory:".to_string(),
            storage_key: "club_db".to_string(),
        }
    }
}
