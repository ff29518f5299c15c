use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub maps_api_key: String,
    pub maps_base_url: String,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL")?;
        let maps_api_key = std::env::var("GOOGLEMAPS_APIKEY")?;
        let maps_base_url = std::env::var("MAPS_BASE_URL")
            .unwrap_or_else(|_| "https://maps.googleapis.com".into());
        Ok(Self {
            database_url,
            maps_api_key,
            maps_base_url,
        })
    }
}
