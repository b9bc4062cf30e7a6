//! Configuration for the Supabase adapters
//!
//! Loaded from the environment, with `.env` files picked up best-effort
//! so local development matches deployment.

use url::Url;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingVar(&'static str),
    #[error("Invalid Supabase URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}

/// Connection settings for the hosted backend
#[derive(Debug, Clone)]
pub struct SupabaseConfig {
    /// Project base URL without a trailing slash
    pub base_url: String,
    /// Anon/service key sent as both `apikey` and bearer token
    pub api_key: String,
    /// Storage bucket holding NPC images
    pub bucket: String,
}

impl SupabaseConfig {
    pub fn new(base_url: &str, api_key: impl Into<String>) -> Result<Self, ConfigError> {
        Url::parse(base_url).map_err(|e| ConfigError::InvalidUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            bucket: "images".to_string(),
        })
    }

    pub fn with_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = bucket.into();
        self
    }

    /// Read `SUPABASE_URL`, `SUPABASE_ANON_KEY` and optionally
    /// `SUPABASE_BUCKET` from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env if present; already-set variables win.
        dotenvy::dotenv().ok();

        let base_url =
            std::env::var("SUPABASE_URL").map_err(|_| ConfigError::MissingVar("SUPABASE_URL"))?;
        let api_key = std::env::var("SUPABASE_ANON_KEY")
            .map_err(|_| ConfigError::MissingVar("SUPABASE_ANON_KEY"))?;

        let mut config = Self::new(&base_url, api_key)?;
        if let Ok(bucket) = std::env::var("SUPABASE_BUCKET") {
            config = config.with_bucket(bucket);
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let config = SupabaseConfig::new("https://proj.supabase.co/", "key").expect("valid");
        assert_eq!(config.base_url, "https://proj.supabase.co");
        assert_eq!(config.bucket, "images");
    }

    #[test]
    fn garbage_url_is_rejected() {
        let err = SupabaseConfig::new("not a url", "key").expect_err("must fail");
        assert!(matches!(err, ConfigError::InvalidUrl { .. }));
    }

    #[test]
    fn bucket_override() {
        let config = SupabaseConfig::new("https://proj.supabase.co", "key")
            .expect("valid")
            .with_bucket("npc-images");
        assert_eq!(config.bucket, "npc-images");
    }
}
