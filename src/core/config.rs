//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

/// Default `Cache-Control` max-age for the compiled bundle (1 day)
pub const DEFAULT_ASSET_CACHE_SECONDS: u64 = 86_400;

/// Errors raised while reading configuration
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("PUBLIC_URL must start with http:// or https://, got `{0}`")]
    InvalidPublicUrl(String),

    #[error("{name} must be a non-negative integer, got `{value}`")]
    InvalidNumber { name: &'static str, value: String },
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Canonical public address of the site, without trailing slash
    /// Example: https://tudonomoldef1.com.br
    pub public_url: Option<String>,

    /// `Cache-Control` max-age for `/pkg` responses
    pub asset_cache_seconds: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(
            std::env::var("PUBLIC_URL").ok(),
            std::env::var("ASSET_CACHE_SECONDS").ok(),
        )
    }

    /// Build configuration from raw values; empty strings count as unset.
    pub fn from_values(
        public_url: Option<String>,
        asset_cache_seconds: Option<String>,
    ) -> Result<Self, ConfigError> {
        let public_url = match public_url.filter(|v| !v.trim().is_empty()) {
            Some(url) => Some(parse_public_url(&url)?),
            None => None,
        };

        let asset_cache_seconds = match asset_cache_seconds.filter(|v| !v.trim().is_empty()) {
            Some(value) => value
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidNumber {
                    name: "ASSET_CACHE_SECONDS",
                    value,
                })?,
            None => DEFAULT_ASSET_CACHE_SECONDS,
        };

        Ok(Self {
            public_url,
            asset_cache_seconds,
        })
    }

    /// Check if a public URL is configured
    pub fn has_public_url(&self) -> bool {
        self.public_url.is_some()
    }

    /// `Cache-Control` header value for the compiled bundle
    pub fn cache_control(&self) -> String {
        format!("public, max-age={}", self.asset_cache_seconds)
    }

    /// Body of `/robots.txt`
    pub fn robots_txt(&self) -> String {
        let mut body = String::from("User-agent: *\nAllow: /\n");
        if let Some(url) = &self.public_url {
            body.push_str(&format!("Sitemap: {url}/sitemap.xml\n"));
        }
        body
    }

    /// Body of `/sitemap.xml`; only available with a public URL
    pub fn sitemap_xml(&self) -> Option<String> {
        self.public_url.as_ref().map(|url| {
            format!(
                "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
                 <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n\
                 <url><loc>{url}/</loc></url>\n\
                 </urlset>\n"
            )
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            public_url: None,
            asset_cache_seconds: DEFAULT_ASSET_CACHE_SECONDS,
        }
    }
}

fn parse_public_url(raw: &str) -> Result<String, ConfigError> {
    let url = raw.trim();
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(ConfigError::InvalidPublicUrl(url.to_string()));
    }
    Ok(url.trim_end_matches('/').to_string())
}
