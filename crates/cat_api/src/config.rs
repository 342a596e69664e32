use std::env;

pub const DEFAULT_API_URL: &str =
    "https://api.thecatapi.com/v1/images/search";

// The upstream is always asked for this many, whatever the caller wants.
pub const DEFAULT_UPSTREAM_LIMIT: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_url: String,
    pub upstream_limit: u32,
}

impl Config {
    /// Builds a config from `CAT_API_URL` and `CAT_API_UPSTREAM_LIMIT`,
    /// falling back to the public endpoint and a limit of 10.
    pub fn new() -> Self {
        Self {
            api_url: env::var("CAT_API_URL")
                .unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            upstream_limit: env::var("CAT_API_UPSTREAM_LIMIT")
                .ok()
                .and_then(|v| v.trim().parse::<u32>().ok())
                .filter(|v| *v > 0)
                .unwrap_or(DEFAULT_UPSTREAM_LIMIT),
        }
    }

    pub fn with_api_url(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            ..Self::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            upstream_limit: DEFAULT_UPSTREAM_LIMIT,
        }
    }
}
