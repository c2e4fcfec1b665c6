/// Relative URL of the catalog document, copied next to `index.html` by Trunk.
pub const DEFAULT_CATALOG_URL: &str = "data.json";

/// How long a transient message stays visible.
pub const DEFAULT_MESSAGE_TTL_MS: u64 = 2_000;

/// User-agent fragments that mark a session as mobile (matched case-insensitively).
pub const DEFAULT_MOBILE_PATTERNS: [&str; 4] = ["iPhone", "Android", "iPad", "iPod"];

pub const DEFAULT_MOBILE_BANNER_URL: &str =
    "https://via.placeholder.com/300x200?text=Thank+You+Mobile+User";

pub const DEFAULT_LOG_FILTER: &str = "dessert_cart=debug";

/// Static settings for the shop, shared through Leptos context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShopConfig {
    pub catalog_url: String,
    pub message_ttl_ms: u64,
    pub mobile_patterns: Vec<String>,
    pub mobile_banner_url: String,
    /// `EnvFilter` directives for the console logger
    pub log_filter: String,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            catalog_url: DEFAULT_CATALOG_URL.to_string(),
            message_ttl_ms: DEFAULT_MESSAGE_TTL_MS,
            mobile_patterns: DEFAULT_MOBILE_PATTERNS
                .iter()
                .map(ToString::to_string)
                .collect(),
            mobile_banner_url: DEFAULT_MOBILE_BANNER_URL.to_string(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}
