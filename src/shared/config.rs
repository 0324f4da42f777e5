//! Application configuration. API credentials, paths, delays.

use serde::Deserialize;

/// Default lower bound of the randomized reload window, in seconds.
pub const DEFAULT_RELOAD_MIN_SECS: u64 = 60;

/// Default upper bound of the randomized reload window, in seconds.
pub const DEFAULT_RELOAD_MAX_SECS: u64 = 1800;

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Path of the person ID list. Read from TRIVIA_BOT_NAMES_PATH.
    #[serde(default)]
    pub names_path: Option<String>,

    /// Path of the title ID list. Read from TRIVIA_BOT_MOVIES_PATH.
    #[serde(default)]
    pub movies_path: Option<String>,

    /// Directory holding the journal files. Read from TRIVIA_BOT_DATA_DIR.
    #[serde(default)]
    pub data_dir: Option<String>,

    /// Base URL of the site being scraped. Read from TRIVIA_BOT_IMDB_BASE_URL.
    /// Overridable so tests can point at a local mock server.
    #[serde(default)]
    pub imdb_base_url: Option<String>,

    /// Tweet-creation endpoint. Read from TRIVIA_BOT_TWITTER_API_URL.
    #[serde(default)]
    pub twitter_api_url: Option<String>,

    /// OAuth 2.0 user token for posting. Read from TRIVIA_BOT_TWITTER_TOKEN.
    /// When absent, the bot runs with the mock publisher (dry run).
    #[serde(default)]
    pub twitter_token: Option<String>,

    /// Lower bound of the randomized sleep after a published cycle, in
    /// seconds. Read from TRIVIA_BOT_RELOAD_MIN_SECS.
    #[serde(default)]
    pub reload_min_secs: Option<u64>,

    /// Upper bound of the randomized sleep after a published cycle, in
    /// seconds. Read from TRIVIA_BOT_RELOAD_MAX_SECS.
    #[serde(default)]
    pub reload_max_secs: Option<u64>,

    /// Sleep after a disqualified cycle, in seconds. Read from
    /// TRIVIA_BOT_RETRY_DELAY_SECS.
    #[serde(default)]
    pub retry_delay_secs: Option<u64>,

    /// Page fetch timeout in milliseconds. Read from TRIVIA_BOT_HTTP_TIMEOUT_MS.
    #[serde(default)]
    pub http_timeout_ms: Option<u64>,

    /// Generate random catalog IDs instead of reading the list files.
    /// Read from TRIVIA_BOT_FULL_RANDOM.
    #[serde(default)]
    pub full_random: Option<bool>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("TRIVIA_BOT"));
        if let Ok(path) = std::env::var("TRIVIA_BOT_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        let mut cfg: Self = c.build()?.try_deserialize()?;
        // Multi-word numeric keys are re-read explicitly; the prefixed env
        // source does not reliably split them.
        if let Ok(s) = std::env::var("TRIVIA_BOT_RELOAD_MIN_SECS") {
            if let Ok(n) = s.parse::<u64>() {
                cfg.reload_min_secs = Some(n);
            }
        }
        if let Ok(s) = std::env::var("TRIVIA_BOT_RELOAD_MAX_SECS") {
            if let Ok(n) = s.parse::<u64>() {
                cfg.reload_max_secs = Some(n);
            }
        }
        if let Ok(s) = std::env::var("TRIVIA_BOT_RETRY_DELAY_SECS") {
            if let Ok(n) = s.parse::<u64>() {
                cfg.retry_delay_secs = Some(n);
            }
        }
        if let Ok(s) = std::env::var("TRIVIA_BOT_HTTP_TIMEOUT_MS") {
            if let Ok(n) = s.parse::<u64>() {
                cfg.http_timeout_ms = Some(n);
            }
        }
        if let Ok(s) = std::env::var("TRIVIA_BOT_FULL_RANDOM") {
            if let Ok(b) = s.parse::<bool>() {
                cfg.full_random = Some(b);
            }
        }
        Ok(cfg)
    }

    /// Returns the person ID list path. Defaults to ./names.txt.
    pub fn names_path_or_default(&self) -> String {
        self.names_path
            .clone()
            .unwrap_or_else(|| "./names.txt".to_string())
    }

    /// Returns the title ID list path. Defaults to ./movies.txt.
    pub fn movies_path_or_default(&self) -> String {
        self.movies_path
            .clone()
            .unwrap_or_else(|| "./movies.txt".to_string())
    }

    /// Returns the journal directory. Defaults to ./data.
    pub fn data_dir_or_default(&self) -> String {
        self.data_dir
            .clone()
            .unwrap_or_else(|| "./data".to_string())
    }

    /// Returns the scrape base URL. Defaults to the public IMDb site.
    pub fn imdb_base_url_or_default(&self) -> String {
        self.imdb_base_url
            .clone()
            .or_else(|| std::env::var("TRIVIA_BOT_IMDB_BASE_URL").ok())
            .unwrap_or_else(|| "https://www.imdb.com".to_string())
    }

    /// Returns the tweet-creation endpoint. Defaults to the v2 API.
    pub fn twitter_api_url_or_default(&self) -> String {
        self.twitter_api_url
            .clone()
            .or_else(|| std::env::var("TRIVIA_BOT_TWITTER_API_URL").ok())
            .unwrap_or_else(|| "https://api.twitter.com/2/tweets".to_string())
    }

    /// Returns the posting token if configured. Reads from config or
    /// TRIVIA_BOT_TWITTER_TOKEN env.
    pub fn twitter_token(&self) -> Option<String> {
        self.twitter_token
            .clone()
            .or_else(|| std::env::var("TRIVIA_BOT_TWITTER_TOKEN").ok())
    }

    /// Returns true if posting is configured (token present).
    pub fn is_twitter_configured(&self) -> bool {
        self.twitter_token().is_some()
    }

    /// Returns the reload window lower bound in seconds. Defaults to 60.
    pub fn reload_min_secs_or_default(&self) -> u64 {
        self.reload_min_secs.unwrap_or(DEFAULT_RELOAD_MIN_SECS)
    }

    /// Returns the reload window upper bound in seconds. Defaults to 1800.
    pub fn reload_max_secs_or_default(&self) -> u64 {
        self.reload_max_secs.unwrap_or(DEFAULT_RELOAD_MAX_SECS)
    }

    /// Returns the retry delay in seconds. Defaults to 1.
    pub fn retry_delay_secs_or_default(&self) -> u64 {
        self.retry_delay_secs.unwrap_or(1)
    }

    /// Returns the page fetch timeout in milliseconds. Defaults to 10000.
    pub fn http_timeout_ms_or_default(&self) -> u64 {
        self.http_timeout_ms.unwrap_or(10_000)
    }

    /// Returns true when IDs should be generated instead of read from files.
    pub fn full_random_or_default(&self) -> bool {
        self.full_random.unwrap_or(false)
    }
}
