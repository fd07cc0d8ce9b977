use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Load .env file (silently ignores if missing).
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

/// Non-empty value of `key`, preferring `{PROFILE}_{key}` when a profile is set.
fn lookup(profile: &str, key: &str) -> Option<String> {
    let non_empty = |name: &str| env::var(name).ok().filter(|v| !v.is_empty());
    if !profile.is_empty() {
        if let Some(v) = non_empty(&format!("{profile}_{key}")) {
            return Some(v);
        }
    }
    non_empty(key)
}

fn lookup_or(profile: &str, key: &str, default: &str) -> String {
    lookup(profile, key).unwrap_or_else(|| default.to_string())
}

/// Parsed value of `key`; unparsable values fall back to `default`.
fn lookup_parsed<T: FromStr>(profile: &str, key: &str, default: T) -> T {
    lookup(profile, key)
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

// ── Top-level config ──────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Active profile name (empty = default).
    pub profile: String,
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub sentiment: SentimentConfig,
}

impl Config {
    /// Build config from environment variables (call `load_dotenv()` first).
    /// Profile is read from `REVIEWLENS_PROFILE`. When set (e.g. `PROD`),
    /// every key is first looked up as `{PROFILE}_{KEY}`, falling back to `{KEY}`.
    pub fn from_env() -> Self {
        let profile = lookup("", "REVIEWLENS_PROFILE").unwrap_or_default().to_uppercase();
        Self::for_profile(&profile)
    }

    /// Build config for a specific named profile (empty string = default).
    pub fn for_profile(profile: &str) -> Self {
        let p = profile.to_uppercase();
        let p = p.as_str();
        Self {
            profile: p.to_string(),
            server: ServerConfig::from_env_profiled(p),
            storage: StorageConfig::from_env_profiled(p),
            sentiment: SentimentConfig::from_env_profiled(p),
        }
    }

    pub fn profile_label(&self) -> &str {
        if self.profile.is_empty() { "default" } else { &self.profile }
    }

    /// Print a summary for startup logs.
    pub fn log_summary(&self) {
        tracing::info!("Config loaded (profile: {}):", self.profile_label());
        tracing::info!("  server:     host={}, port={}", self.server.host, self.server.port);
        tracing::info!("  storage:    reviews_csv={}", self.storage.reviews_csv.display());
        tracing::info!(
            "  sentiment:  lexicon={}",
            self.sentiment
                .lexicon_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(built-in)".to_string())
        );
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

// ── Server ────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    fn from_env_profiled(p: &str) -> Self {
        Self {
            host: lookup_or(p, "HOST", "0.0.0.0"),
            port: lookup_parsed(p, "PORT", 8000),
        }
    }
}

// ── Storage ───────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// CSV file seeding the review store at startup.
    pub reviews_csv: PathBuf,
}

impl StorageConfig {
    fn from_env_profiled(p: &str) -> Self {
        Self {
            reviews_csv: PathBuf::from(lookup_or(p, "REVIEWS_CSV", "data/reviews.csv")),
        }
    }
}

// ── Sentiment ─────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentConfig {
    /// Optional tab-separated lexicon replacing the built-in one.
    pub lexicon_path: Option<PathBuf>,
}

impl SentimentConfig {
    fn from_env_profiled(p: &str) -> Self {
        Self {
            lexicon_path: lookup(p, "SENTIMENT_LEXICON").map(PathBuf::from),
        }
    }
}
