use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct SnapConfig {
    /// Backend used for detection and generation ("http" or "openai")
    #[serde(default = "default_backend")]
    pub backend: String,
    /// Remote recipe service settings
    #[serde(default)]
    pub api: ApiConfig,
    /// Direct OpenAI settings, used when `backend = "openai"`
    #[serde(default)]
    pub openai: ProviderConfig,
}

/// Configuration for the remote recipe service
#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    /// Base URL the detection and recipe routes hang off
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// Body encoding for the recipe request
    #[serde(default)]
    pub recipe_encoding: RecipeEncoding,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout: default_timeout(),
            recipe_encoding: RecipeEncoding::default(),
        }
    }
}

/// How the ingredient list is sent to the recipe endpoint
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum RecipeEncoding {
    /// `application/x-www-form-urlencoded`, ingredients joined with ","
    #[default]
    UrlEncoded,
    /// `multipart/form-data`, ingredients joined with ", "
    Multipart,
}

impl RecipeEncoding {
    /// Separator used when joining ingredients for this encoding
    pub fn separator(&self) -> &'static str {
        match self {
            RecipeEncoding::UrlEncoded => ",",
            RecipeEncoding::Multipart => ", ",
        }
    }
}

/// Configuration for the OpenAI backend
#[derive(Debug, Deserialize, Clone)]
pub struct ProviderConfig {
    /// Model used for recipe generation
    #[serde(default = "default_model")]
    pub model: String,
    /// Model used for ingredient detection (must accept images)
    #[serde(default = "default_vision_model")]
    pub vision_model: String,
    /// Temperature for generation (0.0-1.0)
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Maximum tokens for the detection reply
    #[serde(default = "default_detect_max_tokens")]
    pub detect_max_tokens: u32,
    /// Maximum tokens for the recipe reply
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// API key for authentication (can also be set via OPENAI_API_KEY)
    pub api_key: Option<String>,
    /// Base URL for API endpoint (for custom or proxy endpoints)
    pub base_url: Option<String>,
    /// Request timeout in seconds
    #[serde(default = "default_provider_timeout")]
    pub timeout: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            vision_model: default_vision_model(),
            temperature: default_temperature(),
            detect_max_tokens: default_detect_max_tokens(),
            max_tokens: default_max_tokens(),
            api_key: None,
            base_url: None,
            timeout: default_provider_timeout(),
        }
    }
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            api: ApiConfig::default(),
            openai: ProviderConfig::default(),
        }
    }
}

// Default value functions
fn default_backend() -> String {
    "http".to_string()
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_timeout() -> u64 {
    60
}

fn default_provider_timeout() -> u64 {
    120
}

fn default_model() -> String {
    "gpt-4".to_string()
}

fn default_vision_model() -> String {
    "gpt-4o".to_string()
}

fn default_temperature() -> f32 {
    0.7
}

fn default_detect_max_tokens() -> u32 {
    100
}

fn default_max_tokens() -> u32 {
    2000
}

impl SnapConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_SNAP__ prefix
    /// 2. recipe-snap.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_SNAP__API__BASE_URL
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// Load configuration from file and environment variables
///
/// See [`SnapConfig::load`] for the precedence rules.
pub fn load_config() -> Result<SnapConfig, ConfigError> {
    let settings = Config::builder()
        .add_source(File::with_name("recipe-snap").required(false))
        // Use double underscore for nested: RECIPE_SNAP__OPENAI__API_KEY
        .add_source(
            Environment::with_prefix("RECIPE_SNAP")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
