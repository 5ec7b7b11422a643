use crate::backends::{HttpRecipeApi, OpenAiRecipeApi, RecipeApi};
use crate::config::SnapConfig;
use crate::error::SnapError;

pub struct ApiFactory;

impl ApiFactory {
    /// Create a backend instance by name
    pub fn create(backend: &str, config: &SnapConfig) -> Result<Box<dyn RecipeApi>, SnapError> {
        match backend {
            "http" => Ok(Box::new(HttpRecipeApi::new(&config.api)?)),
            "openai" => Ok(Box::new(OpenAiRecipeApi::new(&config.openai)?)),
            _ => Err(SnapError::Provider(format!("Unknown backend: {}", backend))),
        }
    }

    /// Create the backend named in configuration
    pub fn from_config(config: &SnapConfig) -> Result<Box<dyn RecipeApi>, SnapError> {
        Self::create(&config.backend, config)
    }

    /// List all available backend names
    pub fn available_backends() -> Vec<&'static str> {
        vec!["http", "openai"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_http_backend() {
        let config = SnapConfig::default();
        let api = ApiFactory::from_config(&config).unwrap();
        assert_eq!(api.backend_name(), "http");
    }

    #[test]
    fn test_create_openai_backend() {
        let mut config = SnapConfig::default();
        config.openai.api_key = Some("test-key".to_string());
        let api = ApiFactory::create("openai", &config).unwrap();
        assert_eq!(api.backend_name(), "openai");
    }

    #[test]
    fn test_create_unknown_backend() {
        let config = SnapConfig::default();
        let result = ApiFactory::create("carrier-pigeon", &config);
        match result {
            Err(e) => assert!(e.to_string().contains("Unknown backend")),
            Ok(_) => panic!("Expected unknown backend error"),
        }
    }

    #[test]
    fn test_available_backends() {
        assert_eq!(ApiFactory::available_backends(), ["http", "openai"]);
    }
}
