use crate::backends::{build_recipe_prompt, RecipeApi, DETECT_INGREDIENTS_PROMPT};
use crate::config::ProviderConfig;
use crate::error::SnapError;
use crate::model::{ImageFile, IngredientList};
use crate::preview::data_url;
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;

/// Talks to OpenAI directly, without the recipe service in between
pub struct OpenAiRecipeApi {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    vision_model: String,
    temperature: f32,
    detect_max_tokens: u32,
    max_tokens: u32,
}

impl OpenAiRecipeApi {
    /// Create a new OpenAI backend from configuration
    pub fn new(config: &ProviderConfig) -> Result<Self, SnapError> {
        // Try config first, then fall back to environment variable
        let api_key = config
            .api_key
            .clone()
            .or_else(|| std::env::var("OPENAI_API_KEY").ok())
            .ok_or_else(|| {
                SnapError::Provider("OPENAI_API_KEY not found in config or environment".to_string())
            })?;

        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| "https://api.openai.com".to_string());

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            client,
            api_key,
            base_url,
            model: config.model.clone(),
            vision_model: config.vision_model.clone(),
            temperature: config.temperature,
            detect_max_tokens: config.detect_max_tokens,
            max_tokens: config.max_tokens,
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        let defaults = ProviderConfig::default();
        Self {
            client: Client::new(),
            api_key,
            base_url,
            model: defaults.model,
            vision_model: defaults.vision_model,
            temperature: defaults.temperature,
            detect_max_tokens: defaults.detect_max_tokens,
            max_tokens: defaults.max_tokens,
        }
    }

    async fn chat(&self, body: Value) -> Result<String, SnapError> {
        let response = self
            .client
            .post(format!("{}/v1/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        let response_body: Value = serde_json::from_str(&text).unwrap_or(Value::Null);
        debug!("{:?}", response_body);

        if !status.is_success() {
            // OpenAI nests the message; some proxies return a bare string
            let message = response_body["error"]["message"]
                .as_str()
                .or_else(|| response_body["error"].as_str())
                .unwrap_or_default()
                .to_string();
            return Err(SnapError::Api {
                status: status.as_u16(),
                message,
            });
        }

        response_body["choices"][0]["message"]["content"]
            .as_str()
            .map(String::from)
            .ok_or_else(|| {
                SnapError::InvalidResponse("Failed to extract content from response".to_string())
            })
    }
}

#[async_trait]
impl RecipeApi for OpenAiRecipeApi {
    fn backend_name(&self) -> &str {
        "openai"
    }

    async fn detect_ingredients(&self, image: &ImageFile) -> Result<IngredientList, SnapError> {
        let content = self
            .chat(json!({
                "model": self.vision_model,
                "messages": [{
                    "role": "user",
                    "content": [
                        {"type": "text", "text": DETECT_INGREDIENTS_PROMPT.trim_end()},
                        {"type": "image_url", "image_url": {"url": data_url(image)}}
                    ]
                }],
                "max_tokens": self.detect_max_tokens
            }))
            .await?;

        Ok(IngredientList::from_comma_separated(&content))
    }

    async fn generate_recipe(
        &self,
        ingredients: &IngredientList,
    ) -> Result<Option<String>, SnapError> {
        let prompt = build_recipe_prompt(ingredients);
        debug!("Recipe generation prompt: {}", prompt);

        let content = self
            .chat(json!({
                "model": self.model,
                "messages": [{"role": "user", "content": prompt}],
                "temperature": self.temperature,
                "max_tokens": self.max_tokens
            }))
            .await?;

        Ok(Some(content))
    }
}
