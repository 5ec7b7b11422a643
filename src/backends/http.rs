use crate::backends::RecipeApi;
use crate::config::{ApiConfig, RecipeEncoding};
use crate::error::SnapError;
use crate::model::{DetectResponse, ImageFile, IngredientList, RecipeResponse};
use async_trait::async_trait;
use log::debug;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde_json::Value;
use std::time::Duration;

const DETECT_PATH: &str = "/detect-ingredients";
const RECIPE_PATH: &str = "/generate-recipe";
const HEALTH_PATH: &str = "/health";

/// Client for the recipe service's HTTP routes
pub struct HttpRecipeApi {
    client: Client,
    base_url: String,
    encoding: RecipeEncoding,
}

impl HttpRecipeApi {
    /// Create a client from configuration
    pub fn new(config: &ApiConfig) -> Result<Self, SnapError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            encoding: config.recipe_encoding,
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(base_url: impl Into<String>, encoding: RecipeEncoding) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            encoding,
        }
    }

    pub fn encoding(&self) -> RecipeEncoding {
        self.encoding
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Ask the service whether it is up
    pub async fn health(&self) -> Result<String, SnapError> {
        let response = self.client.get(self.url(HEALTH_PATH)).send().await?;
        let response = ensure_success(response).await?;
        let body: Value = response.json().await?;
        body["status"]
            .as_str()
            .map(String::from)
            .ok_or_else(|| SnapError::InvalidResponse("missing status field".to_string()))
    }
}

/// Turn a non-success response into `SnapError::Api`, using the body's
/// `error` field when there is one.
async fn ensure_success(response: Response) -> Result<Response, SnapError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().await.unwrap_or_default();
    debug!("Backend returned {}: {}", status, text);
    let message = serde_json::from_str::<Value>(&text)
        .ok()
        .and_then(|body| body["error"].as_str().map(String::from))
        .unwrap_or_default();

    Err(SnapError::Api {
        status: status.as_u16(),
        message,
    })
}

#[async_trait]
impl RecipeApi for HttpRecipeApi {
    fn backend_name(&self) -> &str {
        "http"
    }

    async fn detect_ingredients(&self, image: &ImageFile) -> Result<IngredientList, SnapError> {
        let part = Part::bytes(image.bytes.clone())
            .file_name(image.file_name.clone())
            .mime_str(&image.mime)?;
        let form = Form::new().part("file", part);

        debug!(
            "Uploading {} ({} bytes) for detection",
            image.file_name,
            image.bytes.len()
        );
        let response = self
            .client
            .post(self.url(DETECT_PATH))
            .multipart(form)
            .send()
            .await?;
        let response = ensure_success(response).await?;

        let body: DetectResponse = response
            .json()
            .await
            .map_err(|e| SnapError::InvalidResponse(e.to_string()))?;
        debug!("Detected ingredients: {:?}", body.ingredients);

        Ok(IngredientList::new(body.ingredients))
    }

    async fn generate_recipe(
        &self,
        ingredients: &IngredientList,
    ) -> Result<Option<String>, SnapError> {
        let joined = ingredients.encoded(self.encoding);
        let request = self.client.post(self.url(RECIPE_PATH));
        let request = match self.encoding {
            RecipeEncoding::UrlEncoded => request.form(&[("ingredients", joined.as_str())]),
            RecipeEncoding::Multipart => {
                request.multipart(Form::new().text("ingredients", joined.clone()))
            }
        };

        debug!("Requesting recipe for '{}'", joined);
        let response = request.send().await?;
        let status = response.status();
        let response = ensure_success(response).await?;

        let body: RecipeResponse = response
            .json()
            .await
            .map_err(|e| SnapError::InvalidResponse(e.to_string()))?;

        // A 2xx body can still carry an error
        if let Some(message) = body.error {
            return Err(SnapError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(body.recipe)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};

    fn image() -> ImageFile {
        ImageFile::new("fridge.jpg", b"fake jpeg".to_vec())
    }

    #[tokio::test]
    async fn test_detect_ingredients() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/detect-ingredients")
            .match_header(
                "content-type",
                Matcher::Regex("multipart/form-data".to_string()),
            )
            .match_body(Matcher::Regex(r#"name="file"; filename="fridge.jpg""#.to_string()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"ingredients": ["egg", "milk"]}"#)
            .create_async()
            .await;

        let api = HttpRecipeApi::with_base_url(server.url(), RecipeEncoding::UrlEncoded);
        let result = api.detect_ingredients(&image()).await.unwrap();
        assert_eq!(result.items(), ["egg", "milk"]);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_detect_missing_field_is_empty() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("POST", "/detect-ingredients")
            .with_status(200)
            .with_body("{}")
            .create_async()
            .await;

        let api = HttpRecipeApi::with_base_url(server.url(), RecipeEncoding::UrlEncoded);
        assert!(api.detect_ingredients(&image()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_detect_error_body() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("POST", "/detect-ingredients")
            .with_status(500)
            .with_body(r#"{"error": "bad image"}"#)
            .create_async()
            .await;

        let api = HttpRecipeApi::with_base_url(server.url(), RecipeEncoding::UrlEncoded);
        match api.detect_ingredients(&image()).await {
            Err(SnapError::Api { status, message }) => {
                assert_eq!(status, 500);
                assert_eq!(message, "bad image");
            }
            other => panic!("Expected Api error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_detect_error_without_json() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("POST", "/detect-ingredients")
            .with_status(502)
            .with_body("Bad Gateway")
            .create_async()
            .await;

        let api = HttpRecipeApi::with_base_url(server.url(), RecipeEncoding::UrlEncoded);
        match api.detect_ingredients(&image()).await {
            Err(SnapError::Api { status, message }) => {
                assert_eq!(status, 502);
                assert!(message.is_empty());
            }
            other => panic!("Expected Api error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_generate_recipe_urlencoded() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/generate-recipe")
            .match_body(Matcher::UrlEncoded(
                "ingredients".to_string(),
                "egg,milk".to_string(),
            ))
            .with_status(200)
            .with_body(r#"{"recipe": "<p>Scrambled</p>"}"#)
            .create_async()
            .await;

        let api = HttpRecipeApi::with_base_url(server.url(), RecipeEncoding::UrlEncoded);
        let list = IngredientList::new(vec!["egg".into(), "milk".into()]);
        let recipe = api.generate_recipe(&list).await.unwrap();
        assert_eq!(recipe.as_deref(), Some("<p>Scrambled</p>"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_generate_recipe_multipart() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/generate-recipe")
            .match_body(Matcher::Regex("egg, milk".to_string()))
            .with_status(200)
            .with_body(r#"{"recipe": "<p>Scrambled</p>"}"#)
            .create_async()
            .await;

        let api = HttpRecipeApi::with_base_url(server.url(), RecipeEncoding::Multipart);
        let list = IngredientList::new(vec!["egg".into(), "milk".into()]);
        assert!(api.generate_recipe(&list).await.unwrap().is_some());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_generate_recipe_error_field_on_success_status() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("POST", "/generate-recipe")
            .with_status(200)
            .with_body(r#"{"error": "model unavailable"}"#)
            .create_async()
            .await;

        let api = HttpRecipeApi::with_base_url(server.url(), RecipeEncoding::UrlEncoded);
        let list = IngredientList::new(vec!["egg".into()]);
        let err = api.generate_recipe(&list).await.unwrap_err();
        assert_eq!(err.to_string(), "model unavailable");
    }

    #[tokio::test]
    async fn test_generate_recipe_without_recipe_field() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("POST", "/generate-recipe")
            .with_status(200)
            .with_body("{}")
            .create_async()
            .await;

        let api = HttpRecipeApi::with_base_url(server.url(), RecipeEncoding::UrlEncoded);
        let list = IngredientList::new(vec!["egg".into()]);
        assert!(api.generate_recipe(&list).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_health() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/health")
            .with_status(200)
            .with_body(r#"{"status": "ok"}"#)
            .create_async()
            .await;

        let api = HttpRecipeApi::with_base_url(format!("{}/", server.url()), RecipeEncoding::UrlEncoded);
        assert_eq!(api.health().await.unwrap(), "ok");
    }
}
