use crate::config::RecipeEncoding;
use serde::Deserialize;
use std::path::Path;

/// An image picked for a submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl ImageFile {
    /// Wrap raw bytes, inferring the content type from the file name
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let mime = mime_guess::from_path(&file_name)
            .first_or_octet_stream()
            .to_string();
        Self {
            file_name,
            mime,
            bytes,
        }
    }

    /// Read an image from disk
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self, std::io::Error> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image".to_string());
        Ok(Self::new(file_name, bytes))
    }
}

/// Ingredients detected in an image, in the order the backend returned them
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngredientList(Vec<String>);

impl IngredientList {
    pub fn new(items: Vec<String>) -> Self {
        Self(items)
    }

    /// Parse a comma-separated reply, trimming entries and dropping empty ones
    pub fn from_comma_separated(text: &str) -> Self {
        Self(
            text.split(',')
                .map(str::trim)
                .filter(|i| !i.is_empty())
                .map(String::from)
                .collect(),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn items(&self) -> &[String] {
        &self.0
    }

    /// Human-readable form, e.g. "egg, milk"
    pub fn display(&self) -> String {
        self.0.join(", ")
    }

    /// Single-field form sent to the recipe endpoint
    pub fn encoded(&self, encoding: RecipeEncoding) -> String {
        self.0.join(encoding.separator())
    }
}

impl From<Vec<String>> for IngredientList {
    fn from(items: Vec<String>) -> Self {
        Self(items)
    }
}

/// Recipe markup ready for insertion into the recipe region
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeContent(pub String);

impl RecipeContent {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One submit action: the selected image and whatever the workflow derived from it
#[derive(Debug, Clone, Default)]
pub struct Submission {
    pub image: Option<ImageFile>,
    pub ingredients: Option<IngredientList>,
    pub recipe: Option<RecipeContent>,
}

impl Submission {
    pub fn new(image: Option<ImageFile>) -> Self {
        Self {
            image,
            ..Default::default()
        }
    }
}

/// How a submission ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// No image was selected; nothing was sent
    MissingImage,
    /// Step A failed
    DetectionFailed(String),
    /// Step A succeeded with zero ingredients; Step B was skipped
    NoIngredients,
    /// Step B failed
    RecipeFailed {
        ingredients: IngredientList,
        message: String,
    },
    /// Step B succeeded without a recipe field
    NoRecipe { ingredients: IngredientList },
    /// Both steps succeeded
    Rendered {
        ingredients: IngredientList,
        recipe: RecipeContent,
    },
}

impl SubmissionOutcome {
    pub fn is_error(&self) -> bool {
        matches!(
            self,
            SubmissionOutcome::MissingImage
                | SubmissionOutcome::DetectionFailed(_)
                | SubmissionOutcome::RecipeFailed { .. }
        )
    }
}

/// Body of a detection response
#[derive(Debug, Deserialize, Default)]
pub struct DetectResponse {
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Body of a recipe response
#[derive(Debug, Deserialize, Default)]
pub struct RecipeResponse {
    #[serde(default)]
    pub recipe: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_inference() {
        assert_eq!(ImageFile::new("fridge.JPG", vec![]).mime, "image/jpeg");
        assert_eq!(ImageFile::new("a.png", vec![]).mime, "image/png");
        assert_eq!(ImageFile::new("scan.tiff", vec![]).mime, "image/tiff");
        assert_eq!(ImageFile::new("logo.svg", vec![]).mime, "image/svg+xml");
        assert_eq!(
            ImageFile::new("noext", vec![]).mime,
            "application/octet-stream"
        );
    }

    #[test]
    fn test_ingredient_joins() {
        let list = IngredientList::new(vec!["egg".into(), "milk".into()]);
        assert_eq!(list.display(), "egg, milk");
        assert_eq!(list.encoded(RecipeEncoding::UrlEncoded), "egg,milk");
        assert_eq!(list.encoded(RecipeEncoding::Multipart), "egg, milk");
    }

    #[test]
    fn test_from_comma_separated_drops_blanks() {
        let list = IngredientList::from_comma_separated(" milk, eggs ,, butter,");
        assert_eq!(list.items(), ["milk", "eggs", "butter"]);
        assert!(IngredientList::from_comma_separated("  ").is_empty());
    }

    #[test]
    fn test_detect_response_defaults_to_empty() {
        let body: DetectResponse = serde_json::from_str("{}").unwrap();
        assert!(body.ingredients.is_empty());
        assert!(body.error.is_none());
    }
}
