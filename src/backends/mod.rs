mod factory;
mod http;
mod open_ai;
mod prompt;

pub use factory::ApiFactory;
pub use http::HttpRecipeApi;
pub use open_ai::OpenAiRecipeApi;
pub use prompt::{build_recipe_prompt, DETECT_INGREDIENTS_PROMPT};

use crate::error::SnapError;
use crate::model::{ImageFile, IngredientList};
use async_trait::async_trait;

/// Anything that can detect ingredients in a photo and write a recipe for them
#[async_trait]
pub trait RecipeApi: Send + Sync {
    /// Get the backend name (e.g., "http", "openai")
    fn backend_name(&self) -> &str;

    /// Step A: list the ingredients visible in `image`
    async fn detect_ingredients(&self, image: &ImageFile) -> Result<IngredientList, SnapError>;

    /// Step B: write a recipe for `ingredients`.
    ///
    /// `Ok(None)` means the backend answered successfully but produced no recipe.
    async fn generate_recipe(
        &self,
        ingredients: &IngredientList,
    ) -> Result<Option<String>, SnapError>;
}
