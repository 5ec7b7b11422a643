use crate::model::IngredientList;

/// Prompt sent alongside the photo when asking a vision model for ingredients.
///
/// Loaded from `detect_prompt.txt` at compile time. The model is asked to
/// reply with a bare comma-separated list.
pub const DETECT_INGREDIENTS_PROMPT: &str = include_str!("detect_prompt.txt");

/// Recipe prompt template, loaded from `recipe_prompt.txt` at compile time.
///
/// Contains an `{{INGREDIENTS}}` placeholder; use [`build_recipe_prompt`].
pub const RECIPE_PROMPT_TEMPLATE: &str = include_str!("recipe_prompt.txt");

/// Inject the ingredients into the recipe prompt template.
pub fn build_recipe_prompt(ingredients: &IngredientList) -> String {
    RECIPE_PROMPT_TEMPLATE
        .trim_end()
        .replace("{{INGREDIENTS}}", &ingredients.display())
}
