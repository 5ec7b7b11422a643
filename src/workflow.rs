//! The submit workflow: validate the selection, detect ingredients, generate
//! a recipe, and write the outcome into a [`View`].
//!
//! Step B only runs after Step A succeeded with at least one ingredient.
//! Every failure ends the current submission and nothing else; the controller
//! can be submitted to again straight away.

use crate::backends::RecipeApi;
use crate::error::SnapError;
use crate::fence::strip_code_fence;
use crate::model::{ImageFile, IngredientList, RecipeContent, Submission, SubmissionOutcome};
use crate::view::{Region, View};
use log::{debug, info, warn};

pub const MISSING_IMAGE_MESSAGE: &str = "Please select an image.";
pub const NO_INGREDIENTS_MESSAGE: &str = "No ingredients detected.";
pub const NO_RECIPE_MESSAGE: &str = "No recipe generated.";
pub const DETECT_FAILED_MESSAGE: &str = "Failed to detect ingredients.";
pub const RECIPE_FAILED_MESSAGE: &str = "Failed to generate recipe.";

/// Drives submissions against a backend and writes results to a view
pub struct WorkflowController<V: View> {
    api: Box<dyn RecipeApi>,
    view: V,
}

impl<V: View> WorkflowController<V> {
    pub fn new(api: Box<dyn RecipeApi>, view: V) -> Self {
        Self { api, view }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn into_view(self) -> V {
        self.view
    }

    /// Check that the submission has an image to send
    pub fn validate(submission: &Submission) -> Result<&ImageFile, SnapError> {
        submission.image.as_ref().ok_or(SnapError::MissingImage)
    }

    /// Step A
    pub async fn detect_ingredients(&self, image: &ImageFile) -> Result<IngredientList, SnapError> {
        debug!(
            "Detecting ingredients in {} via {}",
            image.file_name,
            self.api.backend_name()
        );
        self.api.detect_ingredients(image).await
    }

    /// Step B. Fence markers around the returned markup are stripped; a recipe
    /// that is blank afterwards is reported as `None`.
    pub async fn generate_recipe(
        &self,
        ingredients: &IngredientList,
    ) -> Result<Option<RecipeContent>, SnapError> {
        debug!(
            "Generating recipe for {} ingredients via {}",
            ingredients.len(),
            self.api.backend_name()
        );
        let recipe = self.api.generate_recipe(ingredients).await?;
        // Blank output counts as no recipe at all
        Ok(recipe
            .map(|r| strip_code_fence(&r).to_string())
            .filter(|r| !r.is_empty())
            .map(RecipeContent))
    }

    /// Write an outcome into the view. Regions the outcome says nothing about
    /// are cleared.
    pub fn render(&mut self, outcome: &SubmissionOutcome) {
        self.clear_all();

        match outcome {
            SubmissionOutcome::MissingImage => {
                self.view.set_text(Region::Feedback, MISSING_IMAGE_MESSAGE);
            }
            SubmissionOutcome::DetectionFailed(message) => {
                self.view.set_text(Region::Feedback, message);
            }
            SubmissionOutcome::NoIngredients => {
                self.view.set_text(Region::Ingredients, NO_INGREDIENTS_MESSAGE);
            }
            SubmissionOutcome::RecipeFailed {
                ingredients,
                message,
            } => {
                self.show_ingredients(ingredients);
                self.view.set_text(Region::Feedback, message);
            }
            SubmissionOutcome::NoRecipe { ingredients } => {
                self.show_ingredients(ingredients);
                self.view.set_text(Region::Recipe, NO_RECIPE_MESSAGE);
            }
            SubmissionOutcome::Rendered {
                ingredients,
                recipe,
            } => {
                self.show_ingredients(ingredients);
                self.view.set_markup(Region::Recipe, recipe.as_str());
            }
        }
    }

    /// Run one full submission and render its outcome.
    ///
    /// The submit control is disabled for the duration and re-enabled
    /// whatever the outcome.
    pub async fn submit(&mut self, image: Option<ImageFile>) -> SubmissionOutcome {
        self.clear_all();
        self.view.set_submit_enabled(false);

        let mut submission = Submission::new(image);
        let outcome = self.run(&mut submission).await;

        self.render(&outcome);
        self.view.set_submit_enabled(true);

        if outcome.is_error() {
            warn!("Submission ended with {:?}", outcome);
        } else {
            info!("Submission finished: {:?}", outcome);
        }
        outcome
    }

    async fn run(&mut self, submission: &mut Submission) -> SubmissionOutcome {
        let image = match Self::validate(submission) {
            Ok(image) => image,
            Err(_) => return SubmissionOutcome::MissingImage,
        };

        let ingredients = match self.detect_ingredients(image).await {
            Ok(ingredients) => ingredients,
            Err(e) => {
                warn!("Ingredient detection failed: {}", e);
                return SubmissionOutcome::DetectionFailed(e.feedback(DETECT_FAILED_MESSAGE));
            }
        };
        submission.ingredients = Some(ingredients.clone());

        if ingredients.is_empty() {
            return SubmissionOutcome::NoIngredients;
        }
        // Visible while Step B is in flight
        self.show_ingredients(&ingredients);

        match self.generate_recipe(&ingredients).await {
            Ok(Some(recipe)) => {
                submission.recipe = Some(recipe.clone());
                SubmissionOutcome::Rendered {
                    ingredients,
                    recipe,
                }
            }
            Ok(None) => SubmissionOutcome::NoRecipe { ingredients },
            Err(e) => {
                warn!("Recipe generation failed: {}", e);
                SubmissionOutcome::RecipeFailed {
                    ingredients,
                    message: e.feedback(RECIPE_FAILED_MESSAGE),
                }
            }
        }
    }

    fn show_ingredients(&mut self, ingredients: &IngredientList) {
        self.view.set_text(
            Region::Ingredients,
            &format!("Detected Ingredients: {}", ingredients.display()),
        );
    }

    fn clear_all(&mut self) {
        self.view.clear(Region::Ingredients);
        self.view.clear(Region::Recipe);
        self.view.clear(Region::Feedback);
    }
}
