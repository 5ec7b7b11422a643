pub mod backends;
pub mod config;
pub mod contact;
pub mod error;
pub mod fence;
pub mod model;
pub mod preview;
pub mod view;
pub mod workflow;

use std::path::Path;

pub use backends::{ApiFactory, HttpRecipeApi, OpenAiRecipeApi, RecipeApi};
pub use config::{RecipeEncoding, SnapConfig};
pub use error::SnapError;
pub use model::{ImageFile, IngredientList, RecipeContent, Submission, SubmissionOutcome};
pub use view::{PageView, Region, RegionContent, View};
pub use workflow::WorkflowController;

/// Run one submission for the image at `path` with the configured backend and
/// return the outcome together with the rendered page.
///
/// # Example
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let (outcome, page) = recipe_snap::suggest_recipe("fridge.jpg").await?;
/// println!("{:?}", outcome);
/// println!("{}", recipe_snap::view::render_terminal(&page));
/// # Ok(())
/// # }
/// ```
pub async fn suggest_recipe(
    path: impl AsRef<Path>,
) -> Result<(SubmissionOutcome, PageView), SnapError> {
    let config = SnapConfig::load()?;
    let api = ApiFactory::from_config(&config)?;
    let image = ImageFile::from_path(path).await?;

    let mut controller = WorkflowController::new(api, PageView::new());
    let outcome = controller.submit(Some(image)).await;
    Ok((outcome, controller.into_view()))
}
