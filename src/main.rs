use clap::{Parser, Subcommand};
use log::debug;
use recipe_snap::contact::ContactForm;
use recipe_snap::preview::ImagePreview;
use recipe_snap::view::{render_html, render_terminal};
use recipe_snap::{ApiFactory, HttpRecipeApi, PageView, SnapConfig, WorkflowController};
use std::error::Error;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "recipe-snap")]
#[command(about = "Turn a photo of your ingredients into a recipe")]
#[command(version)]
struct Cli {
    /// Backend to use ("http" or "openai"), overrides configuration
    #[arg(long, global = true)]
    backend: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Detect ingredients in an image and generate a recipe
    Submit {
        /// Image of the ingredients
        image: PathBuf,

        /// Also write the rendered page as HTML
        #[arg(long, value_name = "FILE")]
        html: Option<PathBuf>,
    },

    /// Print an image as a data URL
    Preview { image: PathBuf },

    /// Send a message through the contact form
    Contact {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        message: String,
    },

    /// Check that the recipe service is up
    Health,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let cli = Cli::parse();
    let mut config = SnapConfig::load()?;
    if let Some(backend) = cli.backend {
        config.backend = backend;
    }
    debug!("{:#?}", config);

    match cli.command {
        Commands::Submit { image, html } => {
            let image = recipe_snap::ImageFile::from_path(&image).await?;
            let api = ApiFactory::from_config(&config)?;
            let mut controller = WorkflowController::new(api, PageView::new());

            let outcome = controller.submit(Some(image)).await;
            let page = controller.into_view();
            println!("{}", render_terminal(&page));

            if let Some(path) = html {
                tokio::fs::write(&path, render_html(&page)).await?;
            }
            if outcome.is_error() {
                std::process::exit(1);
            }
        }
        Commands::Preview { image } => {
            let mut preview = ImagePreview::new();
            preview.load(&image).await?;
            if let Some(src) = preview.src {
                println!("{}", src);
            }
        }
        Commands::Contact {
            name,
            email,
            message,
        } => {
            let mut form = ContactForm::new(name, email, message);
            println!("{}", form.submit());
        }
        Commands::Health => {
            let api = HttpRecipeApi::new(&config.api)?;
            println!("{}", api.health().await?);
        }
    }

    Ok(())
}
