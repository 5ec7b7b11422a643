mod html;
mod terminal;

pub use html::render_html;
pub use terminal::{markup_to_text, render_terminal};

/// The three output areas a submission writes to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Ingredients,
    Recipe,
    Feedback,
}

/// Presentation binding for the workflow.
///
/// Implementations decide how regions are shown; the workflow only says what
/// goes where.
pub trait View {
    /// Empty a region
    fn clear(&mut self, region: Region);

    /// Show plain text in a region
    fn set_text(&mut self, region: Region, text: &str);

    /// Show rendered markup in a region
    fn set_markup(&mut self, region: Region, markup: &str);

    /// Enable or disable the submit control
    fn set_submit_enabled(&mut self, _enabled: bool) {}
}

/// What a region currently shows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RegionContent {
    #[default]
    Empty,
    Text(String),
    Markup(String),
}

impl RegionContent {
    pub fn is_empty(&self) -> bool {
        matches!(self, RegionContent::Empty)
    }

    /// The raw text or markup, `""` when empty
    pub fn as_str(&self) -> &str {
        match self {
            RegionContent::Empty => "",
            RegionContent::Text(s) | RegionContent::Markup(s) => s,
        }
    }
}

/// In-memory page: keeps the regions so they can be inspected or rendered
/// afterwards with [`render_terminal`] or [`render_html`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub ingredients: RegionContent,
    pub recipe: RegionContent,
    pub feedback: RegionContent,
    pub submit_enabled: bool,
}

impl Default for PageView {
    fn default() -> Self {
        Self {
            ingredients: RegionContent::Empty,
            recipe: RegionContent::Empty,
            feedback: RegionContent::Empty,
            submit_enabled: true,
        }
    }
}

impl PageView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn region(&self, region: Region) -> &RegionContent {
        match region {
            Region::Ingredients => &self.ingredients,
            Region::Recipe => &self.recipe,
            Region::Feedback => &self.feedback,
        }
    }

    fn region_mut(&mut self, region: Region) -> &mut RegionContent {
        match region {
            Region::Ingredients => &mut self.ingredients,
            Region::Recipe => &mut self.recipe,
            Region::Feedback => &mut self.feedback,
        }
    }
}

impl View for PageView {
    fn clear(&mut self, region: Region) {
        *self.region_mut(region) = RegionContent::Empty;
    }

    fn set_text(&mut self, region: Region, text: &str) {
        *self.region_mut(region) = RegionContent::Text(text.to_string());
    }

    fn set_markup(&mut self, region: Region, markup: &str) {
        *self.region_mut(region) = RegionContent::Markup(markup.to_string());
    }

    fn set_submit_enabled(&mut self, enabled: bool) {
        self.submit_enabled = enabled;
    }
}
