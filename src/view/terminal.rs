use crate::view::{PageView, RegionContent};
use scraper::Html;

/// Reduce recipe markup to readable text, one text block per line
pub fn markup_to_text(markup: &str) -> String {
    let fragment = Html::parse_fragment(markup);
    fragment
        .root_element()
        .text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn region_text(content: &RegionContent) -> Option<String> {
    match content {
        RegionContent::Empty => None,
        RegionContent::Text(text) => Some(text.clone()),
        RegionContent::Markup(markup) => Some(markup_to_text(markup)),
    }
}

/// Render the page for a terminal
pub fn render_terminal(page: &PageView) -> String {
    [&page.ingredients, &page.recipe, &page.feedback]
        .into_iter()
        .filter_map(region_text)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}
