use crate::view::{PageView, RegionContent};
use html_escape::encode_text;

fn region_html(content: &RegionContent) -> String {
    match content {
        RegionContent::Empty => String::new(),
        RegionContent::Text(text) => format!("<p>{}</p>", encode_text(text)),
        RegionContent::Markup(markup) => markup.clone(),
    }
}

/// Render the page as an HTML fragment.
///
/// Text regions are escaped; markup regions are inserted verbatim.
pub fn render_html(page: &PageView) -> String {
    format!(
        "<div id=\"ingredients\">{}</div>\n<div id=\"recipe\">{}</div>\n<div id=\"feedback\">{}</div>\n",
        region_html(&page.ingredients),
        region_html(&page.recipe),
        region_html(&page.feedback),
    )
}
