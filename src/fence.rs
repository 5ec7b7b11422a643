const FENCE: &str = "```";

/// Strip a fenced-code wrapper from model output.
///
/// Only markers anchored at the start or end are removed. An opening fence
/// may carry a language tag (`html`, `c++`, ...) when it is directly followed
/// by a line break or markup, and then one line break.
pub fn strip_code_fence(text: &str) -> &str {
    let mut body = text.trim();

    if let Some(rest) = body.strip_prefix(FENCE) {
        // A tag only counts when markup, a line break or the closing fence follows it
        let after_tag = rest.trim_start_matches(is_tag_char);
        let tagged = after_tag.is_empty()
            || after_tag.starts_with(FENCE)
            || after_tag.starts_with(['\n', '\r', '<']);
        let rest = if tagged { after_tag } else { rest };
        body = rest
            .strip_prefix("\r\n")
            .or_else(|| rest.strip_prefix('\n'))
            .unwrap_or(rest);
    }

    if let Some(rest) = body.trim_end().strip_suffix(FENCE) {
        body = rest;
    }

    body.trim()
}

fn is_tag_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '+')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_inline_fence_with_tag() {
        assert_eq!(
            strip_code_fence("```html<p>Eat eggs</p>```"),
            "<p>Eat eggs</p>"
        );
    }

    #[test]
    fn test_strips_multiline_fence() {
        let text = "```html\n<h1>Omelette</h1>\n<p>Whisk.</p>\n```\n";
        assert_eq!(strip_code_fence(text), "<h1>Omelette</h1>\n<p>Whisk.</p>");
    }

    #[test]
    fn test_strips_fence_without_tag() {
        assert_eq!(strip_code_fence("```\n<p>x</p>\n```"), "<p>x</p>");
    }

    #[test]
    fn test_leaves_unfenced_markup_alone() {
        assert_eq!(strip_code_fence("<p>plain</p>"), "<p>plain</p>");
    }

    #[test]
    fn test_keeps_interior_backticks() {
        assert_eq!(
            strip_code_fence("<p>use ```code``` here</p>"),
            "<p>use ```code``` here</p>"
        );
    }

    #[test]
    fn test_only_closing_fence() {
        assert_eq!(strip_code_fence("<p>x</p>```"), "<p>x</p>");
    }

    #[test]
    fn test_leading_word_is_not_a_tag() {
        assert_eq!(
            strip_code_fence("```Pancakes with syrup```"),
            "Pancakes with syrup"
        );
    }

    #[test]
    fn test_tag_only_fence_is_empty() {
        assert_eq!(strip_code_fence("```html```"), "");
    }

    #[test]
    fn test_bare_fence_is_empty() {
        assert_eq!(strip_code_fence("```"), "");
    }
}
