//! Markdown Rendering
//!
//! Card descriptions render as markdown in the detail modal.

use pulldown_cmark::{html::push_html, Options, Parser};

/// Render a description to HTML with the common extensions enabled
pub fn render_markdown(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(source, options);
    let mut html = String::new();
    push_html(&mut html, parser);
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_basic_markup() {
        let html = render_markdown("**bold** and `code`");
        assert!(html.contains("<strong>bold</strong>"));
        assert!(html.contains("<code>code</code>"));
    }

    #[test]
    fn renders_task_lists() {
        let html = render_markdown("- [x] shipped\n- [ ] pending");
        assert!(html.contains("checkbox"));
    }

    #[test]
    fn plain_text_becomes_a_paragraph() {
        assert_eq!(render_markdown("hello"), "<p>hello</p>\n");
    }
}
