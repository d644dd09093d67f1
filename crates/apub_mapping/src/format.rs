//! Rich text collaborator.

use std::sync::LazyLock;

use crate::model::{Account, Status};

pub trait Formatter: Send + Sync {
    /// Sanitized HTML body of a status.
    fn format_content(&self, status: &Status) -> String;
    /// Sanitized HTML bio of an account.
    fn format_bio(&self, account: &Account) -> String;
    fn format_field_value(&self, account: &Account, value: &str) -> String;
}

static REMOTE_HTML: LazyLock<ammonia::Builder<'static>> = LazyLock::new(|| {
    let mut builder = ammonia::Builder::empty();
    builder
        .add_tags(&[
            "p", "br", "span", "a", "del", "pre", "code", "em", "strong", "b", "i", "u", "ul",
            "ol", "li", "blockquote",
        ])
        .add_tag_attributes("a", &["href", "rel", "class"])
        .add_tag_attributes("span", &["class"])
        .add_clean_content_tags(&["script", "style"])
        .add_url_schemes(&["http", "https"])
        .link_rel(None);
    builder
});

/// Local text is stored as plain text and rendered into paragraphs; remote
/// text arrives as HTML and is sanitized.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlFormatter;

impl HtmlFormatter {
    fn render(local: bool, text: &str) -> String {
        if local {
            simple_format(text)
        } else {
            REMOTE_HTML.clean(text).to_string()
        }
    }
}

impl Formatter for HtmlFormatter {
    fn format_content(&self, status: &Status) -> String {
        HtmlFormatter::render(status.local, &status.text)
    }
    fn format_bio(&self, account: &Account) -> String {
        HtmlFormatter::render(account.is_local(), &account.note)
    }
    fn format_field_value(&self, account: &Account, value: &str) -> String {
        if account.is_local() {
            escape_html(value)
        } else {
            REMOTE_HTML.clean(value).to_string()
        }
    }
}

/// Blank lines separate paragraphs, single newlines become line breaks.
fn simple_format(text: &str) -> String {
    text.replace("\r\n", "\n")
        .split("\n\n")
        .map(|paragraph| paragraph.trim_matches('\n'))
        .filter(|paragraph| !paragraph.is_empty())
        .map(|paragraph| format!("<p>{}</p>", escape_html(paragraph).replace('\n', "<br />")))
        .collect()
}

/// Plain text as an HTML text node. `clean_text` escapes every markup
/// character; the sanitizer then normalises the entities it produced.
fn escape_html(text: &str) -> String {
    REMOTE_HTML.clean(&ammonia::clean_text(text)).to_string()
}
