//! Mention, Hashtag and Emoji tags.

use crate::context::Extension;
use crate::document::{Document, iso8601};
use crate::error::Result;
use crate::model::{CustomEmoji, Mention, Subject, Tag};
use crate::registry::MappingId;
use crate::render::Renderer;

use super::account_uri;

pub(crate) fn mention(r: &mut Renderer<'_>, mention: &Mention) -> Result<Document> {
    let href = account_uri(r, MappingId::Mention, &mention.account)?;
    Ok(Document::new("Mention")
        .attr("href", href)
        .attr("name", format!("@{}", mention.account.acct())))
}

pub(crate) fn hashtag(r: &mut Renderer<'_>, tag: &Tag) -> Result<Document> {
    r.ext(Extension::Hashtag);
    let href = match r.resolver().url(Subject::Tag(tag)) {
        Some(url) => url,
        None => r.uri(MappingId::Hashtag, Subject::Tag(tag), "tag url")?,
    };
    Ok(Document::new("Hashtag")
        .attr("href", href)
        .attr("name", format!("#{}", tag.name)))
}

/// Emoji documents repeat across the statuses of a page; they are built
/// once per render.
pub(crate) fn emoji(r: &mut Renderer<'_>, emoji: &CustomEmoji) -> Result<Document> {
    r.ext(Extension::Emoji);
    if let Some(document) = r.cached_emoji(emoji.id) {
        return Ok(document);
    }
    let id = r.uri(MappingId::Emoji, Subject::CustomEmoji(emoji), "emoji uri")?;
    let document = Document::new("Emoji")
        .attr("id", id)
        .attr("name", format!(":{}:", emoji.shortcode))
        .attr("updated", iso8601(emoji.updated_at))
        .has_one(
            "icon",
            Document::new("Image")
                .attr("mediaType", emoji.content_type.as_str())
                .attr("url", emoji.image_url.as_str())
                .into_node(),
        );
    r.cache_emoji(emoji.id, document.clone());
    Ok(document)
}
