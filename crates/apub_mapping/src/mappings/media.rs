use serde_json::{Value, json};

use crate::context::Extension;
use crate::document::Document;
use crate::error::Result;
use crate::model::{FocalPoint, MediaAttachment};
use crate::render::Renderer;

pub(crate) fn focal_point(focus: FocalPoint) -> Value {
    json!([focus.0, focus.1])
}

pub(crate) fn media_attachment(r: &mut Renderer<'_>, media: &MediaAttachment) -> Result<Document> {
    let focus = media.focus.filter(|_| media.is_image());
    if media.blurhash.is_some() {
        r.ext(Extension::Blurhash);
    }
    if focus.is_some() {
        r.ext(Extension::FocalPoint);
    }
    Ok(Document::new("Document")
        .attr("mediaType", media.content_type.as_str())
        .attr("url", media.url.as_str())
        .attr("name", media.description.clone())
        .attr_opt("blurhash", media.blurhash.clone())
        .attr_opt("focalPoint", focus.map(focal_point))
        .attr_opt("width", media.width)
        .attr_opt("height", media.height))
}
