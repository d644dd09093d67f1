use crate::document::Document;
use crate::error::Result;
use crate::model::{Membership, Subject};
use crate::registry::MappingId;
use crate::render::Renderer;

use super::account_uri;

pub(crate) fn join(r: &mut Renderer<'_>, membership: &Membership) -> Result<Document> {
    const M: MappingId = MappingId::Join;
    let actor = account_uri(r, M, &membership.account)?;
    let id = match r.resolver().uri(Subject::Membership(membership)) {
        Some(uri) => uri,
        None => format!("{actor}#joins/{}", membership.id),
    };
    Ok(Document::new("Join")
        .attr("id", id)
        .attr("actor", actor)
        .attr("object", account_uri(r, M, &membership.group)?))
}

pub(crate) fn leave(r: &mut Renderer<'_>, membership: &Membership) -> Result<Document> {
    const M: MappingId = MappingId::Leave;
    let actor = account_uri(r, M, &membership.account)?;
    Ok(Document::new("Leave")
        .attr("id", format!("{actor}#leaves/{}", membership.id))
        .attr("actor", actor)
        .attr("object", account_uri(r, M, &membership.group)?))
}
