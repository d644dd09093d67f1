//! Activities wrapping a status or an actor: Create, Announce, Update and
//! Delete, plus the Undo of an Announce.

use crate::context::Extension;
use crate::document::{Document, Node, PUBLIC_COLLECTION, iso8601};
use crate::error::{RenderError, Result};
use crate::model::{Account, Status, Subject};
use crate::registry::MappingId;
use crate::render::Renderer;

use super::{account_uri, audience, inlining_allowed, status_uri};

fn activity_uri(r: &Renderer<'_>, mapping: MappingId, status: &Status) -> Result<String> {
    r.resolver()
        .activity_uri(status)
        .ok_or_else(|| RenderError::unresolved(mapping, "activity uri"))
}

/// Create for an original post, Announce for a boost.
pub(crate) fn activity(r: &mut Renderer<'_>, status: &Status) -> Result<Document> {
    if status.is_reblog() {
        announce(r, status)
    } else {
        create(r, status)
    }
}

pub(crate) fn create(r: &mut Renderer<'_>, status: &Status) -> Result<Document> {
    const M: MappingId = MappingId::Create;
    let object = r.nested(M, Subject::Status(status))?;
    Ok(Document::new("Create")
        .attr("id", activity_uri(r, M, status)?)
        .attr("actor", account_uri(r, M, &status.account)?)
        .attr("published", iso8601(status.created_at))
        .attr("to", audience::to(r, M, status)?)
        .attr("cc", audience::cc(r, M, status)?)
        .has_one("object", object))
}

/// The boosted post is embedded only when [`inlining_allowed`] says so;
/// otherwise it is referenced by URI.
pub(crate) fn announce(r: &mut Renderer<'_>, status: &Status) -> Result<Document> {
    const M: MappingId = MappingId::Announce;
    let reblog = status
        .reblog
        .as_deref()
        .ok_or_else(|| RenderError::precondition(M, "reblog"))?;
    let object = if inlining_allowed(r, &status.account, reblog) {
        r.nested(M, Subject::Status(reblog))?
    } else {
        Node::Uri(status_uri(r, M, reblog)?)
    };
    Ok(Document::new("Announce")
        .attr("id", activity_uri(r, M, status)?)
        .attr("actor", account_uri(r, M, &status.account)?)
        .attr("published", iso8601(status.created_at))
        .attr("to", audience::to(r, M, status)?)
        .attr("cc", audience::cc(r, M, status)?)
        .has_one("object", object))
}

/// A profile change or a status edit. The id carries the update time so
/// successive edits stay distinct.
pub(crate) fn update(r: &mut Renderer<'_>, subject: Subject<'_>) -> Result<Document> {
    const M: MappingId = MappingId::Update;
    match subject {
        Subject::Account(account) => {
            let actor = account_uri(r, M, account)?;
            let object = r.nested(M, subject)?;
            Ok(Document::new("Update")
                .attr("id", format!("{actor}#updates/{}", account.updated_at.as_second()))
                .attr("actor", actor)
                .attr("published", iso8601(account.updated_at))
                .attr("to", vec![PUBLIC_COLLECTION])
                .has_one("object", object))
        }
        Subject::Status(status) => {
            let updated_at = status.edited_at.unwrap_or(status.updated_at);
            let uri = status_uri(r, M, status)?;
            let object = r.nested(M, subject)?;
            Ok(Document::new("Update")
                .attr("id", format!("{uri}#updates/{}", updated_at.as_second()))
                .attr("actor", account_uri(r, M, &status.account)?)
                .attr("published", iso8601(updated_at))
                .attr("to", audience::to(r, M, status)?)
                .attr("cc", audience::cc(r, M, status)?)
                .has_one("object", object))
        }
        subject => Err(RenderError::UnsupportedSubject {
            mapping: M,
            kind: subject.kind(),
        }),
    }
}

pub(crate) fn delete(r: &mut Renderer<'_>, status: &Status) -> Result<Document> {
    const M: MappingId = MappingId::Delete;
    let uri = status_uri(r, M, status)?;
    r.ext(Extension::AtomUri);
    let tombstone = Document::new("Tombstone")
        .attr("id", uri.as_str())
        .attr("atomUri", uri.as_str());
    Ok(Document::new("Delete")
        .attr("id", format!("{uri}#delete"))
        .attr("actor", account_uri(r, M, &status.account)?)
        .attr("to", vec![PUBLIC_COLLECTION])
        .has_one("object", tombstone.into_node()))
}

pub(crate) fn delete_actor(r: &mut Renderer<'_>, account: &Account) -> Result<Document> {
    let actor = account_uri(r, MappingId::DeleteActor, account)?;
    Ok(Document::new("Delete")
        .attr("id", format!("{actor}#delete"))
        .attr("actor", actor.as_str())
        .attr("to", vec![PUBLIC_COLLECTION])
        .attr("object", actor.as_str()))
}

pub(crate) fn undo_announce(r: &mut Renderer<'_>, status: &Status) -> Result<Document> {
    const M: MappingId = MappingId::UndoAnnounce;
    let actor = account_uri(r, M, &status.account)?;
    let announce = r.nested(M, Subject::Status(status))?;
    Ok(Document::new("Undo")
        .attr("id", format!("{actor}#announces/{}/undo", status.id))
        .attr("actor", actor)
        .attr("to", vec![PUBLIC_COLLECTION])
        .has_one("object", announce))
}
