//! Follow and the responses to it.

use crate::document::Document;
use crate::error::Result;
use crate::model::{Follow, Subject};
use crate::registry::MappingId;
use crate::render::Renderer;

use super::account_uri;

pub(crate) fn follow(r: &mut Renderer<'_>, follow: &Follow) -> Result<Document> {
    const M: MappingId = MappingId::Follow;
    let actor = account_uri(r, M, &follow.account)?;
    let id = match r.resolver().uri(Subject::Follow(follow)) {
        Some(uri) => uri,
        None => format!("{actor}#follows/{}", follow.id),
    };
    Ok(Document::new("Follow")
        .attr("id", id)
        .attr("actor", actor)
        .attr("object", account_uri(r, M, &follow.target_account)?))
}

/// Accept and Reject are sent by the followed account and embed the
/// original request.
fn respond(r: &mut Renderer<'_>, mapping: MappingId, follow: &Follow) -> Result<Document> {
    let (ty, marker) = match mapping {
        MappingId::AcceptFollow => ("Accept", "accepts"),
        _ => ("Reject", "rejects"),
    };
    let actor = account_uri(r, mapping, &follow.target_account)?;
    let request = r.nested(mapping, Subject::Follow(follow))?;
    Ok(Document::new(ty)
        .attr("id", format!("{actor}#{marker}/follows/{}", follow.id))
        .attr("actor", actor)
        .has_one("object", request))
}

pub(crate) fn accept_follow(r: &mut Renderer<'_>, follow: &Follow) -> Result<Document> {
    respond(r, MappingId::AcceptFollow, follow)
}

pub(crate) fn reject_follow(r: &mut Renderer<'_>, follow: &Follow) -> Result<Document> {
    respond(r, MappingId::RejectFollow, follow)
}

pub(crate) fn undo_follow(r: &mut Renderer<'_>, follow: &Follow) -> Result<Document> {
    const M: MappingId = MappingId::UndoFollow;
    let actor = account_uri(r, M, &follow.account)?;
    let request = r.nested(M, Subject::Follow(follow))?;
    Ok(Document::new("Undo")
        .attr("id", format!("{actor}#follows/{}/undo", follow.id))
        .attr("actor", actor)
        .has_one("object", request))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::mappings::testing::{local_account, remote_account, render};
    use crate::model::{Follow, Subject};
    use crate::registry::MappingId;

    fn follow() -> Follow {
        Follow {
            id: 7,
            uri: Some("https://remote.example/follows/abc".to_string()),
            account: remote_account(2, "bob", "remote.example"),
            target_account: local_account(1, "alice"),
        }
    }

    #[test]
    fn accept_follow() {
        assert_eq!(
            render(MappingId::AcceptFollow, Subject::Follow(&follow())),
            json!({
                "@context": "https://www.w3.org/ns/activitystreams",
                "id": "https://social.example/users/alice#accepts/follows/7",
                "type": "Accept",
                "actor": "https://social.example/users/alice",
                "object": {
                    "id": "https://remote.example/follows/abc",
                    "type": "Follow",
                    "actor": "https://remote.example/users/bob",
                    "object": "https://social.example/users/alice"
                }
            })
        );
    }

    #[test]
    fn reject_follow() {
        let document = render(MappingId::RejectFollow, Subject::Follow(&follow()));
        assert_eq!(document["type"], json!("Reject"));
        assert_eq!(
            document["id"],
            json!("https://social.example/users/alice#rejects/follows/7")
        );
    }

    #[test]
    fn local_follow_without_stored_uri() {
        let follow = Follow {
            id: 9,
            uri: None,
            account: local_account(1, "alice"),
            target_account: remote_account(2, "bob", "remote.example"),
        };
        let document = render(MappingId::Follow, Subject::Follow(&follow));
        assert_eq!(document["id"], json!("https://social.example/users/alice#follows/9"));
        assert_eq!(document["object"], json!("https://remote.example/users/bob"));

        let undo = render(MappingId::UndoFollow, Subject::Follow(&follow));
        assert_eq!(undo["type"], json!("Undo"));
        assert_eq!(undo["id"], json!("https://social.example/users/alice#follows/9/undo"));
        assert_eq!(undo["object"]["id"], document["id"]);
    }

    #[test]
    fn id_ignores_unrelated_fields() {
        let mut follow = follow();
        let before = render(MappingId::AcceptFollow, Subject::Follow(&follow));
        follow.account.display_name = "Robert".to_string();
        follow.uri = Some("https://remote.example/follows/other".to_string());
        let after = render(MappingId::AcceptFollow, Subject::Follow(&follow));
        assert_eq!(before["id"], after["id"]);
    }
}
