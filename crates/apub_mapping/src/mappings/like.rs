use crate::document::Document;
use crate::error::Result;
use crate::model::{Favourite, Subject};
use crate::registry::MappingId;
use crate::render::Renderer;

use super::{account_uri, status_uri};

pub(crate) fn like(r: &mut Renderer<'_>, favourite: &Favourite) -> Result<Document> {
    const M: MappingId = MappingId::Like;
    let actor = account_uri(r, M, &favourite.account)?;
    Ok(Document::new("Like")
        .attr("id", format!("{actor}#likes/{}", favourite.id))
        .attr("actor", actor)
        .attr("object", status_uri(r, M, &favourite.status)?))
}

pub(crate) fn undo_like(r: &mut Renderer<'_>, favourite: &Favourite) -> Result<Document> {
    const M: MappingId = MappingId::UndoLike;
    let actor = account_uri(r, M, &favourite.account)?;
    let like = r.nested(M, Subject::Favourite(favourite))?;
    Ok(Document::new("Undo")
        .attr("id", format!("{actor}#likes/{}/undo", favourite.id))
        .attr("actor", actor)
        .has_one("object", like))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::mappings::testing::{local_account, remote_account, remote_status, render};
    use crate::model::{Favourite, Subject, Visibility};
    use crate::registry::MappingId;

    #[test]
    fn like_and_undo() {
        let favourite = Favourite {
            id: 31,
            account: local_account(1, "alice"),
            status: remote_status(
                5,
                remote_account(2, "bob", "remote.example"),
                Visibility::Public,
            ),
        };
        let like = render(MappingId::Like, Subject::Favourite(&favourite));
        assert_eq!(
            like,
            json!({
                "@context": "https://www.w3.org/ns/activitystreams",
                "id": "https://social.example/users/alice#likes/31",
                "type": "Like",
                "actor": "https://social.example/users/alice",
                "object": "https://remote.example/notes/5"
            })
        );
        let undo = render(MappingId::UndoLike, Subject::Favourite(&favourite));
        assert_eq!(undo["id"], json!("https://social.example/users/alice#likes/31/undo"));
        assert_eq!(undo["object"]["id"], like["id"]);
        assert!(undo["object"].get("@context").is_none());
    }
}
