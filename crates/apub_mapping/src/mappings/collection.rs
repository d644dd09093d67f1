//! Collections and pages handed over by the host's pagination presenter.

use crate::document::{Document, Node};
use crate::error::Result;
use crate::model::{CollectionLink, CollectionPresenter, Subject};
use crate::registry::MappingId;
use crate::render::Renderer;

/// `mapping` is [`MappingId::Collection`] or [`MappingId::Outbox`]; items
/// are dispatched with it as their container.
pub(crate) fn collection(
    r: &mut Renderer<'_>,
    mapping: MappingId,
    presenter: &CollectionPresenter,
) -> Result<Document> {
    let mut document = Document::new(presenter.kind())
        .attr_opt("id", presenter.id.as_deref())
        .attr_opt("totalItems", presenter.size)
        .attr_opt("partOf", presenter.part_of.as_deref());
    for (key, link) in [
        ("first", &presenter.first),
        ("last", &presenter.last),
        ("next", &presenter.next),
        ("prev", &presenter.prev),
    ] {
        if let Some(link) = link {
            let node = self::link(r, mapping, link)?;
            document = document.has_one(key, node);
        }
    }
    if presenter.page || presenter.items.is_some() {
        let items = presenter.items.as_deref().unwrap_or_default();
        let mut nodes = Vec::with_capacity(items.len());
        for item in items {
            nodes.push(r.nested(mapping, item.as_subject())?);
        }
        document = document.has_many(presenter.items_key(), nodes);
    }
    Ok(document)
}

fn link(r: &mut Renderer<'_>, mapping: MappingId, link: &CollectionLink) -> Result<Node> {
    match link {
        CollectionLink::Uri(uri) => Ok(Node::Uri(uri.clone())),
        CollectionLink::Page(page) => r.render_as(mapping, Subject::Collection(page)),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::mappings::testing::{local_account, local_status, render};
    use crate::model::{
        CollectionItem, CollectionLink, CollectionPresenter, Subject, Tag, Visibility,
    };
    use crate::registry::MappingId;

    #[test]
    fn summary_without_items() {
        let presenter = CollectionPresenter {
            id: Some("https://social.example/users/alice/followers".to_string()),
            ordered: true,
            size: Some(12),
            first: Some(CollectionLink::Uri(
                "https://social.example/users/alice/followers?page=1".to_string(),
            )),
            ..Default::default()
        };
        assert_eq!(
            render(MappingId::Collection, Subject::Collection(&presenter)),
            json!({
                "@context": "https://www.w3.org/ns/activitystreams",
                "id": "https://social.example/users/alice/followers",
                "type": "OrderedCollection",
                "totalItems": 12,
                "first": "https://social.example/users/alice/followers?page=1"
            })
        );
    }

    #[test]
    fn empty_page_still_has_items() {
        let presenter = CollectionPresenter {
            page: true,
            ..Default::default()
        };
        let document = render(MappingId::Collection, Subject::Collection(&presenter));
        assert_eq!(document["type"], json!("CollectionPage"));
        assert_eq!(document["items"], json!([]));
        assert!(document.get("orderedItems").is_none());
    }

    #[test]
    fn featured_collection_embeds_notes() {
        let alice = local_account(1, "alice");
        let presenter = CollectionPresenter {
            id: Some("https://social.example/users/alice/collections/featured".to_string()),
            ordered: true,
            items: Some(vec![
                CollectionItem::Status(local_status(42, alice.clone(), Visibility::Public)),
                CollectionItem::Account(alice),
                CollectionItem::Tag(Tag {
                    id: 2,
                    name: "rust".to_string(),
                }),
            ]),
            ..Default::default()
        };
        let document = render(MappingId::Collection, Subject::Collection(&presenter));
        let items = &document["orderedItems"];
        assert_eq!(items[0]["type"], json!("Note"));
        assert_eq!(items[1], json!("https://social.example/users/alice"));
        assert_eq!(items[2]["type"], json!("Hashtag"));
        assert!(document.get("items").is_none());
        assert_eq!(document["@context"][1]["Hashtag"], json!("as:Hashtag"));
    }

    #[test]
    fn outbox_wraps_statuses_in_activities() {
        let alice = local_account(1, "alice");
        let presenter = CollectionPresenter {
            ordered: true,
            page: true,
            part_of: Some("https://social.example/users/alice/outbox".to_string()),
            items: Some(vec![CollectionItem::Status(local_status(
                42,
                alice,
                Visibility::Public,
            ))]),
            ..Default::default()
        };
        let document = render(MappingId::Outbox, Subject::Collection(&presenter));
        assert_eq!(document["type"], json!("OrderedCollectionPage"));
        assert_eq!(document["partOf"], json!("https://social.example/users/alice/outbox"));
        let create = &document["orderedItems"][0];
        assert_eq!(create["type"], json!("Create"));
        assert_eq!(
            create["id"],
            json!("https://social.example/users/alice/statuses/42/activity")
        );
        assert_eq!(create["object"]["type"], json!("Note"));
    }
}
