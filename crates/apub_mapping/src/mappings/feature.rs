//! Add and Remove of profile features: pinned posts, featured hashtags and
//! endorsed accounts.

use crate::document::Document;
use crate::error::Result;
use crate::model::{Feature, FeaturedItem, Subject};
use crate::registry::MappingId;
use crate::render::Renderer;
use crate::resolve::CollectionKind;

use super::{account_uri, collection_uri};

fn feature(
    r: &mut Renderer<'_>,
    mapping: MappingId,
    ty: &str,
    feature: &Feature,
) -> Result<Document> {
    let (item, target) = match &feature.item {
        FeaturedItem::Status(status) => (Subject::Status(status), CollectionKind::Featured),
        FeaturedItem::Account(account) => (Subject::Account(account), CollectionKind::Featured),
        FeaturedItem::Tag(tag) => (Subject::Tag(tag), CollectionKind::FeaturedTags),
    };
    let owner = Subject::Account(&feature.account);
    let object = r.nested(mapping, item)?;
    Ok(Document::new(ty)
        .attr("actor", account_uri(r, mapping, &feature.account)?)
        .attr("target", collection_uri(r, mapping, owner, target)?)
        .has_one("object", object))
}

pub(crate) fn add(r: &mut Renderer<'_>, item: &Feature) -> Result<Document> {
    feature(r, MappingId::Add, "Add", item)
}

pub(crate) fn remove(r: &mut Renderer<'_>, item: &Feature) -> Result<Document> {
    feature(r, MappingId::Remove, "Remove", item)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::mappings::testing::{local_account, local_status, render};
    use crate::model::{Feature, FeaturedItem, Subject, Tag, Visibility};
    use crate::registry::MappingId;

    #[test]
    fn pinned_post_is_referenced() {
        let alice = local_account(1, "alice");
        let feature = Feature {
            item: FeaturedItem::Status(Box::new(local_status(
                42,
                alice.clone(),
                Visibility::Public,
            ))),
            account: alice,
        };
        assert_eq!(
            render(MappingId::Add, Subject::Feature(&feature)),
            json!({
                "@context": "https://www.w3.org/ns/activitystreams",
                "type": "Add",
                "actor": "https://social.example/users/alice",
                "target": "https://social.example/users/alice/collections/featured",
                "object": "https://social.example/users/alice/statuses/42"
            })
        );
    }

    #[test]
    fn unfeatured_hashtag_is_embedded() {
        let feature = Feature {
            account: local_account(1, "alice"),
            item: FeaturedItem::Tag(Tag {
                id: 3,
                name: "rust".to_string(),
            }),
        };
        let document = render(MappingId::Remove, Subject::Feature(&feature));
        assert_eq!(document["type"], json!("Remove"));
        assert_eq!(
            document["target"],
            json!("https://social.example/users/alice/collections/tags")
        );
        assert_eq!(
            document["object"],
            json!({
                "type": "Hashtag",
                "href": "https://social.example/tags/rust",
                "name": "#rust"
            })
        );
        assert_eq!(document["@context"][1]["Hashtag"], json!("as:Hashtag"));
    }
}
