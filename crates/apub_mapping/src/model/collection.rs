use serde::Deserialize;

use super::{Account, Device, Status, Subject, Tag};

/// Pagination presenter contract. Every link is optional; the host decides
/// which ones apply to the page being served.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CollectionPresenter {
    pub id: Option<String>,
    pub ordered: bool,
    pub page: bool,
    pub size: Option<u64>,
    pub first: Option<CollectionLink>,
    pub last: Option<CollectionLink>,
    pub next: Option<CollectionLink>,
    pub prev: Option<CollectionLink>,
    pub part_of: Option<String>,
    pub items: Option<Vec<CollectionItem>>,
}

impl CollectionPresenter {
    pub fn kind(&self) -> &'static str {
        match (self.ordered, self.page) {
            (false, false) => "Collection",
            (true, false) => "OrderedCollection",
            (false, true) => "CollectionPage",
            (true, true) => "OrderedCollectionPage",
        }
    }
    pub fn items_key(&self) -> &'static str {
        if self.ordered { "orderedItems" } else { "items" }
    }
}

/// A link is either a bare URI or an embedded page.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CollectionLink {
    Uri(String),
    Page(Box<CollectionPresenter>),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", content = "object", rename_all = "snake_case")]
pub enum CollectionItem {
    Uri(String),
    Status(Status),
    Account(Account),
    Tag(Tag),
    Device(Device),
    Collection(CollectionPresenter),
}

impl CollectionItem {
    pub fn as_subject(&self) -> Subject<'_> {
        match self {
            CollectionItem::Uri(uri) => Subject::Uri(uri),
            CollectionItem::Status(status) => Subject::Status(status),
            CollectionItem::Account(account) => Subject::Account(account),
            CollectionItem::Tag(tag) => Subject::Tag(tag),
            CollectionItem::Device(device) => Subject::Device(device),
            CollectionItem::Collection(collection) => Subject::Collection(collection),
        }
    }
}
