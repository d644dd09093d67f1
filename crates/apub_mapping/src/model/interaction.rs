use jiff::Timestamp;
use serde::Deserialize;

use super::{Account, Poll, Status, Tag};

/// A follow or a follow request; both carry the same shape.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Follow {
    pub id: u64,
    pub uri: Option<String>,
    pub account: Account,
    pub target_account: Account,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Block {
    pub id: u64,
    pub uri: Option<String>,
    pub account: Account,
    pub target_account: Account,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Favourite {
    pub id: u64,
    pub account: Account,
    pub status: Status,
}

/// One poll answer. The poll and its status are loaded by the host; a vote
/// without them cannot be federated.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Vote {
    pub id: u64,
    pub account: Account,
    pub choice: usize,
    pub created_at: Timestamp,
    pub poll: Option<Poll>,
    pub status: Option<Box<Status>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Report {
    pub id: u64,
    pub uri: Option<String>,
    pub account: Account,
    pub target_account: Account,
    pub statuses: Vec<Status>,
    pub comment: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AccountMigration {
    pub id: u64,
    pub account: Account,
    pub target_account: Account,
}

/// Membership of an account in a group actor.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Membership {
    pub id: u64,
    pub uri: Option<String>,
    pub account: Account,
    pub group: Account,
}

/// Something an account features on its profile.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", content = "object", rename_all = "snake_case")]
pub enum FeaturedItem {
    Status(Box<Status>),
    Tag(Tag),
    Account(Box<Account>),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Feature {
    pub account: Account,
    pub item: FeaturedItem,
}
