use jiff::Timestamp;
use serde::Deserialize;

use super::{Account, CollectionPresenter, FocalPoint};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    #[default]
    Public,
    Unlisted,
    Private,
    Direct,
    Limited,
}

/// Snapshot of a status row with the relations its Note reads.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Status {
    pub id: u64,
    pub uri: Option<String>,
    pub url: Option<String>,
    pub account: Account,
    pub text: String,
    pub spoiler_text: String,
    pub sensitive: bool,
    pub visibility: Visibility,
    pub language: Option<String>,
    pub local: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub edited_at: Option<Timestamp>,
    /// Set whenever the status is a reply, even if the parent was not
    /// loaded into [`Status::thread`].
    pub in_reply_to_id: Option<u64>,
    pub thread: Option<Box<Status>>,
    pub reblog: Option<Box<Status>>,
    pub conversation: Option<Conversation>,
    pub media_attachments: Vec<MediaAttachment>,
    pub mentions: Vec<Mention>,
    pub tags: Vec<Tag>,
    pub emojis: Vec<CustomEmoji>,
    pub poll: Option<Poll>,
    pub quote: Option<Quote>,
    pub quote_policy: Option<QuotePolicy>,
    /// First page of replies, supplied by the host's pagination presenter.
    pub replies: Option<CollectionPresenter>,
    pub favourites_count: u64,
    pub reblogs_count: u64,
}

impl Status {
    pub fn is_reblog(&self) -> bool {
        self.reblog.is_some()
    }
    pub fn is_private(&self) -> bool {
        self.visibility == Visibility::Private
    }
    pub fn is_direct_or_limited(&self) -> bool {
        matches!(self.visibility, Visibility::Direct | Visibility::Limited)
    }
    /// Mentions ordered by primary key.
    pub fn ordered_mentions(&self) -> Vec<&Mention> {
        let mut mentions: Vec<&Mention> = self.mentions.iter().collect();
        mentions.sort_by_key(|m| m.id);
        mentions
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Conversation {
    pub id: u64,
    pub uri: Option<String>,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MediaAttachment {
    pub id: u64,
    pub content_type: String,
    pub url: String,
    pub description: Option<String>,
    pub blurhash: Option<String>,
    pub focus: Option<FocalPoint>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl MediaAttachment {
    pub fn is_image(&self) -> bool {
        self.content_type.starts_with("image/")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Mention {
    pub id: u64,
    pub account: Account,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Tag {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CustomEmoji {
    pub id: u64,
    pub shortcode: String,
    pub domain: Option<String>,
    pub uri: Option<String>,
    pub image_url: String,
    pub content_type: String,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Poll {
    pub id: u64,
    pub options: Vec<String>,
    /// Cached tally per option, in option order.
    pub votes: Vec<u64>,
    pub multiple: bool,
    pub expires_at: Option<Timestamp>,
    pub voters_count: Option<u64>,
}

impl Poll {
    pub fn is_expired(&self, now: Timestamp) -> bool {
        self.expires_at.is_some_and(|at| at <= now)
    }
    pub fn votes_for(&self, option: usize) -> u64 {
        self.votes.get(option).copied().unwrap_or(0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuoteState {
    #[default]
    Pending,
    Accepted,
    Rejected,
    Revoked,
}

/// Who may quote a status without manual approval.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuotePolicy {
    #[default]
    Public,
    Followers,
    Nobody,
}

/// A quote of another status, owned by the quoting status.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Quote {
    pub id: u64,
    pub state: QuoteState,
    pub quoted_status: Option<Box<Status>>,
    pub quoted_account: Option<Account>,
    /// Id of the QuoteRequest activity, if one was sent or received.
    pub activity_uri: Option<String>,
    /// Authorization stamp received from a remote quoted author.
    pub approval_uri: Option<String>,
}

impl Quote {
    pub fn is_accepted(&self) -> bool {
        self.state == QuoteState::Accepted
    }
    pub fn is_withdrawn(&self) -> bool {
        matches!(self.state, QuoteState::Rejected | QuoteState::Revoked)
    }
}
