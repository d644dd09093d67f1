//! URI lookup collaborator.
//!
//! The mapping layer never builds identifiers for domain rows on its own; it
//! asks a [`UriResolver`]. [`LocalResolver`] is the reference implementation
//! for a single local origin.

use crate::model::{Account, Conversation, Quote, Status, Subject};

/// Collections an actor or a status exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionKind {
    Followers,
    Following,
    Outbox,
    Featured,
    FeaturedTags,
    Devices,
    Claim,
    Replies,
    Likes,
    Shares,
}

impl CollectionKind {
    fn path(self) -> &'static str {
        match self {
            CollectionKind::Followers => "followers",
            CollectionKind::Following => "following",
            CollectionKind::Outbox => "outbox",
            CollectionKind::Featured => "collections/featured",
            CollectionKind::FeaturedTags => "collections/tags",
            CollectionKind::Devices => "collections/devices",
            CollectionKind::Claim => "claim",
            CollectionKind::Replies => "replies",
            CollectionKind::Likes => "likes",
            CollectionKind::Shares => "shares",
        }
    }
}

/// Stateless identity lookup. `None` means the object has no URI; mappings
/// decide whether that is acceptable.
pub trait UriResolver: Send + Sync {
    /// Canonical ActivityPub id.
    fn uri(&self, subject: Subject<'_>) -> Option<String>;
    /// Human-facing HTML page.
    fn url(&self, subject: Subject<'_>) -> Option<String>;
    fn inbox_uri(&self, account: &Account) -> Option<String>;
    fn shared_inbox_uri(&self, account: &Account) -> Option<String>;
    fn collection_uri(&self, subject: Subject<'_>, kind: CollectionKind) -> Option<String>;
    fn activity_uri(&self, status: &Status) -> Option<String>;
    /// With `check_approval`, only accepted quotes have an approval.
    fn approval_uri(&self, quote: &Quote, check_approval: bool) -> Option<String>;
    fn conversation_uri(&self, conversation: &Conversation) -> Option<String>;
}

#[derive(Debug, Clone)]
pub struct LocalResolver {
    base_url: String,
    host: String,
}

impl LocalResolver {
    pub fn new(base_url: impl Into<String>) -> LocalResolver {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let host = base_url
            .split_once("://")
            .map_or(base_url.as_str(), |(_, rest)| rest)
            .split('/')
            .next()
            .unwrap_or_default()
            .to_string();
        LocalResolver { base_url, host }
    }

    fn account_uri(&self, account: &Account) -> Option<String> {
        if account.is_local() {
            Some(format!("{}/users/{}", self.base_url, account.username))
        } else {
            account.uri.clone()
        }
    }

    fn status_uri(&self, status: &Status) -> Option<String> {
        if status.local {
            let account = self.account_uri(&status.account)?;
            Some(format!("{account}/statuses/{}", status.id))
        } else {
            status.uri.clone()
        }
    }
}

impl UriResolver for LocalResolver {
    fn uri(&self, subject: Subject<'_>) -> Option<String> {
        match subject {
            Subject::Account(account) => self.account_uri(account),
            Subject::Status(status) => self.status_uri(status),
            Subject::Follow(follow) => follow.uri.clone(),
            Subject::Block(block) => block.uri.clone(),
            Subject::Membership(membership) => membership.uri.clone(),
            Subject::Report(report) => report
                .uri
                .clone()
                .or_else(|| Some(format!("{}/reports/{}", self.base_url, report.id))),
            Subject::Tag(tag) => Some(format!(
                "{}/tags/{}",
                self.base_url,
                tag.name.to_lowercase()
            )),
            Subject::CustomEmoji(emoji) => match emoji.domain {
                None => Some(format!("{}/emojis/{}", self.base_url, emoji.id)),
                Some(_) => emoji.uri.clone(),
            },
            Subject::Uri(uri) => Some(uri.to_string()),
            _ => None,
        }
    }

    fn url(&self, subject: Subject<'_>) -> Option<String> {
        match subject {
            Subject::Account(account) if account.is_local() => {
                Some(format!("{}/@{}", self.base_url, account.username))
            }
            Subject::Account(account) => account.url.clone().or_else(|| account.uri.clone()),
            Subject::Status(status) if status.local => Some(format!(
                "{}/@{}/{}",
                self.base_url, status.account.username, status.id
            )),
            Subject::Status(status) => status.url.clone().or_else(|| status.uri.clone()),
            Subject::Tag(tag) => Some(format!("{}/tags/{}", self.base_url, tag.name)),
            _ => None,
        }
    }

    fn inbox_uri(&self, account: &Account) -> Option<String> {
        if account.is_local() {
            Some(format!("{}/inbox", self.account_uri(account)?))
        } else {
            account.inbox_url.clone()
        }
    }

    fn shared_inbox_uri(&self, account: &Account) -> Option<String> {
        if account.is_local() {
            Some(format!("{}/inbox", self.base_url))
        } else {
            account.shared_inbox_url.clone()
        }
    }

    fn collection_uri(&self, subject: Subject<'_>, kind: CollectionKind) -> Option<String> {
        let owner = match subject {
            Subject::Account(account) if account.is_local() => self.account_uri(account)?,
            Subject::Account(account) if kind == CollectionKind::Followers => {
                return account.followers_url.clone();
            }
            Subject::Status(status) if status.local => self.status_uri(status)?,
            _ => return None,
        };
        Some(format!("{owner}/{}", kind.path()))
    }

    fn activity_uri(&self, status: &Status) -> Option<String> {
        if !status.local {
            return None;
        }
        Some(format!("{}/activity", self.status_uri(status)?))
    }

    fn approval_uri(&self, quote: &Quote, check_approval: bool) -> Option<String> {
        if check_approval && !quote.is_accepted() {
            return None;
        }
        match &quote.quoted_status {
            Some(quoted) if quoted.local => {
                let author = self.account_uri(&quoted.account)?;
                Some(format!("{author}/quote_authorizations/{}", quote.id))
            }
            _ => quote.approval_uri.clone(),
        }
    }

    fn conversation_uri(&self, conversation: &Conversation) -> Option<String> {
        if let Some(uri) = &conversation.uri {
            return Some(uri.clone());
        }
        let date = conversation.created_at.strftime("%Y-%m-%d");
        Some(format!(
            "tag:{},{date}:objectId={}:objectType=Conversation",
            self.host, conversation.id
        ))
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::{CollectionKind, LocalResolver, UriResolver};
    use crate::model::{Account, Conversation, Quote, QuoteState, Status, Subject};

    fn alice() -> Account {
        Account {
            id: 1,
            username: "alice".to_string(),
            ..Default::default()
        }
    }

    fn remote() -> Account {
        Account {
            id: 2,
            username: "bob".to_string(),
            domain: Some("remote.example".to_string()),
            uri: Some("https://remote.example/users/bob".to_string()),
            inbox_url: Some("https://remote.example/users/bob/inbox".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn local_and_remote_accounts() {
        let resolver = LocalResolver::new("https://social.example/");
        assert_eq!(
            resolver.uri(Subject::Account(&alice())).as_deref(),
            Some("https://social.example/users/alice")
        );
        assert_eq!(
            resolver.uri(Subject::Account(&remote())).as_deref(),
            Some("https://remote.example/users/bob")
        );
        assert_eq!(
            resolver.inbox_uri(&remote()).as_deref(),
            Some("https://remote.example/users/bob/inbox")
        );
        assert_eq!(
            resolver
                .collection_uri(Subject::Account(&alice()), CollectionKind::Featured)
                .as_deref(),
            Some("https://social.example/users/alice/collections/featured")
        );
        assert_eq!(
            resolver.collection_uri(Subject::Account(&remote()), CollectionKind::Followers),
            None
        );
    }

    #[test]
    fn remote_followers_come_from_the_row() {
        let resolver = LocalResolver::new("https://social.example");
        let bob = Account {
            followers_url: Some("https://remote.example/fans/bob".to_string()),
            ..remote()
        };
        assert_eq!(
            resolver
                .collection_uri(Subject::Account(&bob), CollectionKind::Followers)
                .as_deref(),
            Some("https://remote.example/fans/bob")
        );
        assert_eq!(
            resolver.collection_uri(Subject::Account(&bob), CollectionKind::Outbox),
            None
        );
    }

    #[test]
    fn status_activity_uri() {
        let resolver = LocalResolver::new("https://social.example");
        let status = Status {
            id: 42,
            local: true,
            account: alice(),
            ..Default::default()
        };
        assert_eq!(
            resolver.activity_uri(&status).as_deref(),
            Some("https://social.example/users/alice/statuses/42/activity")
        );
        let remote_status = Status {
            uri: Some("https://remote.example/notes/1".to_string()),
            account: remote(),
            ..Default::default()
        };
        assert_eq!(resolver.activity_uri(&remote_status), None);
    }

    #[test]
    fn conversation_tag_uri() -> anyhow::Result<()> {
        let resolver = LocalResolver::new("https://social.example");
        let conversation = Conversation {
            id: 7,
            uri: None,
            created_at: "2024-11-04T05:12:16Z".parse::<Timestamp>()?,
        };
        assert_eq!(
            resolver.conversation_uri(&conversation).as_deref(),
            Some("tag:social.example,2024-11-04:objectId=7:objectType=Conversation")
        );
        Ok(())
    }

    #[test]
    fn approval_requires_acceptance_when_checked() {
        let resolver = LocalResolver::new("https://social.example");
        let mut quote = Quote {
            id: 9,
            state: QuoteState::Pending,
            quoted_status: Some(Box::new(Status {
                id: 3,
                local: true,
                account: alice(),
                ..Default::default()
            })),
            ..Default::default()
        };
        assert_eq!(resolver.approval_uri(&quote, true), None);
        assert_eq!(
            resolver.approval_uri(&quote, false).as_deref(),
            Some("https://social.example/users/alice/quote_authorizations/9")
        );
        quote.state = QuoteState::Accepted;
        assert!(resolver.approval_uri(&quote, true).is_some());
    }
}
