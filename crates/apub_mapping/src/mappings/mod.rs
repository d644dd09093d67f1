//! Field mapping definitions, one module per family of ActivityStreams types.

pub(crate) mod activity;
pub(crate) mod actor;
pub(crate) mod audience;
pub(crate) mod block;
pub(crate) mod collection;
pub(crate) mod device;
pub(crate) mod feature;
pub(crate) mod flag;
pub(crate) mod follow;
pub(crate) mod like;
pub(crate) mod media;
pub(crate) mod membership;
pub(crate) mod migration;
pub(crate) mod note;
pub(crate) mod quote;
pub(crate) mod tag;
pub(crate) mod uri;
pub(crate) mod vote;

use crate::error::{RenderError, Result};
use crate::model::{Account, Status, Subject};
use crate::registry::MappingId;
use crate::render::Renderer;
use crate::resolve::CollectionKind;

pub(crate) fn account_uri(
    r: &Renderer<'_>,
    mapping: MappingId,
    account: &Account,
) -> Result<String> {
    r.uri(mapping, Subject::Account(account), "account uri")
}

pub(crate) fn status_uri(r: &Renderer<'_>, mapping: MappingId, status: &Status) -> Result<String> {
    r.uri(mapping, Subject::Status(status), "status uri")
}

pub(crate) fn collection_uri(
    r: &Renderer<'_>,
    mapping: MappingId,
    subject: Subject<'_>,
    kind: CollectionKind,
) -> Result<String> {
    r.resolver()
        .collection_uri(subject, kind)
        .ok_or_else(|| RenderError::unresolved(mapping, "collection uri"))
}

/// Whether `object`, wrapped in an activity by `actor`, may be embedded
/// rather than referenced. Only the author's own local private posts
/// qualify: anything else must be fetched by the receiver with its own
/// authorization.
pub(crate) fn inlining_allowed(r: &Renderer<'_>, actor: &Account, object: &Status) -> bool {
    r.options().allow_inlining
        && object.local
        && object.is_private()
        && object.account.id == actor.id
}

#[cfg(test)]
pub(crate) mod testing {
    //! Shared fixtures for mapping tests.

    use jiff::Timestamp;
    use serde_json::Value;

    use crate::format::HtmlFormatter;
    use crate::model::{Account, Status, Subject, Visibility};
    use crate::options::RenderOptions;
    use crate::registry::MappingId;
    use crate::render::Serializer;
    use crate::resolve::LocalResolver;

    pub(crate) const BASE: &str = "https://social.example";

    pub(crate) fn now() -> Timestamp {
        "2024-11-04T12:00:00Z".parse().expect("valid timestamp")
    }

    pub(crate) fn options() -> RenderOptions {
        RenderOptions::new(now())
    }

    pub(crate) fn serializer() -> Serializer {
        Serializer::new(LocalResolver::new(BASE), HtmlFormatter)
    }

    pub(crate) fn render(mapping: MappingId, subject: Subject<'_>) -> Value {
        render_with(mapping, subject, &options())
    }

    pub(crate) fn render_with(
        mapping: MappingId,
        subject: Subject<'_>,
        options: &RenderOptions,
    ) -> Value {
        serializer()
            .serialize_with(mapping, subject, options)
            .expect("render succeeds")
            .into_value()
    }

    pub(crate) fn local_account(id: u64, username: &str) -> Account {
        Account {
            id,
            username: username.to_string(),
            display_name: username.to_uppercase(),
            created_at: "2023-01-15T08:30:00Z".parse().expect("valid timestamp"),
            updated_at: "2024-10-01T10:00:00Z".parse().expect("valid timestamp"),
            ..Default::default()
        }
    }

    pub(crate) fn remote_account(id: u64, username: &str, domain: &str) -> Account {
        Account {
            id,
            username: username.to_string(),
            domain: Some(domain.to_string()),
            uri: Some(format!("https://{domain}/users/{username}")),
            url: Some(format!("https://{domain}/@{username}")),
            inbox_url: Some(format!("https://{domain}/users/{username}/inbox")),
            followers_url: Some(format!("https://{domain}/users/{username}/followers")),
            ..Default::default()
        }
    }

    pub(crate) fn local_status(id: u64, account: Account, visibility: Visibility) -> Status {
        Status {
            id,
            account,
            visibility,
            local: true,
            text: "hello world".to_string(),
            created_at: "2024-11-04T05:12:16Z".parse().expect("valid timestamp"),
            updated_at: "2024-11-04T05:12:16Z".parse().expect("valid timestamp"),
            ..Default::default()
        }
    }

    pub(crate) fn remote_status(id: u64, account: Account, visibility: Visibility) -> Status {
        let domain = account.domain.clone().unwrap_or_default();
        Status {
            id,
            uri: Some(format!("https://{domain}/notes/{id}")),
            url: Some(format!("https://{domain}/notes/{id}")),
            account,
            visibility,
            local: false,
            text: "<p>remote</p>".to_string(),
            created_at: "2024-11-03T05:12:16Z".parse().expect("valid timestamp"),
            updated_at: "2024-11-03T05:12:16Z".parse().expect("valid timestamp"),
            ..Default::default()
        }
    }
}
