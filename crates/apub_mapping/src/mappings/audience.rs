//! Addressing of statuses and the activities wrapping them.

use crate::document::PUBLIC_COLLECTION;
use crate::error::{RenderError, Result};
use crate::model::{Status, Subject, Visibility};
use crate::registry::MappingId;
use crate::render::Renderer;
use crate::resolve::CollectionKind;

use super::account_uri;

fn followers(r: &Renderer<'_>, mapping: MappingId, status: &Status) -> Result<String> {
    r.resolver()
        .collection_uri(Subject::Account(&status.account), CollectionKind::Followers)
        .ok_or_else(|| RenderError::unresolved(mapping, "followers collection"))
}

fn mentioned(r: &Renderer<'_>, mapping: MappingId, status: &Status) -> Result<Vec<String>> {
    status
        .ordered_mentions()
        .into_iter()
        .map(|mention| account_uri(r, mapping, &mention.account))
        .collect()
}

pub(crate) fn to(r: &Renderer<'_>, mapping: MappingId, status: &Status) -> Result<Vec<String>> {
    let to = match status.visibility {
        Visibility::Public => vec![PUBLIC_COLLECTION.to_string()],
        Visibility::Unlisted | Visibility::Private => vec![followers(r, mapping, status)?],
        Visibility::Direct | Visibility::Limited => mentioned(r, mapping, status)?,
    };
    Ok(dedup(to))
}

pub(crate) fn cc(r: &Renderer<'_>, mapping: MappingId, status: &Status) -> Result<Vec<String>> {
    let mut cc = Vec::new();
    if let Some(reblog) = &status.reblog {
        cc.push(account_uri(r, mapping, &reblog.account)?);
    }
    match status.visibility {
        Visibility::Public => cc.push(followers(r, mapping, status)?),
        Visibility::Unlisted => cc.push(PUBLIC_COLLECTION.to_string()),
        _ => {}
    }
    if !status.is_direct_or_limited() {
        cc.extend(mentioned(r, mapping, status)?);
    }
    Ok(dedup(cc))
}

/// Removes repeated entries, keeping the first occurrence.
fn dedup(uris: Vec<String>) -> Vec<String> {
    let mut seen = Vec::with_capacity(uris.len());
    for uri in uris {
        if !seen.contains(&uri) {
            seen.push(uri);
        }
    }
    seen
}
