//! Actor documents and their public key.

use base64ct::{Base64, Encoding};
use pem_rfc7468::{LineEnding, encode_string as pem_encode};

use crate::context::Extension;
use crate::document::{Document, iso8601, midnight};
use crate::error::{RenderError, Result};
use crate::model::{Account, MediaFile, Subject};
use crate::registry::MappingId;
use crate::render::Renderer;
use crate::resolve::CollectionKind;

use super::media::focal_point;
use super::{account_uri, collection_uri};

pub(crate) fn actor(r: &mut Renderer<'_>, account: &Account) -> Result<Document> {
    const M: MappingId = MappingId::Actor;
    let id = account_uri(r, M, account)?;
    let owner = Subject::Account(account);
    let collection = |kind| collection_uri(r, M, owner, kind);
    let following = collection(CollectionKind::Following)?;
    let followers = collection(CollectionKind::Followers)?;
    let outbox = collection(CollectionKind::Outbox)?;
    let featured = collection(CollectionKind::Featured)?;
    let featured_tags = collection(CollectionKind::FeaturedTags)?;
    let devices = if account.instance_actor {
        None
    } else {
        Some(collection(CollectionKind::Devices)?)
    };
    let inbox = r
        .resolver()
        .inbox_uri(account)
        .ok_or_else(|| RenderError::unresolved(M, "inbox"))?;
    let url = r.resolver().url(owner);
    let suspended = account.suspended;
    let name = if suspended { &account.username } else { &account.display_name };
    let summary = if suspended { String::new() } else { r.formatter().format_bio(account) };

    r.ext(Extension::ManuallyApprovesFollowers);
    r.ext(Extension::Featured);
    r.ext(Extension::Discoverable);
    r.ext(Extension::Indexable);

    let mut document = Document::new(account.actor_type().as_str())
        .attr("id", id.as_str())
        .attr("following", following)
        .attr("followers", followers)
        .attr("inbox", inbox)
        .attr("outbox", outbox)
        .attr("featured", featured)
        .attr("featuredTags", featured_tags)
        .attr("preferredUsername", account.username.as_str())
        .attr("name", name.as_str())
        .attr("summary", summary)
        .attr_opt("url", url)
        .attr("manuallyApprovesFollowers", !suspended && account.locked)
        .attr("discoverable", !suspended && account.discoverable.unwrap_or(false))
        .attr("indexable", !suspended && account.indexable)
        .attr("published", iso8601(midnight(account.created_at)?));

    if account.memorial {
        r.ext(Extension::Memorial);
        document = document.attr("memorial", true);
    }
    if suspended {
        r.ext(Extension::Suspended);
        document = document.attr("suspended", true);
    }
    if let Some(devices) = devices {
        r.ext(Extension::Olm);
        document = document.attr("devices", devices);
    }
    if !account.attribution_domains.is_empty() {
        r.ext(Extension::AttributionDomains);
        document = document.attr("attributionDomains", account.attribution_domains.clone());
    }

    document = document.has_one("publicKey", public_key(r, account)?.into_node());

    let shared_inbox = r.resolver().shared_inbox_uri(account);
    document = document.has_one(
        "endpoints",
        Document::untyped().attr_opt("sharedInbox", shared_inbox).into_node(),
    );

    if !suspended {
        if let Some(avatar) = &account.avatar {
            document = document.has_one("icon", image(r, avatar).into_node());
        }
        if let Some(header) = &account.header {
            document = document.has_one("image", image(r, header).into_node());
        }

        let mut tags = Vec::with_capacity(account.emojis.len() + account.featured_tags.len());
        for emoji in &account.emojis {
            tags.push(r.nested(M, Subject::CustomEmoji(emoji))?);
        }
        for tag in &account.featured_tags {
            tags.push(r.nested(M, Subject::Tag(tag))?);
        }
        document = document.has_many("tag", tags);

        if !account.fields.is_empty() {
            r.ext(Extension::PropertyValue);
        }
        let attachment = account
            .fields
            .iter()
            .map(|field| {
                Document::new("PropertyValue")
                    .attr("name", field.name.as_str())
                    .attr("value", r.formatter().format_field_value(account, &field.value))
                    .into_node()
            })
            .collect();
        document = document.has_many("attachment", attachment);
    }

    if let Some(target) = &account.moved_to {
        r.ext(Extension::MovedTo);
        document = document.attr("movedTo", account_uri(r, M, target)?);
    }
    if !account.also_known_as.is_empty() {
        r.ext(Extension::AlsoKnownAs);
        document = document.attr("alsoKnownAs", account.also_known_as.clone());
    }
    Ok(document)
}

fn image(r: &mut Renderer<'_>, file: &MediaFile) -> Document {
    if file.focus.is_some() {
        r.ext(Extension::FocalPoint);
    }
    Document::new("Image")
        .attr("mediaType", file.content_type.as_str())
        .attr("url", file.url.as_str())
        .attr_opt("focalPoint", file.focus.map(focal_point))
}

/// The actor's RSA key as a `#main-key` fragment of the actor.
pub(crate) fn public_key(r: &mut Renderer<'_>, account: &Account) -> Result<Document> {
    let owner = account_uri(r, MappingId::PublicKey, account)?;
    let der = Base64::decode_vec(&account.public_key).map_err(|error| RenderError::Format {
        what: "public key",
        reason: error.to_string(),
    })?;
    let pem = pem_encode("PUBLIC KEY", LineEnding::LF, &der).map_err(|error| RenderError::Format {
        what: "public key",
        reason: error.to_string(),
    })?;
    r.ext(Extension::Security);
    Ok(Document::untyped()
        .attr("id", format!("{owner}#main-key"))
        .attr("owner", owner)
        .attr("publicKeyPem", pem))
}
