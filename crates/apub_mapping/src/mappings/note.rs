//! Note and Question objects.

use serde_json::json;

use crate::context::Extension;
use crate::document::{Document, Node, PUBLIC_COLLECTION, iso8601};
use crate::error::{RenderError, Result};
use crate::model::{Poll, QuotePolicy, Status, Subject, Visibility};
use crate::registry::MappingId;
use crate::render::Renderer;
use crate::resolve::CollectionKind;

use super::{account_uri, audience, collection_uri, status_uri};

const M: MappingId = MappingId::Note;

pub(crate) fn note(r: &mut Renderer<'_>, status: &Status) -> Result<Document> {
    let id = status_uri(r, M, status)?;
    let in_reply_to = match (&status.in_reply_to_id, &status.thread) {
        (None, _) => None,
        (Some(_), Some(thread)) => Some(status_uri(r, M, thread)?),
        (Some(_), None) => return Err(RenderError::precondition(M, "thread")),
    };
    let conversation = status
        .conversation
        .as_ref()
        .and_then(|conversation| r.resolver().conversation_uri(conversation));
    let content = r.formatter().format_content(status);

    r.ext(Extension::Sensitive);
    r.ext(Extension::AtomUri);
    r.ext(Extension::Conversation);

    let mut document = Document::new(if status.poll.is_some() { "Question" } else { "Note" })
        .attr("id", id.as_str())
        .attr(
            "summary",
            Some(status.spoiler_text.as_str()).filter(|summary| !summary.is_empty()),
        )
        .attr("inReplyTo", in_reply_to.clone())
        .attr("published", iso8601(status.created_at))
        .attr_opt("url", r.resolver().url(Subject::Status(status)))
        .attr("attributedTo", account_uri(r, M, &status.account)?)
        .attr("to", audience::to(r, M, status)?)
        .attr("cc", audience::cc(r, M, status)?)
        .attr("sensitive", status.sensitive)
        .attr("atomUri", id.as_str())
        .attr("inReplyToAtomUri", in_reply_to)
        .attr("conversation", conversation)
        .attr("content", content.as_str())
        .attr_opt(
            "contentMap",
            status
                .language
                .as_ref()
                .map(|language| json!({ language.as_str(): content })),
        )
        .attr_opt("updated", status.edited_at.map(iso8601));

    let mut attachment = Vec::with_capacity(status.media_attachments.len());
    for media in &status.media_attachments {
        attachment.push(r.nested(M, Subject::MediaAttachment(media))?);
    }
    document = document.has_many("attachment", attachment);
    document = document.has_many("tag", tags(r, status)?);

    if status.local {
        if let Some(replies) = &status.replies {
            let replies = r.render_as(MappingId::Collection, Subject::Collection(replies))?;
            document = document.has_one("replies", replies);
        }
        let owner = Subject::Status(status);
        let likes = collection_uri(r, M, owner, CollectionKind::Likes)?;
        let shares = collection_uri(r, M, owner, CollectionKind::Shares)?;
        document = document
            .has_one("likes", counter(likes, status.favourites_count))
            .has_one("shares", counter(shares, status.reblogs_count));
    }

    if let Some(poll) = &status.poll {
        document = question(r, document, poll);
    }

    document = quote(r, document, status)?;
    if status.local {
        document = interaction_policy(r, document, status)?;
    }
    Ok(document)
}

/// Mentions in primary key order, then hashtags, then custom emojis.
fn tags(r: &mut Renderer<'_>, status: &Status) -> Result<Vec<Node>> {
    let capacity = status.mentions.len() + status.tags.len() + status.emojis.len();
    let mut tags = Vec::with_capacity(capacity);
    for mention in status.ordered_mentions() {
        tags.push(r.nested(M, Subject::Mention(mention))?);
    }
    for tag in &status.tags {
        tags.push(r.nested(M, Subject::Tag(tag))?);
    }
    for emoji in &status.emojis {
        tags.push(r.nested(M, Subject::CustomEmoji(emoji))?);
    }
    Ok(tags)
}

fn counter(id: String, total: u64) -> Node {
    Document::new("Collection")
        .attr("id", id)
        .attr("totalItems", total)
        .into_node()
}

fn question(r: &mut Renderer<'_>, document: Document, poll: &Poll) -> Document {
    let choices = poll
        .options
        .iter()
        .enumerate()
        .map(|(index, title)| {
            Document::new("Note")
                .attr("name", title.as_str())
                .has_one(
                    "replies",
                    Document::new("Collection")
                        .attr("totalItems", poll.votes_for(index))
                        .into_node(),
                )
                .into_node()
        })
        .collect();
    let expired = poll.is_expired(r.options().now);
    if poll.voters_count.is_some() {
        r.ext(Extension::VotersCount);
    }
    document
        .has_many(if poll.multiple { "anyOf" } else { "oneOf" }, choices)
        .attr_opt("endTime", poll.expires_at.map(iso8601))
        .attr_if(expired, "closed", || poll.expires_at.map(iso8601))
        .attr_opt("votersCount", poll.voters_count)
}

fn quote(r: &mut Renderer<'_>, document: Document, status: &Status) -> Result<Document> {
    let Some(quote) = &status.quote else {
        return Ok(document);
    };
    let Some(quoted) = quote.quoted_status.as_deref().filter(|_| !quote.is_withdrawn()) else {
        return Ok(document);
    };
    r.ext(Extension::Quotes);
    let quoted = status_uri(r, M, quoted)?;
    let authorization = r
        .resolver()
        .approval_uri(quote, !r.options().force_approval_id);
    Ok(document
        .attr("quote", quoted.as_str())
        .attr("quoteUri", quoted.as_str())
        .attr("_misskey_quote", quoted.as_str())
        .attr_opt("quoteAuthorization", authorization))
}

/// Who may quote without approval. Only public and unlisted posts honor the
/// author's policy; anything narrower is reserved to the author.
fn interaction_policy(
    r: &mut Renderer<'_>,
    document: Document,
    status: &Status,
) -> Result<Document> {
    let policy = match status.visibility {
        Visibility::Public | Visibility::Unlisted => {
            status.quote_policy.unwrap_or_default()
        }
        _ => QuotePolicy::Nobody,
    };
    let mut automatic = Vec::new();
    match policy {
        QuotePolicy::Public => automatic.push(PUBLIC_COLLECTION.to_string()),
        QuotePolicy::Followers => automatic.push(collection_uri(
            r,
            M,
            Subject::Account(&status.account),
            CollectionKind::Followers,
        )?),
        QuotePolicy::Nobody => {}
    }
    automatic.push(account_uri(r, M, &status.account)?);
    r.ext(Extension::InteractionPolicies);
    let can_quote = Document::untyped().attr("automaticApproval", automatic);
    Ok(document.has_one(
        "interactionPolicy",
        Document::untyped().has_one("canQuote", can_quote.into_node()).into_node(),
    ))
}
