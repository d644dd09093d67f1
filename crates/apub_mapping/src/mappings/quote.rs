//! Quote post negotiation: the request sent by the quoting author, the
//! quoted author's answer and the authorization stamp it links to.
//!
//! Every mapping here takes the quoting status; its [`Quote`] must be loaded.

use crate::context::Extension;
use crate::document::{Document, Node};
use crate::error::{RenderError, Result};
use crate::model::{Account, Quote, Status, Subject};
use crate::registry::MappingId;
use crate::render::Renderer;

use super::{account_uri, inlining_allowed, status_uri};

fn quote_of(mapping: MappingId, status: &Status) -> Result<(&Quote, &Status)> {
    let quote = status
        .quote
        .as_ref()
        .ok_or_else(|| RenderError::precondition(mapping, "quote"))?;
    let quoted = quote
        .quoted_status
        .as_deref()
        .ok_or_else(|| RenderError::precondition(mapping, "quoted status"))?;
    Ok((quote, quoted))
}

fn quoted_author<'a>(quote: &'a Quote, quoted: &'a Status) -> &'a Account {
    quote.quoted_account.as_ref().unwrap_or(&quoted.account)
}

pub(crate) fn quote_request(r: &mut Renderer<'_>, status: &Status) -> Result<Document> {
    const M: MappingId = MappingId::QuoteRequest;
    let (quote, quoted) = quote_of(M, status)?;
    let actor = account_uri(r, M, &status.account)?;
    let id = match &quote.activity_uri {
        Some(uri) => uri.clone(),
        None => format!("{actor}#quote_requests/{}", quote.id),
    };
    let instrument = if inlining_allowed(r, &status.account, status) {
        r.nested(M, Subject::Status(status))?
    } else {
        Node::Uri(status_uri(r, M, status)?)
    };
    r.ext(Extension::QuoteRequests);
    Ok(Document::new("QuoteRequest")
        .attr("id", id)
        .attr("actor", actor)
        .attr("object", status_uri(r, M, quoted)?)
        .has_one("instrument", instrument))
}

fn respond(r: &mut Renderer<'_>, mapping: MappingId, status: &Status) -> Result<Document> {
    let (quote, quoted) = quote_of(mapping, status)?;
    let actor = account_uri(r, mapping, quoted_author(quote, quoted))?;
    let request = quote_request(r, status)?;
    let (ty, marker) = match mapping {
        MappingId::AcceptQuoteRequest => ("Accept", "accepts"),
        _ => ("Reject", "rejects"),
    };
    let mut document = Document::new(ty)
        .attr("id", format!("{actor}#{marker}/quote_requests/{}", quote.id))
        .attr("actor", actor)
        .has_one("object", request.into_node());
    if mapping == MappingId::AcceptQuoteRequest {
        let result = r
            .resolver()
            .approval_uri(quote, false)
            .ok_or_else(|| RenderError::unresolved(mapping, "approval uri"))?;
        document = document.attr("result", result);
    }
    Ok(document)
}

pub(crate) fn accept_quote_request(r: &mut Renderer<'_>, status: &Status) -> Result<Document> {
    respond(r, MappingId::AcceptQuoteRequest, status)
}

pub(crate) fn reject_quote_request(r: &mut Renderer<'_>, status: &Status) -> Result<Document> {
    respond(r, MappingId::RejectQuoteRequest, status)
}

/// The stamp dereferenced by third parties to verify that a quote was
/// approved. Only accepted quotes have one unless `force_approval_id` is set.
pub(crate) fn quote_authorization(r: &mut Renderer<'_>, status: &Status) -> Result<Document> {
    const M: MappingId = MappingId::QuoteAuthorization;
    let (quote, quoted) = quote_of(M, status)?;
    let id = r
        .resolver()
        .approval_uri(quote, !r.options().force_approval_id)
        .ok_or_else(|| RenderError::unresolved(M, "approval uri"))?;
    r.ext(Extension::QuoteAuthorizations);
    Ok(Document::new("QuoteAuthorization")
        .attr("id", id)
        .attr("attributedTo", account_uri(r, M, quoted_author(quote, quoted))?)
        .attr("interactionTarget", status_uri(r, M, quoted)?)
        .attr("interactingObject", status_uri(r, M, status)?))
}
