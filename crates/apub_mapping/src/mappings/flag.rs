use crate::document::Document;
use crate::error::Result;
use crate::model::{Report, Subject};
use crate::registry::MappingId;
use crate::render::Renderer;

use super::{account_uri, status_uri};

/// Reports forwarded to a remote server are usually sent by the instance
/// actor; the `account` option overrides the reporter.
pub(crate) fn flag(r: &mut Renderer<'_>, report: &Report) -> Result<Document> {
    const M: MappingId = MappingId::Flag;
    let reporter = r.options().account.as_ref().unwrap_or(&report.account);
    let mut object = Vec::with_capacity(report.statuses.len() + 1);
    object.push(account_uri(r, M, &report.target_account)?);
    for status in &report.statuses {
        object.push(status_uri(r, M, status)?);
    }
    Ok(Document::new("Flag")
        .attr("id", r.uri(M, Subject::Report(report), "report uri")?)
        .attr("actor", account_uri(r, M, reporter)?)
        .attr("content", report.comment.as_str())
        .attr("object", object))
}
