//! Bare reference mapping: a value rendered as its URI only.

use crate::error::{RenderError, Result};
use crate::model::Subject;
use crate::registry::MappingId;
use crate::render::Renderer;

pub(crate) fn reference(r: &mut Renderer<'_>, subject: Subject<'_>) -> Result<String> {
    match subject {
        Subject::Uri(uri) => Ok(uri.to_string()),
        Subject::Account(_)
        | Subject::Status(_)
        | Subject::Follow(_)
        | Subject::Block(_)
        | Subject::Report(_)
        | Subject::Membership(_)
        | Subject::Tag(_)
        | Subject::CustomEmoji(_) => r.uri(MappingId::Uri, subject, "object uri"),
        subject => Err(RenderError::UnsupportedSubject {
            mapping: MappingId::Uri,
            kind: subject.kind(),
        }),
    }
}
