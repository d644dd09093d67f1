use crate::model::SubjectKind;
use crate::registry::MappingId;

pub type Result<T, E = RenderError> = std::result::Result<T, E>;

/// Every way a document can fail to render. A failure aborts the whole
/// document; callers never see partial JSON-LD.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    /// Nothing is registered for the runtime type, neither globally nor in
    /// the container's override table. This is a programming error.
    #[error("no mapping registered for {kind}{}", display_container(.container))]
    MappingNotFound {
        kind: SubjectKind,
        container: Option<MappingId>,
    },
    #[error("mapping {mapping} cannot render a {kind}")]
    UnsupportedSubject {
        mapping: MappingId,
        kind: SubjectKind,
    },
    /// A relation the mapping relies on was absent.
    #[error("mapping {mapping} requires {relation}, which is missing")]
    PreconditionViolation {
        mapping: MappingId,
        relation: &'static str,
    },
    #[error("mapping {mapping} could not resolve {what}")]
    Unresolved { mapping: MappingId, what: &'static str },
    #[error("unable to format {what}: {reason}")]
    Format { what: &'static str, reason: String },
    #[error("unknown mapping name {0:?}")]
    UnknownMapping(String),
}

fn display_container(container: &Option<MappingId>) -> String {
    match container {
        Some(container) => format!(" inside {container}"),
        None => String::new(),
    }
}

impl RenderError {
    pub(crate) fn precondition(mapping: MappingId, relation: &'static str) -> RenderError {
        RenderError::PreconditionViolation { mapping, relation }
    }
    pub(crate) fn unresolved(mapping: MappingId, what: &'static str) -> RenderError {
        RenderError::Unresolved { mapping, what }
    }
}

#[cfg(test)]
mod tests {
    use super::RenderError;
    use crate::model::SubjectKind;
    use crate::registry::MappingId;

    #[test]
    fn messages_name_the_mapping() {
        let error = RenderError::MappingNotFound {
            kind: SubjectKind::Poll,
            container: Some(MappingId::Outbox),
        };
        assert_eq!(error.to_string(), "no mapping registered for Poll inside Outbox");

        let error = RenderError::MappingNotFound {
            kind: SubjectKind::Poll,
            container: None,
        };
        assert_eq!(error.to_string(), "no mapping registered for Poll");

        let error = RenderError::precondition(MappingId::Note, "thread");
        assert_eq!(
            error.to_string(),
            "mapping Note requires thread, which is missing"
        );
    }
}
