//! Runtime type dispatch.
//!
//! A global table maps each [`SubjectKind`] to its default mapping. Container
//! mappings carry override tables consulted first, so the same nested value
//! renders differently depending on where it is embedded.

use std::collections::BTreeMap;
use std::fmt::Display;
use std::str::FromStr;

use crate::error::{RenderError, Result};
use crate::model::SubjectKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MappingId {
    // objects
    Actor,
    PublicKey,
    Note,
    MediaAttachment,
    Mention,
    Hashtag,
    Emoji,
    Device,
    QuoteAuthorization,
    Uri,
    // collections
    Collection,
    Outbox,
    // activities
    Activity,
    Create,
    Announce,
    Update,
    Delete,
    DeleteActor,
    Follow,
    AcceptFollow,
    RejectFollow,
    UndoFollow,
    Like,
    UndoLike,
    Block,
    UndoBlock,
    UndoAnnounce,
    Move,
    Flag,
    Add,
    Remove,
    Vote,
    QuoteRequest,
    AcceptQuoteRequest,
    RejectQuoteRequest,
    Join,
    Leave,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentCategory {
    Activity,
    Object,
    Collection,
}

const ALL_MAPPINGS: [MappingId; 37] = [
    MappingId::Actor,
    MappingId::PublicKey,
    MappingId::Note,
    MappingId::MediaAttachment,
    MappingId::Mention,
    MappingId::Hashtag,
    MappingId::Emoji,
    MappingId::Device,
    MappingId::QuoteAuthorization,
    MappingId::Uri,
    MappingId::Collection,
    MappingId::Outbox,
    MappingId::Activity,
    MappingId::Create,
    MappingId::Announce,
    MappingId::Update,
    MappingId::Delete,
    MappingId::DeleteActor,
    MappingId::Follow,
    MappingId::AcceptFollow,
    MappingId::RejectFollow,
    MappingId::UndoFollow,
    MappingId::Like,
    MappingId::UndoLike,
    MappingId::Block,
    MappingId::UndoBlock,
    MappingId::UndoAnnounce,
    MappingId::Move,
    MappingId::Flag,
    MappingId::Add,
    MappingId::Remove,
    MappingId::Vote,
    MappingId::QuoteRequest,
    MappingId::AcceptQuoteRequest,
    MappingId::RejectQuoteRequest,
    MappingId::Join,
    MappingId::Leave,
];

impl MappingId {
    pub fn all() -> &'static [MappingId] {
        &ALL_MAPPINGS
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MappingId::Actor => "Actor",
            MappingId::PublicKey => "PublicKey",
            MappingId::Note => "Note",
            MappingId::MediaAttachment => "MediaAttachment",
            MappingId::Mention => "Mention",
            MappingId::Hashtag => "Hashtag",
            MappingId::Emoji => "Emoji",
            MappingId::Device => "Device",
            MappingId::QuoteAuthorization => "QuoteAuthorization",
            MappingId::Uri => "Uri",
            MappingId::Collection => "Collection",
            MappingId::Outbox => "Outbox",
            MappingId::Activity => "Activity",
            MappingId::Create => "Create",
            MappingId::Announce => "Announce",
            MappingId::Update => "Update",
            MappingId::Delete => "Delete",
            MappingId::DeleteActor => "DeleteActor",
            MappingId::Follow => "Follow",
            MappingId::AcceptFollow => "AcceptFollow",
            MappingId::RejectFollow => "RejectFollow",
            MappingId::UndoFollow => "UndoFollow",
            MappingId::Like => "Like",
            MappingId::UndoLike => "UndoLike",
            MappingId::Block => "Block",
            MappingId::UndoBlock => "UndoBlock",
            MappingId::UndoAnnounce => "UndoAnnounce",
            MappingId::Move => "Move",
            MappingId::Flag => "Flag",
            MappingId::Add => "Add",
            MappingId::Remove => "Remove",
            MappingId::Vote => "Vote",
            MappingId::QuoteRequest => "QuoteRequest",
            MappingId::AcceptQuoteRequest => "AcceptQuoteRequest",
            MappingId::RejectQuoteRequest => "RejectQuoteRequest",
            MappingId::Join => "Join",
            MappingId::Leave => "Leave",
        }
    }

    pub fn category(self) -> DocumentCategory {
        match self {
            MappingId::Actor
            | MappingId::PublicKey
            | MappingId::Note
            | MappingId::MediaAttachment
            | MappingId::Mention
            | MappingId::Hashtag
            | MappingId::Emoji
            | MappingId::Device
            | MappingId::QuoteAuthorization
            | MappingId::Uri => DocumentCategory::Object,
            MappingId::Collection | MappingId::Outbox => DocumentCategory::Collection,
            _ => DocumentCategory::Activity,
        }
    }
}

impl Display for MappingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MappingId {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self> {
        MappingId::all()
            .iter()
            .copied()
            .find(|mapping| mapping.as_str() == s)
            .ok_or_else(|| RenderError::UnknownMapping(s.to_string()))
    }
}

const DEFAULTS: &[(SubjectKind, MappingId)] = &[
    (SubjectKind::Account, MappingId::Actor),
    (SubjectKind::Status, MappingId::Note),
    (SubjectKind::Follow, MappingId::Follow),
    (SubjectKind::Block, MappingId::Block),
    (SubjectKind::Favourite, MappingId::Like),
    (SubjectKind::Vote, MappingId::Vote),
    (SubjectKind::Report, MappingId::Flag),
    (SubjectKind::AccountMigration, MappingId::Move),
    (SubjectKind::Feature, MappingId::Add),
    (SubjectKind::Membership, MappingId::Join),
    (SubjectKind::Tag, MappingId::Hashtag),
    (SubjectKind::CustomEmoji, MappingId::Emoji),
    (SubjectKind::MediaAttachment, MappingId::MediaAttachment),
    (SubjectKind::Mention, MappingId::Mention),
    (SubjectKind::Device, MappingId::Device),
    (SubjectKind::Collection, MappingId::Collection),
    (SubjectKind::Uri, MappingId::Uri),
];

const FEATURED_OBJECTS: &[(SubjectKind, MappingId)] = &[
    (SubjectKind::Status, MappingId::Uri),
    (SubjectKind::Account, MappingId::Uri),
    (SubjectKind::Tag, MappingId::Hashtag),
];

const OVERRIDES: &[(MappingId, &[(SubjectKind, MappingId)])] = &[
    (MappingId::Activity, &[(SubjectKind::Status, MappingId::Note)]),
    (MappingId::Create, &[(SubjectKind::Status, MappingId::Note)]),
    (MappingId::Announce, &[(SubjectKind::Status, MappingId::Note)]),
    (
        MappingId::Update,
        &[
            (SubjectKind::Account, MappingId::Actor),
            (SubjectKind::Status, MappingId::Note),
        ],
    ),
    (MappingId::Add, FEATURED_OBJECTS),
    (MappingId::Remove, FEATURED_OBJECTS),
    (
        MappingId::Collection,
        &[
            (SubjectKind::Status, MappingId::Note),
            (SubjectKind::Account, MappingId::Uri),
        ],
    ),
    (
        MappingId::Outbox,
        &[
            (SubjectKind::Status, MappingId::Activity),
            (SubjectKind::Account, MappingId::Uri),
        ],
    ),
    (MappingId::QuoteRequest, &[(SubjectKind::Status, MappingId::Note)]),
    (MappingId::UndoAnnounce, &[(SubjectKind::Status, MappingId::Announce)]),
];

#[derive(Debug, Clone)]
pub struct Registry {
    defaults: BTreeMap<SubjectKind, MappingId>,
    overrides: BTreeMap<MappingId, BTreeMap<SubjectKind, MappingId>>,
}

impl Default for Registry {
    fn default() -> Self {
        let mut registry = Registry::empty();
        for &(kind, mapping) in DEFAULTS {
            registry.register(kind, mapping);
        }
        for &(container, table) in OVERRIDES {
            for &(kind, mapping) in table {
                registry.register_override(container, kind, mapping);
            }
        }
        registry
    }
}

impl Registry {
    pub fn empty() -> Registry {
        Registry {
            defaults: BTreeMap::new(),
            overrides: BTreeMap::new(),
        }
    }

    pub fn register(&mut self, kind: SubjectKind, mapping: MappingId) {
        self.defaults.insert(kind, mapping);
    }

    pub fn register_override(
        &mut self,
        container: MappingId,
        kind: SubjectKind,
        mapping: MappingId,
    ) {
        self.overrides
            .entry(container)
            .or_default()
            .insert(kind, mapping);
    }

    /// Override of the enclosing container first, then the global default.
    pub fn lookup(&self, container: Option<MappingId>, kind: SubjectKind) -> Result<MappingId> {
        container
            .and_then(|container| self.overrides.get(&container))
            .and_then(|table| table.get(&kind))
            .or_else(|| self.defaults.get(&kind))
            .copied()
            .ok_or(RenderError::MappingNotFound { kind, container })
    }
}

#[cfg(test)]
mod tests {
    use super::{DocumentCategory, MappingId, Registry};
    use crate::error::RenderError;
    use crate::model::SubjectKind;

    #[test]
    fn container_overrides_win() {
        let registry = Registry::default();
        assert_eq!(
            registry.lookup(None, SubjectKind::Status),
            Ok(MappingId::Note)
        );
        assert_eq!(
            registry.lookup(Some(MappingId::Add), SubjectKind::Status),
            Ok(MappingId::Uri)
        );
        assert_eq!(
            registry.lookup(Some(MappingId::Outbox), SubjectKind::Status),
            Ok(MappingId::Activity)
        );
        assert_eq!(
            registry.lookup(Some(MappingId::Add), SubjectKind::Tag),
            Ok(MappingId::Hashtag)
        );
    }

    #[test]
    fn falls_back_to_global_table() {
        let registry = Registry::default();
        assert_eq!(
            registry.lookup(Some(MappingId::Outbox), SubjectKind::Device),
            Ok(MappingId::Device)
        );
    }

    #[test]
    fn unregistered_kind_is_an_error() {
        let registry = Registry::default();
        assert_eq!(
            registry.lookup(Some(MappingId::Note), SubjectKind::Poll),
            Err(RenderError::MappingNotFound {
                kind: SubjectKind::Poll,
                container: Some(MappingId::Note),
            })
        );
        assert!(Registry::empty().lookup(None, SubjectKind::Status).is_err());
    }

    #[test]
    fn names_round_trip() {
        for &mapping in MappingId::all() {
            assert_eq!(mapping.as_str().parse::<MappingId>(), Ok(mapping));
        }
        assert_eq!(
            "Nope".parse::<MappingId>(),
            Err(RenderError::UnknownMapping("Nope".to_string()))
        );
        assert_eq!(MappingId::Outbox.category(), DocumentCategory::Collection);
        assert_eq!(MappingId::AcceptFollow.category(), DocumentCategory::Activity);
    }
}
