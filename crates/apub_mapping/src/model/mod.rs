//! Read-only snapshots of the host's domain rows.
//!
//! Relations are owned by the snapshot. A relation the host did not load is
//! `None`, and mappings that need it fail with a precondition error instead
//! of guessing.

mod account;
mod collection;
mod interaction;
mod status;

use std::fmt::Display;

pub use account::{Account, ActorType, Device, FocalPoint, MediaFile, ProfileField};
pub use collection::{CollectionItem, CollectionLink, CollectionPresenter};
pub use interaction::{
    AccountMigration, Block, Favourite, Feature, FeaturedItem, Follow, Membership, Report, Vote,
};
pub use status::{
    Conversation, CustomEmoji, MediaAttachment, Mention, Poll, Quote, QuotePolicy, QuoteState,
    Status, Tag, Visibility,
};

/// A borrowed domain value handed to the registry for dispatch.
#[derive(Debug, Clone, Copy)]
pub enum Subject<'a> {
    Account(&'a Account),
    Status(&'a Status),
    Follow(&'a Follow),
    Block(&'a Block),
    Favourite(&'a Favourite),
    Vote(&'a Vote),
    Report(&'a Report),
    AccountMigration(&'a AccountMigration),
    Feature(&'a Feature),
    Membership(&'a Membership),
    Tag(&'a Tag),
    CustomEmoji(&'a CustomEmoji),
    MediaAttachment(&'a MediaAttachment),
    Mention(&'a Mention),
    Device(&'a Device),
    Poll(&'a Poll),
    Collection(&'a CollectionPresenter),
    Uri(&'a str),
}

/// Runtime type tag of a [`Subject`], the registry's lookup key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SubjectKind {
    Account,
    Status,
    Follow,
    Block,
    Favourite,
    Vote,
    Report,
    AccountMigration,
    Feature,
    Membership,
    Tag,
    CustomEmoji,
    MediaAttachment,
    Mention,
    Device,
    Poll,
    Collection,
    Uri,
}

impl Subject<'_> {
    pub fn kind(&self) -> SubjectKind {
        match self {
            Subject::Account(_) => SubjectKind::Account,
            Subject::Status(_) => SubjectKind::Status,
            Subject::Follow(_) => SubjectKind::Follow,
            Subject::Block(_) => SubjectKind::Block,
            Subject::Favourite(_) => SubjectKind::Favourite,
            Subject::Vote(_) => SubjectKind::Vote,
            Subject::Report(_) => SubjectKind::Report,
            Subject::AccountMigration(_) => SubjectKind::AccountMigration,
            Subject::Feature(_) => SubjectKind::Feature,
            Subject::Membership(_) => SubjectKind::Membership,
            Subject::Tag(_) => SubjectKind::Tag,
            Subject::CustomEmoji(_) => SubjectKind::CustomEmoji,
            Subject::MediaAttachment(_) => SubjectKind::MediaAttachment,
            Subject::Mention(_) => SubjectKind::Mention,
            Subject::Device(_) => SubjectKind::Device,
            Subject::Poll(_) => SubjectKind::Poll,
            Subject::Collection(_) => SubjectKind::Collection,
            Subject::Uri(_) => SubjectKind::Uri,
        }
    }
}

impl SubjectKind {
    pub fn as_str(self) -> &'static str {
        match self {
            SubjectKind::Account => "Account",
            SubjectKind::Status => "Status",
            SubjectKind::Follow => "Follow",
            SubjectKind::Block => "Block",
            SubjectKind::Favourite => "Favourite",
            SubjectKind::Vote => "Vote",
            SubjectKind::Report => "Report",
            SubjectKind::AccountMigration => "AccountMigration",
            SubjectKind::Feature => "Feature",
            SubjectKind::Membership => "Membership",
            SubjectKind::Tag => "Tag",
            SubjectKind::CustomEmoji => "CustomEmoji",
            SubjectKind::MediaAttachment => "MediaAttachment",
            SubjectKind::Mention => "Mention",
            SubjectKind::Device => "Device",
            SubjectKind::Poll => "Poll",
            SubjectKind::Collection => "Collection",
            SubjectKind::Uri => "Uri",
        }
    }
}

impl Display for SubjectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
