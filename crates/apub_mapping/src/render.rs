use std::collections::HashMap;

use serde_json::Value;
use tracing::{debug, warn};

use crate::context::{ContextSet, Extension};
use crate::document::{Document, Node};
use crate::error::{RenderError, Result};
use crate::format::Formatter;
use crate::mappings::{
    activity, actor, block, collection, device, feature, flag, follow, like, media, membership,
    migration, note, quote, tag, uri, vote,
};
use crate::model::Subject;
use crate::options::RenderOptions;
use crate::registry::{DocumentCategory, MappingId, Registry};
use crate::resolve::UriResolver;

/// State of one render call: the collaborators, the options and the
/// extensions collected so far.
pub struct Renderer<'r> {
    resolver: &'r dyn UriResolver,
    formatter: &'r dyn Formatter,
    registry: &'r Registry,
    options: &'r RenderOptions,
    context: ContextSet,
    emojis: HashMap<u64, Document>,
}

impl<'r> Renderer<'r> {
    pub(crate) fn new(
        resolver: &'r dyn UriResolver,
        formatter: &'r dyn Formatter,
        registry: &'r Registry,
        options: &'r RenderOptions,
    ) -> Renderer<'r> {
        Renderer {
            resolver,
            formatter,
            registry,
            options,
            context: ContextSet::new(),
            emojis: HashMap::new(),
        }
    }

    pub(crate) fn resolver(&self) -> &'r dyn UriResolver {
        self.resolver
    }
    pub(crate) fn formatter(&self) -> &'r dyn Formatter {
        self.formatter
    }
    pub(crate) fn options(&self) -> &'r RenderOptions {
        self.options
    }

    pub(crate) fn ext(&mut self, extension: Extension) {
        self.context.insert(extension);
    }

    /// Required URI of `subject`.
    pub(crate) fn uri(
        &self,
        mapping: MappingId,
        subject: Subject<'_>,
        what: &'static str,
    ) -> Result<String> {
        self.resolver
            .uri(subject)
            .ok_or_else(|| RenderError::unresolved(mapping, what))
    }

    pub(crate) fn cached_emoji(&self, id: u64) -> Option<Document> {
        self.emojis.get(&id).cloned()
    }
    pub(crate) fn cache_emoji(&mut self, id: u64, document: Document) {
        self.emojis.insert(id, document);
    }

    /// Dispatch `subject` through the registry, honoring the overrides of
    /// `container`.
    pub(crate) fn render(
        &mut self,
        container: Option<MappingId>,
        subject: Subject<'_>,
    ) -> Result<Node> {
        let mapping = self.registry.lookup(container, subject.kind())?;
        self.render_as(mapping, subject)
    }

    pub(crate) fn nested(&mut self, container: MappingId, subject: Subject<'_>) -> Result<Node> {
        self.render(Some(container), subject)
    }

    pub(crate) fn render_as(&mut self, mapping: MappingId, subject: Subject<'_>) -> Result<Node> {
        use MappingId as M;
        use Subject as S;

        debug!(target: "apub", %mapping, kind = %subject.kind(), "render");
        let document = match (mapping, subject) {
            (M::Uri, subject) => return uri::reference(self, subject).map(Node::Uri),
            (M::Actor, S::Account(account)) => actor::actor(self, account)?,
            (M::PublicKey, S::Account(account)) => actor::public_key(self, account)?,
            (M::Note, S::Status(status)) => note::note(self, status)?,
            (M::MediaAttachment, S::MediaAttachment(media)) => {
                media::media_attachment(self, media)?
            }
            (M::Mention, S::Mention(mention)) => tag::mention(self, mention)?,
            (M::Hashtag, S::Tag(tag)) => tag::hashtag(self, tag)?,
            (M::Emoji, S::CustomEmoji(emoji)) => tag::emoji(self, emoji)?,
            (M::Device, S::Device(device)) => device::device(self, device)?,
            (M::QuoteAuthorization, S::Status(status)) => quote::quote_authorization(self, status)?,
            (M::Collection | M::Outbox, S::Collection(presenter)) => {
                collection::collection(self, mapping, presenter)?
            }
            (M::Activity, S::Status(status)) => activity::activity(self, status)?,
            (M::Create, S::Status(status)) => activity::create(self, status)?,
            (M::Announce, S::Status(status)) => activity::announce(self, status)?,
            (M::Update, subject @ (S::Account(_) | S::Status(_))) => {
                activity::update(self, subject)?
            }
            (M::Delete, S::Status(status)) => activity::delete(self, status)?,
            (M::DeleteActor, S::Account(account)) => activity::delete_actor(self, account)?,
            (M::UndoAnnounce, S::Status(status)) => activity::undo_announce(self, status)?,
            (M::Follow, S::Follow(f)) => follow::follow(self, f)?,
            (M::AcceptFollow, S::Follow(f)) => follow::accept_follow(self, f)?,
            (M::RejectFollow, S::Follow(f)) => follow::reject_follow(self, f)?,
            (M::UndoFollow, S::Follow(f)) => follow::undo_follow(self, f)?,
            (M::Like, S::Favourite(favourite)) => like::like(self, favourite)?,
            (M::UndoLike, S::Favourite(favourite)) => like::undo_like(self, favourite)?,
            (M::Block, S::Block(b)) => block::block(self, b)?,
            (M::UndoBlock, S::Block(b)) => block::undo_block(self, b)?,
            (M::Move, S::AccountMigration(migration)) => migration::move_account(self, migration)?,
            (M::Flag, S::Report(report)) => flag::flag(self, report)?,
            (M::Add, S::Feature(feature)) => feature::add(self, feature)?,
            (M::Remove, S::Feature(feature)) => feature::remove(self, feature)?,
            (M::Vote, S::Vote(v)) => vote::vote(self, v)?,
            (M::QuoteRequest, S::Status(status)) => quote::quote_request(self, status)?,
            (M::AcceptQuoteRequest, S::Status(status)) => {
                quote::accept_quote_request(self, status)?
            }
            (M::RejectQuoteRequest, S::Status(status)) => {
                quote::reject_quote_request(self, status)?
            }
            (M::Join, S::Membership(m)) => membership::join(self, m)?,
            (M::Leave, S::Membership(m)) => membership::leave(self, m)?,
            (mapping, subject) => {
                return Err(RenderError::UnsupportedSubject {
                    mapping,
                    kind: subject.kind(),
                });
            }
        };
        Ok(Node::Document(document))
    }

    fn finish(self, node: Node) -> Value {
        match node {
            Node::Uri(uri) => Value::String(uri),
            Node::Document(document) => document.with_context(self.context.to_json_ld()).into(),
        }
    }
}

/// Entry point used by the rest of the host application.
pub struct Serializer {
    resolver: Box<dyn UriResolver>,
    formatter: Box<dyn Formatter>,
    registry: Registry,
}

impl Serializer {
    pub fn new(
        resolver: impl UriResolver + 'static,
        formatter: impl Formatter + 'static,
    ) -> Serializer {
        Serializer {
            resolver: Box::new(resolver),
            formatter: Box::new(formatter),
            registry: Registry::default(),
        }
    }

    pub fn with_registry(mut self, registry: Registry) -> Serializer {
        self.registry = registry;
        self
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Render `subject` with the mapping registered for its runtime type.
    pub fn serialize(&self, subject: Subject<'_>, options: &RenderOptions) -> Result<Serialized> {
        let mapping = self.registry.lookup(None, subject.kind())?;
        self.serialize_with(mapping, subject, options)
    }

    /// Render `subject` with an explicitly chosen mapping, e.g. an Accept for
    /// a follow row.
    pub fn serialize_with(
        &self,
        mapping: MappingId,
        subject: Subject<'_>,
        options: &RenderOptions,
    ) -> Result<Serialized> {
        let mut renderer = Renderer::new(
            self.resolver.as_ref(),
            self.formatter.as_ref(),
            &self.registry,
            options,
        );
        match renderer.render_as(mapping, subject) {
            Ok(node) => Ok(Serialized {
                mapping,
                document: renderer.finish(node),
            }),
            Err(error) => {
                warn!(target: "apub", %mapping, %error, "render failed");
                Err(error)
            }
        }
    }
}

/// A complete JSON-LD document, `@context` included.
#[derive(Debug, Clone, PartialEq)]
pub struct Serialized {
    mapping: MappingId,
    document: Value,
}

impl Serialized {
    pub fn mapping(&self) -> MappingId {
        self.mapping
    }
    pub fn category(&self) -> DocumentCategory {
        self.mapping.category()
    }
    pub fn as_value(&self) -> &Value {
        &self.document
    }
    pub fn into_value(self) -> Value {
        self.document
    }
    pub fn to_json_string(&self) -> String {
        self.document.to_string()
    }
}

impl From<Serialized> for Value {
    fn from(serialized: Serialized) -> Self {
        serialized.document
    }
}
