//! ActivityPub serialization layer.
//!
//! A [`Serializer`] turns read-only snapshots of domain rows ([`model`]) into
//! JSON-LD documents. The [`Registry`] picks a field mapping from the
//! runtime kind of the value and the container it is embedded in; the
//! mappings ask a [`UriResolver`] for every identifier and a [`Formatter`]
//! for every rich text body, and record the vocabulary extensions they use
//! so that `@context` lists exactly those.

pub mod context;
pub mod document;
pub mod error;
pub mod format;
mod mappings;
pub mod model;
pub mod options;
pub mod registry;
pub mod render;
pub mod resolve;

pub use error::{RenderError, Result};
pub use format::{Formatter, HtmlFormatter};
pub use model::{Subject, SubjectKind};
pub use options::RenderOptions;
pub use registry::{DocumentCategory, MappingId, Registry};
pub use render::{Serialized, Serializer};
pub use resolve::{CollectionKind, LocalResolver, UriResolver};
