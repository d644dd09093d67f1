//! `@context` assembly.
//!
//! Mappings record the vocabulary extensions of the fields they actually
//! emit; the union over one render becomes the document's `@context`.

use std::collections::BTreeSet;

use serde_json::{Map, Value, json};

pub const ACTIVITY_STREAMS: &str = "https://www.w3.org/ns/activitystreams";
pub const SECURITY: &str = "https://w3id.org/security/v1";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Extension {
    Security,
    ManuallyApprovesFollowers,
    Sensitive,
    Hashtag,
    MovedTo,
    AlsoKnownAs,
    Emoji,
    Featured,
    PropertyValue,
    AtomUri,
    Conversation,
    FocalPoint,
    Blurhash,
    Discoverable,
    Indexable,
    Memorial,
    VotersCount,
    Suspended,
    AttributionDomains,
    QuoteRequests,
    QuoteAuthorizations,
    Quotes,
    InteractionPolicies,
    Olm,
}

impl Extension {
    /// Term definitions merged into the trailing context object. Security is
    /// a named context and has none.
    fn terms(self) -> Value {
        match self {
            Extension::Security => json!({}),
            Extension::ManuallyApprovesFollowers => {
                json!({ "manuallyApprovesFollowers": "as:manuallyApprovesFollowers" })
            }
            Extension::Sensitive => json!({ "sensitive": "as:sensitive" }),
            Extension::Hashtag => json!({ "Hashtag": "as:Hashtag" }),
            Extension::MovedTo => json!({
                "movedTo": { "@id": "as:movedTo", "@type": "@id" }
            }),
            Extension::AlsoKnownAs => json!({
                "alsoKnownAs": { "@id": "as:alsoKnownAs", "@type": "@id" }
            }),
            Extension::Emoji => json!({
                "toot": "http://joinmastodon.org/ns#",
                "Emoji": "toot:Emoji"
            }),
            Extension::Featured => json!({
                "toot": "http://joinmastodon.org/ns#",
                "featured": { "@id": "toot:featured", "@type": "@id" },
                "featuredTags": { "@id": "toot:featuredTags", "@type": "@id" }
            }),
            Extension::PropertyValue => json!({
                "schema": "http://schema.org#",
                "PropertyValue": "schema:PropertyValue",
                "value": "schema:value"
            }),
            Extension::AtomUri => json!({
                "ostatus": "http://ostatus.org#",
                "atomUri": "ostatus:atomUri"
            }),
            Extension::Conversation => json!({
                "ostatus": "http://ostatus.org#",
                "inReplyToAtomUri": "ostatus:inReplyToAtomUri",
                "conversation": "ostatus:conversation"
            }),
            Extension::FocalPoint => json!({
                "toot": "http://joinmastodon.org/ns#",
                "focalPoint": { "@container": "@list", "@id": "toot:focalPoint" }
            }),
            Extension::Blurhash => json!({
                "toot": "http://joinmastodon.org/ns#",
                "blurhash": "toot:blurhash"
            }),
            Extension::Discoverable => json!({
                "toot": "http://joinmastodon.org/ns#",
                "discoverable": "toot:discoverable"
            }),
            Extension::Indexable => json!({
                "toot": "http://joinmastodon.org/ns#",
                "indexable": "toot:indexable"
            }),
            Extension::Memorial => json!({
                "toot": "http://joinmastodon.org/ns#",
                "memorial": "toot:memorial"
            }),
            Extension::VotersCount => json!({
                "toot": "http://joinmastodon.org/ns#",
                "votersCount": "toot:votersCount"
            }),
            Extension::Suspended => json!({
                "toot": "http://joinmastodon.org/ns#",
                "suspended": "toot:suspended"
            }),
            Extension::AttributionDomains => json!({
                "toot": "http://joinmastodon.org/ns#",
                "attributionDomains": { "@id": "toot:attributionDomains", "@type": "@id" }
            }),
            Extension::QuoteRequests => json!({
                "QuoteRequest": "https://w3id.org/fep/044f#QuoteRequest"
            }),
            Extension::QuoteAuthorizations => json!({
                "QuoteAuthorization": "https://w3id.org/fep/044f#QuoteAuthorization",
                "gts": "https://gotosocial.org/ns#",
                "interactingObject": { "@id": "gts:interactingObject", "@type": "@id" },
                "interactionTarget": { "@id": "gts:interactionTarget", "@type": "@id" }
            }),
            Extension::Quotes => json!({
                "quote": { "@id": "https://w3id.org/fep/044f#quote", "@type": "@id" },
                "quoteUri": "http://fedibird.com/ns#quoteUri",
                "_misskey_quote": "https://misskey-hub.net/ns#_misskey_quote",
                "quoteAuthorization": {
                    "@id": "https://w3id.org/fep/044f#quoteAuthorization",
                    "@type": "@id"
                }
            }),
            Extension::InteractionPolicies => json!({
                "gts": "https://gotosocial.org/ns#",
                "interactionPolicy": { "@id": "gts:interactionPolicy", "@type": "@id" },
                "canQuote": { "@id": "gts:canQuote", "@type": "@id" },
                "automaticApproval": { "@id": "gts:automaticApproval", "@type": "@id" },
                "manualApproval": { "@id": "gts:manualApproval", "@type": "@id" }
            }),
            Extension::Olm => json!({
                "toot": "http://joinmastodon.org/ns#",
                "Device": "toot:Device",
                "Ed25519Key": "toot:Ed25519Key",
                "Curve25519Key": "toot:Curve25519Key",
                "publicKeyBase64": "toot:publicKeyBase64",
                "deviceId": "toot:deviceId",
                "claim": { "@type": "@id", "@id": "toot:claim" },
                "fingerprintKey": { "@type": "@id", "@id": "toot:fingerprintKey" },
                "identityKey": { "@type": "@id", "@id": "toot:identityKey" },
                "devices": { "@type": "@id", "@id": "toot:devices" }
            }),
        }
    }
}

/// Extensions used by one document, kept sorted so the output is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContextSet(BTreeSet<Extension>);

impl ContextSet {
    pub fn new() -> ContextSet {
        ContextSet::default()
    }
    pub fn insert(&mut self, extension: Extension) {
        self.0.insert(extension);
    }
    pub fn contains(&self, extension: Extension) -> bool {
        self.0.contains(&extension)
    }
    pub fn iter(&self) -> impl Iterator<Item = Extension> + '_ {
        self.0.iter().copied()
    }

    /// ActivityStreams first, the security vocabulary when a key is present,
    /// then one object holding every extension term. A lone entry collapses
    /// to a string.
    pub fn to_json_ld(&self) -> Value {
        let mut contexts = vec![Value::String(ACTIVITY_STREAMS.to_string())];
        if self.contains(Extension::Security) {
            contexts.push(Value::String(SECURITY.to_string()));
        }
        let mut terms = Map::new();
        for extension in self.iter() {
            if let Value::Object(map) = extension.terms() {
                terms.extend(map);
            }
        }
        if !terms.is_empty() {
            contexts.push(Value::Object(terms));
        }
        if contexts.len() == 1 {
            contexts.remove(0)
        } else {
            Value::Array(contexts)
        }
    }
}

impl Extend<Extension> for ContextSet {
    fn extend<T: IntoIterator<Item = Extension>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{ContextSet, Extension};

    #[test]
    fn bare_activity_streams() {
        assert_eq!(
            ContextSet::new().to_json_ld(),
            json!("https://www.w3.org/ns/activitystreams")
        );
    }

    #[test]
    fn security_is_a_named_context() {
        let mut set = ContextSet::new();
        set.insert(Extension::Security);
        assert_eq!(
            set.to_json_ld(),
            json!([
                "https://www.w3.org/ns/activitystreams",
                "https://w3id.org/security/v1"
            ])
        );
    }

    #[test]
    fn extensions_share_one_term_object() {
        let mut set = ContextSet::new();
        set.extend([Extension::AtomUri, Extension::Sensitive, Extension::Olm]);
        let context = set.to_json_ld();
        let terms = &context[1];
        assert_eq!(terms["atomUri"], json!("ostatus:atomUri"));
        assert_eq!(terms["sensitive"], json!("as:sensitive"));
        assert_eq!(terms["Device"], json!("toot:Device"));
        assert!(terms.get("Hashtag").is_none());
        assert_eq!(context.as_array().map(Vec::len), Some(2));
    }
}
