use jiff::Timestamp;
use serde::Deserialize;

use super::{CustomEmoji, Tag};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum ActorType {
    #[default]
    Person,
    Service,
    Group,
    Application,
}

impl ActorType {
    pub fn as_str(self) -> &'static str {
        match self {
            ActorType::Person => "Person",
            ActorType::Service => "Service",
            ActorType::Group => "Group",
            ActorType::Application => "Application",
        }
    }
}

/// Snapshot of an account row and the relations the actor document reads.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Account {
    pub id: u64,
    pub username: String,
    /// `None` for local accounts.
    pub domain: Option<String>,
    pub uri: Option<String>,
    pub url: Option<String>,
    pub inbox_url: Option<String>,
    pub shared_inbox_url: Option<String>,
    /// Followers collection advertised by a remote actor.
    pub followers_url: Option<String>,
    pub display_name: String,
    /// Profile bio as stored, plain text for local accounts and HTML for
    /// remote ones.
    pub note: String,
    pub actor_type: ActorType,
    pub locked: bool,
    pub discoverable: Option<bool>,
    pub indexable: bool,
    pub memorial: bool,
    pub suspended: bool,
    pub instance_actor: bool,
    /// Base64 encoded DER `SubjectPublicKeyInfo`.
    pub public_key: String,
    pub fields: Vec<ProfileField>,
    pub also_known_as: Vec<String>,
    pub moved_to: Option<Box<Account>>,
    pub avatar: Option<MediaFile>,
    pub header: Option<MediaFile>,
    pub emojis: Vec<CustomEmoji>,
    pub featured_tags: Vec<Tag>,
    pub attribution_domains: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Account {
    pub fn is_local(&self) -> bool {
        self.domain.is_none()
    }

    /// `username` for local accounts, `username@domain` otherwise.
    pub fn acct(&self) -> String {
        match &self.domain {
            Some(domain) => format!("{}@{}", self.username, domain),
            None => self.username.clone(),
        }
    }

    pub fn actor_type(&self) -> ActorType {
        if self.instance_actor {
            ActorType::Application
        } else {
            self.actor_type
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ProfileField {
    pub name: String,
    pub value: String,
}

/// Focus of an image in the `[-1.0, 1.0]` square, `(x, y)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct FocalPoint(pub f64, pub f64);

/// Stored file for avatars and headers.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MediaFile {
    pub url: String,
    pub content_type: String,
    pub focus: Option<FocalPoint>,
}

/// An end-to-end encryption device published by an account.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Device {
    pub id: u64,
    pub device_id: String,
    pub name: String,
    /// Base64 encoded Ed25519 public key.
    pub fingerprint_key: String,
    /// Base64 encoded Curve25519 public key.
    pub identity_key: String,
    pub account: Account,
}
