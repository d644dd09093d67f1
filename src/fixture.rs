//! Fixture files: a domain snapshot plus the mapping to render it with.
//!
//! ```json
//! { "mapping": "AcceptFollow", "subject": { "kind": "follow", "object": { ... } } }
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use mapping::model::{
    Account, AccountMigration, Block, CollectionPresenter, CustomEmoji, Device, Favourite, Feature,
    Follow, MediaAttachment, Membership, Mention, Poll, Report, Status, Tag, Vote,
};
use mapping::{MappingId, RenderError, RenderOptions, Serialized, Serializer, Subject};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct Fixture {
    #[serde(default)]
    mapping: Option<String>,
    subject: OwnedSubject,
}

/// Owned counterpart of [`Subject`], as read from disk.
#[derive(Debug, Deserialize)]
#[serde(tag = "kind", content = "object", rename_all = "snake_case")]
enum OwnedSubject {
    Account(Account),
    Status(Status),
    Follow(Follow),
    Block(Block),
    Favourite(Favourite),
    Vote(Vote),
    Report(Report),
    AccountMigration(AccountMigration),
    Feature(Feature),
    Membership(Membership),
    Tag(Tag),
    CustomEmoji(CustomEmoji),
    MediaAttachment(MediaAttachment),
    Mention(Mention),
    Device(Device),
    Poll(Poll),
    Collection(CollectionPresenter),
    Uri(String),
}

impl OwnedSubject {
    fn as_subject(&self) -> Subject<'_> {
        match self {
            OwnedSubject::Account(account) => Subject::Account(account),
            OwnedSubject::Status(status) => Subject::Status(status),
            OwnedSubject::Follow(follow) => Subject::Follow(follow),
            OwnedSubject::Block(block) => Subject::Block(block),
            OwnedSubject::Favourite(favourite) => Subject::Favourite(favourite),
            OwnedSubject::Vote(vote) => Subject::Vote(vote),
            OwnedSubject::Report(report) => Subject::Report(report),
            OwnedSubject::AccountMigration(migration) => Subject::AccountMigration(migration),
            OwnedSubject::Feature(feature) => Subject::Feature(feature),
            OwnedSubject::Membership(membership) => Subject::Membership(membership),
            OwnedSubject::Tag(tag) => Subject::Tag(tag),
            OwnedSubject::CustomEmoji(emoji) => Subject::CustomEmoji(emoji),
            OwnedSubject::MediaAttachment(media) => Subject::MediaAttachment(media),
            OwnedSubject::Mention(mention) => Subject::Mention(mention),
            OwnedSubject::Device(device) => Subject::Device(device),
            OwnedSubject::Poll(poll) => Subject::Poll(poll),
            OwnedSubject::Collection(presenter) => Subject::Collection(presenter),
            OwnedSubject::Uri(uri) => Subject::Uri(uri),
        }
    }
}

impl Fixture {
    pub(crate) fn from_json(text: &str) -> Result<Fixture> {
        serde_json::from_str(text).context("invalid fixture")
    }

    pub(crate) fn load(path: &Path) -> Result<Fixture> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("unable to read fixture {}", path.display()))?;
        Fixture::from_json(&text).with_context(|| format!("in {}", path.display()))
    }

    /// Mapping named by the fixture, if any.
    pub(crate) fn mapping(&self) -> Result<Option<MappingId>, RenderError> {
        self.mapping.as_deref().map(str::parse::<MappingId>).transpose()
    }

    /// Renders with `mapping` when given, else the fixture's own mapping,
    /// else the registry default for the subject.
    pub(crate) fn render(
        &self,
        serializer: &Serializer,
        mapping: Option<MappingId>,
        options: &RenderOptions,
    ) -> Result<Serialized, RenderError> {
        let subject = self.subject.as_subject();
        match mapping.or(self.mapping()?) {
            Some(mapping) => serializer.serialize_with(mapping, subject, options),
            None => serializer.serialize(subject, options),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use anyhow::Result;
    use jiff::Timestamp;
    use mapping::{HtmlFormatter, LocalResolver, MappingId, RenderError, RenderOptions, Serializer};
    use serde_json::json;

    use super::Fixture;

    const FOLLOW: &str = r#"{
        "mapping": "AcceptFollow",
        "subject": {
            "kind": "follow",
            "object": {
                "id": 7,
                "account": {
                    "id": 2,
                    "username": "bob",
                    "domain": "remote.example",
                    "uri": "https://remote.example/users/bob"
                },
                "target_account": { "id": 1, "username": "alice" }
            }
        }
    }"#;

    fn serializer() -> Serializer {
        Serializer::new(LocalResolver::new("https://social.example"), HtmlFormatter)
    }

    fn options() -> Result<RenderOptions> {
        Ok(RenderOptions::new("2024-11-04T12:00:00Z".parse::<Timestamp>()?))
    }

    #[test]
    fn fixture_mapping_and_override() -> Result<()> {
        let fixture = Fixture::from_json(FOLLOW)?;
        let accept = fixture.render(&serializer(), None, &options()?)?;
        assert_eq!(accept.mapping(), MappingId::AcceptFollow);
        assert_eq!(
            accept.as_value()["id"],
            json!("https://social.example/users/alice#accepts/follows/7")
        );

        let follow = fixture.render(&serializer(), Some(MappingId::Follow), &options()?)?;
        assert_eq!(
            follow.as_value()["id"],
            json!("https://remote.example/users/bob#follows/7")
        );
        Ok(())
    }

    #[test]
    fn default_mapping_from_kind() -> Result<()> {
        let fixture = Fixture::from_json(
            r#"{ "subject": { "kind": "tag", "object": { "id": 1, "name": "rust" } } }"#,
        )?;
        let hashtag = fixture.render(&serializer(), None, &options()?)?;
        assert_eq!(hashtag.mapping(), MappingId::Hashtag);
        Ok(())
    }

    #[test]
    fn unknown_mapping_name() -> Result<()> {
        let fixture = Fixture::from_json(
            r#"{
                "mapping": "Poke",
                "subject": { "kind": "uri", "object": "https://a.example/1" }
            }"#,
        )?;
        assert_eq!(
            fixture.render(&serializer(), None, &options()?).err(),
            Some(RenderError::UnknownMapping("Poke".to_string()))
        );
        Ok(())
    }

    #[test]
    fn shipped_fixtures_render() -> Result<()> {
        let dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures");
        let serializer = Serializer::new(
            LocalResolver::new("http://localhost:8080"),
            HtmlFormatter,
        );
        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            let fixture = Fixture::load(&path)?;
            let rendered = fixture.render(&serializer, None, &options()?);
            assert!(rendered.is_ok(), "{}: {rendered:?}", path.display());
        }
        Ok(())
    }

    #[test]
    fn load_from_disk() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(FOLLOW.as_bytes())?;
        let fixture = Fixture::load(file.path())?;
        assert_eq!(fixture.mapping()?, Some(MappingId::AcceptFollow));

        let missing = file.path().with_extension("missing");
        assert!(Fixture::load(&missing).is_err());
        Ok(())
    }
}
