//! Poll answers, federated as a Create of a named Note in reply to the poll.

use crate::document::{Document, iso8601};
use crate::error::{RenderError, Result};
use crate::model::Vote;
use crate::registry::MappingId;
use crate::render::Renderer;

use super::{account_uri, status_uri};

pub(crate) fn vote(r: &mut Renderer<'_>, vote: &Vote) -> Result<Document> {
    const M: MappingId = MappingId::Vote;
    let poll = vote.poll.as_ref().ok_or_else(|| RenderError::precondition(M, "poll"))?;
    let status = vote
        .status
        .as_deref()
        .ok_or_else(|| RenderError::precondition(M, "status"))?;
    let choice = poll
        .options
        .get(vote.choice)
        .ok_or_else(|| RenderError::precondition(M, "poll option"))?;

    let voter = account_uri(r, M, &vote.account)?;
    let author = account_uri(r, M, &status.account)?;
    let answer = Document::new("Note")
        .attr("id", format!("{voter}#votes/{}", vote.id))
        .attr("name", choice.as_str())
        .attr("attributedTo", voter.as_str())
        .attr("to", vec![author.as_str()])
        .attr("inReplyTo", status_uri(r, M, status)?);
    Ok(Document::new("Create")
        .attr("id", format!("{voter}#votes/{}/activity", vote.id))
        .attr("actor", voter.as_str())
        .attr("published", iso8601(vote.created_at))
        .attr("to", vec![author.as_str()])
        .has_one("object", answer.into_node()))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::error::RenderError;
    use crate::mappings::testing::{
        local_account, options, remote_account, remote_status, render, serializer,
    };
    use crate::model::{Poll, Subject, Visibility, Vote};
    use crate::registry::MappingId;

    fn vote() -> Vote {
        Vote {
            id: 17,
            account: local_account(1, "alice"),
            choice: 1,
            created_at: "2024-11-04T09:00:00Z".parse().expect("valid timestamp"),
            poll: Some(Poll {
                id: 4,
                options: vec!["tea".to_string(), "coffee".to_string()],
                ..Default::default()
            }),
            status: Some(Box::new(remote_status(
                8,
                remote_account(2, "bob", "remote.example"),
                Visibility::Public,
            ))),
        }
    }

    #[test]
    fn vote_answers_the_poll_author() {
        assert_eq!(
            render(MappingId::Vote, Subject::Vote(&vote())),
            json!({
                "@context": "https://www.w3.org/ns/activitystreams",
                "id": "https://social.example/users/alice#votes/17/activity",
                "type": "Create",
                "actor": "https://social.example/users/alice",
                "published": "2024-11-04T09:00:00Z",
                "to": ["https://remote.example/users/bob"],
                "object": {
                    "id": "https://social.example/users/alice#votes/17",
                    "type": "Note",
                    "name": "coffee",
                    "attributedTo": "https://social.example/users/alice",
                    "to": ["https://remote.example/users/bob"],
                    "inReplyTo": "https://remote.example/notes/8"
                }
            })
        );
    }

    #[test]
    fn vote_needs_loaded_relations() {
        let serializer = serializer();
        let mut vote = vote();
        vote.choice = 5;
        assert_eq!(
            serializer
                .serialize_with(MappingId::Vote, Subject::Vote(&vote), &options())
                .err(),
            Some(RenderError::PreconditionViolation {
                mapping: MappingId::Vote,
                relation: "poll option",
            })
        );
        vote.status = None;
        assert_eq!(
            serializer
                .serialize_with(MappingId::Vote, Subject::Vote(&vote), &options())
                .err(),
            Some(RenderError::PreconditionViolation {
                mapping: MappingId::Vote,
                relation: "status",
            })
        );
        vote.poll = None;
        assert_eq!(
            serializer
                .serialize_with(MappingId::Vote, Subject::Vote(&vote), &options())
                .err(),
            Some(RenderError::PreconditionViolation {
                mapping: MappingId::Vote,
                relation: "poll",
            })
        );
    }
}
