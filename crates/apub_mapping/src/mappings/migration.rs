use crate::document::Document;
use crate::error::Result;
use crate::model::AccountMigration;
use crate::registry::MappingId;
use crate::render::Renderer;

use super::account_uri;

/// Announces that `account` moved to `target_account`.
pub(crate) fn move_account(r: &mut Renderer<'_>, migration: &AccountMigration) -> Result<Document> {
    const M: MappingId = MappingId::Move;
    let actor = account_uri(r, M, &migration.account)?;
    Ok(Document::new("Move")
        .attr("id", format!("{actor}#moves/{}", migration.id))
        .attr("actor", actor.as_str())
        .attr("target", account_uri(r, M, &migration.target_account)?)
        .attr("object", actor))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::mappings::testing::{local_account, remote_account, render};
    use crate::model::{AccountMigration, Subject};
    use crate::registry::MappingId;

    #[test]
    fn move_to_remote_account() {
        let migration = AccountMigration {
            id: 2,
            account: local_account(1, "alice"),
            target_account: remote_account(5, "alice", "new.example"),
        };
        assert_eq!(
            render(MappingId::Move, Subject::AccountMigration(&migration)),
            json!({
                "@context": "https://www.w3.org/ns/activitystreams",
                "id": "https://social.example/users/alice#moves/2",
                "type": "Move",
                "actor": "https://social.example/users/alice",
                "target": "https://new.example/users/alice",
                "object": "https://social.example/users/alice"
            })
        );
    }
}
