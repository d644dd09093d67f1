use crate::document::Document;
use crate::error::Result;
use crate::model::{Block, Subject};
use crate::registry::MappingId;
use crate::render::Renderer;

use super::account_uri;

pub(crate) fn block(r: &mut Renderer<'_>, block: &Block) -> Result<Document> {
    const M: MappingId = MappingId::Block;
    let actor = account_uri(r, M, &block.account)?;
    let id = match r.resolver().uri(Subject::Block(block)) {
        Some(uri) => uri,
        None => format!("{actor}#blocks/{}", block.id),
    };
    Ok(Document::new("Block")
        .attr("id", id)
        .attr("actor", actor)
        .attr("object", account_uri(r, M, &block.target_account)?))
}

pub(crate) fn undo_block(r: &mut Renderer<'_>, block: &Block) -> Result<Document> {
    const M: MappingId = MappingId::UndoBlock;
    let actor = account_uri(r, M, &block.account)?;
    let request = r.nested(M, Subject::Block(block))?;
    Ok(Document::new("Undo")
        .attr("id", format!("{actor}#blocks/{}/undo", block.id))
        .attr("actor", actor)
        .has_one("object", request))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::mappings::testing::{local_account, remote_account, render};
    use crate::model::{Block, Subject};
    use crate::registry::MappingId;

    #[test]
    fn block_and_undo() {
        let block = Block {
            id: 3,
            uri: None,
            account: local_account(1, "alice"),
            target_account: remote_account(2, "bob", "remote.example"),
        };
        let document = render(MappingId::Block, Subject::Block(&block));
        assert_eq!(document["id"], json!("https://social.example/users/alice#blocks/3"));
        assert_eq!(document["object"], json!("https://remote.example/users/bob"));

        let undo = render(MappingId::UndoBlock, Subject::Block(&block));
        assert_eq!(undo["type"], json!("Undo"));
        assert_eq!(undo["id"], json!("https://social.example/users/alice#blocks/3/undo"));
        assert_eq!(undo["object"]["type"], json!("Block"));
    }
}
