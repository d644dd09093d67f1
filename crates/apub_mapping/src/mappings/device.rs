use crate::context::Extension;
use crate::document::Document;
use crate::error::Result;
use crate::model::{Device, Subject};
use crate::registry::MappingId;
use crate::render::Renderer;
use crate::resolve::CollectionKind;

use super::collection_uri;

fn key(ty: &str, base64: &str) -> Document {
    Document::new(ty).attr("publicKeyBase64", base64)
}

pub(crate) fn device(r: &mut Renderer<'_>, device: &Device) -> Result<Document> {
    let claim = collection_uri(
        r,
        MappingId::Device,
        Subject::Account(&device.account),
        CollectionKind::Claim,
    )?;
    r.ext(Extension::Olm);
    Ok(Document::new("Device")
        .attr("deviceId", device.device_id.as_str())
        .attr("name", device.name.as_str())
        .has_one("fingerprintKey", key("Ed25519Key", &device.fingerprint_key).into_node())
        .has_one("identityKey", key("Curve25519Key", &device.identity_key).into_node())
        .attr("claim", claim))
}
