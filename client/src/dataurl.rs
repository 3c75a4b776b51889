//! `data:<mime>;base64,<payload>` strings as produced by a browser file reader.

use crate::{Error, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};

/// Raw bytes plus the MIME type they were labelled with.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Blob {
    pub bytes: Vec<u8>,
    pub mime: String,
}

/// Encode `bytes` as a base64 data URL.
pub fn encode(bytes: &[u8], mime: &str) -> String {
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

/// Split `data_url` on the first comma, base64-decode the payload and take the MIME type from
/// between `:` and `;` of the metadata.
pub fn decode(data_url: &str) -> Result<Blob> {
    let (meta, payload) = data_url
        .split_once(',')
        .ok_or(Error::MalformedDataUrl("missing ','"))?;

    let (_, media_type) = meta
        .split_once(':')
        .ok_or(Error::MalformedDataUrl("missing ':'"))?;

    let mime = media_type
        .split_once(';')
        .map_or(media_type, |(mime, _)| mime);

    Ok(Blob {
        bytes: STANDARD.decode(payload)?,
        mime: mime.to_string(),
    })
}
