mod error;

pub use error::{Error, Result};
use rand::Rng;
use uuid::{Builder, Uuid};

use crate::types::{RawField, UUID_LEN};

/// Reverses the byte order of the first three UUID fields (4, 2 and 2 bytes)
/// and keeps clock-seq and node as they are. Applying it twice yields the
/// input, so the same swap serves both directions.
const fn swap_fields(bytes: [u8; UUID_LEN]) -> [u8; UUID_LEN] {
    [
        bytes[3], bytes[2], bytes[1], bytes[0], bytes[5], bytes[4], bytes[7], bytes[6], bytes[8],
        bytes[9], bytes[10], bytes[11], bytes[12], bytes[13], bytes[14], bytes[15],
    ]
}

pub fn decode(raw: RawField) -> Uuid {
    Uuid::from_bytes(swap_fields(raw))
}

/// Same as [`decode`] for a borrowed buffer, failing when it is not exactly
/// one field long.
pub fn decode_slice(raw: &[u8]) -> Result<Uuid> {
    let field: RawField = raw
        .try_into()
        .map_err(|_| Error::Format { len: raw.len() })?;

    Ok(decode(field))
}

pub fn encode(id: &Uuid) -> RawField {
    swap_fields(*id.as_bytes())
}

pub fn parse_text(text: &str) -> Result<Uuid> {
    Uuid::parse_str(text.trim()).map_err(|source| Error::Parse {
        text: text.to_owned(),
        source,
    })
}

/// Version 4 UUID. The identifier is not a secret, `thread_rng` is enough.
pub fn generate() -> Uuid {
    let bytes: [u8; UUID_LEN] = rand::thread_rng().gen();
    Builder::from_random_bytes(bytes).into_uuid()
}
